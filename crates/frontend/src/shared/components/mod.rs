pub mod inspect_header;
