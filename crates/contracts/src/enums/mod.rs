pub mod inspect_tab;
