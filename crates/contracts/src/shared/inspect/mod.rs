//! Contracts for the panel inspector: stats summary, tab descriptors and
//! the panel reference shown in the inspector header.

pub mod panel;
pub mod stats;
pub mod tabs;

pub use panel::PanelRef;
pub use stats::QueryStats;
pub use tabs::{build_tabs, InspectContext, TabDescriptor};
