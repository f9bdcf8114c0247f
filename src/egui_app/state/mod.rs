//! Retained UI state for the preferences window.

mod vmware_page;
mod widgets;

pub use vmware_page::*;
pub use widgets::*;
