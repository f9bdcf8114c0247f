//! Controllers that sit between persisted settings and the egui renderer.

mod dialogs;
mod vmware_page;

#[cfg(test)]
mod test_support;

pub use dialogs::{Dialogs, NativeDialogs};
pub use vmware_page::VmwarePreferencesPage;
