//! VMware integration settings: the record the preferences page edits, its
//! on-disk form, and the store that owns it.

mod config_defaults;
pub mod config_io;
mod config_types;
mod errors;
mod integration;
pub mod vmrun;

pub use config_defaults::{VMNET_MIN, VMNET_START_MAX};
pub use config_types::{HostTypeChoice, VmwareSettings, host_type_choices};
pub use errors::ConfigError;
pub use integration::{SettingsStore, VmwareIntegration};
pub use vmrun::VmrunPathError;
