use crate::app_dirs;

use super::errors::ConfigError;

mod load;
mod save;


/// Filename of the VMware settings file inside the app directory.
pub const CONFIG_FILE_NAME: &str = "vmware.toml";

pub use load::load_from;
pub use save::save_to_path;

/// Resolve the settings file path, creating the app directory if needed.
pub fn config_path() -> Result<std::path::PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}
