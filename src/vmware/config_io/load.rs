use std::path::Path;

use crate::platform::Platform;

use super::super::config_types::{StoredConfigFile, VmwareSettings};
use super::super::errors::ConfigError;

/// Load settings from `path`, filling missing keys with platform defaults.
/// A missing file yields the defaults.
///
/// Out-of-range VMnet numbers are clamped and local-server mode is dropped on
/// platforms that cannot run it.
pub fn load_from(path: &Path, platform: Platform) -> Result<VmwareSettings, ConfigError> {
    if !path.exists() {
        return Ok(VmwareSettings::defaults_for(platform));
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let stored: StoredConfigFile = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(stored.vmware.resolve(platform))
}
