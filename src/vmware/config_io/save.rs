use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::super::config_types::{VmwareConfigFile, VmwareSettings};
use super::super::errors::ConfigError;

/// Write settings to `path` as TOML, creating parent directories as needed.
///
/// The file is written to a temporary sibling and renamed over `path`, so a
/// crash never leaves a truncated settings file behind.
pub fn save_to_path(settings: &VmwareSettings, path: &Path) -> Result<(), ConfigError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let file = VmwareConfigFile {
        vmware: settings.clone(),
    };
    let text = toml::to_string_pretty(&file).map_err(|source| ConfigError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(text.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
