use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::platform::Platform;

use super::config_io;
use super::config_types::VmwareSettings;
use super::errors::ConfigError;

/// Owner of the current VMware settings.
///
/// Reads hand out a full copy and writes replace the record whole; the store
/// decides how the record outlives the process.
pub trait SettingsStore {
    /// Current settings record.
    fn settings(&self) -> VmwareSettings;
    /// Replace the settings record. Persistence failures stay inside the store.
    fn set_settings(&mut self, settings: VmwareSettings);
}

/// Settings store backed by `vmware.toml` in the app directory.
#[derive(Debug, Clone)]
pub struct VmwareIntegration {
    settings: VmwareSettings,
    path: PathBuf,
}

impl VmwareIntegration {
    /// Open the store at the default settings location.
    pub fn open(platform: Platform) -> Result<Self, ConfigError> {
        Self::open_at(config_io::config_path()?, platform)
    }

    /// Open the store at `path`, starting from defaults when the file is missing.
    pub fn open_at(path: impl Into<PathBuf>, platform: Platform) -> Result<Self, ConfigError> {
        let path = path.into();
        let settings = config_io::load_from(&path, platform)?;
        debug!("Loaded VMware settings from {}", path.display());
        Ok(Self { settings, path })
    }

    /// File the store writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for VmwareIntegration {
    fn settings(&self) -> VmwareSettings {
        self.settings.clone()
    }

    fn set_settings(&mut self, settings: VmwareSettings) {
        if self.settings == settings {
            debug!("VMware settings unchanged; skipping write");
            return;
        }
        self.settings = settings;
        match config_io::save_to_path(&self.settings, &self.path) {
            Ok(()) => info!("Saved VMware settings to {}", self.path.display()),
            Err(err) => warn!("Failed to persist VMware settings: {err}"),
        }
    }
}
