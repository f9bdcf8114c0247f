//! Where the settings file and launch logs live.
//!
//! Everything sits under one `.vmware-prefs` folder in the OS config
//! directory. `VMWARE_PREFS_CONFIG_HOME` replaces the OS config directory for
//! portable setups, and tests can install an in-process override.

use std::{
    path::PathBuf,
    sync::{LazyLock, Mutex},
};

use directories::BaseDirs;
use thiserror::Error;

/// Folder created under the config base directory.
pub const APP_DIR_NAME: &str = ".vmware-prefs";
/// Environment variable that replaces the OS config directory.
pub const CONFIG_HOME_ENV: &str = "VMWARE_PREFS_CONFIG_HOME";

static BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Failures while resolving application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// Neither an override nor an OS config directory is available.
    #[error("No config directory available for application files")]
    NoBaseDir,
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the `.vmware-prefs` root, creating it when missing.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let root = base_dir().ok_or(AppDirError::NoBaseDir)?.join(APP_DIR_NAME);
    ensure_dir(root)
}

/// Return `<root>/logs`, creating it when missing.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join("logs"))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn base_dir() -> Option<PathBuf> {
    let overridden = BASE_OVERRIDE.lock().ok().and_then(|guard| guard.clone());
    overridden
        .or_else(|| std::env::var_os(CONFIG_HOME_ENV).map(PathBuf::from))
        .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
}

#[cfg(test)]
static GUARD_LOCK: Mutex<()> = Mutex::new(());

/// Redirects [`app_root_dir`] to a test directory until dropped.
///
/// Guards serialize on a shared lock so parallel tests never see each
/// other's override.
#[cfg(test)]
pub(crate) struct BaseDirGuard {
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl BaseDirGuard {
    pub(crate) fn set(path: PathBuf) -> Self {
        let lock = GUARD_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        *BASE_OVERRIDE
            .lock()
            .expect("base dir override mutex poisoned") = Some(path);
        Self { _lock: lock }
    }
}

#[cfg(test)]
impl Drop for BaseDirGuard {
    fn drop(&mut self) {
        if let Ok(mut guard) = BASE_OVERRIDE.lock() {
            *guard = None;
        }
    }
}
