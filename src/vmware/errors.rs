use std::path::PathBuf;

use thiserror::Error;

use crate::app_dirs::AppDirError;

/// Errors that may occur while loading or saving the VMware settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be resolved.
    #[error("Settings directory unavailable: {0}")]
    AppDir(#[from] AppDirError),
    /// Failed to create the directory holding the settings file.
    #[error("Unable to create settings directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read the settings file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to write the settings file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for this layout.
    #[error("Invalid settings at {path}: {source}")]
    Parse {
        /// Settings file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Settings could not be rendered as TOML.
    #[error("Failed to serialize settings for {path}: {source}")]
    Serialize {
        /// Settings file path.
        path: PathBuf,
        /// TOML serialization error.
        source: toml::ser::Error,
    },
}
