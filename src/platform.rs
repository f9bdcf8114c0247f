//! Host platform families that change what the VMware page offers.

use std::fmt::Display;

/// Operating system family, resolved once and handed to whoever needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS: only VMware Fusion exists and local-server mode is unsupported.
    Apple,
    /// Windows: VMnet interfaces stop at vmnet19.
    Windows,
    /// Linux and every other Unix-like host.
    Other,
}

impl Platform {
    /// Platform this binary was built for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an `std::env::consts::OS` style identifier to a platform family.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" | "ios" => Self::Apple,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }

    /// Highest VMnet number the host networking stack supports.
    pub fn vmnet_max(self) -> u32 {
        match self {
            Self::Windows => 19,
            Self::Apple | Self::Other => 255,
        }
    }

    /// Whether the page may offer local-server mode at all.
    pub fn supports_local_server(self) -> bool {
        !matches!(self, Self::Apple)
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apple => write!(f, "macOS"),
            Self::Windows => write!(f, "Windows"),
            Self::Other => write!(f, "Linux/Unix"),
        }
    }
}
