use serde::{Deserialize, Serialize};

use crate::platform::Platform;

use super::config_defaults::{
    clamp_vmnet_end, clamp_vmnet_start, default_host_type, default_use_local_server,
    default_vmnet_end_range, default_vmnet_start_range,
};

/// VMware integration settings edited by the preferences page.
///
/// Config keys (TOML, `[vmware]` table): `vmrun_path`, `host_type`,
/// `vmnet_start_range`, `vmnet_end_range`, `use_local_server`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmwareSettings {
    /// Location of the `vmrun` executable used by the local server.
    pub vmrun_path: String,
    /// Product flavor (`fusion`, `player` or `ws`).
    pub host_type: String,
    /// First VMnet interface number the server may allocate.
    pub vmnet_start_range: u32,
    /// Last VMnet interface number the server may allocate.
    pub vmnet_end_range: u32,
    /// Drive VMware through a server running on this machine.
    pub use_local_server: bool,
}

impl VmwareSettings {
    /// Settings used on first launch and by "Restore defaults".
    pub fn defaults_for(platform: Platform) -> Self {
        Self {
            vmrun_path: String::new(),
            host_type: default_host_type(platform).to_string(),
            vmnet_start_range: default_vmnet_start_range(),
            vmnet_end_range: default_vmnet_end_range(platform),
            use_local_server: default_use_local_server(platform),
        }
    }

    /// Clamp ranges to what the platform supports and drop local-server mode
    /// where it cannot run.
    pub(crate) fn normalized(mut self, platform: Platform) -> Self {
        self.vmnet_start_range = clamp_vmnet_start(self.vmnet_start_range);
        self.vmnet_end_range = clamp_vmnet_end(self.vmnet_end_range, platform);
        self.use_local_server &= platform.supports_local_server();
        self
    }
}

/// On-disk layout of `vmware.toml`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct VmwareConfigFile {
    pub vmware: VmwareSettings,
}

/// Settings as read from disk, where any key may be missing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StoredConfigFile {
    #[serde(default)]
    pub vmware: StoredSettings,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StoredSettings {
    #[serde(default)]
    pub vmrun_path: Option<String>,
    #[serde(default)]
    pub host_type: Option<String>,
    #[serde(default)]
    pub vmnet_start_range: Option<u32>,
    #[serde(default)]
    pub vmnet_end_range: Option<u32>,
    #[serde(default)]
    pub use_local_server: Option<bool>,
}

impl StoredSettings {
    /// Fill gaps from the platform defaults.
    pub(crate) fn resolve(self, platform: Platform) -> VmwareSettings {
        let defaults = VmwareSettings::defaults_for(platform);
        VmwareSettings {
            vmrun_path: self.vmrun_path.unwrap_or(defaults.vmrun_path),
            host_type: self.host_type.unwrap_or(defaults.host_type),
            vmnet_start_range: self.vmnet_start_range.unwrap_or(defaults.vmnet_start_range),
            vmnet_end_range: self.vmnet_end_range.unwrap_or(defaults.vmnet_end_range),
            use_local_server: self.use_local_server.unwrap_or(defaults.use_local_server),
        }
        .normalized(platform)
    }
}

/// One entry of the host-type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostTypeChoice {
    /// Text shown in the selector.
    pub label: &'static str,
    /// Value stored in [`VmwareSettings::host_type`].
    pub value: &'static str,
}

const APPLE_HOST_TYPES: &[HostTypeChoice] = &[HostTypeChoice {
    label: "VMware Fusion",
    value: "fusion",
}];

const DESKTOP_HOST_TYPES: &[HostTypeChoice] = &[
    HostTypeChoice {
        label: "VMware Player",
        value: "player",
    },
    HostTypeChoice {
        label: "VMware Workstation",
        value: "ws",
    },
];

/// VMware products that can run on `platform`, in selector order.
pub fn host_type_choices(platform: Platform) -> &'static [HostTypeChoice] {
    match platform {
        Platform::Apple => APPLE_HOST_TYPES,
        Platform::Windows | Platform::Other => DESKTOP_HOST_TYPES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_platform() {
        let apple = VmwareSettings::defaults_for(Platform::Apple);
        assert_eq!(apple.host_type, "fusion");
        assert!(!apple.use_local_server);
        assert_eq!(apple.vmnet_end_range, 50);

        let windows = VmwareSettings::defaults_for(Platform::Windows);
        assert_eq!(windows.host_type, "ws");
        assert!(windows.use_local_server);
        assert_eq!(windows.vmnet_end_range, 19);

        let linux = VmwareSettings::defaults_for(Platform::Other);
        assert_eq!(linux.vmnet_start_range, 2);
        assert_eq!(linux.vmnet_end_range, 50);
        assert!(linux.vmrun_path.is_empty());
    }

    #[test]
    fn default_host_type_is_always_offered() {
        for platform in [Platform::Apple, Platform::Windows, Platform::Other] {
            let defaults = VmwareSettings::defaults_for(platform);
            assert!(
                host_type_choices(platform)
                    .iter()
                    .any(|choice| choice.value == defaults.host_type)
            );
        }
    }

    #[test]
    fn normalized_clamps_ranges_and_local_server() {
        let settings = VmwareSettings {
            vmrun_path: "/usr/bin/vmrun".into(),
            host_type: "ws".into(),
            vmnet_start_range: 0,
            vmnet_end_range: 200,
            use_local_server: true,
        };
        let windows = settings.clone().normalized(Platform::Windows);
        assert_eq!(windows.vmnet_start_range, 1);
        assert_eq!(windows.vmnet_end_range, 19);
        assert!(windows.use_local_server);

        let apple = settings.normalized(Platform::Apple);
        assert_eq!(apple.vmnet_end_range, 200);
        assert!(!apple.use_local_server);
    }
}
