use super::widgets::{ButtonState, CheckState, ComboState, SpinState, TextFieldState};
use crate::vmware::{VMNET_MIN, VMNET_START_MAX};

/// Controls of the VMware preferences page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VmwarePageState {
    /// Path to `vmrun`.
    pub vmrun_path: TextFieldState,
    /// Opens the file prompt for `vmrun`.
    pub vmrun_browse: ButtonState,
    /// VMware product selector.
    pub host_type: ComboState,
    /// "Use a local server" checkbox gating the other controls.
    pub use_local_server: CheckState,
    pub network: NetworkSectionState,
}

/// VMnet range controls, enabled and disabled as one section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkSectionState {
    pub enabled: bool,
    pub vmnet_start_range: SpinState,
    pub vmnet_end_range: SpinState,
}

impl Default for VmwarePageState {
    fn default() -> Self {
        Self {
            vmrun_path: TextFieldState::default(),
            vmrun_browse: ButtonState::default(),
            host_type: ComboState::default(),
            use_local_server: CheckState::default(),
            network: NetworkSectionState {
                enabled: false,
                vmnet_start_range: SpinState::new(VMNET_MIN, VMNET_START_MAX),
                vmnet_end_range: SpinState::new(VMNET_MIN, VMNET_START_MAX),
            },
        }
    }
}

impl VmwarePageState {
    /// Enable or disable everything that only matters for a local server.
    pub fn set_local_server_controls_enabled(&mut self, enabled: bool) {
        self.vmrun_path.enabled = enabled;
        self.vmrun_browse.enabled = enabled;
        self.host_type.enabled = enabled;
        self.network.enabled = enabled;
    }
}
