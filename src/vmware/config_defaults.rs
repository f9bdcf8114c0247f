use crate::platform::Platform;

/// Lowest VMnet number either range accepts.
pub const VMNET_MIN: u32 = 1;
/// Upper bound of the start range; the end range stops at [`Platform::vmnet_max`].
pub const VMNET_START_MAX: u32 = 255;
const DEFAULT_VMNET_START: u32 = 2;
const DEFAULT_VMNET_END: u32 = 50;

pub(super) fn default_host_type(platform: Platform) -> &'static str {
    match platform {
        Platform::Apple => "fusion",
        Platform::Windows | Platform::Other => "ws",
    }
}

pub(super) fn default_vmnet_start_range() -> u32 {
    DEFAULT_VMNET_START
}

pub(super) fn default_vmnet_end_range(platform: Platform) -> u32 {
    DEFAULT_VMNET_END.min(platform.vmnet_max())
}

pub(super) fn default_use_local_server(platform: Platform) -> bool {
    platform.supports_local_server()
}

pub(super) fn clamp_vmnet_start(value: u32) -> u32 {
    value.clamp(VMNET_MIN, VMNET_START_MAX)
}

pub(super) fn clamp_vmnet_end(value: u32, platform: Platform) -> u32 {
    value.clamp(VMNET_MIN, platform.vmnet_max())
}
