//! Library exports for the binary and integration tests.
/// Per-user application directories.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Logging setup.
pub mod logging;
/// Host platform detection.
pub mod platform;
/// VMware settings model, persistence and `vmrun` checks.
pub mod vmware;
