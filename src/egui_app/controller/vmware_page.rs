use std::path::Path;

use tracing::{debug, info, warn};

use super::dialogs::Dialogs;
use crate::egui_app::state::VmwarePageState;
use crate::platform::Platform;
use crate::vmware::vmrun::{self, VMRUN_NAME, find_executable, normalize_path};
use crate::vmware::{SettingsStore, VmrunPathError, VmwareSettings, host_type_choices};

const VMRUN_DIALOG_TITLE: &str = "vmrun";

/// Controller behind the VMware preferences page.
///
/// The page state is the draft: load and "Restore defaults" overwrite it,
/// the renderer edits it, and save hands a snapshot of it to the store.
pub struct VmwarePreferencesPage<S, D> {
    /// Form controls drawn by the renderer.
    pub ui: VmwarePageState,
    platform: Platform,
    store: S,
    dialogs: D,
}

impl<S: SettingsStore, D: Dialogs> VmwarePreferencesPage<S, D> {
    /// Build the page for `platform` and fill it with that platform's defaults.
    ///
    /// The store is not touched until [`Self::load_preferences`].
    pub fn new(platform: Platform, store: S, dialogs: D) -> Self {
        let mut ui = VmwarePageState::default();
        if !platform.supports_local_server() {
            ui.use_local_server.lock_unchecked();
        }
        for choice in host_type_choices(platform) {
            ui.host_type.add_item(choice.label, choice.value);
        }
        ui.network.vmnet_end_range.set_maximum(platform.vmnet_max());

        let mut page = Self {
            ui,
            platform,
            store,
            dialogs,
        };
        page.populate_widgets(&VmwareSettings::defaults_for(platform));
        page
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// Enable the local-server controls when `enabled`, disable them otherwise.
    pub fn use_local_server_toggled(&mut self, enabled: bool) {
        self.ui.set_local_server_controls_enabled(enabled);
    }

    /// Checkbox handler: record the new state and update the dependent controls.
    pub fn set_use_local_server(&mut self, checked: bool) {
        self.ui.use_local_server.set_checked(checked);
        self.use_local_server_toggled(self.ui.use_local_server.is_checked());
    }

    /// Browse button handler: pick `vmrun` and store its normalized path if valid.
    pub fn browse_vmrun_path(&mut self) {
        let start = find_executable(VMRUN_NAME);
        let Some(picked) = self
            .dialogs
            .pick_file("Select vmrun", start.as_deref())
            .filter(|path| !path.as_os_str().is_empty())
        else {
            return;
        };
        if self.check_vmrun_path(&picked) {
            self.ui.vmrun_path.text = normalize_path(&picked).to_string_lossy().into_owned();
        }
    }

    /// Validate `path`, telling the user why it was refused.
    pub fn check_vmrun_path(&mut self, path: &Path) -> bool {
        self.validate_vmrun_path(path).is_ok()
    }

    fn validate_vmrun_path(&mut self, path: &Path) -> Result<(), VmrunPathError> {
        vmrun::check_vmrun_path(path).inspect_err(|err| {
            warn!("Rejected vmrun path: {err}");
            self.dialogs.show_error(VMRUN_DIALOG_TITLE, &err.to_string());
        })
    }

    /// "Restore defaults" handler. Leaves the store alone.
    pub fn restore_defaults(&mut self) {
        debug!("Restoring VMware defaults for {}", self.platform);
        self.populate_widgets(&VmwareSettings::defaults_for(self.platform));
    }

    /// Copy `settings` into the controls.
    ///
    /// A host type the platform does not offer leaves the selector as it is.
    pub fn populate_widgets(&mut self, settings: &VmwareSettings) {
        self.ui.vmrun_path.text = settings.vmrun_path.clone();
        match self.ui.host_type.find_value(&settings.host_type) {
            Some(index) => self.ui.host_type.set_current_index(index),
            None => debug!(
                "Host type {:?} not offered on {}; keeping current selection",
                settings.host_type, self.platform
            ),
        }
        self.ui
            .network
            .vmnet_start_range
            .set_value(settings.vmnet_start_range);
        self.ui
            .network
            .vmnet_end_range
            .set_value(settings.vmnet_end_range);
        self.set_use_local_server(settings.use_local_server);
    }

    /// Settings record built from the controls as they stand.
    pub fn read_fields(&self) -> VmwareSettings {
        VmwareSettings {
            vmrun_path: self.ui.vmrun_path.text.clone(),
            host_type: self
                .ui
                .host_type
                .current_value()
                .unwrap_or_default()
                .to_string(),
            vmnet_start_range: self.ui.network.vmnet_start_range.value(),
            vmnet_end_range: self.ui.network.vmnet_end_range.value(),
            use_local_server: self.ui.use_local_server.is_checked(),
        }
    }

    /// Show the store's current settings. Nothing is validated here.
    pub fn load_preferences(&mut self) {
        let settings = self.store.settings();
        debug!("Loaded VMware preferences: {settings:?}");
        self.populate_widgets(&settings);
    }

    /// Hand the page's settings to the store.
    ///
    /// With a local server the `vmrun` path must check out first; a refusal
    /// has already been shown to the user and nothing reaches the store.
    pub fn save_preferences(&mut self) -> Result<(), VmrunPathError> {
        let mut settings = self.read_fields();
        settings.vmrun_path = settings.vmrun_path.trim().to_string();
        if settings.use_local_server {
            self.validate_vmrun_path(Path::new(&settings.vmrun_path))?;
        }
        info!(
            "Saving VMware preferences (host type {}, local server {})",
            settings.host_type, settings.use_local_server
        );
        self.store.set_settings(settings);
        Ok(())
    }
}
