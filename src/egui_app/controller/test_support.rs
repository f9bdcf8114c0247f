use std::cell::Cell;
use std::path::{Path, PathBuf};

use super::{Dialogs, VmwarePreferencesPage};
use crate::platform::Platform;
use crate::vmware::{SettingsStore, VmwareSettings};

/// In-memory store that counts how often the page reaches for it.
pub(super) struct RecordingStore {
    pub current: VmwareSettings,
    pub gets: Cell<usize>,
    pub saved: Vec<VmwareSettings>,
}

impl RecordingStore {
    pub(super) fn with(current: VmwareSettings) -> Self {
        Self {
            current,
            gets: Cell::new(0),
            saved: Vec::new(),
        }
    }
}

impl SettingsStore for RecordingStore {
    fn settings(&self) -> VmwareSettings {
        self.gets.set(self.gets.get() + 1);
        self.current.clone()
    }

    fn set_settings(&mut self, settings: VmwareSettings) {
        self.current = settings.clone();
        self.saved.push(settings);
    }
}

/// Dialogs that answer from a script and remember what they were shown.
#[derive(Default)]
pub(super) struct ScriptedDialogs {
    pub pick: Option<PathBuf>,
    pub pick_starts: Vec<Option<PathBuf>>,
    pub errors: Vec<(String, String)>,
}

impl Dialogs for ScriptedDialogs {
    fn pick_file(&mut self, _title: &str, start: Option<&Path>) -> Option<PathBuf> {
        self.pick_starts.push(start.map(Path::to_path_buf));
        self.pick.clone()
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }
}

pub(super) type TestPage = VmwarePreferencesPage<RecordingStore, ScriptedDialogs>;

pub(super) fn page_on(platform: Platform) -> TestPage {
    page_with(platform, VmwareSettings::defaults_for(platform))
}

pub(super) fn page_with(platform: Platform, stored: VmwareSettings) -> TestPage {
    VmwarePreferencesPage::new(
        platform,
        RecordingStore::with(stored),
        ScriptedDialogs::default(),
    )
}

pub(super) fn linux_settings(vmrun_path: &str, use_local_server: bool) -> VmwareSettings {
    VmwareSettings {
        vmrun_path: vmrun_path.to_string(),
        host_type: "player".into(),
        vmnet_start_range: 4,
        vmnet_end_range: 99,
        use_local_server,
    }
}

#[cfg(unix)]
pub(super) fn write_executable(dir: &Path, name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
