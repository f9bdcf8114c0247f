mod support;

use support::{dialogs::HeadlessDialogs, env::ScopedEnv};

use std::{ffi::OsString, path::PathBuf};
use tempfile::TempDir;
use vmware_prefs::{
    app_dirs::{APP_DIR_NAME, CONFIG_HOME_ENV},
    egui_app::controller::VmwarePreferencesPage,
    platform::Platform,
    vmware::{SettingsStore, VmwareIntegration, VmwareSettings},
};

type Page = VmwarePreferencesPage<VmwareIntegration, HeadlessDialogs>;

struct PreferencesHarness {
    _env: ScopedEnv,
    temp: TempDir,
}

impl PreferencesHarness {
    fn new() -> Self {
        Self::with_env(|_| Vec::new())
    }

    /// Harness whose `PATH` is a single `bin` folder holding an executable `vmrun`.
    #[cfg(unix)]
    fn with_vmrun_on_path() -> Self {
        Self::with_env(|root| {
            let bin = root.join("bin");
            std::fs::create_dir_all(&bin).expect("create bin dir");
            write_executable(&bin.join("vmrun"));
            vec![("PATH", bin.into_os_string())]
        })
    }

    fn with_env(extra: impl FnOnce(&std::path::Path) -> Vec<(&'static str, OsString)>) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let config_home = temp.path().join("config");
        std::fs::create_dir_all(&config_home).expect("create config dir");
        let mut vars = vec![(CONFIG_HOME_ENV, config_home.into_os_string())];
        vars.extend(extra(temp.path()));
        Self {
            _env: ScopedEnv::set(vars),
            temp,
        }
    }

    fn settings_file(&self) -> PathBuf {
        self.temp
            .path()
            .join("config")
            .join(APP_DIR_NAME)
            .join("vmware.toml")
    }

    fn open_page(&self, platform: Platform) -> Page {
        self.open_page_with(platform, HeadlessDialogs::default())
    }

    fn open_page_with(&self, platform: Platform, dialogs: HeadlessDialogs) -> Page {
        let store = VmwareIntegration::open(platform).expect("open settings store");
        let mut page = VmwarePreferencesPage::new(platform, store, dialogs);
        page.load_preferences();
        page
    }
}

#[cfg(unix)]
fn write_executable(path: &std::path::Path) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, "#!/bin/sh\nexit 0\n").expect("write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("mark executable");
}

#[test]
fn first_run_shows_defaults_and_writes_nothing() {
    let harness = PreferencesHarness::new();
    let page = harness.open_page(Platform::Other);

    assert_eq!(page.read_fields(), VmwareSettings::defaults_for(Platform::Other));
    assert!(!harness.settings_file().exists());
}

#[test]
fn saved_preferences_reload_in_a_new_window() {
    let harness = PreferencesHarness::new();
    let mut page = harness.open_page(Platform::Windows);
    page.set_use_local_server(false);
    page.ui.vmrun_path.text = " C:\\VMware\\vmrun.exe ".into();
    let ws = page.ui.host_type.find_value("ws").expect("workstation offered");
    page.ui.host_type.set_current_index(ws);
    page.ui.network.vmnet_start_range.set_value(3);
    page.ui.network.vmnet_end_range.set_value(12);

    assert_eq!(page.save_preferences(), Ok(()));
    assert!(harness.settings_file().exists());

    let reopened = harness.open_page(Platform::Windows);
    assert_eq!(
        reopened.read_fields(),
        VmwareSettings {
            vmrun_path: "C:\\VMware\\vmrun.exe".into(),
            host_type: "ws".into(),
            vmnet_start_range: 3,
            vmnet_end_range: 12,
            use_local_server: false,
        }
    );
}

#[test]
fn rejected_save_leaves_stored_settings_alone() {
    let harness = PreferencesHarness::new();
    let mut page = harness.open_page(Platform::Other);
    let missing = harness.temp.path().join("no-vmrun-here");
    page.set_use_local_server(true);
    page.ui.vmrun_path.text = missing.to_string_lossy().into_owned();

    assert!(page.save_preferences().is_err());
    assert_eq!(page.dialogs().errors.len(), 1);
    assert_eq!(
        page.store().settings(),
        VmwareSettings::defaults_for(Platform::Other)
    );
    assert!(!harness.settings_file().exists());
}

#[test]
fn restore_defaults_is_not_saved_until_applied() {
    let harness = PreferencesHarness::new();
    let mut page = harness.open_page(Platform::Other);
    page.set_use_local_server(false);
    page.ui.network.vmnet_end_range.set_value(77);
    assert_eq!(page.save_preferences(), Ok(()));

    page.restore_defaults();
    assert_eq!(page.store().settings().vmnet_end_range, 77);

    let reopened = harness.open_page(Platform::Other);
    assert_eq!(reopened.read_fields().vmnet_end_range, 77);
}

#[test]
fn apple_window_keeps_local_server_off() {
    let harness = PreferencesHarness::new();
    std::fs::create_dir_all(harness.settings_file().parent().unwrap()).unwrap();
    std::fs::write(
        harness.settings_file(),
        "[vmware]\nhost_type = \"fusion\"\nuse_local_server = true\n",
    )
    .unwrap();

    let mut page = harness.open_page(Platform::Apple);
    assert!(!page.ui.use_local_server.is_checked());
    assert!(!page.ui.network.enabled);

    page.set_use_local_server(true);
    assert_eq!(page.save_preferences(), Ok(()));
    assert!(!page.store().settings().use_local_server);
    assert!(page.dialogs().errors.is_empty());
}

#[cfg(unix)]
#[test]
fn browse_starts_at_vmrun_on_path_and_saved_choice_persists() {
    let harness = PreferencesHarness::with_vmrun_on_path();
    let on_path = harness.temp.path().join("bin").join("vmrun");
    let chosen_dir = harness.temp.path().join("vmware");
    std::fs::create_dir_all(&chosen_dir).unwrap();
    let chosen = chosen_dir.join("vmrun");
    write_executable(&chosen);

    let dialogs = HeadlessDialogs {
        pick: Some(harness.temp.path().join("bin").join("..").join("vmware").join("vmrun")),
        ..HeadlessDialogs::default()
    };
    let mut page = harness.open_page_with(Platform::Other, dialogs);
    page.browse_vmrun_path();

    assert_eq!(page.dialogs().pick_starts, vec![Some(on_path)]);
    assert!(page.dialogs().errors.is_empty());
    assert_eq!(page.ui.vmrun_path.text, chosen.to_string_lossy());

    page.set_use_local_server(true);
    assert_eq!(page.save_preferences(), Ok(()));

    let reopened = harness.open_page(Platform::Other);
    assert_eq!(reopened.read_fields().vmrun_path, chosen.to_string_lossy());
    assert!(reopened.read_fields().use_local_server);
}
