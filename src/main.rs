//! Entry point for the VMware preferences window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use tracing::{error, info};
use vmware_prefs::egui_app::controller::{NativeDialogs, VmwarePreferencesPage};
use vmware_prefs::egui_app::ui::{MIN_VIEWPORT_SIZE, PreferencesApp};
use vmware_prefs::logging;
use vmware_prefs::platform::Platform;
use vmware_prefs::vmware::VmwareIntegration;

const INITIAL_VIEWPORT_SIZE: [f32; 2] = [520.0, 360.0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let platform = Platform::current();
    info!("Opening VMware preferences on {platform}");
    let store = VmwareIntegration::open(platform);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(INITIAL_VIEWPORT_SIZE)
            .with_min_inner_size(MIN_VIEWPORT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "VMware Preferences",
        native_options,
        Box::new(move |_cc| match store {
            Ok(store) => {
                info!("Editing VMware settings in {}", store.path().display());
                let mut page = VmwarePreferencesPage::new(platform, store, NativeDialogs);
                page.load_preferences();
                Ok(Box::new(PreferencesApp::new(page)))
            }
            Err(err) => {
                error!("Failed to open VMware settings: {err}");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load settings: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to open preferences");
                ui.label(&self.message);
            });
        });
    }
}
