//! egui renderer for the preferences window.

mod style;
mod vmware_page;

use eframe::egui::{self, RichText};
use tracing::info;

use crate::egui_app::controller::{NativeDialogs, VmwarePreferencesPage};
use crate::vmware::VmwareIntegration;

/// Smallest window that still fits the page and the dialog buttons.
pub const MIN_VIEWPORT_SIZE: [f32; 2] = [460.0, 320.0];

/// The page as the binary runs it: file-backed store, native dialogs.
pub type VmwarePage = VmwarePreferencesPage<VmwareIntegration, NativeDialogs>;

/// Preferences dialog hosting the VMware page.
pub struct PreferencesApp {
    page: VmwarePage,
    feedback: Option<Feedback>,
    visuals_set: bool,
}

/// Outcome of the last Apply, shown next to the dialog buttons.
enum Feedback {
    Saved,
    Rejected(String),
}

impl PreferencesApp {
    /// Wrap a page whose preferences are already loaded.
    pub fn new(page: VmwarePage) -> Self {
        Self {
            page,
            feedback: None,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Save the page; `true` when the store accepted it.
    fn apply(&mut self) -> bool {
        match self.page.save_preferences() {
            Ok(()) => {
                self.feedback = Some(Feedback::Saved);
                true
            }
            Err(err) => {
                self.feedback = Some(Feedback::Rejected(err.to_string()));
                false
            }
        }
    }

    fn render_dialog_buttons(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("dialog_buttons").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Restore defaults").clicked() {
                    self.page.restore_defaults();
                    self.feedback = None;
                }
                self.render_feedback(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Cancel").clicked() {
                        info!("Preferences closed without saving");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("OK").clicked() && self.apply() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("Apply").clicked() {
                        self.apply();
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn render_feedback(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        match &self.feedback {
            Some(Feedback::Saved) => {
                ui.label(RichText::new("Saved").color(palette.success));
            }
            Some(Feedback::Rejected(reason)) => {
                ui.label(RichText::new(reason).color(palette.error));
            }
            None => {}
        }
    }
}

impl eframe::App for PreferencesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_dialog_buttons(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_vmware_page(ui);
        });
    }
}

fn section_label(ui: &mut egui::Ui, label: &str) {
    ui.label(
        RichText::new(label)
            .strong()
            .color(style::palette().text_primary),
    );
}
