use eframe::egui::{self, RichText};

use super::{PreferencesApp, section_label, style};
use crate::egui_app::state::SpinState;

impl PreferencesApp {
    pub(super) fn render_vmware_page(&mut self, ui: &mut egui::Ui) {
        let page = &mut self.page;
        ui.heading("VMware");
        ui.add_space(6.0);

        section_label(ui, "Local server");
        let mut use_local_server = page.ui.use_local_server.is_checked();
        let checkbox = egui::Checkbox::new(&mut use_local_server, "Use a local server");
        if ui
            .add_enabled(page.ui.use_local_server.is_enabled(), checkbox)
            .changed()
        {
            page.set_use_local_server(use_local_server);
        }
        if !page.platform().supports_local_server() {
            ui.label(
                RichText::new(format!(
                    "A local VMware server is not supported on {}.",
                    page.platform()
                ))
                .color(style::palette().text_muted),
            );
        }

        ui.horizontal(|ui| {
            ui.label("Path to vmrun:");
            let path_field = egui::TextEdit::singleline(&mut page.ui.vmrun_path.text)
                .desired_width(240.0)
                .hint_text("vmrun");
            ui.add_enabled(page.ui.vmrun_path.enabled, path_field);
            if ui
                .add_enabled(page.ui.vmrun_browse.enabled, egui::Button::new("Browse…"))
                .clicked()
            {
                page.browse_vmrun_path();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Host type:");
            let selected = page
                .ui
                .host_type
                .current_item()
                .map(|item| item.label.clone())
                .unwrap_or_default();
            let mut chosen = None;
            ui.add_enabled_ui(page.ui.host_type.enabled, |ui| {
                egui::ComboBox::from_id_salt("vmware_host_type")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        let current = page.ui.host_type.current_index();
                        for (index, item) in page.ui.host_type.items().iter().enumerate() {
                            if ui
                                .selectable_label(current == Some(index), item.label.as_str())
                                .clicked()
                            {
                                chosen = Some(index);
                            }
                        }
                    });
            });
            if let Some(index) = chosen {
                page.ui.host_type.set_current_index(index);
            }
        });

        ui.add_space(8.0);
        ui.separator();
        section_label(ui, "Network");
        let network = &mut page.ui.network;
        ui.add_enabled_ui(network.enabled, |ui| {
            egui::Grid::new("vmnet_range_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("VMnet start range:");
                    spin_field(ui, &mut network.vmnet_start_range);
                    ui.end_row();
                    ui.label("VMnet end range:");
                    spin_field(ui, &mut network.vmnet_end_range);
                    ui.end_row();
                });
        });
    }
}

fn spin_field(ui: &mut egui::Ui, spin: &mut SpinState) {
    let mut value = spin.value();
    let drag = egui::DragValue::new(&mut value)
        .speed(1.0)
        .range(spin.min()..=spin.max())
        .prefix("vmnet");
    if ui.add(drag).changed() {
        spin.set_value(value);
    }
}
