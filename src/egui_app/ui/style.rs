use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_window: Color32,
    pub bg_panel: Color32,
    pub bg_control: Color32,
    pub outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_window: Color32::from_rgb(12, 12, 14),
        bg_panel: Color32::from_rgb(24, 26, 28),
        bg_control: Color32::from_rgb(40, 42, 46),
        outline: Color32::from_rgb(52, 56, 62),
        text_primary: Color32::from_rgb(190, 196, 204),
        text_muted: Color32::from_rgb(138, 144, 152),
        accent: Color32::from_rgb(160, 210, 250),
        error: Color32::from_rgb(206, 120, 96),
        success: Color32::from_rgb(104, 178, 138),
    }
}

/// Flat dark look shared by every page of the preferences window.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_window;
    visuals.panel_fill = palette.bg_panel;
    visuals.extreme_bg_color = palette.bg_window;
    visuals.error_fg_color = palette.error;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_panel;
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        square_off(widget, palette);
    }
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
}

fn square_off(widget: &mut WidgetVisuals, palette: Palette) {
    widget.corner_radius = CornerRadius::ZERO;
    widget.bg_fill = palette.bg_control;
    widget.bg_stroke = Stroke::new(1.0, palette.outline);
}
