use egui::{Color32, Style, Visuals};

pub fn setup_theme(ctx: &egui::Context) {
    let mut style = Style::default();
    style.visuals = Visuals::dark();

    style.visuals.panel_fill = BACKGROUND;
    style.visuals.window_fill = BACKGROUND;
    style.visuals.extreme_bg_color = PANEL_BG;
    style.visuals.widgets.inactive.weak_bg_fill = BUTTON_BG;
    style.visuals.widgets.hovered.weak_bg_fill = BUTTON_HOVER;

    ctx.set_style(style);
}

pub const BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
pub const PANEL_BG: Color32 = Color32::from_rgb(31, 41, 55);
pub const BUTTON_BG: Color32 = Color32::from_rgb(55, 65, 81);
pub const BUTTON_HOVER: Color32 = Color32::from_rgb(75, 85, 99);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ENTRY_TEXT: Color32 = Color32::from_rgb(209, 213, 219);
pub const NEWEST_TEXT: Color32 = Color32::WHITE;
