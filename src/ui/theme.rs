//! UI theme definitions.

use egui::{Color32, Visuals};

/// Dark timber-and-amber palette.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(24, 18, 12);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(34, 26, 18);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(46, 36, 24);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(245, 222, 179);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(190, 160, 120);
    /// Accent color (amber)
    pub const ACCENT: Color32 = Color32::from_rgb(255, 179, 64);
    /// Danger color (bombs, game over)
    pub const DANGER: Color32 = Color32::from_rgb(220, 70, 50);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(80, 62, 40);
}

/// Build the egui visuals for the application theme.
pub fn visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.window_fill = DarkTheme::BACKGROUND;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.override_text_color = Some(DarkTheme::TEXT_PRIMARY);
    visuals.hyperlink_color = DarkTheme::ACCENT;
    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals
}
