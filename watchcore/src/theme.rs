//! Watch theme
//!
//! Two fixed palettes, light and dark. Everything on screen is drawn in the
//! palette's foreground on its background; the dial disc is the foreground
//! at low opacity.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

use crate::state::DisplayMode;

/// Colours for one display mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub foreground: Color32,
    /// Fill of the dial disc.
    pub face: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(255, 255, 255),
        foreground: Color32::from_rgb(0, 0, 0),
        face: Color32::from_rgba_premultiplied(0, 0, 0, 26),
    };

    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(0, 0, 0),
        foreground: Color32::from_rgb(255, 255, 255),
        face: Color32::from_rgba_premultiplied(26, 26, 26, 26),
    };

    pub fn for_mode(mode: DisplayMode) -> Palette {
        match mode {
            DisplayMode::Light => Palette::LIGHT,
            DisplayMode::Dark => Palette::DARK,
        }
    }
}

/// Theme configuration for the watch window
pub struct WatchTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_readout: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for WatchTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 28.0,
            font_size_readout: 45.0,
            window_padding: 16.0,
            item_spacing: 8.0,
        }
    }
}

impl WatchTheme {
    /// Apply the theme for `mode` to an egui context
    pub fn apply(&self, ctx: &egui::Context, mode: DisplayMode) {
        let palette = Palette::for_mode(mode);
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body * 0.8, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = if mode.is_dark() { Visuals::dark() } else { Visuals::light() };

        visuals.window_fill = palette.background;
        visuals.panel_fill = palette.background;
        visuals.extreme_bg_color = palette.background;
        visuals.override_text_color = Some(palette.foreground);
        visuals.window_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, palette.foreground);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);

        ctx.set_style(style);
        log::debug!("applied {:?} theme", mode);
    }

    /// Font for the digital readout under the dial
    pub fn readout_font(&self) -> FontId {
        FontId::proportional(self.font_size_readout)
    }

    /// Central panel frame: palette background with padding
    pub fn panel_frame(&self, palette: &Palette) -> egui::Frame {
        egui::Frame::none()
            .fill(palette.background)
            .inner_margin(egui::Margin::same(self.window_padding))
    }
}
