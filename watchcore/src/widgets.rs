//! Custom widgets: header bar and the light/dark switch

use egui::{Response, Sense, Stroke, Ui, Widget};

use crate::state::DisplayMode;
use crate::theme::Palette;

/// Diameter of the round toggle button.
pub const TOGGLE_SIZE: f32 = 44.0;

/// Round button that flips the display mode.
///
/// Filled with the foreground colour; the icon is drawn in the background
/// colour. Shows a sun while dark (click for light) and a moon while light.
pub struct ThemeToggle {
    mode: DisplayMode,
}

impl ThemeToggle {
    pub fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }
}

impl Widget for ThemeToggle {
    fn ui(self, ui: &mut Ui) -> Response {
        let palette = Palette::for_mode(self.mode);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(TOGGLE_SIZE, TOGGLE_SIZE), Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let radius = TOGGLE_SIZE / 2.0;
            painter.circle_filled(center, radius, palette.foreground);
            if response.hovered() {
                painter.circle_stroke(center, radius - 2.0, Stroke::new(1.0, palette.background));
            }

            let icon = palette.background;
            if self.mode.is_dark() {
                // sun: disc with eight rays
                painter.circle_filled(center, 5.0, icon);
                for i in 0..8 {
                    let a = i as f32 * std::f32::consts::TAU / 8.0;
                    let dir = egui::vec2(a.cos(), a.sin());
                    painter.line_segment(
                        [center + dir * 8.0, center + dir * 11.0],
                        Stroke::new(2.0, icon),
                    );
                }
            } else {
                // moon: disc with a bite taken out in the button colour
                painter.circle_filled(center, 9.0, icon);
                painter.circle_filled(center + egui::vec2(5.0, -4.0), 8.0, palette.foreground);
            }
        }

        response.on_hover_text(if self.mode.is_dark() { "light mode" } else { "dark mode" })
    }
}

/// Header row: heavy title on the left, theme switch on the right.
///
/// Returns `true` if the switch was clicked.
pub fn header(ui: &mut Ui, title: &str, mode: DisplayMode) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new(title).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            clicked = ui.add(ThemeToggle::new(mode)).clicked();
        });
    });
    clicked
}
