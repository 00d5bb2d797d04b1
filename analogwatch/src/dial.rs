//! Painting the analog dial

use egui::{Painter, Pos2, Stroke, Vec2};
use watchcore::face::{dial_direction, tick_marks, FaceGeometry, HandAngles, HandSpec};
use watchcore::theme::Palette;

fn direction(angle: f64) -> Vec2 {
    let (x, y) = dial_direction(angle);
    Vec2::new(x, y)
}

/// Draw the disc, rim ticks, hands and hub centred on `center`.
///
/// `hands` is `None` while no reading is available; the face is then drawn
/// without hands.
pub fn paint_dial(
    painter: &Painter,
    center: Pos2,
    geometry: &FaceGeometry,
    hands: Option<&HandAngles>,
    palette: &Palette,
) {
    painter.circle_filled(center, geometry.diameter / 2.0, palette.face);

    for mark in tick_marks() {
        let dir = direction(mark.angle);
        let half = geometry.tick_length(&mark) / 2.0;
        painter.line_segment(
            [
                center + dir * (geometry.tick_radius - half),
                center + dir * (geometry.tick_radius + half),
            ],
            Stroke::new(geometry.tick_width, palette.foreground),
        );
    }

    if let Some(hands) = hands {
        paint_hand(painter, center, hands.second, &geometry.second_hand, palette);
        paint_hand(painter, center, hands.minute, &geometry.minute_hand, palette);
        paint_hand(painter, center, hands.hour, &geometry.hour_hand, palette);
    }

    painter.circle_filled(center, geometry.hub_diameter / 2.0, palette.foreground);
}

fn paint_hand(painter: &Painter, center: Pos2, angle: f64, spec: &HandSpec, palette: &Palette) {
    let tip = center + direction(angle) * spec.length;
    painter.line_segment([center, tip], Stroke::new(spec.thickness, palette.foreground));
}
