//! Clock face math
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, and always
//! fall in `[0, 360)`. They are applied directly as rotations; nothing is
//! interpolated between ticks.

use crate::time::TimeSample;

/// Degrees per minute (and per second) on the dial.
pub const DEGREES_PER_MINUTE: f64 = 6.0;

/// Degrees per hour on a 12-hour dial.
pub const DEGREES_PER_HOUR: f64 = 30.0;

/// Marks around the rim, one per minute.
pub const TICK_COUNT: usize = 60;

/// Every n-th mark is drawn long.
pub const MAJOR_TICK_EVERY: usize = 5;

/// Rotation of the three hands for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub second: f64,
    pub minute: f64,
    pub hour: f64,
}

impl HandAngles {
    pub fn from_sample(sample: &TimeSample) -> Self {
        let minute = f64::from(sample.minute());
        Self {
            second: f64::from(sample.second()) * DEGREES_PER_MINUTE,
            minute: minute * DEGREES_PER_MINUTE,
            // the hour hand creeps between marks as the minutes pass
            hour: (f64::from(sample.hour_on_dial()) + minute / 60.0) * DEGREES_PER_HOUR,
        }
    }
}

/// A fixed mark on the rim. Its rotation never depends on the time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub index: usize,
    pub angle: f64,
    pub major: bool,
}

pub fn tick_marks() -> impl Iterator<Item = TickMark> {
    (0..TICK_COUNT).map(|index| TickMark {
        index,
        angle: index as f64 * DEGREES_PER_MINUTE,
        major: index % MAJOR_TICK_EVERY == 0,
    })
}

/// Length and stroke width of a hand, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSpec {
    pub length: f32,
    pub thickness: f32,
}

/// Sizes of everything on the dial for a given available width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    pub diameter: f32,
    /// Distance from the centre to the middle of each tick mark.
    pub tick_radius: f32,
    pub tick_width: f32,
    pub major_tick_length: f32,
    pub minor_tick_length: f32,
    pub second_hand: HandSpec,
    pub minute_hand: HandSpec,
    pub hour_hand: HandSpec,
    pub hub_diameter: f32,
}

impl FaceGeometry {
    pub fn for_width(width: f32) -> Self {
        let half = |inset: f32| ((width - inset) / 2.0).max(0.0);
        Self {
            diameter: (width - 80.0).max(0.0),
            tick_radius: half(110.0),
            tick_width: 2.0,
            major_tick_length: 15.0,
            minor_tick_length: 5.0,
            second_hand: HandSpec { length: half(180.0), thickness: 2.0 },
            minute_hand: HandSpec { length: half(200.0), thickness: 4.0 },
            hour_hand: HandSpec { length: half(240.0), thickness: 4.5 },
            hub_diameter: 15.0,
        }
    }

    pub fn tick_length(&self, mark: &TickMark) -> f32 {
        if mark.major {
            self.major_tick_length
        } else {
            self.minor_tick_length
        }
    }
}

/// Unit vector pointing along `angle` degrees clockwise from 12 o'clock,
/// in screen coordinates (y grows downward).
pub fn dial_direction(angle: f64) -> (f32, f32) {
    let rad = angle.to_radians();
    (rad.sin() as f32, -rad.cos() as f32)
}
