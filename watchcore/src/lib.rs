//! watchcore: shared library for the analog watch
//!
//! Time samples and hand angles, the per-second tick subscription, the
//! state store, and the egui theme and widgets the window is built from.

pub mod config;
pub mod face;
pub mod label;
pub mod logging;
pub mod repaint;
pub mod safety;
pub mod state;
pub mod theme;
pub mod ticker;
pub mod time;
pub mod widgets;

pub use face::{FaceGeometry, HandAngles};
pub use repaint::RepaintController;
pub use state::{ClockState, ClockStore, DisplayMode, Message};
pub use theme::{Palette, WatchTheme};
pub use ticker::{ClockDriver, TickSubscription};
pub use time::{LocalClock, TimeSample, TimeSource};
