//! Repaint scheduling for the watch
//!
//! egui is an immediate-mode GUI: a frame only runs when input arrives or a
//! repaint was requested. The watch has to wake itself up once per second
//! while the dial is visible, and must stay asleep once it is hidden.
//!
//! `RepaintController` sits between the app and egui's repaint scheduler
//! and decides when the next frame should run:
//!
//! 1. **State change**: the store folded in a message after the frame was
//!    drawn. Repaint immediately so the new snapshot is shown.
//! 2. **Tick**: a clock subscription is attached. Wake up when its next
//!    tick is due.
//! 3. **Idle**: hidden and clean. Do *not* repaint; egui sleeps until the
//!    next input event.

use std::time::Duration;

/// What `end_frame` asks egui for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintPlan {
    Immediate,
    After(Duration),
    Idle,
}

/// Controls when the egui context should request repaints.
///
/// Drop this into your app struct and call [`begin_frame`] at the top of
/// `update()` and [`end_frame`] at the bottom.
///
/// [`begin_frame`]: RepaintController::begin_frame
/// [`end_frame`]: RepaintController::end_frame
#[derive(Debug, Default)]
pub struct RepaintController {
    needs_repaint: bool,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Call at the **start** of your `update()` method. The frame now
    /// running is the repaint that was asked for.
    pub fn begin_frame(&mut self) {
        self.needs_repaint = false;
    }

    /// Decide the next wake-up given the time left before the next clock
    /// tick (`None` when no subscription is attached).
    pub fn plan(&self, until_next_tick: Option<Duration>) -> RepaintPlan {
        if self.needs_repaint {
            return RepaintPlan::Immediate;
        }
        match until_next_tick {
            Some(wait) => RepaintPlan::After(wait),
            None => RepaintPlan::Idle,
        }
    }

    /// Call at the **end** of your `update()` method.
    pub fn end_frame(&mut self, ctx: &egui::Context, until_next_tick: Option<Duration>) {
        match self.plan(until_next_tick) {
            RepaintPlan::Immediate => ctx.request_repaint(),
            RepaintPlan::After(wait) => ctx.request_repaint_after(wait),
            RepaintPlan::Idle => {}
        }
    }
}
