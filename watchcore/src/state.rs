//! Clock state and its single owner
//!
//! Timer ticks and user actions never touch state directly. They send a
//! [`Message`] to the [`ClockStore`], which folds it into a fresh
//! [`ClockState`] snapshot. The renderer only ever sees `&ClockState`.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::face::HandAngles;
use crate::label::{digital_label, PLACEHOLDER_LABEL};
use crate::time::TimeSample;

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == DisplayMode::Dark
    }

    pub fn toggled(&self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }
}

/// Updates the store understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A fresh clock reading.
    Sample(TimeSample),
    /// The clock could not be read this tick.
    ClockUnavailable,
    /// The user flipped the light/dark switch.
    ToggleDisplayMode,
}

/// Immutable snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockState {
    /// `None` until the first reading, or after a failed one.
    pub sample: Option<TimeSample>,
    pub hands: Option<HandAngles>,
    pub label: String,
    pub mode: DisplayMode,
    /// Number of readings folded in so far.
    pub samples_seen: u64,
}

impl ClockState {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            sample: None,
            hands: None,
            label: PLACEHOLDER_LABEL.to_string(),
            mode,
            samples_seen: 0,
        }
    }

    /// Fold one message into a new snapshot.
    pub fn apply(&self, message: Message) -> ClockState {
        match message {
            Message::Sample(sample) => ClockState {
                sample: Some(sample),
                hands: Some(HandAngles::from_sample(&sample)),
                // the readout comes from the same sample as the hands
                label: digital_label(&sample),
                mode: self.mode,
                samples_seen: self.samples_seen + 1,
            },
            Message::ClockUnavailable => ClockState {
                mode: self.mode,
                samples_seen: self.samples_seen,
                ..ClockState::new(self.mode)
            },
            Message::ToggleDisplayMode => ClockState {
                mode: self.mode.toggled(),
                ..self.clone()
            },
        }
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new(DisplayMode::default())
    }
}

/// Owner of the mutable clock state.
pub struct ClockStore {
    state: ClockState,
    tx: Sender<Message>,
    rx: Receiver<Message>,
}

impl ClockStore {
    pub fn new(mode: DisplayMode) -> Self {
        let (tx, rx) = channel();
        Self {
            state: ClockState::new(mode),
            tx,
            rx,
        }
    }

    /// A channel end for timers and widgets to post messages on.
    pub fn sender(&self) -> Sender<Message> {
        self.tx.clone()
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    /// Apply every queued message. Returns `true` if the snapshot changed.
    pub fn drain(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.rx.try_recv() {
            let next = self.state.apply(message);
            if next != self.state {
                log::trace!("clock state updated by {:?}", message);
                self.state = next;
                changed = true;
            }
        }
        changed
    }
}

impl Default for ClockStore {
    fn default() -> Self {
        Self::new(DisplayMode::default())
    }
}
