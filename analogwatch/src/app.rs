//! The watch window

use egui::{CentralPanel, Context, Key, RichText, Sense};
use std::sync::mpsc::Sender;
use std::time::Instant;
use watchcore::config::WatchConfig;
use watchcore::face::FaceGeometry;
use watchcore::repaint::RepaintController;
use watchcore::safety::catch_or;
use watchcore::state::{ClockState, ClockStore, DisplayMode, Message};
use watchcore::theme::{Palette, WatchTheme};
use watchcore::ticker::ClockDriver;
use watchcore::time::LocalClock;
use watchcore::widgets::header;

use crate::dial::paint_dial;

const TITLE: &str = "Analog Clock";

/// Vertical room kept below the dial for the digital readout.
const READOUT_HEIGHT: f32 = 70.0;

pub struct AnalogWatchApp {
    store: ClockStore,
    driver: ClockDriver<LocalClock>,
    tx: Sender<Message>,
    theme: WatchTheme,
    /// Mode the egui style was last built for.
    applied_mode: Option<DisplayMode>,
    repaint: RepaintController,
}

impl AnalogWatchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &WatchConfig) -> Self {
        let store = ClockStore::new(DisplayMode::from_dark(config.dark_mode));
        let tx = store.sender();
        let driver = ClockDriver::new(LocalClock, store.sender());
        Self {
            store,
            driver,
            tx,
            theme: WatchTheme::default(),
            applied_mode: None,
            repaint: RepaintController::new(),
        }
    }

    fn sync_theme(&mut self, ctx: &Context, mode: DisplayMode) {
        if self.applied_mode != Some(mode) {
            self.theme.apply(ctx, mode);
            self.applied_mode = Some(mode);
        }
    }
}

fn post_toggle(tx: &Sender<Message>) {
    if tx.send(Message::ToggleDisplayMode).is_err() {
        log::warn!("clock store is gone, dropping display mode toggle");
    }
}

/// Draw one frame from a snapshot. User actions go out on `tx`.
fn render(ctx: &Context, state: &ClockState, theme: &WatchTheme, tx: &Sender<Message>) {
    let palette = Palette::for_mode(state.mode);

    CentralPanel::default()
        .frame(theme.panel_frame(&palette))
        .show(ctx, |ui| {
            if header(ui, TITLE, state.mode) {
                post_toggle(tx);
            }

            let available = ui.available_size();
            let width = ctx
                .screen_rect()
                .width()
                .min(available.y - READOUT_HEIGHT + 80.0);
            let geometry = FaceGeometry::for_width(width);

            let used = geometry.diameter + READOUT_HEIGHT;
            ui.add_space(((available.y - used) / 2.0).max(0.0));

            ui.vertical_centered(|ui| {
                let side = egui::vec2(geometry.diameter, geometry.diameter);
                let (rect, _) = ui.allocate_exact_size(side, Sense::hover());
                if ui.is_rect_visible(rect) {
                    let painter = ui.painter_at(rect);
                    catch_or((), || {
                        paint_dial(&painter, rect.center(), &geometry, state.hands.as_ref(), &palette)
                    });
                }

                ui.add_space(10.0);
                ui.label(
                    RichText::new(&state.label)
                        .font(theme.readout_font())
                        .strong()
                        .color(palette.foreground),
                );
            });
        });
}

impl eframe::App for AnalogWatchApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame();
        let now = Instant::now();

        // Tick only while the dial can be seen
        let (minimized, closing) = ctx.input(|i| {
            let viewport = i.viewport();
            (viewport.minimized.unwrap_or(false), viewport.close_requested())
        });
        self.driver.set_visible(!minimized && !closing, now);
        self.driver.pump(now);

        let toggle = ctx.input(|i| i.modifiers.command && i.key_pressed(Key::D));
        if toggle {
            post_toggle(&self.tx);
        }
        self.store.drain();

        let state = self.store.state().clone();
        self.sync_theme(ctx, state.mode);
        render(ctx, &state, &self.theme, &self.tx);

        // A click during render has to show up without waiting for the next tick
        if self.store.drain() {
            self.repaint.mark_needs_repaint();
        }
        self.repaint.end_frame(ctx, self.driver.until_next(now));
    }
}
