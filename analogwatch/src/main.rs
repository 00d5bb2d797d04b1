//! analogwatch: a single-screen analog clock
//!
//! An analog dial with a digital readout and a light/dark switch,
//! refreshed once per second from the system clock.

mod app;
mod dial;

use eframe::NativeOptions;
use watchcore::config::WatchConfig;
use watchcore::logging::init_logging;
use watchcore::state::DisplayMode;
use watchcore::theme::WatchTheme;

use app::AnalogWatchApp;

fn main() -> eframe::Result<()> {
    let path = WatchConfig::config_path();
    let loaded = WatchConfig::load_from(&path);
    init_logging(loaded.as_ref().unwrap_or(&WatchConfig::default()));
    // re-read so a bad file is reported now that the logger is up
    let config = match loaded {
        Ok(config) => config,
        Err(_) => WatchConfig::load_or_default_from(&path),
    };
    log::info!("starting analogwatch, dark mode {}", config.dark_mode);

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window_width, config.window_height])
        .with_min_inner_size([280.0, 360.0])
        .with_title("Analog Clock");

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "analogwatch",
        options,
        Box::new(move |cc| {
            WatchTheme::default().apply(&cc.egui_ctx, DisplayMode::from_dark(config.dark_mode));
            Box::new(AnalogWatchApp::new(cc, &config))
        }),
    )
}
