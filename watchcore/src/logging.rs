//! Logger setup

use std::sync::Once;

use crate::config::WatchConfig;

/// Level used when neither the config nor `RUST_LOG` names a filter.
const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Pick the `env_logger` filter: the config's `log_filter` wins over
/// `RUST_LOG`, which wins over the default.
fn filter_for(config: &WatchConfig, rust_log: Option<String>) -> String {
    config
        .log_filter
        .clone()
        .or(rust_log)
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: &WatchConfig) {
    let filter = filter_for(config, std::env::var("RUST_LOG").ok());
    INIT.call_once(|| {
        env_logger::Builder::new().parse_filters(&filter).init();
        log::debug!("logging initialized with filter {:?}", filter);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_filter_wins() {
        let config = WatchConfig {
            log_filter: Some("watchcore=debug".into()),
            ..Default::default()
        };
        assert_eq!(filter_for(&config, Some("info".into())), "watchcore=debug");
    }

    #[test]
    fn test_rust_log_then_default() {
        let config = WatchConfig::default();
        assert_eq!(filter_for(&config, Some("info".into())), "info");
        assert_eq!(filter_for(&config, None), DEFAULT_FILTER);
    }
}
