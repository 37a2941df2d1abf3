//! Structured logging via the `tracing` ecosystem.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Initialize the tracing subscriber for the generator.
///
/// Console output with module paths, severity levels, and time since start.
/// `RUST_LOG` takes precedence; otherwise the config's `debug.log_level`
/// applies, falling back to `info`.
pub fn init_logging(config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => "info".to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_log_level_becomes_filter() {
        let mut config = Config::default();
        config.debug.log_level = "debug".to_string();
        // The filter string itself must parse.
        let filter = EnvFilter::new(&config.debug.log_level);
        assert!(format!("{}", filter).contains("debug"));
    }

    #[test]
    fn test_default_filter_is_info() {
        let filter = EnvFilter::new("info");
        assert!(format!("{}", filter).contains("info"));
    }
}
