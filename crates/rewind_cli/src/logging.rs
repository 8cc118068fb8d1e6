//! Tracing setup.
//!
//! The subscriber is installed before the config file is read, so config
//! loading is traced too. Its filter starts as `RUST_LOG` (or
//! [`DEFAULT_LOG_FILTER`]) and is swapped for the configured filter once
//! the config is known, unless `RUST_LOG` is set.

use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Filter used until a config file says otherwise.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Handle for replacing the installed filter.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// True when `RUST_LOG` holds a usable filter, which overrides any
/// configured one.
pub fn env_filter_set() -> bool {
    EnvFilter::try_from_default_env().is_ok()
}

/// Installs the global subscriber with a provisional filter.
///
/// Logs go to stderr so the board on stdout stays readable.
pub fn init_tracing() -> FilterHandle {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    handle
}

/// Replaces the provisional filter with `configured` unless `RUST_LOG`
/// already chose one.
///
/// Returns whether the filter changed.
pub fn apply_config_filter(
    handle: &FilterHandle,
    configured: &str,
    env_set: bool,
) -> Result<bool, reload::Error> {
    if env_set {
        return Ok(false);
    }
    handle.reload(EnvFilter::new(configured))?;
    debug!(filter = configured, "Applied configured log filter");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(handle: &FilterHandle) -> String {
        handle.with_current(|filter| filter.to_string()).unwrap()
    }

    #[test]
    fn test_configured_filter_replaces_provisional() {
        let (layer, handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_FILTER));
        let _subscriber = tracing_subscriber::registry().with(layer);

        assert!(apply_config_filter(&handle, "debug", false).unwrap());
        assert_eq!(current(&handle), "debug");
    }

    #[test]
    fn test_env_filter_wins_over_config() {
        let (layer, handle) = reload::Layer::new(EnvFilter::new("info"));
        let _subscriber = tracing_subscriber::registry().with(layer);

        assert!(!apply_config_filter(&handle, "debug", true).unwrap());
        assert_eq!(current(&handle), "info");
    }
}
