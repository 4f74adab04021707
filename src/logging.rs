//! Logging and tracing setup.
//!
//! The library only emits `tracing` events; binaries decide whether and how
//! to install a subscriber by calling one of the initialisers below.

use std::sync::Once;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` overrides `default_level`. Subsequent calls are ignored.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter(default_level))
            .with(fmt_layer)
            .init();

        info!("ctph tracing initialized");
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json(default_level: &str) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_current_span(true);

        tracing_subscriber::registry()
            .with(env_filter(default_level))
            .with(fmt_layer)
            .init();

        info!("ctph tracing initialized (JSON mode)");
    });
}

/// Log an error at `error` level and hand it back.
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let e = $err;
        tracing::error!(error = %e, "Operation failed");
        e
    }};
    ($err:expr, $msg:expr) => {{
        let e = $err;
        tracing::error!(error = %e, context = %$msg, "Operation failed");
        e
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, warn};

    #[test]
    fn test_init_tracing_once() {
        // Should be callable multiple times without panic
        init_tracing("debug");
        init_tracing("info");
        init_tracing_json("info");
    }

    #[test]
    fn test_default_level_applies_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        use tracing_subscriber::filter::LevelFilter;
        assert_eq!(env_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(env_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_structured_logging() {
        init_tracing("debug");
        debug!(len = 4097, block_size = 96, "Selected initial block size");
        warn!(len = 11, min = 4096, "Hashing input below the minimum size");
    }

    #[test]
    fn test_log_error_returns_value() {
        init_tracing("debug");
        let err = log_error!(crate::error::CtphError::invalid_format("bad"), "parse");
        assert!(matches!(err, crate::error::CtphError::InvalidFormat(_)));
    }
}
