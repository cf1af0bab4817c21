//! Tracing setup: subscriber installation, span definitions, and event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use phenology_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the configured log level.
pub const LOG_ENV_VAR: &str = "PHENOLOGY_LOG";

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// `PHENOLOGY_LOG` takes precedence over `config.log_level`; an unparseable
/// directive falls back to `info`. Output is JSON when `config.json_logs`
/// is set. Idempotent, and a no-op if the host already installed a
/// subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(&config.log_level);
        let installed = if config.json_logs {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .with(filter)
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping host subscriber");
        }
    });
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
