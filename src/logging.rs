//! Logging setup for the `cuckoo` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary so embedding applications keep control of their own output.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{CuckooError, CuckooResult};

/// Builds the event filter, letting `RUST_LOG` override the configured level.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize the logging system.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(config: &LogConfig) -> CuckooResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_line_number(config.source_location)
        .with_file(config.source_location)
        .with_writer(std::io::stderr);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| CuckooError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_configured_level() {
        std::env::remove_var("RUST_LOG");
        let config = LogConfig {
            level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(env_filter(&config).to_string(), "debug");
    }
}
