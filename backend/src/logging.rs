//! Structured JSON logging setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::ConfigError;

/// Map a `LOG_LEVEL` value onto a tracing level.
///
/// `fatal` and `panic` have no tracing equivalent and map to `error`.
pub fn parse_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" | "warning" => Ok(LevelFilter::WARN),
        "error" | "fatal" | "panic" => Ok(LevelFilter::ERROR),
        other => Err(ConfigError::Invalid {
            variable: "LOG_LEVEL",
            reason: format!("unknown level '{other}'"),
        }),
    }
}

/// Install the process-wide JSON subscriber.
///
/// `RUST_LOG` directives, when set, refine the configured level.
///
/// Returns an error string when a subscriber is already installed; callers
/// log it and carry on.
pub fn init(level: LevelFilter) -> Result<(), String> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init()
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("debug", LevelFilter::DEBUG)]
    #[case("INFO", LevelFilter::INFO)]
    #[case("warn", LevelFilter::WARN)]
    #[case("error", LevelFilter::ERROR)]
    #[case("fatal", LevelFilter::ERROR)]
    #[case(" panic ", LevelFilter::ERROR)]
    fn known_levels_map(#[case] raw: &str, #[case] expected: LevelFilter) {
        assert_eq!(parse_level(raw), Ok(expected));
    }

    #[rstest]
    fn unknown_levels_are_rejected() {
        assert!(matches!(
            parse_level("trace-everything"),
            Err(ConfigError::Invalid {
                variable: "LOG_LEVEL",
                ..
            })
        ));
    }
}
