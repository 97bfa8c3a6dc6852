use crate::{env_or_default, ConfigError, Environment};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in the main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
///
/// Configuration:
/// - Shows file:line where errors occur
/// - Hides environment variables (less noise)
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Reads `LOG_LEVEL` (default `info`) and returns the matching filter directive.
///
/// Accepted values: `fatal`, `error`, `warn`, `info`, `debug`, `trace`.
/// `fatal` has no tracing equivalent and maps to `error`.
pub fn log_level_from_env() -> Result<&'static str, ConfigError> {
    let raw = env_or_default("LOG_LEVEL", "info");
    match raw.trim().to_ascii_lowercase().as_str() {
        "fatal" | "error" => Ok("error"),
        "warn" => Ok("warn"),
        "info" => Ok("info"),
        "debug" => Ok("debug"),
        "trace" => Ok("trace"),
        other => Err(ConfigError::ParseError {
            key: "LOG_LEVEL".to_string(),
            details: format!("unknown log level '{}'", other),
        }),
    }
}

/// Initialize tracing with environment-aware configuration and error span capture.
///
/// - **Production** (`APP_ENV=production`):
///   - JSON format (for log aggregation tools)
///   - Hides module targets for cleaner logs
///
/// - **Development / Test**:
///   - Pretty-printed format (human-readable)
///
/// Both include `tracing_error::ErrorLayer` for span trace capture.
///
/// `RUST_LOG` overrides `default_level` when set.
///
/// This function is safe to call multiple times; later calls are ignored
/// (common in tests).
pub fn init_tracing(environment: &Environment, default_level: &str) {
    let is_production = environment.is_production();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(
                environment = %environment,
                level = default_level,
                "Tracing initialized with ErrorLayer"
            );
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_default_is_info() {
        temp_env::with_var_unset("LOG_LEVEL", || {
            assert_eq!(log_level_from_env().unwrap(), "info");
        });
    }

    #[test]
    fn test_log_level_fatal_maps_to_error() {
        temp_env::with_var("LOG_LEVEL", Some("FATAL"), || {
            assert_eq!(log_level_from_env().unwrap(), "error");
        });
    }

    #[test]
    fn test_log_level_rejects_unknown() {
        temp_env::with_var("LOG_LEVEL", Some("verbose"), || {
            let err = log_level_from_env().unwrap_err();
            assert!(err.to_string().contains("LOG_LEVEL"));
        });
    }

    #[test]
    fn test_init_tracing_multiple_calls() {
        init_tracing(&Environment::Development, "info");
        init_tracing(&Environment::Production, "warn");
    }
}
