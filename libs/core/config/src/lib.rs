pub mod pagination;
pub mod server;
pub mod tracing;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Instant;
use thiserror::Error;

/// Default application name reported by `/health` and the OpenAPI document.
pub const DEFAULT_APP_NAME: &str = "Users API";

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else if app_env.eq_ignore_ascii_case("test") {
            Environment::Test
        } else {
            Environment::Development
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the running application, shared with the health endpoints.
#[derive(Clone, Debug)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub started_at: Instant,
}

impl AppInfo {
    /// Reads `APP_NAME` and `APP_VERSION`, falling back to the given defaults.
    pub fn from_env_or(default_name: &str, default_version: &str) -> Self {
        Self {
            name: env_or_default("APP_NAME", default_name),
            version: env_or_default("APP_VERSION", default_version),
            environment: Environment::from_env(),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the application info was captured.
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

/// Builds an [`AppInfo`] using the calling crate's version as the default.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo::from_env_or($crate::DEFAULT_APP_NAME, env!("CARGO_PKG_VERSION"))
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Loads a `.env` file from the working directory if one exists.
///
/// Variables already present in the process environment win.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Helper to load and parse environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parses an environment variable into `T`, returning `default` when unset.
pub fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Reads a boolean flag. Only the literal `true` (any case) enables it.
pub fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => raw.trim().eq_ignore_ascii_case("true"),
        Err(_) => default,
    }
}

/// Rejects zero for settings that must be positive.
pub(crate) fn require_positive(key: &str, value: u32) -> Result<u32, ConfigError> {
    if value == 0 {
        return Err(ConfigError::ParseError {
            key: key.to_string(),
            details: "must be a positive number".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        temp_env::with_var("APP_ENV", Some("PRODUCTION"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });

        temp_env::with_var("APP_ENV", Some("Production"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });
    }

    #[test]
    fn test_environment_test() {
        temp_env::with_var("APP_ENV", Some("test"), || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Test);
            assert_eq!(env.to_string(), "test");
        });
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_app_info_defaults() {
        temp_env::with_vars([("APP_NAME", None::<&str>), ("APP_VERSION", None)], || {
            let info = AppInfo::from_env_or("Users API", "1.2.3");
            assert_eq!(info.name, "Users API");
            assert_eq!(info.version, "1.2.3");
            assert!(info.uptime_secs() >= 0.0);
        });
    }

    #[test]
    fn test_app_info_overrides() {
        temp_env::with_vars(
            [("APP_NAME", Some("Directory")), ("APP_VERSION", Some("9.9.9"))],
            || {
                let info = app_info!();
                assert_eq!(info.name, "Directory");
                assert_eq!(info.version, "9.9.9");
            },
        );
    }

    #[test]
    fn test_env_or_default_without_value() {
        temp_env::with_var_unset("MISSING_VAR", || {
            let result = env_or_default("MISSING_VAR", "default_value");
            assert_eq!(result, "default_value");
        });
    }

    #[test]
    fn test_env_parse_uses_default_when_unset() {
        temp_env::with_var_unset("PARSE_ME", || {
            assert_eq!(env_parse("PARSE_ME", 42u32).unwrap(), 42);
        });
    }

    #[test]
    fn test_env_parse_rejects_garbage() {
        temp_env::with_var("PARSE_ME", Some("forty-two"), || {
            let err = env_parse("PARSE_ME", 42u32).unwrap_err();
            assert!(err.to_string().contains("PARSE_ME"));
        });
    }

    #[test]
    fn test_env_flag() {
        temp_env::with_var("SOME_FLAG", Some("TRUE"), || {
            assert!(env_flag("SOME_FLAG", false));
        });
        temp_env::with_var("SOME_FLAG", Some("yes"), || {
            assert!(!env_flag("SOME_FLAG", true));
        });
        temp_env::with_var_unset("SOME_FLAG", || {
            assert!(env_flag("SOME_FLAG", true));
        });
    }
}
