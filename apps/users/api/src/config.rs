use core_config::{
    app_info, env_flag, pagination::PaginationConfig, server::ServerConfig,
    tracing::log_level_from_env, AppInfo, FromEnv,
};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub pagination: PaginationConfig,
    pub environment: Environment,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: &'static str,
    /// Seed the in-memory repository with sample users
    pub sample_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=3000
        let pagination = PaginationConfig::from_env()?;
        let log_level = log_level_from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            pagination,
            environment,
            log_level,
            sample_data: env_flag("ENABLE_SAMPLE_DATA", true),
        })
    }
}
