use crate::{env_parse, require_positive, ConfigError, FromEnv};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Defaults and bounds applied to list endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_page: u32,
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE,
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

impl FromEnv for PaginationConfig {
    /// Reads `PAGINATION_DEFAULT_PAGE`, `PAGINATION_DEFAULT_LIMIT` and
    /// `PAGINATION_MAX_LIMIT`. All three must be positive.
    fn from_env() -> Result<Self, ConfigError> {
        let default_page = require_positive(
            "PAGINATION_DEFAULT_PAGE",
            env_parse("PAGINATION_DEFAULT_PAGE", DEFAULT_PAGE)?,
        )?;
        let default_limit = require_positive(
            "PAGINATION_DEFAULT_LIMIT",
            env_parse("PAGINATION_DEFAULT_LIMIT", DEFAULT_LIMIT)?,
        )?;
        let max_limit = require_positive(
            "PAGINATION_MAX_LIMIT",
            env_parse("PAGINATION_MAX_LIMIT", MAX_LIMIT)?,
        )?;

        Ok(Self {
            default_page,
            default_limit,
            max_limit,
        })
    }
}
