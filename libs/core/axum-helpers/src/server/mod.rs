//! Server infrastructure module.
//!
//! This module provides:
//! - Router setup with OpenAPI documentation and common middleware
//! - Health and readiness endpoints
//! - Binding and serving
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let apis = Router::new().merge(users_router).merge(health_router(app_info!()));
//! let router = create_router::<ApiDoc>(apis, "/api/v1");
//!
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;

pub use app::{DOCS_PATH, OPENAPI_JSON_PATH, create_app, create_router};
pub use health::{HealthResponse, ReadyResponse, ServiceStatus, health_router};
