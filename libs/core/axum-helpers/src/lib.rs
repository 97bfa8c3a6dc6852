//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router and server setup, health checks
//! - **[`middleware`]**: Security headers
//! - **[`errors`]**: `AppError` and error codes rendered as error envelopes
//! - **[`response`]**: Success, error and paginated JSON envelopes
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON, validated query)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config.api_prefix);
//!     create_app(router, &config).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod server;

// Re-export server types
pub use server::{
    HealthResponse, ReadyResponse, ServiceStatus, create_app, create_router, health_router,
};

// Re-export HTTP middleware
pub use middleware::security_headers;

// Re-export error and envelope types
pub use errors::{AppError, ErrorCode};
pub use response::{ApiResponse, ErrorResponse, PaginatedResponse, PaginationMeta};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson, ValidatedQuery};
