use crate::errors::handlers::not_found;
use crate::middleware::security_headers;
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa::openapi::server::Server;
use utoipa_scalar::{Scalar, Servable};

/// Path the OpenAPI document is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path of the interactive API reference.
pub const DOCS_PATH: &str = "/docs";

/// Binds the configured address and serves the router until the process exits.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> std::io::Result<()> {
///     create_app(Router::new(), &ServerConfig::default()).await
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    info!(
        "API documentation available at http://{}{}",
        server_config.address(),
        DOCS_PATH
    );
    axum::serve(listener, router.into_make_service())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI JSON at [`OPENAPI_JSON_PATH`] and a Scalar reference at [`DOCS_PATH`],
///   with `api_prefix` advertised as the server URL
/// - API routes nested under `api_prefix` (merged at the root when empty)
/// - Common middleware (tracing, security headers, permissive CORS)
/// - 404 fallback rendering the error envelope
///
/// Domain routers should apply their own state before being passed in.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().route("/example", get(handler)).with_state(state);
/// let router = create_router::<ApiDoc>(api_routes, "/api/v1");
/// ```
pub fn create_router<T>(apis: Router, api_prefix: &str) -> Router
where
    T: OpenApi + 'static,
{
    let mut openapi = T::openapi();
    if !api_prefix.is_empty() {
        openapi.servers = Some(vec![Server::new(api_prefix)]);
    }
    let document = openapi.clone();

    let router = Router::new()
        .route(OPENAPI_JSON_PATH, get(move || async move { Json(document) }))
        .merge(Scalar::with_url(DOCS_PATH, openapi));

    let router = if api_prefix.is_empty() {
        router.merge(apis)
    } else {
        router.nest(api_prefix, apis)
    };

    router
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(CorsLayer::permissive())
}
