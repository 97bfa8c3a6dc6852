use axum::Router;
use axum_helpers::server::health_router;

use crate::config::Config;

pub mod users;

/// Creates the API routes without the `API_PREFIX`.
/// The prefix is added by the `create_router` helper.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(config: &Config) -> Router {
    Router::new()
        .merge(health_router(config.app.clone()))
        .nest("/users", users::router(config))
}
