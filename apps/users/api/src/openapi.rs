use core_config::{env_or_default, DEFAULT_APP_NAME};
use utoipa::{Modify, OpenApi};

const DEFAULT_API_DESCRIPTION: &str = "User management REST API";

#[derive(OpenApi)]
#[openapi(
    paths(
        axum_helpers::server::health::health_handler,
        axum_helpers::server::health::ready_handler,
    ),
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::PaginationMeta)
    ),
    info(
        title = "Users API",
        description = "User management REST API"
    ),
    nest(
        (path = "/users", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "health", description = "Health check endpoints")
    ),
    modifiers(&AppIdentity)
)]
pub struct ApiDoc;

/// Title, version and description follow `APP_NAME` / `APP_VERSION` / `API_DESCRIPTION`
struct AppIdentity;

impl Modify for AppIdentity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = env_or_default("APP_NAME", DEFAULT_APP_NAME);
        openapi.info.version = env_or_default("APP_VERSION", env!("CARGO_PKG_VERSION"));
        openapi.info.description = Some(env_or_default(
            "API_DESCRIPTION",
            DEFAULT_API_DESCRIPTION,
        ));
    }
}
