use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // `.env` is optional; real environment variables win
    core_config::load_dotenv();

    let config = Config::from_env()?;

    init_tracing(&config.environment, config.log_level);

    info!(
        "Starting {} v{} ({})",
        config.app.name, config.app.version, config.environment
    );

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&config);

    // create_router adds docs/middleware and mounts everything under API_PREFIX
    let router = create_router::<openapi::ApiDoc>(api_routes, &config.server.api_prefix);

    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    Ok(())
}
