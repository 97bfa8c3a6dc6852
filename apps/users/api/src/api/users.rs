use axum::Router;
use domain_users::{handlers, InMemoryUserRepository, UserService};
use tracing::info;

use crate::config::Config;

pub fn router(config: &Config) -> Router {
    let repository = if config.sample_data {
        InMemoryUserRepository::new()
    } else {
        info!("Sample data disabled, starting with an empty user store");
        InMemoryUserRepository::empty()
    };
    let service = UserService::with_pagination(repository, config.pagination);
    handlers::router(service)
}
