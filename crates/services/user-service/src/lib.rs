//! User Service Library
//!
//! REST service managing user records behind a pluggable repository: an
//! in-process sequence or a key-value store (Redis).
//!
//! # Layers
//!
//! - **api**: HTTP handlers, validated extractors, routes, OpenAPI
//! - **service**: pagination shaping over the injected repository
//! - **repository**: `UserRepository` contract and its two implementations
//! - **infra**: key-value storage port and adapters
//! - **config**: environment-driven configuration

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::{StorageBackend, UserServiceConfig};
use crate::infra::RedisStore;
use crate::repository::{InMemoryUserRepository, KvUserRepository, UserRepository};
use crate::service::{UserManager, UserService};

/// Build the repository selected by the configuration.
///
/// For Redis the connection is established and checked before returning.
pub async fn build_repository(
    config: &UserServiceConfig,
) -> Result<Arc<dyn UserRepository>, Box<dyn std::error::Error>> {
    let repo: Arc<dyn UserRepository> = match config.storage {
        StorageBackend::Memory => Arc::new(InMemoryUserRepository::new()),
        StorageBackend::Redis => {
            let store = RedisStore::connect(&config.redis.url).await?;
            store.ping().await?;
            info!("Redis store connected");
            Arc::new(KvUserRepository::new(Arc::new(store)))
        }
    };
    Ok(repo)
}

/// Build the HTTP application around a ready service.
pub fn build_app(user_service: Arc<dyn UserService>, storage: StorageBackend) -> Router {
    create_router(AppState::new(user_service, storage)).layer(TraceLayer::new_for_http())
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Create repository and service
    let user_repo = build_repository(&config).await?;
    let user_service = Arc::new(UserManager::new(user_repo));

    let app = build_app(user_service, config.storage);

    // Build address
    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!(
        "{} listening on {} ({} storage)",
        config.service.service_name, addr, config.storage
    );

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
