//! # Item Tracker Backend
//!
//! A small CRUD service over an in-memory item repository.
//!
//! ## Architecture
//!
//! ```text
//! HTTP client
//!     ↓
//! IO Layer (REST handlers, validation, error mapping)
//!     ↓
//! Domain Layer (ItemService, commands)
//!     ↓
//! Storage Layer (ItemStorage, in-memory repository)
//! ```
//!
//! State lives for the lifetime of the process only; a restart starts from an
//! empty store with ids counting from 1 again.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::domain::ItemService;
use crate::storage::InMemoryItemRepository;

pub use config::{ConfigError, ServerConfig};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub item_service: ItemService,
}

/// Initialize the backend with a fresh, empty repository
pub fn initialize_backend() -> AppState {
    info!("Setting up in-memory item repository");
    let repository = Arc::new(InMemoryItemRepository::new());

    info!("Setting up application state");
    AppState {
        item_service: ItemService::new(repository),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/items", collection_routes())
        .route("/items/", collection_routes())
        .route(
            "/items/:item_id",
            get(io::get_item)
                .put(io::update_item)
                .delete(io::delete_item)
                .fallback(io::method_not_allowed),
        )
        .fallback(io::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

fn collection_routes() -> MethodRouter<AppState> {
    get(io::list_items)
        .post(io::create_item)
        .fallback(io::method_not_allowed)
}
