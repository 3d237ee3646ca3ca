//! Payroute Server - REST API for the branch-network route engine.
//!
//! A thin HTTP layer: parameter parsing, endpoint validation, and
//! status-code mapping. All graph logic lives in `payroute-core`.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use payroute_core::BranchStore;

pub mod handlers;
pub mod types;

pub use handlers::{add_branch, add_edge, cheapest_route, get_branch, health_check};

/// Shared application state handed to every handler.
pub struct AppState {
    /// The live branch network.
    pub store: BranchStore,
}

/// Builds the API router over the given state.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/branches", post(add_branch))
        .route("/branches/{name}", get(get_branch))
        .route("/edges", post(add_edge))
        .route("/routes/cheapest", get(cheapest_route))
        .with_state(state)
}
