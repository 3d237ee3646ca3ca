//! Cheapest-route query handler.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use payroute_core::find_cheapest_route;

use crate::types::{ErrorResponse, RouteQuery, RouteResponse};
use crate::AppState;

/// `GET /routes/cheapest?origin=X&destination=Y` — cheapest route
/// between two registered branches.
///
/// # Errors
///
/// Returns 400 for blank or unregistered endpoints and 404 when no
/// route exists; an unreachable destination is a normal outcome of the
/// core, mapped to a status code here.
pub async fn cheapest_route(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let origin = query.origin.trim().to_string();
    let destination = query.destination.trim().to_string();

    if origin.is_empty() || destination.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid origin or destination branch".to_string(),
            }),
        ));
    }

    if !state.store.has_branch(&origin) || !state.store.has_branch(&destination) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "One or both branches do not exist".to_string(),
            }),
        ));
    }

    let route = tokio::task::spawn_blocking({
        let state = Arc::clone(&state);
        move || find_cheapest_route(&state.store, &origin, &destination)
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Task panicked: {e}"),
            }),
        )
    })?
    .ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No valid route found".to_string(),
            }),
        )
    })?;

    Ok(Json(RouteResponse {
        path: route.hops,
        total_cost: route.total_cost,
    }))
}
