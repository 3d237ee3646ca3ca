//! Branch and edge mutation handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use payroute_core::{Branch, Error};

use crate::types::{AddBranchRequest, AddEdgeRequest, BranchResponse, ErrorResponse};
use crate::AppState;

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn task_panicked(err: tokio::task::JoinError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Task panicked: {err}"),
        }),
    )
}

/// `POST /branches` — register a new branch.
///
/// # Errors
///
/// Returns 400 for an invalid name and 409 when the name is already
/// registered.
pub async fn add_branch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddBranchRequest>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let branch = Branch::new(&request.name, request.cost)
        .map_err(|e| bad_request(format!("Invalid branch: {e}")))?;

    tokio::task::spawn_blocking({
        let state = Arc::clone(&state);
        move || state.store.add_branch(branch)
    })
    .await
    .map_err(task_panicked)?
    .map_err(|e| match e {
        Error::BranchExists(_) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to add branch: {other}"),
            }),
        ),
    })?;

    Ok(StatusCode::CREATED)
}

/// `GET /branches/{name}` — look up a registered branch.
///
/// # Errors
///
/// Returns 404 when the branch is not registered.
pub async fn get_branch(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<BranchResponse>, (StatusCode, Json<ErrorResponse>)> {
    let branch = state.store.branch(&name).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Branch '{name}' does not exist"),
            }),
        )
    })?;

    Ok(Json(BranchResponse {
        name: branch.name().to_string(),
        cost: branch.cost(),
    }))
}

/// `POST /edges` — register a directed edge between two branches.
///
/// Both endpoints must already exist; the store only validates the
/// source, so the target is checked here.
///
/// # Errors
///
/// Returns 400 when either endpoint is not registered.
pub async fn add_edge(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddEdgeRequest>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    if !state.store.has_branch(&request.from) || !state.store.has_branch(&request.to) {
        return Err(bad_request("One or both branches do not exist"));
    }

    tokio::task::spawn_blocking({
        let state = Arc::clone(&state);
        move || state.store.add_edge(&request.from, &request.to)
    })
    .await
    .map_err(task_panicked)?
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to add edge: {e}"),
            }),
        )
    })?;

    Ok(StatusCode::CREATED)
}
