//! Request and response types for the REST API.

use serde::{Deserialize, Serialize};

/// Error payload returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub error: String,
}

/// Body of `POST /branches`.
#[derive(Debug, Deserialize)]
pub struct AddBranchRequest {
    /// Unique branch name.
    pub name: String,
    /// Cost charged for every transfer leaving this branch.
    pub cost: u64,
}

/// Body of `POST /edges`.
#[derive(Debug, Deserialize)]
pub struct AddEdgeRequest {
    /// Source branch name.
    pub from: String,
    /// Target branch name.
    pub to: String,
}

/// Query parameters of `GET /routes/cheapest`.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin branch name.
    pub origin: String,
    /// Destination branch name.
    pub destination: String,
}

/// A registered branch.
#[derive(Debug, Serialize, Deserialize)]
pub struct BranchResponse {
    /// Branch name.
    pub name: String,
    /// Intrinsic transfer cost.
    pub cost: u64,
}

/// A cheapest route.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Branch names from origin to destination inclusive.
    pub path: Vec<String>,
    /// Sum of the costs of every hop except the destination.
    pub total_cost: u64,
}

/// Response of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is up.
    pub status: String,
    /// Server crate version.
    pub version: String,
}
