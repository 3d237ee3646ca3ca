//! HTTP handlers for the Payroute REST API.
//!
//! Organized by domain:
//! - `health`: liveness probe
//! - `network`: branch and edge mutation, branch lookup
//! - `routes`: cheapest-route queries

pub mod health;
pub mod network;
pub mod routes;

pub use health::health_check;
pub use network::{add_branch, add_edge, get_branch};
pub use routes::cheapest_route;
