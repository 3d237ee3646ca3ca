//! Branch-network graph module.
//!
//! Provides the branch type, the concurrency-safe store, and the
//! cheapest-route search over the node-weighted cost model.
//!
//! # Example
//!
//! ```rust
//! use payroute_core::graph::{find_cheapest_route, Branch, BranchStore};
//!
//! let store = BranchStore::new();
//! store.add_branch(Branch::new("A", 5).unwrap()).unwrap();
//! store.add_branch(Branch::new("B", 10).unwrap()).unwrap();
//! store.add_edge("A", "B").unwrap();
//!
//! let route = find_cheapest_route(&store, "A", "B").unwrap();
//! assert_eq!(route.hops, vec!["A", "B"]);
//! assert_eq!(route.total_cost, 5);
//! ```

mod route;
mod store;
mod types;

#[cfg(test)]
mod route_tests;

pub use route::{find_cheapest_route, Route, RouteGraph};
pub use store::BranchStore;
pub use types::Branch;
