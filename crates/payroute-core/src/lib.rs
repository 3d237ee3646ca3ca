//! # Payroute Core
//!
//! Cheapest-route engine over a small, mutable, directed branch network.
//!
//! A branch carries an intrinsic transfer cost; every edge leaving a branch
//! costs that branch's own cost, so the total cost of a route is the sum of
//! the costs of every branch traversed except the destination. The store
//! accepts concurrent mutation and the route engine reads it live.
//!
//! ## Quick Start
//!
//! ```rust
//! use payroute_core::{find_cheapest_route, Branch, BranchStore};
//!
//! fn main() -> payroute_core::Result<()> {
//!     let store = BranchStore::new();
//!     store.add_branch(Branch::new("A", 5)?)?;
//!     store.add_branch(Branch::new("B", 50)?)?;
//!     store.add_edge("A", "B")?;
//!
//!     let route = find_cheapest_route(&store, "A", "B").expect("reachable");
//!     assert_eq!(route.hops, vec!["A", "B"]);
//!     assert_eq!(route.total_cost, 5);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod config;
pub mod error;
pub mod graph;

pub use config::{BranchSeed, EdgeSeed, NetworkConfig};
pub use error::{Error, Result};
pub use graph::{find_cheapest_route, Branch, BranchStore, Route, RouteGraph};
