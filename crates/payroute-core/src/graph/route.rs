//! Cheapest-route search over the node-weighted cost model.
//!
//! Every edge leaving a branch costs that branch's own intrinsic cost,
//! so all edges out of a given branch weigh the same. With non-negative
//! costs this is a valid setting for Dijkstra's algorithm; the total
//! cost of a route is the sum of the costs of every branch on it except
//! the destination.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Read-only view of a cost graph — any branch store can implement this.
///
/// The route search treats each call as an independent, immediately
/// consistent read; when the underlying store mutates concurrently, the
/// result is consistent with the graph at the instant of each read
/// rather than with one snapshot.
pub trait RouteGraph {
    /// Returns the intrinsic cost of the named branch, if registered.
    fn branch_cost(&self, name: &str) -> Option<u64>;

    /// Returns the outgoing edge targets of the named branch
    /// (possibly empty, never absent).
    fn neighbors(&self, name: &str) -> Vec<String>;
}

impl RouteGraph for super::BranchStore {
    fn branch_cost(&self, name: &str) -> Option<u64> {
        self.branch(name).map(|branch| branch.cost())
    }

    fn neighbors(&self, name: &str) -> Vec<String> {
        self.neighbors(name)
    }
}

/// A cheapest route between two branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Branch names from origin to destination inclusive, in traversal
    /// order.
    pub hops: Vec<String>,
    /// Accumulated cost: the sum of the costs of every hop except the
    /// last. Zero when origin equals destination.
    pub total_cost: u64,
}

/// Finds the cheapest route from `origin` to `destination`.
///
/// Returns `None` when the destination is unreachable from the origin
/// under the graph's current state; unreachability is a normal outcome,
/// not an error. An unregistered origin simply has no neighbors and
/// yields `None`, except that `origin == destination` always resolves
/// to the single-hop route at cost 0 without consulting neighbors.
///
/// Equal-cost frontier entries are extracted in lexicographic name
/// order, which pins a deterministic result when several routes tie.
pub fn find_cheapest_route<G: RouteGraph>(
    graph: &G,
    origin: &str,
    destination: &str,
) -> Option<Route> {
    tracing::debug!(origin, destination, "searching cheapest route");

    let mut frontier = BinaryHeap::new();
    let mut best: HashMap<String, u64> = HashMap::new();
    let mut previous: HashMap<String, String> = HashMap::new();
    let mut settled: HashSet<String> = HashSet::new();

    best.insert(origin.to_string(), 0);
    frontier.push(Reverse((0u64, origin.to_string())));

    while let Some(Reverse((cost, current))) = frontier.pop() {
        // Stale entry superseded by an earlier relaxation.
        if !settled.insert(current.clone()) {
            continue;
        }

        if current == destination {
            let hops = rebuild_hops(&previous, destination);
            tracing::debug!(origin, destination, cost, "found route");
            return Some(Route {
                hops,
                total_cost: cost,
            });
        }

        // Unregistered names (dangling edge targets, unknown origin)
        // have no cost to charge and cannot be expanded.
        let Some(step_cost) = graph.branch_cost(&current) else {
            continue;
        };

        // Every edge out of `current` costs the same, so one candidate
        // serves all neighbors. Saturate rather than overflow on
        // pathological costs.
        let candidate = cost.saturating_add(step_cost);
        for neighbor in graph.neighbors(&current) {
            if best.get(&neighbor).is_none_or(|&known| candidate < known) {
                best.insert(neighbor.clone(), candidate);
                previous.insert(neighbor.clone(), current.clone());
                frontier.push(Reverse((candidate, neighbor)));
            }
        }
    }

    tracing::warn!(origin, destination, "no valid route found");
    None
}

/// Walks the predecessor links back from the destination and reverses
/// them into origin-to-destination order.
fn rebuild_hops(previous: &HashMap<String, String>, destination: &str) -> Vec<String> {
    let mut hops = vec![destination.to_string()];
    let mut cursor = destination;
    while let Some(prev) = previous.get(cursor) {
        hops.push(prev.clone());
        cursor = prev;
    }
    hops.reverse();
    hops
}
