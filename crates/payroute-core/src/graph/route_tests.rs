//! Tests for the cheapest-route search.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use proptest::prelude::*;

use super::route::{find_cheapest_route, RouteGraph};
use super::store::BranchStore;
use super::types::Branch;

/// The reference network: costs A=5, B=50, C=10, D=10, E=20, F=5.
fn build_reference_network() -> BranchStore {
    let store = BranchStore::new();
    for (name, cost) in [("A", 5), ("B", 50), ("C", 10), ("D", 10), ("E", 20), ("F", 5)] {
        store.add_branch(Branch::new(name, cost).unwrap()).unwrap();
    }
    for (from, to) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "B"),
        ("C", "E"),
        ("D", "E"),
        ("D", "F"),
        ("E", "D"),
        ("E", "F"),
    ] {
        store.add_edge(from, to).unwrap();
    }
    store
}

#[test]
fn test_cheapest_route_reference_network() {
    let store = build_reference_network();

    let cases = [
        ("A", "D", vec!["A", "C", "E", "D"], 35),
        ("A", "B", vec!["A", "B"], 5),
        ("A", "C", vec!["A", "C"], 5),
        ("C", "F", vec!["C", "E", "F"], 30),
        ("B", "E", vec!["B", "D", "E"], 60),
    ];
    for (origin, destination, hops, cost) in cases {
        let route = find_cheapest_route(&store, origin, destination).unwrap();
        assert_eq!(route.hops, hops, "{origin} -> {destination}");
        assert_eq!(route.total_cost, cost, "{origin} -> {destination}");
    }
}

#[test]
fn test_reflexive_route() {
    let store = build_reference_network();
    let route = find_cheapest_route(&store, "A", "A").unwrap();
    assert_eq!(route.hops, vec!["A"]);
    assert_eq!(route.total_cost, 0);
}

#[test]
fn test_reflexive_route_without_neighbors() {
    let store = BranchStore::new();
    store.add_branch(Branch::new("Solo", 5).unwrap()).unwrap();
    let route = find_cheapest_route(&store, "Solo", "Solo").unwrap();
    assert_eq!(route.hops, vec!["Solo"]);
}

#[test]
fn test_unregistered_destination() {
    let store = build_reference_network();
    assert!(find_cheapest_route(&store, "A", "Z").is_none());
}

#[test]
fn test_unregistered_origin() {
    let store = build_reference_network();
    assert!(find_cheapest_route(&store, "Z", "A").is_none());
}

#[test]
fn test_disconnected_components() {
    let store = BranchStore::new();
    store.add_branch(Branch::new("A", 1).unwrap()).unwrap();
    store.add_branch(Branch::new("B", 1).unwrap()).unwrap();
    store.add_branch(Branch::new("C", 1).unwrap()).unwrap();
    store.add_edge("A", "B").unwrap();

    assert!(find_cheapest_route(&store, "A", "C").is_none());
    // Edges are directed: B cannot reach A.
    assert!(find_cheapest_route(&store, "B", "A").is_none());
}

#[test]
fn test_self_loop_does_not_trap_the_search() {
    let store = BranchStore::new();
    store.add_branch(Branch::new("A", 3).unwrap()).unwrap();
    store.add_branch(Branch::new("B", 7).unwrap()).unwrap();
    store.add_edge("A", "A").unwrap();
    store.add_edge("A", "B").unwrap();

    let route = find_cheapest_route(&store, "A", "B").unwrap();
    assert_eq!(route.hops, vec!["A", "B"]);
    assert_eq!(route.total_cost, 3);
}

#[test]
fn test_parallel_edges_collapse_to_one_relaxation() {
    let store = BranchStore::new();
    store.add_branch(Branch::new("A", 2).unwrap()).unwrap();
    store.add_branch(Branch::new("B", 1).unwrap()).unwrap();
    store.add_edge("A", "B").unwrap();
    store.add_edge("A", "B").unwrap();

    let route = find_cheapest_route(&store, "A", "B").unwrap();
    assert_eq!(route.hops, vec!["A", "B"]);
    assert_eq!(route.total_cost, 2);
}

#[test]
fn test_dangling_edge_target_is_not_expanded() {
    let store = BranchStore::new();
    store.add_branch(Branch::new("A", 1).unwrap()).unwrap();
    store.add_edge("A", "Ghost").unwrap();

    // "Ghost" is reachable as a destination but has no cost and no
    // neighbors of its own.
    let route = find_cheapest_route(&store, "A", "Ghost").unwrap();
    assert_eq!(route.hops, vec!["A", "Ghost"]);
    assert_eq!(route.total_cost, 1);
    assert!(find_cheapest_route(&store, "A", "Beyond").is_none());
}

#[test]
fn test_stale_frontier_entries_are_skipped() {
    // B is first discovered through the expensive intermediate P (cost
    // 19), then improved through Q (cost 11). The superseded frontier
    // entry for B is still in the heap when the search continues to D
    // and must be discarded at extraction, not followed.
    let store = BranchStore::new();
    store.add_branch(Branch::new("A", 10).unwrap()).unwrap();
    store.add_branch(Branch::new("P", 9).unwrap()).unwrap();
    store.add_branch(Branch::new("Q", 1).unwrap()).unwrap();
    store.add_branch(Branch::new("B", 20).unwrap()).unwrap();
    store.add_branch(Branch::new("D", 1).unwrap()).unwrap();
    store.add_edge("A", "P").unwrap();
    store.add_edge("A", "Q").unwrap();
    store.add_edge("P", "B").unwrap();
    store.add_edge("Q", "B").unwrap();
    store.add_edge("B", "D").unwrap();

    let route = find_cheapest_route(&store, "A", "D").unwrap();
    assert_eq!(route.hops, vec!["A", "Q", "B", "D"]);
    assert_eq!(route.total_cost, 31);
}

#[test]
fn test_equal_cost_tie_breaks_lexicographically() {
    let store = BranchStore::new();
    store.add_branch(Branch::new("S", 4).unwrap()).unwrap();
    store.add_branch(Branch::new("X", 2).unwrap()).unwrap();
    store.add_branch(Branch::new("Y", 2).unwrap()).unwrap();
    store.add_branch(Branch::new("T", 1).unwrap()).unwrap();
    store.add_edge("S", "Y").unwrap();
    store.add_edge("S", "X").unwrap();
    store.add_edge("X", "T").unwrap();
    store.add_edge("Y", "T").unwrap();

    // Both S,X,T and S,Y,T cost 6; the pinned extraction order prefers X.
    let route = find_cheapest_route(&store, "S", "T").unwrap();
    assert_eq!(route.hops, vec!["S", "X", "T"]);
    assert_eq!(route.total_cost, 6);
}

#[test]
fn test_extreme_costs_saturate_instead_of_overflowing() {
    let store = BranchStore::new();
    store
        .add_branch(Branch::new("A", u64::MAX).unwrap())
        .unwrap();
    store
        .add_branch(Branch::new("B", u64::MAX).unwrap())
        .unwrap();
    store.add_branch(Branch::new("C", 1).unwrap()).unwrap();
    store.add_edge("A", "B").unwrap();
    store.add_edge("B", "C").unwrap();

    let route = find_cheapest_route(&store, "A", "C").unwrap();
    assert_eq!(route.hops, vec!["A", "B", "C"]);
    assert_eq!(route.total_cost, u64::MAX);
}

#[test]
fn test_queries_race_mutation_without_panicking() {
    // Writers grow the network while readers search it live. Any route
    // returned must be edge-connected and priced consistently with the
    // immutable branch costs; edges are never removed, so checking the
    // hops against the final adjacency state is sound.
    let store = Arc::new(build_reference_network());
    let stop = Arc::new(AtomicBool::new(false));

    let writers: Vec<_> = (0..4u64)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..50u64 {
                    let name = format!("W{w}x{i}");
                    store.add_branch(Branch::new(&name, i).unwrap()).unwrap();
                    store.add_edge("F", &name).unwrap();
                    store.add_edge(&name, "A").unwrap();
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut routes = Vec::new();
                loop {
                    let _ = store.neighbors("F");
                    let _ = store.branch("A");
                    if let Some(route) = find_cheapest_route(&*store, "A", "D") {
                        routes.push(route);
                    }
                    if stop.load(Ordering::Relaxed) {
                        break;
                    }
                }
                routes
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    stop.store(true, Ordering::Relaxed);

    for reader in readers {
        let routes = reader.join().unwrap();
        assert!(!routes.is_empty());
        for route in routes {
            assert_eq!(route.hops.first().map(String::as_str), Some("A"));
            assert_eq!(route.hops.last().map(String::as_str), Some("D"));
            for window in route.hops.windows(2) {
                assert!(
                    store.neighbors(&window[0]).contains(&window[1]),
                    "hop {} -> {} has no edge",
                    window[0],
                    window[1]
                );
            }
            let priced: u64 = route.hops[..route.hops.len() - 1]
                .iter()
                .map(|hop| store.branch(hop).unwrap().cost())
                .sum();
            assert_eq!(route.total_cost, priced);
        }
    }
}

#[test]
fn test_large_dense_network() {
    let store = BranchStore::new();
    let names: Vec<String> = (0..200).map(|i| format!("N{i:03}")).collect();
    for name in &names {
        store.add_branch(Branch::new(name, 1).unwrap()).unwrap();
    }
    for from in &names {
        for to in &names {
            if from != to {
                store.add_edge(from, to).unwrap();
            }
        }
    }

    let route = find_cheapest_route(&store, "N000", "N199").unwrap();
    assert_eq!(route.hops, vec!["N000", "N199"]);
    assert_eq!(route.total_cost, 1);
}

// ── Optimality against brute force ─────────────────────────────────────

/// A fixed adjacency-map graph for brute-force comparison.
#[derive(Debug)]
struct MapGraph {
    costs: HashMap<String, u64>,
    edges: HashMap<String, Vec<String>>,
}

impl RouteGraph for MapGraph {
    fn branch_cost(&self, name: &str) -> Option<u64> {
        self.costs.get(name).copied()
    }

    fn neighbors(&self, name: &str) -> Vec<String> {
        self.edges.get(name).cloned().unwrap_or_default()
    }
}

/// Enumerates every simple path and returns the minimum accumulated cost.
fn brute_force_min_cost(graph: &MapGraph, origin: &str, destination: &str) -> Option<u64> {
    fn walk(
        graph: &MapGraph,
        current: &str,
        destination: &str,
        cost: u64,
        on_path: &mut Vec<String>,
        best: &mut Option<u64>,
    ) {
        if current == destination {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        let Some(step) = graph.branch_cost(current) else {
            return;
        };
        for neighbor in graph.neighbors(current) {
            if on_path.iter().any(|n| n == &neighbor) {
                continue;
            }
            on_path.push(neighbor.clone());
            walk(graph, &neighbor, destination, cost + step, on_path, best);
            on_path.pop();
        }
    }

    let mut best = None;
    let mut on_path = vec![origin.to_string()];
    walk(graph, origin, destination, 0, &mut on_path, &mut best);
    best
}

fn arb_graph() -> impl Strategy<Value = MapGraph> {
    // Up to 8 nodes with small costs and a random directed edge set.
    (2usize..=8).prop_flat_map(|n| {
        let costs = proptest::collection::vec(0u64..20, n);
        let edges = proptest::collection::vec((0..n, 0..n), 0..=n * 3);
        (costs, edges).prop_map(move |(costs, edges)| {
            let names: Vec<String> = (0..n).map(|i| format!("G{i}")).collect();
            let mut graph = MapGraph {
                costs: names
                    .iter()
                    .cloned()
                    .zip(costs.iter().copied())
                    .collect(),
                edges: HashMap::new(),
            };
            for (from, to) in edges {
                graph
                    .edges
                    .entry(names[from].clone())
                    .or_default()
                    .push(names[to].clone());
            }
            graph
        })
    })
}

proptest! {
    #[test]
    fn prop_route_cost_matches_brute_force(graph in arb_graph()) {
        let expected = brute_force_min_cost(&graph, "G0", "G1");
        let actual = find_cheapest_route(&graph, "G0", "G1");

        prop_assert_eq!(
            expected.is_some(),
            actual.is_some(),
            "reachability mismatch: brute force {:?}, search {:?}",
            expected,
            &actual
        );
        if let (Some(cost), Some(route)) = (expected, actual) {
            prop_assert_eq!(route.total_cost, cost);
            prop_assert_eq!(route.hops.first().map(String::as_str), Some("G0"));
            prop_assert_eq!(route.hops.last().map(String::as_str), Some("G1"));
        }
    }

    #[test]
    fn prop_route_hops_are_connected(graph in arb_graph()) {
        if let Some(route) = find_cheapest_route(&graph, "G0", "G1") {
            for window in route.hops.windows(2) {
                prop_assert!(
                    graph.neighbors(&window[0]).contains(&window[1]),
                    "hop {} -> {} has no edge",
                    window[0],
                    window[1]
                );
            }
        }
    }
}
