//! Concurrency-safe in-memory store for branches and directed edges.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{Error, Result};

use super::types::Branch;

/// In-memory repository of branches and their outgoing edges.
///
/// Safe for unsynchronized concurrent reads and writes from multiple
/// threads; every operation takes `&self`. The branch registry and the
/// adjacency lists are independently consistent: no transaction spans
/// the two maps, so a reader racing a writer may observe a branch
/// without an edge that references it, or vice versa.
///
/// Branches and edges are only ever added, never removed or mutated
/// in place.
#[derive(Debug, Default)]
pub struct BranchStore {
    /// Registered branches indexed by name.
    branches: DashMap<String, Branch>,
    /// Outgoing edges: branch name -> target names, in insertion order.
    /// Duplicate targets (parallel edges) are kept.
    adjacency: DashMap<String, Vec<String>>,
}

impl BranchStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a branch and initializes its empty adjacency list.
    ///
    /// Concurrent calls with the same name yield exactly one success;
    /// the losers leave the existing branch and its edges untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::BranchExists` if the name is already registered.
    pub fn add_branch(&self, branch: Branch) -> Result<()> {
        let name = branch.name().to_string();
        match self.branches.entry(name.clone()) {
            Entry::Occupied(_) => Err(Error::BranchExists(name)),
            Entry::Vacant(slot) => {
                slot.insert(branch);
                self.adjacency.entry(name).or_default();
                Ok(())
            }
        }
    }

    /// Appends a directed edge `from -> to`.
    ///
    /// The target's existence is NOT checked; callers are expected to
    /// pre-validate both endpoints via [`Self::has_branch`]. Self-loops
    /// and parallel edges are allowed.
    ///
    /// # Errors
    ///
    /// Returns `Error::BranchNotFound` if `from` is not registered.
    pub fn add_edge(&self, from: &str, to: &str) -> Result<()> {
        let mut targets = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| Error::BranchNotFound(from.to_string()))?;
        targets.push(to.to_string());
        Ok(())
    }

    /// Looks up a branch by name. Absence is a normal outcome.
    #[must_use]
    pub fn branch(&self, name: &str) -> Option<Branch> {
        self.branches.get(name).map(|entry| entry.value().clone())
    }

    /// Returns true if a branch with the given name is registered.
    #[must_use]
    pub fn has_branch(&self, name: &str) -> bool {
        self.branches.contains_key(name)
    }

    /// Returns the outgoing edge targets of a branch, in insertion order.
    ///
    /// Always a (possibly empty) sequence, even for unregistered names,
    /// so search loops stay branch-free.
    #[must_use]
    pub fn neighbors(&self, name: &str) -> Vec<String> {
        self.adjacency
            .get(name)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Returns the number of registered branches.
    #[must_use]
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Returns the out-degree of a branch (0 if unregistered).
    #[must_use]
    pub fn out_degree(&self, name: &str) -> usize {
        self.adjacency.get(name).map_or(0, |entry| entry.len())
    }
}
