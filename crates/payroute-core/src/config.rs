//! Network configuration loading and bootstrap seeding.
//!
//! The initial branch network comes from a TOML file, with
//! `PAYROUTE_`-prefixed environment variables layered on top. Seeding
//! registers all branches first, then all edges; any rejected insert
//! during this phase is a fatal configuration error.

use std::path::Path;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Branch, BranchStore};

/// A configured branch: name plus intrinsic transfer cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BranchSeed {
    /// Unique branch name.
    pub name: String,
    /// Cost charged for every transfer leaving this branch.
    pub cost: u64,
}

/// A configured directed edge between two branch names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeSeed {
    /// Source branch name.
    pub from: String,
    /// Target branch name.
    pub to: String,
}

/// The initial branch network.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Branches to register at startup.
    #[serde(default)]
    pub branches: Vec<BranchSeed>,
    /// Edges to register at startup, after all branches.
    #[serde(default)]
    pub edges: Vec<EdgeSeed>,
}

impl NetworkConfig {
    /// Loads the network configuration from a TOML file, with
    /// `PAYROUTE_`-prefixed environment variables taking precedence.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be parsed or the
    /// layered values do not deserialize.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("PAYROUTE_").split("__"))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Seeds a store with the configured branches, then the configured
    /// edges.
    ///
    /// # Errors
    ///
    /// Returns the first rejected insert unchanged (`BranchExists` for a
    /// duplicate branch, `InvalidBranchName` for a blank name) and
    /// `Error::BranchNotFound` for an edge endpoint that is not a
    /// configured branch. The store only validates edge sources, so the
    /// target check happens here.
    pub fn seed(&self, store: &BranchStore) -> Result<()> {
        for seed in &self.branches {
            store.add_branch(Branch::new(&seed.name, seed.cost)?)?;
        }

        for edge in &self.edges {
            if !store.has_branch(&edge.to) {
                return Err(Error::BranchNotFound(edge.to.clone()));
            }
            store.add_edge(&edge.from, &edge.to)?;
        }

        tracing::info!(
            branches = self.branches.len(),
            edges = self.edges.len(),
            "seeded branch network"
        );
        Ok(())
    }
}
