//! Branch type for the payment network.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A branch in the payment network.
///
/// Identified by a unique, caller-supplied name and carrying the intrinsic
/// cost charged for every transfer leaving this branch. Immutable once
/// created: the store never updates a branch in place.
///
/// Cost is unsigned, so negative costs are unrepresentable.
///
/// # Example
///
/// ```rust
/// use payroute_core::Branch;
///
/// let branch = Branch::new("A", 5).unwrap();
/// assert_eq!(branch.name(), "A");
/// assert_eq!(branch.cost(), 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Branch {
    name: String,
    cost: u64,
}

impl Branch {
    /// Creates a new branch with the given name and transfer cost.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBranchName` if the name is empty or
    /// whitespace-only.
    pub fn new(name: &str, cost: u64) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidBranchName(
                "Branch name cannot be empty or whitespace-only".to_string(),
            ));
        }
        Ok(Self {
            name: trimmed.to_string(),
            cost,
        })
    }

    /// Returns the branch name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cost charged when a transfer leaves this branch.
    #[must_use]
    pub fn cost(&self) -> u64 {
        self.cost
    }
}
