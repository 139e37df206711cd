//! Recommendation result models.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome for a single requested pain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    /// A drug was chosen for this pain
    Recommended {
        /// Name of the chosen drug
        drug: String,
        /// Human-readable explanation (e.g., "effective for headache")
        reason: String,
    },
    /// No eligible, non-interacting drug exists for this pain
    NoMatch,
}

impl Outcome {
    /// The chosen drug name, if any.
    pub fn drug(&self) -> Option<&str> {
        match self {
            Outcome::Recommended { drug, .. } => Some(drug),
            Outcome::NoMatch => None,
        }
    }
}

/// One entry of an assignment: a requested pain and what was chosen for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PainAssignment {
    /// The pain exactly as requested
    pub pain: String,
    /// What the engine decided for it
    pub outcome: Outcome,
}

impl PainAssignment {
    /// Entry recommending `drug` for `pain`.
    pub fn recommended(pain: &str, drug: &str) -> Self {
        Self {
            pain: pain.to_string(),
            outcome: Outcome::Recommended {
                drug: drug.to_string(),
                reason: format!("effective for {pain}"),
            },
        }
    }

    /// Sentinel entry for a pain with no suitable drug.
    pub fn no_match(pain: &str) -> Self {
        Self {
            pain: pain.to_string(),
            outcome: Outcome::NoMatch,
        }
    }

    /// Human-readable note for this entry.
    pub fn note(&self) -> String {
        match &self.outcome {
            Outcome::Recommended { reason, .. } => reason.clone(),
            Outcome::NoMatch => format!("no suitable drug for {}", self.pain),
        }
    }
}

/// Which engine path produced an assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Strategy {
    /// Backtracking search found a fully consistent assignment
    FullSearch,
    /// The search failed and the greedy forward pass was used instead
    Greedy,
}

/// A complete recommendation: one entry per requested pain, in request order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// One entry per requested pain
    pub entries: Vec<PainAssignment>,
    /// Which engine path produced the entries
    pub strategy: Strategy,
    /// Wall-clock time spent in the engine (search plus any fallback)
    pub elapsed: Duration,
}

impl Recommendation {
    /// Whether the greedy fallback was used.
    pub fn fell_back(&self) -> bool {
        matches!(self.strategy, Strategy::Greedy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_entry_reason() {
        let entry = PainAssignment::recommended("headache", "Acetol");
        assert_eq!(entry.pain, "headache");
        assert_eq!(entry.outcome.drug(), Some("Acetol"));
        match entry.outcome {
            Outcome::Recommended { reason, .. } => {
                assert_eq!(reason, "effective for headache");
            }
            Outcome::NoMatch => panic!("expected a recommendation"),
        }
    }

    #[test]
    fn test_no_match_entry() {
        let entry = PainAssignment::no_match("toothache");
        assert_eq!(entry.pain, "toothache");
        assert_eq!(entry.outcome.drug(), None);
    }
}
