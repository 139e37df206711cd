//! Drug catalog models.

use serde::{Deserialize, Serialize};

use super::UserProfile;

/// A single drug in the recommendation catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrugRecord {
    /// Primary drug name, unique within a catalog by convention
    pub name: String,
    /// Pain tags this drug treats (e.g., ["headache", "fever"])
    pub efficacy: Vec<String>,
    /// Minimum eligible age, inclusive
    pub min_age: u32,
    /// Maximum eligible age, inclusive (expected >= min_age)
    pub max_age: u32,
    /// Safe to take during pregnancy
    pub pregnancy_safe: bool,
    /// Safe to combine with heavy alcohol use
    pub alcohol_safe: bool,
    /// Names of drugs this one is known to interact with, as listed in the
    /// catalog file. Symmetry is established by the interaction index, not here.
    pub interactions: Vec<String>,
}

impl DrugRecord {
    /// Create a new record with the given name and no restrictions beyond age.
    pub fn new(name: String, min_age: u32, max_age: u32) -> Self {
        Self {
            name,
            efficacy: Vec::new(),
            min_age,
            max_age,
            pregnancy_safe: true,
            alcohol_safe: true,
            interactions: Vec::new(),
        }
    }

    /// Check whether this drug may be given to the profiled user.
    ///
    /// Eligible iff the age falls inside `[min_age, max_age]`, the drug is
    /// pregnancy-safe whenever the user is a pregnant female, and the drug is
    /// alcohol-safe whenever the user is a heavy drinker.
    pub fn is_eligible_for(&self, profile: &UserProfile) -> bool {
        if profile.age < self.min_age || profile.age > self.max_age {
            return false;
        }
        if profile.is_female && profile.is_pregnant && !self.pregnancy_safe {
            return false;
        }
        if profile.is_heavy_drinker && !self.alcohol_safe {
            return false;
        }
        true
    }

    /// Check whether this drug treats the given pain.
    ///
    /// Matching is by substring against each efficacy tag, so the reported
    /// pain "head" matches the tag "headache".
    pub fn treats(&self, pain: &str) -> bool {
        self.efficacy.iter().any(|tag| tag.contains(pain))
    }
}
