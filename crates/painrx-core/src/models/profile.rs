//! User profile model.

use serde::{Deserialize, Serialize};

/// The reporting user's health profile, immutable for the duration of one
/// recommendation query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Whether the user is female
    pub is_female: bool,
    /// Whether the user is pregnant; only meaningful when `is_female` is true
    pub is_pregnant: bool,
    /// Whether the user drinks heavily (three or more drinks a day)
    pub is_heavy_drinker: bool,
}

impl UserProfile {
    /// Profile with no restrictions beyond age.
    pub fn with_age(age: u32) -> Self {
        Self {
            age,
            is_female: false,
            is_pregnant: false,
            is_heavy_drinker: false,
        }
    }
}
