//! Machine-readable recommendation report.

use serde::{Deserialize, Serialize};

use crate::models::{Recommendation, Strategy};

/// Serializable snapshot of one recommendation query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Report timestamp
    pub generated_at: String,
    /// Which engine path produced the entries
    pub strategy: Strategy,
    /// Engine wall-clock time in milliseconds
    pub elapsed_ms: u64,
    /// One entry per requested pain
    pub entries: Vec<ReportEntry>,
}

/// Single line of a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The pain exactly as requested
    pub pain: String,
    /// Chosen drug, absent when no suitable drug exists
    pub drug: Option<String>,
    /// Human-readable note
    pub note: String,
}

impl RecommendationReport {
    /// Create a report from a finished recommendation.
    pub fn from_recommendation(recommendation: &Recommendation) -> Self {
        let entries = recommendation
            .entries
            .iter()
            .map(|entry| ReportEntry {
                pain: entry.pain.clone(),
                drug: entry.outcome.drug().map(|d| d.to_string()),
                note: entry.note(),
            })
            .collect();

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            strategy: recommendation.strategy,
            elapsed_ms: recommendation.elapsed.as_millis() as u64,
            entries,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
