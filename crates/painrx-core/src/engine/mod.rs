//! Recommendation engine.
//!
//! Pipeline: eligibility filter → backtracking assignment search → greedy
//! fallback when no fully consistent assignment exists.

mod fallback;
mod search;

use std::time::Instant;

use crate::catalog::Catalog;
use crate::interactions::InteractionIndex;
use crate::models::{DrugRecord, Recommendation, Strategy, UserProfile};

/// Most pains accepted in a single request.
pub const MAX_REQUEST_PAINS: usize = 50;

/// Recommendation engine over a catalog and its interaction index.
///
/// Both are built once at startup and read-only for the duration of a query.
pub struct Recommender<'a> {
    catalog: &'a Catalog,
    index: &'a InteractionIndex,
}

impl<'a> Recommender<'a> {
    /// Create a new recommender.
    pub fn new(catalog: &'a Catalog, index: &'a InteractionIndex) -> Self {
        Self { catalog, index }
    }

    /// Produce one assignment entry per requested pain.
    ///
    /// Runs the backtracking search first; if no fully consistent assignment
    /// exists, falls back to the greedy forward pass. The elapsed wall-clock
    /// time covers both phases.
    pub fn recommend(&self, profile: &UserProfile, pains: &[String]) -> Recommendation {
        let started = Instant::now();
        match self.search(profile, pains) {
            Some(entries) => Recommendation {
                entries,
                strategy: Strategy::FullSearch,
                elapsed: started.elapsed(),
            },
            None => {
                tracing::debug!("assignment search exhausted, using greedy fallback");
                Recommendation {
                    entries: self.fallback(profile, pains),
                    strategy: Strategy::Greedy,
                    elapsed: started.elapsed(),
                }
            }
        }
    }

    /// Candidate drugs for `pain`, in catalog order: eligible for the
    /// profile, tag-matching, and free of interactions with every drug in
    /// `placed`.
    fn candidates(
        &self,
        pain: &str,
        profile: &UserProfile,
        placed: &[&DrugRecord],
    ) -> Vec<&'a DrugRecord> {
        self.catalog
            .records()
            .iter()
            .filter(|drug| drug.is_eligible_for(profile))
            .filter(|drug| drug.treats(pain))
            .filter(|drug| {
                placed
                    .iter()
                    .all(|prev| !self.index.interacts(&prev.name, &drug.name))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;

    fn drug(name: &str, tags: &[&str], interactions: &[&str]) -> DrugRecord {
        let mut record = DrugRecord::new(name.into(), 0, 99);
        record.efficacy = tags.iter().map(|t| t.to_string()).collect();
        record.interactions = interactions.iter().map(|i| i.to_string()).collect();
        record
    }

    fn pains(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_recommend_prefers_full_search() {
        let catalog = Catalog::from_records(vec![
            drug("Acetol", &["headache"], &[]),
            drug("Brufine", &["fever"], &[]),
        ]);
        let index = InteractionIndex::build(&catalog);
        let recommender = Recommender::new(&catalog, &index);

        let result = recommender.recommend(
            &UserProfile::with_age(30),
            &pains(&["headache", "fever"]),
        );
        assert_eq!(result.strategy, Strategy::FullSearch);
        assert!(!result.fell_back());
        assert_eq!(result.entries[0].outcome.drug(), Some("Acetol"));
        assert_eq!(result.entries[1].outcome.drug(), Some("Brufine"));
    }

    #[test]
    fn test_recommend_falls_back_when_search_fails() {
        // Every headache/fever pairing interacts, so the search cannot
        // place both pains; the greedy pass still answers per pain.
        let catalog = Catalog::from_records(vec![
            drug("Acetol", &["headache"], &["Brufine"]),
            drug("Brufine", &["fever"], &[]),
        ]);
        let index = InteractionIndex::build(&catalog);
        let recommender = Recommender::new(&catalog, &index);

        let result = recommender.recommend(
            &UserProfile::with_age(30),
            &pains(&["headache", "fever"]),
        );
        assert_eq!(result.strategy, Strategy::Greedy);
        assert!(result.fell_back());
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].outcome.drug(), Some("Acetol"));
        assert_eq!(result.entries[1].outcome, Outcome::NoMatch);
    }

    #[test]
    fn test_candidates_catalog_order() {
        let catalog = Catalog::from_records(vec![
            drug("Zeta", &["headache"], &[]),
            drug("Alpha", &["headache"], &[]),
        ]);
        let index = InteractionIndex::build(&catalog);
        let recommender = Recommender::new(&catalog, &index);

        let found = recommender.candidates("headache", &UserProfile::with_age(30), &[]);
        let names: Vec<&str> = found.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }
}
