//! Greedy fallback assignment.

use crate::models::{DrugRecord, PainAssignment, UserProfile};

use super::Recommender;

impl<'a> Recommender<'a> {
    /// Single forward pass: for each pain in request order, take the first
    /// candidate in catalog order that does not interact with the drugs
    /// this pass has already placed. A pain with no candidate gets a
    /// no-match entry and the pass continues, so the result always has
    /// exactly one entry per requested pain.
    ///
    /// Unlike [`Recommender::search`] there is no backtracking: an early
    /// pick can leave a later pain without candidates even when a
    /// different early pick would not have.
    pub fn fallback(&self, profile: &UserProfile, pains: &[String]) -> Vec<PainAssignment> {
        let mut placed: Vec<&DrugRecord> = Vec::new();
        let mut entries = Vec::with_capacity(pains.len());
        for pain in pains {
            match self.candidates(pain, profile, &placed).into_iter().next() {
                Some(drug) => {
                    placed.push(drug);
                    entries.push(PainAssignment::recommended(pain, &drug.name));
                }
                None => entries.push(PainAssignment::no_match(pain)),
            }
        }
        entries
    }
}
