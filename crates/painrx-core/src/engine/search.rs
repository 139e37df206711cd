//! Backtracking assignment search.

use crate::models::{DrugRecord, PainAssignment, UserProfile};

use super::Recommender;

impl<'a> Recommender<'a> {
    /// Find an assignment of one drug per requested pain such that every
    /// drug is eligible for the profile and no two assigned drugs interact.
    ///
    /// Depth-first over pain positions in request order; candidates are
    /// tried in catalog order and the first complete assignment wins.
    /// Returns `None` when no fully consistent assignment exists; the
    /// caller is expected to fall back to the greedy pass.
    pub fn search(
        &self,
        profile: &UserProfile,
        pains: &[String],
    ) -> Option<Vec<PainAssignment>> {
        let mut placed: Vec<&DrugRecord> = Vec::with_capacity(pains.len());
        if !self.assign(profile, pains, &mut placed) {
            return None;
        }
        Some(
            pains
                .iter()
                .zip(&placed)
                .map(|(pain, drug)| PainAssignment::recommended(pain, &drug.name))
                .collect(),
        )
    }

    /// Try to fill `placed` from its current length up to `pains.len()`.
    /// On failure the partial assignment is unwound before returning.
    fn assign(
        &self,
        profile: &UserProfile,
        pains: &[String],
        placed: &mut Vec<&'a DrugRecord>,
    ) -> bool {
        let position = placed.len();
        if position == pains.len() {
            return true;
        }
        for candidate in self.candidates(&pains[position], profile, placed) {
            placed.push(candidate);
            if self.assign(profile, pains, placed) {
                return true;
            }
            placed.pop();
        }
        false
    }
}
