//! Drug-drug interaction index.

use std::collections::{HashMap, HashSet};

use crate::catalog::Catalog;

/// Symmetric lookup of known drug-drug interactions.
///
/// Built once per run from each record's interaction list; every listed
/// pair is inserted in both directions, so `interacts(a, b)` equals
/// `interacts(b, a)` for any two names. Partner names that never appear
/// as catalog records are kept as-is and simply never match a real drug.
#[derive(Debug, Clone, Default)]
pub struct InteractionIndex {
    partners: HashMap<String, HashSet<String>>,
}

impl InteractionIndex {
    /// Build the index from a catalog.
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self::default();
        for record in catalog.records() {
            for partner in &record.interactions {
                index.insert_pair(&record.name, partner);
            }
        }
        index
    }

    /// Register `a` and `b` as interacting, in both directions.
    pub fn insert_pair(&mut self, a: &str, b: &str) {
        self.partners
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.partners
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    /// Whether `a` and `b` are known to interact.
    ///
    /// Both directions are checked so a partially built index still
    /// answers consistently.
    pub fn interacts(&self, a: &str, b: &str) -> bool {
        self.partner_listed(a, b) || self.partner_listed(b, a)
    }

    fn partner_listed(&self, drug: &str, partner: &str) -> bool {
        self.partners
            .get(drug)
            .is_some_and(|set| set.contains(partner))
    }

    /// Number of drugs with at least one registered partner.
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}
