//! Drug catalog: the in-memory record list and its file store.

mod file;

pub use file::{parse_catalog, serialize_catalog, FILE_HEADER};

use std::path::Path;

use thiserror::Error;

use crate::models::DrugRecord;

/// Most records a catalog will hold; extra lines in a file are ignored on load.
pub const MAX_RECORDS: usize = 100;

/// Most distinct pain tags the registry will report.
pub const MAX_PAIN_TAGS: usize = 50;

/// Catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is full ({0} records)")]
    CapacityExceeded(usize),

    #[error("no record at index {0}")]
    IndexOutOfRange(usize),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// The drug catalog, owning all records in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<DrugRecord>,
}

impl Catalog {
    /// Build a catalog from records already in memory (tests, fixtures).
    ///
    /// Records beyond [`MAX_RECORDS`] are dropped, matching load behavior.
    pub fn from_records(records: Vec<DrugRecord>) -> Self {
        let mut records = records;
        records.truncate(MAX_RECORDS);
        Self { records }
    }

    /// Load a catalog from a tab-delimited file.
    ///
    /// A missing or unreadable file is an error; malformed lines inside the
    /// file are skipped with a warning and loading continues.
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let text = std::fs::read_to_string(&path)?;
        let records = parse_catalog(&text);
        tracing::info!(
            path = %path.as_ref().display(),
            count = records.len(),
            "catalog loaded"
        );
        Ok(Self { records })
    }

    /// Rewrite the whole catalog file.
    ///
    /// The in-memory catalog is unaffected by a failed save.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CatalogResult<()> {
        std::fs::write(&path, serialize_catalog(&self.records))?;
        tracing::info!(
            path = %path.as_ref().display(),
            count = self.records.len(),
            "catalog saved"
        );
        Ok(())
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[DrugRecord] {
        &self.records
    }

    /// Record at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&DrugRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record. Fails once the catalog holds [`MAX_RECORDS`] records.
    pub fn add(&mut self, record: DrugRecord) -> CatalogResult<()> {
        if self.records.len() >= MAX_RECORDS {
            return Err(CatalogError::CapacityExceeded(MAX_RECORDS));
        }
        self.records.push(record);
        Ok(())
    }

    /// Replace the record at `index`. Out-of-range indices mutate nothing.
    pub fn update(&mut self, index: usize, record: DrugRecord) -> CatalogResult<()> {
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(CatalogError::IndexOutOfRange(index)),
        }
    }

    /// Remove and return the record at `index`, shifting later records up.
    /// Out-of-range indices mutate nothing.
    pub fn remove(&mut self, index: usize) -> CatalogResult<DrugRecord> {
        if index >= self.records.len() {
            return Err(CatalogError::IndexOutOfRange(index));
        }
        Ok(self.records.remove(index))
    }

    /// Distinct efficacy tags across the catalog, in first-seen order,
    /// capped at [`MAX_PAIN_TAGS`]. Used to show the user what can be treated.
    pub fn pain_registry(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for record in &self.records {
            for tag in &record.efficacy {
                if tags.len() >= MAX_PAIN_TAGS {
                    return tags;
                }
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }
}
