//! The built catalog
//!
//! A `Catalog` is immutable once built. Regenerating it means running the
//! builder again over the updated sources.

use serde::Serialize;
use wc26_core::{Category, SearchEntry};

use crate::BuildReport;

/// Flat list of search entries plus what the build left out
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    entries: Vec<SearchEntry>,
    report: BuildReport,
}

impl Catalog {
    pub(crate) fn new(entries: Vec<SearchEntry>, report: BuildReport) -> Self {
        Self { entries, report }
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its catalog id
    pub fn get(&self, id: &str) -> Option<&SearchEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries of one category, in catalog order
    pub fn by_category(&self, category: Category) -> Vec<&SearchEntry> {
        self.entries.iter().filter(|e| e.category == category).collect()
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn into_entries(self) -> Vec<SearchEntry> {
        self.entries
    }
}
