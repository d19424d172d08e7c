//! Search query types and filtering
//!
//! Matching is plain case-insensitive substring search. Results keep catalog
//! order; nothing is scored.

use serde::{Deserialize, Serialize};
use wc26_core::{Category, SearchEntry};

use crate::Catalog;

/// Search query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Whitespace-separated terms; every term must match
    pub text: String,

    /// Which categories to include (empty = all)
    pub categories: Vec<Category>,

    /// Maximum number of results
    pub limit: usize,
}

impl CatalogQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            categories: Vec::new(),
            limit: 20,
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn terms(&self) -> Vec<String> {
        self.text.split_whitespace().map(str::to_lowercase).collect()
    }

    fn includes(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

/// Matching entries for a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// The query that was executed
    pub query: String,

    /// Total number of matches (may be more than returned)
    pub total_matches: usize,

    /// The result items
    pub results: Vec<SearchEntry>,
}

impl SearchResults {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            total_matches: 0,
            results: Vec::new(),
        }
    }
}

impl Catalog {
    /// Filter the catalog by substring match
    pub fn search(&self, query: &CatalogQuery) -> SearchResults {
        let terms = query.terms();
        let mut results = SearchResults::empty(&query.text);

        for entry in self.entries() {
            if !query.includes(entry.category) {
                continue;
            }
            if !terms.iter().all(|term| entry.contains_term(term)) {
                continue;
            }
            results.total_matches += 1;
            if results.results.len() < query.limit {
                results.results.push(entry.clone());
            }
        }

        results
    }
}
