//! Search entries - the normalized records a search UI filters over

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::path::resolve_site_path;

/// Kind of content a search entry points at
///
/// The consumer uses this to pick an icon and a results section; it has no
/// effect on how the entry is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    City,
    Stadium,
    Group,
    Guide,
    Page,
    Product,
    Blog,
    Category,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 8] = [
        Category::City,
        Category::Stadium,
        Category::Group,
        Category::Guide,
        Category::Page,
        Category::Product,
        Category::Blog,
        Category::Category,
    ];

    /// Prefix used when building entry ids (`city-toronto`)
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Category::City => "city",
            Category::Stadium => "stadium",
            Category::Group => "group",
            Category::Guide => "guide",
            Category::Page => "page",
            Category::Product => "product",
            Category::Blog => "blog",
            Category::Category => "category",
        }
    }

    /// Build the catalog-wide id for a record of this category
    pub fn entry_id(&self, source_id: &str) -> String {
        format!("{}-{}", self.id_prefix(), source_id)
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::City => "City",
            Category::Stadium => "Stadium",
            Category::Group => "Group",
            Category::Guide => "Guide",
            Category::Page => "Page",
            Category::Product => "Product",
            Category::Blog => "Blog",
            Category::Category => "Category",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A single searchable record
///
/// Entries are produced by the catalog builder and never modified after the
/// catalog is built. Each entry is derived from exactly one upstream record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Catalog-wide unique id, `{category-prefix}-{source-id}`
    pub id: String,

    /// What kind of content this is
    pub category: Category,

    /// Display name
    pub title: String,

    /// One-line summary
    pub description: String,

    /// Site-relative link target, always starting with `/`
    pub path: String,

    /// Extra terms for substring matching (region, country, highlights)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Relative path to a preview image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Extended text for full-text matching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Query-time score, filled in by consumers that rank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f32>,
}

impl SearchEntry {
    /// Create an entry with no optional fields set
    pub fn new(
        id: impl Into<String>,
        category: Category,
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            description: description.into(),
            path: path.into(),
            keywords: Vec::new(),
            image: None,
            content: None,
            relevance: None,
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Absolute URL of the entry on the given site
    pub fn url(&self, base: &Url) -> crate::Result<Url> {
        resolve_site_path(base, &self.path)
    }

    /// Whether `needle` (already lowercased) occurs in any matchable field
    pub fn contains_term(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.keywords.iter().any(|k| k.to_lowercase().contains(needle))
            || self
                .content
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(needle))
    }
}
