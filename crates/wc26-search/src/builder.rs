//! Catalog builder - flattens the static content collections into search entries

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use wc26_core::{
    validate_site_path, Category, EntryDescriptor, GroupLabel, HostCity, SearchEntry, Stadium,
};

use crate::error::{CatalogError, Result};
use crate::rules::{
    city_keywords, group_description, group_keywords, group_path, group_title, stadium_description,
    stadium_keywords, CITY_PATHS, STADIUM_PATHS,
};
use crate::Catalog;

/// Which input collection a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    City,
    Stadium,
    Group,
    Guide,
    Product,
    Category,
}

impl SourceKind {
    /// Collections in the order their entries appear in the catalog
    pub const ORDER: [SourceKind; 6] = [
        SourceKind::City,
        SourceKind::Stadium,
        SourceKind::Group,
        SourceKind::Guide,
        SourceKind::Product,
        SourceKind::Category,
    ];

    /// Category given to entries from this collection
    pub fn category(&self) -> Category {
        match self {
            SourceKind::City => Category::City,
            SourceKind::Stadium => Category::Stadium,
            SourceKind::Group => Category::Group,
            SourceKind::Guide => Category::Guide,
            SourceKind::Product => Category::Product,
            SourceKind::Category => Category::Category,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category().id_prefix())
    }
}

/// The input collections, borrowed
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogSources<'a> {
    pub cities: &'a [HostCity],
    pub stadiums: &'a [Stadium],
    pub groups: &'a [GroupLabel],
    pub guides: &'a [EntryDescriptor],
    pub products: &'a [EntryDescriptor],
    pub categories: &'a [EntryDescriptor],
}

/// What to do with a record that is missing a required field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Leave the record out and list it in the report
    #[default]
    Skip,
    /// Abort the build with `CatalogError::MalformedRecord`
    Fail,
}

/// What to do when a record repeats an id already in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first occurrence and list the repeat in the report
    KeepFirst,
    /// Abort the build with `CatalogError::DuplicateIdentifier`
    #[default]
    Fail,
}

/// Catalog build configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Check required fields and paths; ids are checked regardless
    pub validate: bool,
    pub malformed: MalformedPolicy,
    pub duplicates: DuplicatePolicy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            validate: true,
            malformed: MalformedPolicy::Skip,
            duplicates: DuplicatePolicy::Fail,
        }
    }
}

impl BuildOptions {
    /// Any bad record fails the build
    pub fn strict() -> Self {
        Self {
            malformed: MalformedPolicy::Fail,
            ..Self::default()
        }
    }

    /// Nothing fails the build; problems only show up in the report
    pub fn lenient() -> Self {
        Self {
            duplicates: DuplicatePolicy::KeepFirst,
            ..Self::default()
        }
    }

    /// Map records without checking their fields
    ///
    /// Ids are still checked; a repeat is dropped and listed in the report.
    pub fn unchecked() -> Self {
        Self {
            validate: false,
            duplicates: DuplicatePolicy::KeepFirst,
            ..Self::default()
        }
    }
}

/// A record left out of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub source_kind: SourceKind,
    /// Identifier as it appeared in the source
    pub id: String,
    pub reason: String,
}

/// A repeat of an id already in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateRecord {
    pub source_kind: SourceKind,
    /// Prefixed catalog id
    pub id: String,
}

/// Problems found while building
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub skipped: Vec<SkippedRecord>,
    pub duplicates: Vec<DuplicateRecord>,
}

impl BuildReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.duplicates.is_empty()
    }
}

/// Builds a `Catalog` from the content collections
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    options: BuildOptions,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Map every source record into an entry
    ///
    /// Entries come out grouped by collection in `SourceKind::ORDER`, each
    /// collection in input order. The same input always yields the same
    /// catalog.
    pub fn build(&self, sources: &CatalogSources<'_>) -> Result<Catalog> {
        let mut collector = Collector::new(self.options);

        for city in sources.cities {
            let entry = SearchEntry::new(
                Category::City.entry_id(&city.id),
                Category::City,
                &city.name,
                &city.description,
                CITY_PATHS.path_for(&city.id),
            )
            .with_keywords(city_keywords(city))
            .with_image(city.image.clone());
            collector.push(SourceKind::City, &city.id, entry)?;
        }
        debug!("Mapped {} city records", sources.cities.len());

        for stadium in sources.stadiums {
            let entry = SearchEntry::new(
                Category::Stadium.entry_id(&stadium.id),
                Category::Stadium,
                &stadium.name,
                stadium_description(stadium),
                STADIUM_PATHS.path_for(&stadium.id),
            )
            .with_keywords(stadium_keywords(stadium))
            .with_image(stadium.image.clone());
            collector.push(SourceKind::Stadium, &stadium.id, entry)?;
        }
        debug!("Mapped {} stadium records", sources.stadiums.len());

        for &label in sources.groups {
            let slug = label.slug();
            let entry = SearchEntry::new(
                Category::Group.entry_id(&slug),
                Category::Group,
                group_title(label),
                group_description(label),
                group_path(label),
            )
            .with_keywords(group_keywords(label));
            collector.push(SourceKind::Group, &slug, entry)?;
        }
        debug!("Mapped {} group labels", sources.groups.len());

        let descriptor_sources = [
            (SourceKind::Guide, sources.guides),
            (SourceKind::Product, sources.products),
            (SourceKind::Category, sources.categories),
        ];
        for (kind, descriptors) in descriptor_sources {
            let category = kind.category();
            for descriptor in descriptors {
                let entry = SearchEntry::new(
                    category.entry_id(&descriptor.id),
                    category,
                    &descriptor.title,
                    &descriptor.description,
                    &descriptor.path,
                )
                .with_keywords(descriptor.keywords.clone())
                .with_image(descriptor.image.clone());
                collector.push(kind, &descriptor.id, entry)?;
            }
            debug!("Mapped {} {} records", descriptors.len(), kind);
        }

        let (entries, report) = collector.finish();
        info!(
            "Built search catalog with {} entries ({} skipped, {} duplicates)",
            entries.len(),
            report.skipped.len(),
            report.duplicates.len()
        );
        Ok(Catalog::new(entries, report))
    }
}

/// Build a catalog with the default options
pub fn build_catalog(sources: &CatalogSources<'_>) -> Result<Catalog> {
    CatalogBuilder::new().build(sources)
}

/// Accumulates entries and enforces the build options
struct Collector {
    options: BuildOptions,
    entries: Vec<SearchEntry>,
    seen: HashSet<String>,
    report: BuildReport,
}

impl Collector {
    fn new(options: BuildOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
            seen: HashSet::new(),
            report: BuildReport::default(),
        }
    }

    fn push(&mut self, kind: SourceKind, source_id: &str, entry: SearchEntry) -> Result<()> {
        let malformed = if self.options.validate {
            malformed_reason(source_id, &entry)
        } else {
            None
        };

        if let Some(reason) = malformed {
            match self.options.malformed {
                MalformedPolicy::Fail => {
                    return Err(CatalogError::MalformedRecord {
                        source_kind: kind,
                        id: source_id.to_string(),
                        reason,
                    });
                }
                MalformedPolicy::Skip => {
                    warn!("Skipping malformed {} record {:?}: {}", kind, source_id, reason);
                    self.report.skipped.push(SkippedRecord {
                        source_kind: kind,
                        id: source_id.to_string(),
                        reason,
                    });
                    return Ok(());
                }
            }
        }

        if self.seen.contains(&entry.id) {
            match self.options.duplicates {
                DuplicatePolicy::Fail => {
                    return Err(CatalogError::DuplicateIdentifier {
                        source_kind: kind,
                        id: entry.id,
                    });
                }
                DuplicatePolicy::KeepFirst => {
                    warn!("Dropping duplicate {} record {:?}", kind, entry.id);
                    self.report.duplicates.push(DuplicateRecord {
                        source_kind: kind,
                        id: entry.id,
                    });
                    return Ok(());
                }
            }
        }

        self.seen.insert(entry.id.clone());
        self.entries.push(entry);
        Ok(())
    }

    fn finish(self) -> (Vec<SearchEntry>, BuildReport) {
        (self.entries, self.report)
    }
}

/// Why an entry can't go into the catalog, if it can't
fn malformed_reason(source_id: &str, entry: &SearchEntry) -> Option<String> {
    if source_id.trim().is_empty() {
        return Some("identifier is empty".to_string());
    }
    if entry.title.trim().is_empty() {
        return Some("title is empty".to_string());
    }
    if entry.description.trim().is_empty() {
        return Some("description is empty".to_string());
    }
    validate_site_path(&entry.path).err().map(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: &str, name: &str, description: &str) -> HostCity {
        HostCity {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            region: "Eastern".to_string(),
            country: "USA".to_string(),
            highlights: vec!["Downtown".to_string()],
            image: Some(format!("/images/cities/{}.jpg", id)),
        }
    }

    fn stadium(id: &str, name: &str) -> Stadium {
        Stadium {
            id: id.to_string(),
            name: name.to_string(),
            city: "Los Angeles".to_string(),
            country: "USA".to_string(),
            capacity: 70240,
            highlights: Vec::new(),
            image: None,
        }
    }

    struct Fixture {
        cities: Vec<HostCity>,
        stadiums: Vec<Stadium>,
        guides: Vec<EntryDescriptor>,
        products: Vec<EntryDescriptor>,
        categories: Vec<EntryDescriptor>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                cities: vec![
                    city("toronto", "Toronto", "Canada's largest city"),
                    city("new-york", "New York / New Jersey", "Final venue"),
                    city("san-francisco", "San Francisco Bay Area", "Tech and bridges"),
                ],
                stadiums: vec![
                    stadium("sofi-stadium", "SoFi Stadium"),
                    stadium("metlife-stadium", "MetLife Stadium"),
                ],
                guides: vec![EntryDescriptor::new(
                    "tickets",
                    "Ticket Guide",
                    "How to buy tickets",
                    "/world-cup-2026-tickets-guide",
                )
                .with_keywords(["tickets", "prices"])],
                products: vec![EntryDescriptor::new(
                    "jerseys",
                    "Team Jerseys",
                    "Official kits",
                    "/shop/jerseys",
                )],
                categories: vec![EntryDescriptor::new(
                    "travel",
                    "Travel",
                    "Getting around",
                    "/category/travel",
                )],
            }
        }

        fn sources(&self) -> CatalogSources<'_> {
            CatalogSources {
                cities: &self.cities,
                stadiums: &self.stadiums,
                groups: &GroupLabel::ALL,
                guides: &self.guides,
                products: &self.products,
                categories: &self.categories,
            }
        }
    }

    #[test]
    fn test_build_orders_by_category() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.sources()).unwrap();

        let categories: Vec<Category> = catalog.entries().iter().map(|e| e.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);

        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(&ids[..3], &["city-toronto", "city-new-york", "city-san-francisco"]);
        assert_eq!(&ids[3..5], &["stadium-sofi-stadium", "stadium-metlife-stadium"]);
        assert_eq!(ids[5], "group-a");
        assert_eq!(&ids[17..], &["guide-tickets", "product-jerseys", "category-travel"]);
        assert_eq!(catalog.len(), 3 + 2 + 12 + 3);
    }

    #[test]
    fn test_build_is_deterministic() {
        let fixture = Fixture::new();
        let first = build_catalog(&fixture.sources()).unwrap();
        let second = build_catalog(&fixture.sources()).unwrap();
        assert_eq!(first.entries(), second.entries());
    }

    #[test]
    fn test_entries_are_complete_and_unique() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.sources()).unwrap();

        let mut ids = HashSet::new();
        for entry in catalog.entries() {
            assert!(!entry.id.is_empty());
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
            assert!(entry.path.starts_with('/'));
            assert!(entry.content.is_none());
            assert!(entry.relevance.is_none());
            assert!(ids.insert(entry.id.clone()), "duplicate id {}", entry.id);
        }
    }

    #[test]
    fn test_city_paths() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.sources()).unwrap();

        assert_eq!(
            catalog.get("city-new-york").unwrap().path,
            "/world-cup-2026-new-york-new-jersey-guide"
        );
        assert_eq!(
            catalog.get("city-san-francisco").unwrap().path,
            "/world-cup-2026-san-francisco-bay-area-guide"
        );
        assert_eq!(catalog.get("city-toronto").unwrap().path, "/world-cup-2026-toronto-guide");
    }

    #[test]
    fn test_city_entry_fields() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.sources()).unwrap();
        let toronto = catalog.get("city-toronto").unwrap();

        assert_eq!(toronto.title, "Toronto");
        assert_eq!(
            toronto.keywords,
            vec!["host city", "location", "Eastern", "USA", "Downtown"]
        );
        assert_eq!(toronto.image.as_deref(), Some("/images/cities/toronto.jpg"));
    }

    #[test]
    fn test_stadium_entry() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.sources()).unwrap();
        let sofi = catalog.get("stadium-sofi-stadium").unwrap();

        assert_eq!(sofi.path, "/sofi-stadium-world-cup-2026");
        assert_eq!(sofi.description, "Los Angeles, USA - Capacity: 70,240");
        assert_eq!(&sofi.keywords[..3], &["venue", "arena", "field"]);
    }

    #[test]
    fn test_group_entries() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.sources()).unwrap();
        let groups = catalog.by_category(Category::Group);

        assert_eq!(groups.len(), 12);
        for (entry, letter) in groups.iter().zip('a'..='l') {
            assert_eq!(entry.id, format!("group-{}", letter));
            assert_eq!(entry.path, format!("/world-cup-2026-groups/group-{}", letter));
        }
    }

    #[test]
    fn test_duplicate_fails_by_default() {
        let mut fixture = Fixture::new();
        fixture.cities.push(city("miami", "Miami", "Sun"));
        fixture.cities.push(city("miami", "Miami Again", "More sun"));

        let err = build_catalog(&fixture.sources()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateIdentifier {
                source_kind: SourceKind::City,
                id: "city-miami".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_keep_first() {
        let mut fixture = Fixture::new();
        fixture.cities.push(city("miami", "Miami", "Sun"));
        fixture.cities.push(city("miami", "Miami Again", "More sun"));

        let catalog = CatalogBuilder::new()
            .with_options(BuildOptions::lenient())
            .build(&fixture.sources())
            .unwrap();

        let miamis: Vec<_> = catalog
            .entries()
            .iter()
            .filter(|e| e.id == "city-miami")
            .collect();
        assert_eq!(miamis.len(), 1);
        assert_eq!(miamis[0].title, "Miami");
        assert_eq!(
            catalog.report().duplicates,
            vec![DuplicateRecord {
                source_kind: SourceKind::City,
                id: "city-miami".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_description_is_skipped() {
        let mut fixture = Fixture::new();
        fixture.cities.insert(1, city("boston", "Boston", ""));

        let catalog = build_catalog(&fixture.sources()).unwrap();
        assert!(catalog.get("city-boston").is_none());
        assert_eq!(catalog.report().skipped_count(), 1);

        let skipped = &catalog.report().skipped[0];
        assert_eq!(skipped.source_kind, SourceKind::City);
        assert_eq!(skipped.id, "boston");
        assert_eq!(skipped.reason, "description is empty");
    }

    #[test]
    fn test_bad_descriptor_path_is_skipped() {
        let mut fixture = Fixture::new();
        fixture
            .guides
            .push(EntryDescriptor::new("visa", "Visa Guide", "Entry rules", "visa-guide"));
        fixture
            .guides
            .push(EntryDescriptor::new("hotels", "Hotels", "Where to stay", ""));

        let catalog = build_catalog(&fixture.sources()).unwrap();
        assert!(catalog.get("guide-visa").is_none());
        assert!(catalog.get("guide-hotels").is_none());
        assert_eq!(catalog.report().skipped_count(), 2);
    }

    #[test]
    fn test_dot_segment_path_is_skipped() {
        let mut fixture = Fixture::new();
        fixture
            .guides
            .push(EntryDescriptor::new("up", "Up", "Climbs out of the site", "/../.."));

        let catalog = build_catalog(&fixture.sources()).unwrap();
        assert!(catalog.get("guide-up").is_none());
        assert_eq!(catalog.report().skipped_count(), 1);
        assert!(catalog.report().skipped[0].reason.contains("dot segments"));
    }

    #[test]
    fn test_empty_identifier_is_skipped() {
        let mut fixture = Fixture::new();
        fixture.stadiums.push(stadium("", "Nameless Arena"));

        let catalog = build_catalog(&fixture.sources()).unwrap();
        assert_eq!(catalog.by_category(Category::Stadium).len(), 2);
        assert_eq!(catalog.report().skipped[0].reason, "identifier is empty");
    }

    #[test]
    fn test_strict_fails_on_malformed() {
        let mut fixture = Fixture::new();
        fixture.cities.push(city("boston", "", "Harbor city"));

        let err = CatalogBuilder::new()
            .with_options(BuildOptions::strict())
            .build(&fixture.sources())
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedRecord {
                source_kind: SourceKind::City,
                ref id,
                ..
            } if id == "boston"
        ));
    }

    #[test]
    fn test_unchecked_emits_everything() {
        let mut fixture = Fixture::new();
        fixture.cities.push(city("boston", "Boston", ""));

        let catalog = CatalogBuilder::new()
            .with_options(BuildOptions::unchecked())
            .build(&fixture.sources())
            .unwrap();
        assert!(catalog.get("city-boston").is_some());
        assert!(catalog.report().is_clean());
    }

    #[test]
    fn test_unchecked_still_rejects_duplicate_ids() {
        let mut fixture = Fixture::new();
        fixture.cities.push(city("miami", "Miami", "Sun"));
        fixture.cities.push(city("miami", "Miami Again", ""));

        let catalog = CatalogBuilder::new()
            .with_options(BuildOptions::unchecked())
            .build(&fixture.sources())
            .unwrap();

        let miamis: Vec<_> = catalog
            .entries()
            .iter()
            .filter(|e| e.id == "city-miami")
            .collect();
        assert_eq!(miamis.len(), 1);
        assert_eq!(miamis[0].title, "Miami");
        assert!(!catalog.report().is_clean());
        assert_eq!(catalog.report().duplicates[0].id, "city-miami");
    }

    #[test]
    fn test_unchecked_with_fail_policy_errors_on_duplicate() {
        let mut fixture = Fixture::new();
        fixture.cities.push(city("miami", "Miami", "Sun"));
        fixture.cities.push(city("miami", "Miami Again", "More sun"));

        let options = BuildOptions {
            validate: false,
            ..BuildOptions::default()
        };
        let err = CatalogBuilder::new()
            .with_options(options)
            .build(&fixture.sources())
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn test_same_slug_in_different_collections() {
        let mut fixture = Fixture::new();
        fixture.guides.push(EntryDescriptor::new(
            "toronto",
            "Toronto Tips",
            "Local tips",
            "/toronto-tips",
        ));

        let catalog = build_catalog(&fixture.sources()).unwrap();
        assert!(catalog.get("city-toronto").is_some());
        assert!(catalog.get("guide-toronto").is_some());
    }

    #[test]
    fn test_empty_sources() {
        let catalog = build_catalog(&CatalogSources::default()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.report().is_clean());
    }
}
