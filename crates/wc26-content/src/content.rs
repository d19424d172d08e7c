//! Content sets - the parsed data files

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};
use wc26_core::{EntryDescriptor, GroupLabel, HostCity, Stadium};
use wc26_search::{Catalog, CatalogBuilder, CatalogSources};

use crate::error::{ContentError, Result};

/// Data file names, shared by the embedded set and directory loading
pub mod files {
    pub const CITIES: &str = "cities.json";
    pub const STADIUMS: &str = "stadiums.json";
    pub const GUIDES: &str = "guides.json";
    pub const PRODUCTS: &str = "products.json";
    pub const CATEGORIES: &str = "categories.json";
}

const EMBEDDED_CITIES: &str = include_str!("../data/cities.json");
const EMBEDDED_STADIUMS: &str = include_str!("../data/stadiums.json");
const EMBEDDED_GUIDES: &str = include_str!("../data/guides.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../data/products.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../data/categories.json");

/// All upstream records the catalog is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSet {
    pub cities: Vec<HostCity>,
    pub stadiums: Vec<Stadium>,
    pub groups: Vec<GroupLabel>,
    pub guides: Vec<EntryDescriptor>,
    pub products: Vec<EntryDescriptor>,
    pub categories: Vec<EntryDescriptor>,
}

impl ContentSet {
    /// The content compiled into the binary
    pub fn embedded() -> Result<Self> {
        let set = Self {
            cities: parse(files::CITIES, EMBEDDED_CITIES)?,
            stadiums: parse(files::STADIUMS, EMBEDDED_STADIUMS)?,
            groups: GroupLabel::ALL.to_vec(),
            guides: parse(files::GUIDES, EMBEDDED_GUIDES)?,
            products: parse(files::PRODUCTS, EMBEDDED_PRODUCTS)?,
            categories: parse(files::CATEGORIES, EMBEDDED_CATEGORIES)?,
        };
        debug!("Parsed embedded content");
        Ok(set)
    }

    /// Load the same data files from a directory
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let set = Self {
            cities: read(dir, files::CITIES)?,
            stadiums: read(dir, files::STADIUMS)?,
            groups: GroupLabel::ALL.to_vec(),
            guides: read(dir, files::GUIDES)?,
            products: read(dir, files::PRODUCTS)?,
            categories: read(dir, files::CATEGORIES)?,
        };
        info!("Loaded content from {:?}", dir);
        Ok(set)
    }

    /// Borrow the collections in builder order
    pub fn sources(&self) -> CatalogSources<'_> {
        CatalogSources {
            cities: &self.cities,
            stadiums: &self.stadiums,
            groups: &self.groups,
            guides: &self.guides,
            products: &self.products,
            categories: &self.categories,
        }
    }

    /// Build a catalog from this content
    pub fn build_catalog(&self, builder: &CatalogBuilder) -> Result<Catalog> {
        Ok(builder.build(&self.sources())?)
    }
}

fn parse<T: DeserializeOwned>(file: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse {
        file: file.to_string(),
        source,
    })
}

fn read<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T> {
    let path = dir.join(file);
    if !path.exists() {
        return Err(ContentError::FileNotFound(path));
    }
    let json = std::fs::read_to_string(&path)?;
    parse(&path.display().to_string(), &json)
}
