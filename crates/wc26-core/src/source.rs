//! Upstream content records
//!
//! These are the hand-authored records the catalog is built from. They are
//! loaded from the JSON data files shipped with `wc26-content`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Result};

/// A World Cup 2026 host city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCity {
    /// Slug identifier (e.g., "toronto", "new-york")
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description of the city
    pub description: String,

    /// Tournament region (e.g., "Eastern", "Central", "Western")
    pub region: String,

    /// Host country
    pub country: String,

    /// Notable attractions, used as search keywords
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Preview image
    #[serde(default)]
    pub image: Option<String>,
}

/// A World Cup 2026 stadium
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stadium {
    /// Slug identifier (e.g., "sofi-stadium")
    pub id: String,

    /// Display name
    pub name: String,

    /// City the stadium is in
    pub city: String,

    /// Host country
    pub country: String,

    /// Seated capacity for the tournament
    pub capacity: u32,

    /// Notable facts, used as search keywords
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Preview image
    #[serde(default)]
    pub image: Option<String>,
}

/// A tournament group letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupLabel(char);

impl GroupLabel {
    /// The twelve groups of the 48-team tournament
    pub const ALL: [GroupLabel; 12] = [
        GroupLabel('A'),
        GroupLabel('B'),
        GroupLabel('C'),
        GroupLabel('D'),
        GroupLabel('E'),
        GroupLabel('F'),
        GroupLabel('G'),
        GroupLabel('H'),
        GroupLabel('I'),
        GroupLabel('J'),
        GroupLabel('K'),
        GroupLabel('L'),
    ];

    /// Create a label from a letter; lowercase letters are accepted
    pub fn new(letter: char) -> Result<Self> {
        if letter.is_ascii_alphabetic() {
            Ok(Self(letter.to_ascii_uppercase()))
        } else {
            Err(CoreError::InvalidGroupLabel(letter.to_string()))
        }
    }

    /// Uppercase letter
    pub fn letter(&self) -> char {
        self.0
    }

    /// Lowercase slug used in ids and paths
    pub fn slug(&self) -> String {
        self.0.to_ascii_lowercase().to_string()
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GroupLabel {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        let mut chars = value.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(CoreError::InvalidGroupLabel(value)),
        }
    }
}

impl From<GroupLabel> for String {
    fn from(label: GroupLabel) -> Self {
        label.0.to_string()
    }
}

/// A hand-authored guide, product or category record
///
/// These are already close to the shape of a search entry; the builder only
/// prefixes the id and checks the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDescriptor {
    /// Slug identifier, unique within its collection
    pub id: String,

    pub title: String,

    pub description: String,

    /// Site-relative link target
    pub path: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub image: Option<String>,
}

impl EntryDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            path: path.into(),
            keywords: Vec::new(),
            image: None,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}
