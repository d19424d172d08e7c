//! Per-category derivation rules
//!
//! Paths are linked to directly from the search UI and the site has no
//! redirects, so a wrong path here is a dead link.

use wc26_core::{GroupLabel, HostCity, Stadium};

/// Maps a source identifier to a site path
///
/// Identifiers listed in `overrides` use the listed path verbatim; every
/// other identifier is wrapped as `{prefix}{id}{suffix}`.
#[derive(Debug, Clone, Copy)]
pub struct PathRule {
    prefix: &'static str,
    suffix: &'static str,
    overrides: &'static [(&'static str, &'static str)],
}

impl PathRule {
    pub const fn new(
        prefix: &'static str,
        suffix: &'static str,
        overrides: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            prefix,
            suffix,
            overrides,
        }
    }

    /// The override path for `id`, if it has one
    pub fn override_for(&self, id: &str) -> Option<&'static str> {
        self.overrides
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, path)| *path)
    }

    /// Path for `id`
    pub fn path_for(&self, id: &str) -> String {
        match self.override_for(id) {
            Some(path) => path.to_string(),
            None => format!("{}{}{}", self.prefix, id, self.suffix),
        }
    }
}

/// City guide pages whose URL doesn't follow the id
const CITY_PATH_OVERRIDES: &[(&str, &str)] = &[
    ("new-york", "/world-cup-2026-new-york-new-jersey-guide"),
    ("san-francisco", "/world-cup-2026-san-francisco-bay-area-guide"),
];

/// `/world-cup-2026-{id}-guide`
pub const CITY_PATHS: PathRule = PathRule::new("/world-cup-2026-", "-guide", CITY_PATH_OVERRIDES);

/// `/{id}-world-cup-2026`
pub const STADIUM_PATHS: PathRule = PathRule::new("/", "-world-cup-2026", &[]);

pub const CITY_KEYWORD_TAGS: [&str; 2] = ["host city", "location"];

pub const STADIUM_KEYWORD_TAGS: [&str; 3] = ["venue", "arena", "field"];

/// Fixed tags, then region and country, then highlights
pub fn city_keywords(city: &HostCity) -> Vec<String> {
    CITY_KEYWORD_TAGS
        .iter()
        .map(|tag| tag.to_string())
        .chain([city.region.clone(), city.country.clone()])
        .chain(city.highlights.iter().cloned())
        .collect()
}

/// Fixed tags, then city and country, then highlights
pub fn stadium_keywords(stadium: &Stadium) -> Vec<String> {
    STADIUM_KEYWORD_TAGS
        .iter()
        .map(|tag| tag.to_string())
        .chain([stadium.city.clone(), stadium.country.clone()])
        .chain(stadium.highlights.iter().cloned())
        .collect()
}

/// "Inglewood, USA - Capacity: 70,240"
pub fn stadium_description(stadium: &Stadium) -> String {
    format!(
        "{}, {} - Capacity: {}",
        stadium.city,
        stadium.country,
        format_capacity(stadium.capacity)
    )
}

/// Format a number with comma thousands separators
pub fn format_capacity(capacity: u32) -> String {
    let digits = capacity.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn group_path(label: GroupLabel) -> String {
    format!("/world-cup-2026-groups/group-{}", label.slug())
}

pub fn group_title(label: GroupLabel) -> String {
    format!("Group {}", label)
}

pub fn group_description(label: GroupLabel) -> String {
    format!("World Cup 2026 Group {} teams, fixtures and standings", label)
}

pub fn group_keywords(label: GroupLabel) -> Vec<String> {
    vec![
        "group stage".to_string(),
        format!("group {}", label.slug()),
        "teams".to_string(),
        "fixtures".to_string(),
        "standings".to_string(),
    ]
}
