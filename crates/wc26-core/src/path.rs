//! Site-relative paths
//!
//! Every search entry links to a page on the guide site. Paths are stored
//! relative to the site root (`/world-cup-2026-toronto-guide`) and only
//! resolved against a concrete origin when an absolute link is needed.

use url::Url;

use crate::{CoreError, Result};

/// Origin used to check that a path stays on the site when joined
const CHECK_ORIGIN: &str = "https://site.invalid/";

/// Check that `path` is a usable site-relative path
///
/// A valid path is non-empty, begins with a single `/`, contains no
/// whitespace or `.`/`..` segments and does not escape the site origin when
/// joined onto it.
pub fn validate_site_path(path: &str) -> Result<()> {
    let invalid = |reason| {
        Err(CoreError::InvalidPath {
            path: path.to_string(),
            reason,
        })
    };

    if path.is_empty() {
        return invalid("path is empty");
    }
    if !path.starts_with('/') {
        return invalid("path must begin with '/'");
    }
    if path.starts_with("//") {
        return invalid("protocol-relative paths are not site-relative");
    }
    if path.chars().any(char::is_whitespace) {
        return invalid("path contains whitespace");
    }
    if path
        .split(|c| matches!(c, '/' | '?' | '#'))
        .any(|segment| segment == "." || segment == "..")
    {
        return invalid("path contains dot segments");
    }

    let origin = Url::parse(CHECK_ORIGIN).map_err(|e| CoreError::InvalidBaseUrl(e.to_string()))?;
    match origin.join(path) {
        Ok(joined) if joined.origin() == origin.origin() => Ok(()),
        Ok(_) => invalid("path leaves the site origin"),
        Err(_) => invalid("path is not a valid URL path"),
    }
}

/// Resolve a site-relative path against the site's base URL
pub fn resolve_site_path(base: &Url, path: &str) -> Result<Url> {
    validate_site_path(path)?;
    base.join(path).map_err(|_| CoreError::InvalidPath {
        path: path.to_string(),
        reason: "path could not be joined onto the base URL",
    })
}

/// Parse a base URL for resolving site paths
pub fn parse_base_url(base: &str) -> Result<Url> {
    let url = Url::parse(base).map_err(|e| CoreError::InvalidBaseUrl(format!("{}: {}", base, e)))?;
    if url.cannot_be_a_base() {
        return Err(CoreError::InvalidBaseUrl(base.to_string()));
    }
    Ok(url)
}
