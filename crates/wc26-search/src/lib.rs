//! WC26 Search - Search catalog for the World Cup 2026 guide
//!
//! This crate provides:
//! - The catalog builder that flattens cities, stadiums, groups, guides,
//!   products and categories into one list of `SearchEntry`
//! - Path and keyword derivation rules per category
//! - A read-only `Catalog` with simple substring filtering

pub mod builder;
pub mod catalog;
pub mod error;
pub mod query;
pub mod rules;

pub use builder::*;
pub use catalog::*;
pub use error::*;
pub use query::*;
pub use rules::*;
