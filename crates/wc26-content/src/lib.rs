//! WC26 Content - Static content behind the search catalog
//!
//! Host cities, stadiums, guides, products and categories live as JSON files
//! under `data/`. They are embedded at compile time and can also be loaded
//! from a directory for previewing edits without a rebuild.

pub mod content;
pub mod error;

pub use content::*;
pub use error::*;
