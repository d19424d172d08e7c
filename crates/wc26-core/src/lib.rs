//! WC26 Core - Core types for the World Cup 2026 guide search catalog
//!
//! This crate defines the data structures shared by the catalog builder,
//! the content sources and the CLI:
//! - `SearchEntry`: One normalized, searchable record
//! - `Category`: The closed set of entry kinds
//! - `HostCity`, `Stadium`, `GroupLabel`, `EntryDescriptor`: Upstream records
//! - `path`: Site-relative path checks

pub mod entry;
pub mod error;
pub mod path;
pub mod source;

pub use entry::*;
pub use error::*;
pub use path::*;
pub use source::*;
