//! Catalog entries and their ordering.
//!
//! `CatalogEntry` is the only record the pipeline produces; `Catalog` is the
//! sorted, read-only sequence both emitters render from. Path helpers that
//! turn a source location into the entry's `path` and `category` live in
//! `paths`.

pub mod builder;
pub mod model;
pub mod paths;

pub use builder::{Catalog, catalog_order};
pub use model::CatalogEntry;
pub use paths::{category_of, relative_path};
