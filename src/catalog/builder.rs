//! Deterministic ordering of extracted entries.
//!
//! The walker makes no promise about file order, so the catalog imposes one:
//! `(category, label)` compared byte-wise, then `path` to break ties. Since
//! `path` is unique per entry, the order is total and two runs over the same
//! tree render identical bytes.

use crate::catalog::CatalogEntry;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Sort and keep every entry; duplicates are preserved.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut entries: Vec<CatalogEntry> = entries.into_iter().collect();
        entries.sort_by(catalog_order);
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry count per category, in category order.
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.category()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

pub fn catalog_order(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    a.category()
        .cmp(b.category())
        .then_with(|| a.label().cmp(b.label()))
        .then_with(|| a.path().cmp(b.path()))
}
