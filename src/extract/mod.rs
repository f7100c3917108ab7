//! Contract filter and best-effort field extraction.
//!
//! Nothing here parses TypeScript. The filter is a text search for the
//! `implements <Contract>` marker, and every field comes from the first
//! matching rule in [`rules`]. A miss degrades the field to an empty string
//! (or the file stem for `label`); extraction never fails.

pub mod rules;

use crate::catalog::{CatalogEntry, category_of, relative_path};
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use tracing::trace;

pub const DEFAULT_EXTENSION: &str = "ts";
pub const DEFAULT_CONTRACT: &str = "INode";
/// Path segment that precedes the category directory.
pub const ANCHOR_SEGMENT: &str = "nodes";
/// Upper bound, in characters, for input/output summaries.
pub const SUMMARY_LIMIT: usize = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSettings {
    /// Source extension without the leading dot.
    pub extension: String,
    pub contract: String,
    pub anchor: String,
    pub summary_limit: usize,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            contract: DEFAULT_CONTRACT.to_string(),
            anchor: ANCHOR_SEGMENT.to_string(),
            summary_limit: SUMMARY_LIMIT,
        }
    }
}

/// Decides whether a file's text declares the component contract.
#[derive(Debug, Clone)]
pub struct ContractFilter {
    marker: Regex,
}

impl ContractFilter {
    pub fn new(contract: &str) -> Result<Self> {
        let pattern = format!(r"implements\s+{}\b", regex::escape(contract));
        let marker = Regex::new(&pattern)
            .with_context(|| format!("building contract marker for '{contract}'"))?;
        Ok(Self { marker })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.marker.is_match(text)
    }
}

/// Which array-valued field to summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    Inputs,
    Outputs,
}

/// Component label, falling back to `stem` when no rule matches.
pub fn extract_label(text: &str, stem: &str) -> String {
    match rules::LABEL.first_quoted(text) {
        Some((rule, value)) => {
            trace!(rule, "label");
            value.to_string()
        }
        None => stem.to_string(),
    }
}

pub fn extract_description(text: &str) -> String {
    match rules::DESCRIPTION.first_quoted(text) {
        Some((rule, value)) => {
            trace!(rule, "description");
            value.to_string()
        }
        None => String::new(),
    }
}

/// Flattened body of the first `inputs`/`outputs` array literal.
pub fn extract_summary(text: &str, port: Port, limit: usize) -> String {
    let rules = match port {
        Port::Inputs => &*rules::INPUTS,
        Port::Outputs => &*rules::OUTPUTS,
    };
    match rules.first_array(text) {
        Some((rule, body)) => {
            trace!(rule, "summary");
            flatten_summary(body, limit)
        }
        None => String::new(),
    }
}

/// Collapse a multi-line literal body onto one line and cap its length.
pub fn flatten_summary(body: &str, limit: usize) -> String {
    let mut flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if let Some((cut, _)) = flat.char_indices().nth(limit) {
        flat.truncate(cut);
    }
    flat
}

/// File name minus `.<extension>`.
pub fn file_stem(path: &Path, extension: &str) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = format!(".{extension}");
    match name.strip_suffix(&suffix) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Build the catalog entry for one file that passed the contract filter.
pub fn extract_entry(
    root: &Path,
    path: &Path,
    text: &str,
    settings: &ExtractSettings,
) -> CatalogEntry {
    let rel = relative_path(root, path);
    trace!(path = %rel, "extracting");
    CatalogEntry::new(
        category_of(&rel, &settings.anchor),
        extract_label(text, &file_stem(path, &settings.extension)),
        extract_description(text),
        extract_summary(text, Port::Inputs, settings.summary_limit),
        extract_summary(text, Port::Outputs, settings.summary_limit),
        rel,
    )
}
