//! Catalog renderers and artifact writing.
//!
//! Both renderers are pure functions of the sorted [`Catalog`]; neither sees
//! the other's output. [`write_artifacts`] renders everything in memory before
//! touching the filesystem, then replaces each file atomically.

mod json;
mod markdown;

pub use json::render_json;
pub use markdown::{TABLE_HEADER, TITLE, escape_cell, render_markdown};

use crate::catalog::Catalog;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

pub fn write_artifacts(catalog: &Catalog, json_path: &Path, markdown_path: &Path) -> Result<()> {
    let json = render_json(catalog)?;
    let markdown = render_markdown(catalog);
    write_atomic(json_path, &json)?;
    write_atomic(markdown_path, &markdown)?;
    Ok(())
}

/// Write through a temp file in the destination directory, then rename.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("creating output directory {}", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("creating temp file in {}", parent.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    tmp.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    tmp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("replacing {}", path.display()))?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
