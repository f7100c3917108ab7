//! Flowise node cataloger.
//!
//! The crate walks a components tree, keeps every source file that declares
//! the component contract, pulls best-effort metadata out of it, and renders
//! the ordered result as JSON and Markdown. Each stage is a plain function so
//! the binary (and tests) can run the pipeline piecewise:
//!
//! `walker::collect_sources` -> `extract::extract_entry` ->
//! `Catalog::from_entries` -> `emit::render_json` / `emit::render_markdown`.

pub mod catalog;
pub mod config;
pub mod emit;
pub mod extract;
pub mod logging;
pub mod walker;

pub use catalog::{Catalog, CatalogEntry, category_of, relative_path};
pub use config::{CatalogConfig, ConfigOverrides};
pub use emit::{render_json, render_markdown, write_artifacts};
pub use extract::{ContractFilter, ExtractSettings, extract_entry};
pub use logging::init_logging;
pub use walker::{WalkError, collect_sources, read_candidate};

use anyhow::Result;
use tracing::{debug, info, trace};

/// Outcome of one catalog pass.
#[derive(Debug, Clone)]
pub struct CatalogRun {
    /// Source files with the configured extension that were read.
    pub files_scanned: usize,
    pub catalog: Catalog,
}

/// Walk, filter, and extract without writing anything.
///
/// Fails only when the components directory is missing (see [`WalkError`]);
/// unreadable files and subtrees are logged and skipped.
pub fn scan(config: &CatalogConfig) -> Result<CatalogRun> {
    let settings = &config.extract;
    let filter = ContractFilter::new(&settings.contract)?;

    info!(dir = %config.nodes_dir.display(), "scanning components");
    let sources = collect_sources(&config.nodes_dir, &settings.extension)?;

    let mut entries = Vec::new();
    for path in &sources {
        let Some(text) = read_candidate(path) else {
            continue;
        };
        if !filter.matches(&text) {
            trace!(path = %path.display(), "no contract marker");
            continue;
        }
        entries.push(extract_entry(&config.root, path, &text, settings));
    }

    let catalog = Catalog::from_entries(entries);
    for (category, count) in catalog.category_counts() {
        debug!(category, count, "category");
    }
    info!(
        files = sources.len(),
        nodes = catalog.len(),
        "scan complete"
    );

    Ok(CatalogRun {
        files_scanned: sources.len(),
        catalog,
    })
}

/// Scan and write both artifacts.
pub fn run_catalog(config: &CatalogConfig) -> Result<CatalogRun> {
    let run = scan(config)?;
    write_artifacts(&run.catalog, &config.json_output, &config.markdown_output)?;
    Ok(run)
}
