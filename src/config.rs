//! Run configuration.
//!
//! Everything the pipeline reads from the outside world is resolved here once
//! (flag, then env, then default) and handed down as a [`CatalogConfig`]. The
//! rest of the crate never consults the working directory or the environment.

use crate::extract::ExtractSettings;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Components directory, relative to the root.
pub const DEFAULT_NODES_DIR: &str = "Flowise/packages/components/nodes";
pub const DEFAULT_JSON_OUTPUT: &str = "catalog.flowise.nodes.json";
pub const DEFAULT_MARKDOWN_OUTPUT: &str = "catalog.flowise.nodes.md";

pub const ENV_ROOT: &str = "CATALOG_ROOT";
pub const ENV_NODES_DIR: &str = "CATALOG_NODES_DIR";

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Entry paths and relative output paths are anchored here.
    pub root: PathBuf,
    pub nodes_dir: PathBuf,
    pub json_output: PathBuf,
    pub markdown_output: PathBuf,
    pub extract: ExtractSettings,
}

/// Values supplied explicitly by the caller (usually CLI flags).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub nodes_dir: Option<PathBuf>,
    pub json_output: Option<PathBuf>,
    pub markdown_output: Option<PathBuf>,
    pub extension: Option<String>,
    pub contract: Option<String>,
}

impl CatalogConfig {
    /// Default layout anchored at `root`, ignoring the environment.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            nodes_dir: root.join(DEFAULT_NODES_DIR),
            json_output: root.join(DEFAULT_JSON_OUTPUT),
            markdown_output: root.join(DEFAULT_MARKDOWN_OUTPUT),
            extract: ExtractSettings::default(),
            root,
        }
    }

    /// Resolve overrides, falling back to `CATALOG_ROOT`/`CATALOG_NODES_DIR`
    /// and then to the current directory and default layout.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let root = match overrides
            .root
            .or_else(|| env_non_empty(ENV_ROOT).map(PathBuf::from))
        {
            Some(root) => root,
            None => env::current_dir().context("resolving current directory")?,
        };
        let root = std::path::absolute(&root)
            .with_context(|| format!("resolving root {}", root.display()))?;

        let nodes_dir = overrides
            .nodes_dir
            .or_else(|| env_non_empty(ENV_NODES_DIR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NODES_DIR));
        let json_output = overrides
            .json_output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JSON_OUTPUT));
        let markdown_output = overrides
            .markdown_output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MARKDOWN_OUTPUT));

        let mut extract = ExtractSettings::default();
        if let Some(extension) = overrides.extension {
            extract.extension = normalize_extension(&extension);
        }
        if let Some(contract) = overrides.contract {
            extract.contract = contract;
        }

        Ok(Self {
            nodes_dir: under_root(&root, &nodes_dir),
            json_output: under_root(&root, &json_output),
            markdown_output: under_root(&root, &markdown_output),
            extract,
            root,
        })
    }
}

fn under_root(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn normalize_extension(raw: &str) -> String {
    raw.trim().trim_start_matches('.').to_string()
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
