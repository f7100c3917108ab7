//! Recursive discovery of component source files.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Pre-condition failures for a walk. Anything below the root is logged and
/// skipped instead.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("components directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },
    #[error("components path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
}

impl WalkError {
    /// Hint printed under the error by the CLI.
    pub fn remediation(&self) -> &'static str {
        match self {
            WalkError::MissingDirectory { .. } => {
                "Clone Flowise under the catalog root first (git clone https://github.com/FlowiseAI/Flowise.git) or pass --nodes-dir."
            }
            WalkError::NotADirectory { .. } => {
                "Point --nodes-dir (or CATALOG_NODES_DIR) at the Flowise components/nodes directory."
            }
        }
    }
}

/// Every regular file under `dir` whose name ends in `.<extension>`.
///
/// Symlinks are not followed. Entries the walker cannot read are reported at
/// `warn` and contribute nothing.
pub fn collect_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, WalkError> {
    if !dir.exists() {
        return Err(WalkError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(WalkError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let suffix = format!(".{extension}");
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(dir);
                warn!(path = %path.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && has_suffix(entry.file_name(), &suffix) {
            files.push(entry.into_path());
        }
    }

    debug!(dir = %dir.display(), count = files.len(), "collected sources");
    Ok(files)
}

/// Read a source file as text. Invalid UTF-8 is replaced rather than
/// rejected; an unreadable file yields `None`.
pub fn read_candidate(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "skipping unreadable file");
            None
        }
    }
}

// Byte-level so names that are not valid UTF-8 still qualify. A bare ".ts"
// has no stem to fall back on, so it is not a source file.
fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    let name = name.as_encoded_bytes();
    name.len() > suffix.len() && name.ends_with(suffix.as_bytes())
}
