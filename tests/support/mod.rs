#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn catalog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_catalog-nodes"))
}

/// Run a command and fail with its stderr if it did not succeed.
pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to execute {:?}", cmd.get_program()))?;
    if !output.status.success() {
        bail!(
            "command {:?} failed with {:?}\nstdout: {}\nstderr: {}",
            cmd.get_program(),
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

/// Binary invocation isolated from the caller's environment.
pub fn catalog_command(root: &Path) -> Command {
    let mut cmd = Command::new(catalog_binary());
    cmd.current_dir(root)
        .env_remove("CATALOG_ROOT")
        .env_remove("CATALOG_NODES_DIR")
        .env_remove("RUST_LOG");
    cmd
}
