//! Catalogs Flowise node implementations.
//!
//! Usage:
//!   catalog-nodes
//!   catalog-nodes --root ~/src --nodes-dir Flowise/packages/components/nodes
//!   CATALOG_ROOT=/work catalog-nodes --json-out out/nodes.json -v
//!
//! Walks the components tree, keeps every source that implements the node
//! contract, and writes the JSON and Markdown catalogs under the root. The
//! only stdout output is a one-line summary; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use flowise_catalog::{CatalogConfig, ConfigOverrides, WalkError, init_logging, run_catalog};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-nodes")]
#[command(about = "Catalog Flowise INode implementations as JSON and Markdown")]
struct Cli {
    /// Catalog root; entry paths and relative outputs are anchored here (or set CATALOG_ROOT).
    #[arg(long)]
    root: Option<PathBuf>,
    /// Components directory, relative to the root unless absolute (or set CATALOG_NODES_DIR).
    #[arg(long)]
    nodes_dir: Option<PathBuf>,
    /// JSON catalog path [default: catalog.flowise.nodes.json].
    #[arg(long)]
    json_out: Option<PathBuf>,
    /// Markdown catalog path [default: catalog.flowise.nodes.md].
    #[arg(long)]
    markdown_out: Option<PathBuf>,
    /// Source file extension to scan [default: ts].
    #[arg(long)]
    extension: Option<String>,
    /// Contract name in the `implements <NAME>` marker [default: INode].
    #[arg(long)]
    contract: Option<String>,
    /// Debug-level logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            root: self.root,
            nodes_dir: self.nodes_dir,
            json_output: self.json_out,
            markdown_output: self.markdown_out,
            extension: self.extension,
            contract: self.contract,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        match err.downcast_ref::<WalkError>() {
            Some(walk) => {
                eprintln!("catalog-nodes: {walk}");
                eprintln!("{}", walk.remediation());
            }
            None => eprintln!("catalog-nodes: {err:#}"),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let config = CatalogConfig::resolve(cli.overrides())?;

    let outcome = run_catalog(&config)?;
    println!(
        "catalogued {} nodes -> {}, {}",
        outcome.catalog.len(),
        config.json_output.display(),
        config.markdown_output.display()
    );
    Ok(())
}
