//! stderr logging for the catalog binary.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "flowise_catalog=info,catalog_nodes=info";
const VERBOSE_LOG_FILTER: &str = "flowise_catalog=debug,catalog_nodes=debug";

/// Install a stderr subscriber. `RUST_LOG` wins over `verbose`; stdout is left
/// for the run summary.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))
}
