use crate::catalog::Catalog;
use anyhow::{Context, Result};

/// Pretty-printed JSON array of entries, newline-terminated.
pub fn render_json(catalog: &Catalog) -> Result<String> {
    let mut rendered =
        serde_json::to_string_pretty(catalog).context("serializing catalog to JSON")?;
    rendered.push('\n');
    Ok(rendered)
}
