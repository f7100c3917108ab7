use crate::catalog::{Catalog, CatalogEntry};

pub const TITLE: &str = "# Flowise Node Catalog";
pub const TABLE_HEADER: &str =
    "| Category | Node | Description | Inputs (best-effort) | Outputs (best-effort) | Path |";
const TABLE_RULE: &str = "|---|---|---|---|---|---|";

/// Title, total count, and one table row per entry.
pub fn render_markdown(catalog: &Catalog) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        format!("Total: **{}**", catalog.len()),
        String::new(),
        TABLE_HEADER.to_string(),
        TABLE_RULE.to_string(),
    ];
    lines.extend(catalog.iter().map(render_row));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_row(entry: &CatalogEntry) -> String {
    let cells = [
        entry.category(),
        entry.label(),
        entry.description(),
        entry.inputs_summary(),
        entry.outputs_summary(),
        entry.path(),
    ];
    let cells: Vec<String> = cells.into_iter().map(escape_cell).collect();
    format!("| {} |", cells.join(" | "))
}

/// Make a value safe for a single table cell: `|` becomes `\|` and line
/// breaks become spaces.
pub fn escape_cell(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '|' => out.push_str("\\|"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}
