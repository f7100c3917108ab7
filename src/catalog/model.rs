use serde::Serialize;

/// Metadata for one component source file.
///
/// Built once by the extractor and never modified; fields are exposed through
/// accessors only. Serializes with the camelCase keys of the JSON catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    category: String,
    label: String,
    description: String,
    inputs_summary: String,
    outputs_summary: String,
    path: String,
}

impl CatalogEntry {
    pub fn new(
        category: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        inputs_summary: impl Into<String>,
        outputs_summary: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            label: label.into(),
            description: description.into(),
            inputs_summary: inputs_summary.into(),
            outputs_summary: outputs_summary.into(),
            path: path.into(),
        }
    }

    /// Directory under the anchor segment; empty when there is none.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn inputs_summary(&self) -> &str {
        &self.inputs_summary
    }

    pub fn outputs_summary(&self) -> &str {
        &self.outputs_summary
    }

    /// Root-relative, `/`-separated source path.
    pub fn path(&self) -> &str {
        &self.path
    }
}
