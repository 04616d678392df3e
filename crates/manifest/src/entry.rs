//! Typed manifest entry model

use serde::{Deserialize, Serialize};

/// One manifest record: a source asset and the output built from it.
///
/// Field names follow the on-disk camelCase convention of the manifest
/// format; keys this model does not know are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Built output path, relative to the output directory.
    pub file: String,

    /// Source name the output was built from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Whether this record is a configured entry point.
    #[serde(default, rename = "isEntry")]
    pub is_entry: bool,

    /// Stylesheets emitted while building this entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,

    /// Static assets referenced by this entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<String>,

    /// Names of other manifest entries this one imports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
}

impl ManifestEntry {
    /// Whether the built output itself is a stylesheet.
    pub fn is_stylesheet(&self) -> bool {
        self.file.ends_with(".css")
    }
}
