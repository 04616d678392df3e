//! Manifest loading and asset lookup

use crate::entry::ManifestEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;
use types::{ManifestError, ResolvedConfig};

/// Mapping from source asset names to their built outputs.
///
/// Loaded from the manifest file the bundling pipeline writes into the
/// resolved output directory. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Load a manifest from an explicit path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), entries = manifest.len(), "manifest loaded");

        Ok(manifest)
    }

    /// Load the manifest belonging to a resolved configuration.
    pub fn for_config(config: &ResolvedConfig) -> Result<Self, ManifestError> {
        Self::load(config.manifest_path())
    }

    /// Parse a manifest from JSON text (for testing)
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(json).map_err(|e| ManifestError::Parse {
            message: e.to_string(),
        })
    }

    /// Record for a source asset name.
    pub fn entry(&self, name: &str) -> Result<&ManifestEntry, ManifestError> {
        self.entries
            .get(name)
            .ok_or_else(|| ManifestError::UnknownAsset {
                name: name.to_string(),
            })
    }

    /// Built output path for a source asset name.
    pub fn asset_path(&self, name: &str) -> Result<&str, ManifestError> {
        Ok(self.entry(name)?.file.as_str())
    }

    /// Source names of all records flagged as entry points.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_entry)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const FIXTURE: &str = r#"
{
  "frontend/index.js": {
    "file": "assets/index-B2bJr9x3.js",
    "src": "frontend/index.js",
    "isEntry": true,
    "css": ["assets/index-D8kPq2.css"]
  },
  "frontend/styles.scss": {
    "file": "assets/styles-9fCq1Wv.css",
    "src": "frontend/styles.scss",
    "isEntry": true
  },
  "frontend/chunk.js": {
    "file": "assets/chunk-Zx0aa1.js"
  }
}
"#;

    #[test]
    fn test_lookup_by_source_name() {
        let manifest = Manifest::from_json_str(FIXTURE).unwrap();

        assert_eq!(
            manifest.asset_path("frontend/index.js").unwrap(),
            "assets/index-B2bJr9x3.js"
        );
        assert_eq!(
            manifest.entry("frontend/index.js").unwrap().css,
            vec!["assets/index-D8kPq2.css"]
        );
    }

    #[test]
    fn test_unknown_asset() {
        let manifest = Manifest::from_json_str(FIXTURE).unwrap();
        let err = manifest.entry("frontend/nope.js").unwrap_err();
        assert!(matches!(err, ManifestError::UnknownAsset { name } if name == "frontend/nope.js"));
    }

    #[test]
    fn test_entry_names_skip_chunks() {
        let manifest = Manifest::from_json_str(FIXTURE).unwrap();
        let names: Vec<&str> = manifest.entry_names().collect();
        assert_eq!(names, vec!["frontend/index.js", "frontend/styles.scss"]);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        fs::write(&path, FIXTURE).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn test_missing_manifest_file() {
        let err = Manifest::load(PathBuf::from("/no/such/manifest.json")).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_manifest_is_a_parse_error() {
        let err = Manifest::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn test_for_config_reads_from_out_dir() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        let out_dir = root.join("dist");
        fs::create_dir(&out_dir).unwrap();
        fs::write(out_dir.join("manifest.json"), FIXTURE).unwrap();

        let config = ResolvedConfig::new(
            root.clone(),
            out_dir,
            "manifest.json".to_string(),
            vec![root.join("frontend/index.js")],
        );

        let manifest = Manifest::for_config(&config).unwrap();
        assert!(!manifest.is_empty());
    }
}
