//! Resolved build configuration model

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Fully validated, normalized build configuration.
///
/// Produced once per resolution and immutable thereafter: fields are only
/// reachable through accessors, and only the resolver assembles one. Every
/// path is absolute in OS-native form; `root` existed as a directory and
/// each entry point existed as a file at resolution time, so downstream
/// consumers need no further existence checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    root: PathBuf,
    out_dir: PathBuf,
    manifest_file_name: String,
    entry_points: Vec<PathBuf>,
}

impl ResolvedConfig {
    /// Assemble a resolved configuration from already-validated parts.
    ///
    /// Callers other than the resolver should go through the loader in the
    /// `config` crate rather than constructing one directly.
    pub fn new(
        root: PathBuf,
        out_dir: PathBuf,
        manifest_file_name: String,
        entry_points: Vec<PathBuf>,
    ) -> Self {
        Self {
            root,
            out_dir,
            manifest_file_name,
            entry_points,
        }
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build output directory. May not exist until the pipeline has run.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Filename of the manifest the pipeline writes into the output directory.
    pub fn manifest_file_name(&self) -> &str {
        &self.manifest_file_name
    }

    /// Entry points in input order.
    pub fn entry_points(&self) -> &[PathBuf] {
        &self.entry_points
    }

    /// Full path of the manifest file inside the output directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(&self.manifest_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResolvedConfig {
        ResolvedConfig::new(
            PathBuf::from("/project"),
            PathBuf::from("/project/dist"),
            "manifest.json".to_string(),
            vec![PathBuf::from("/project/frontend/index.js")],
        )
    }

    #[test]
    fn test_manifest_path_joins_out_dir_and_name() {
        assert_eq!(
            sample().manifest_path(),
            PathBuf::from("/project/dist/manifest.json")
        );
    }

    #[test]
    fn test_clone_compares_equal() {
        let config = sample();
        assert_eq!(config.clone(), config);
    }
}
