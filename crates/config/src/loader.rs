//! Configuration loader implementation

use crate::checks::ConfigChecker;
use crate::raw::RawConfig;
use crate::resolver::ConfigResolver;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};
use types::{ConfigFileError, ResolvedConfig};

/// Well-known configuration filename, relative to the project root.
pub const CONFIG_FILE_NAME: &str = "assetforge.yaml";

/// Configuration loader that reads and resolves the project's build
/// configuration file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and resolve `assetforge.yaml` from a project root.
    pub fn load<P: AsRef<Path>>(project_root: P) -> Result<ResolvedConfig> {
        let project_root = project_root.as_ref();
        let config_path = project_root.join(CONFIG_FILE_NAME);
        Self::load_file(config_path, project_root)
    }

    /// Load and resolve a configuration file at an explicit path.
    pub fn load_file<P: AsRef<Path>>(config_path: P, project_root: &Path) -> Result<ResolvedConfig> {
        let config_path = config_path.as_ref();

        // Check if config file exists
        if !config_path.exists() {
            return Err(ConfigFileError::FileNotFound {
                path: config_path.to_path_buf(),
            }
            .into());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|source| ConfigFileError::Io {
                path: config_path.to_path_buf(),
                source,
            })?;

        debug!(path = %config_path.display(), "configuration file read");

        let resolved = Self::resolve_str(&contents, project_root).with_context(|| {
            format!(
                "failed to resolve configuration from {}",
                config_path.display()
            )
        })?;

        info!(
            root = %resolved.root().display(),
            out_dir = %resolved.out_dir().display(),
            manifest = %resolved.manifest_file_name(),
            entry_points = resolved.entry_points().len(),
            "configuration loaded"
        );

        Ok(resolved)
    }

    /// Load configuration from a YAML string (for testing)
    pub fn load_from_str(yaml: &str, project_root: &Path) -> Result<ResolvedConfig> {
        Self::resolve_str(yaml, project_root).context("failed to resolve configuration from string")
    }

    fn resolve_str(yaml: &str, project_root: &Path) -> Result<ResolvedConfig, ConfigFileError> {
        let raw = RawConfig::from_yaml_str(yaml)?;
        let resolved = ConfigResolver::resolve(&raw, project_root)?;

        // Advisory findings never fail the load; they are only logged.
        let report = ConfigChecker::check(&resolved);
        for issue in report.warnings() {
            warn!(field = %issue.field, "{}", issue.message);
        }

        Ok(resolved)
    }
}
