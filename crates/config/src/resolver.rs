//! Configuration resolution: validation, defaults, path normalization

use crate::raw::{render_value, RawConfig};
use std::path::{Path, PathBuf};
use tracing::debug;
use types::utils::{canonicalize_native, is_valid_file_name, is_valid_path_text, normalize_path};
use types::{ResolveError, ResolvedConfig};

/// Default output directory, relative to the project root.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Default manifest filename inside the output directory.
pub const DEFAULT_MANIFEST_FILE_NAME: &str = "manifest.json";

/// Single-shot transform from a raw document to a [`ResolvedConfig`].
///
/// Stateless: each call reads the raw document and the filesystem and
/// produces an independent result, so concurrent resolutions in one process
/// cannot interfere with each other.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve a raw configuration against a project root.
    ///
    /// `project_root` must be an absolute path to an existing directory.
    /// Validation is fail-fast, first violation wins, in this order:
    /// unrecognized keys, `root`, `build.outDir`, `build.manifest`,
    /// `build.entryPoints`. Only read-only existence checks touch the
    /// filesystem.
    pub fn resolve(raw: &RawConfig, project_root: &Path) -> Result<ResolvedConfig, ResolveError> {
        if !project_root.is_absolute() {
            return Err(ResolveError::InvalidRoot {
                value: project_root.display().to_string(),
                reason: "project root must be an absolute path".to_string(),
            });
        }

        raw.check_keys()?;

        let root = Self::resolve_root(raw, project_root)?;
        let out_dir = Self::resolve_out_dir(raw, &root)?;
        let manifest_file_name = Self::resolve_manifest_name(raw)?;
        let entry_points = Self::resolve_entry_points(raw, &root)?;

        debug!(
            root = %root.display(),
            out_dir = %out_dir.display(),
            manifest = %manifest_file_name,
            entry_points = entry_points.len(),
            "configuration resolved"
        );

        Ok(ResolvedConfig::new(
            root,
            out_dir,
            manifest_file_name,
            entry_points,
        ))
    }

    /// `root` defaults to the project root; an explicit value resolves
    /// relative to it and must name an existing directory.
    fn resolve_root(raw: &RawConfig, project_root: &Path) -> Result<PathBuf, ResolveError> {
        let candidate = match raw.get("root") {
            None => project_root.to_path_buf(),
            Some(value) => {
                let text = value.as_str().ok_or_else(|| ResolveError::InvalidRoot {
                    value: render_value(value),
                    reason: "must be a string".to_string(),
                })?;
                // Joining an absolute path replaces the base, so absolute
                // roots pass through unchanged.
                project_root.join(text)
            }
        };

        let root =
            canonicalize_native(&candidate).map_err(|source| ResolveError::InvalidRoot {
                value: candidate.display().to_string(),
                reason: source.to_string(),
            })?;

        if !root.is_dir() {
            return Err(ResolveError::InvalidRoot {
                value: root.display().to_string(),
                reason: "not a directory".to_string(),
            });
        }

        Ok(root)
    }

    /// `build.outDir` defaults to `"dist"`; relative values resolve against
    /// `root`. The directory need not exist, so normalization is lexical.
    fn resolve_out_dir(raw: &RawConfig, root: &Path) -> Result<PathBuf, ResolveError> {
        let text = match raw.build_value("outDir") {
            None => DEFAULT_OUT_DIR.to_string(),
            Some(value) => value
                .as_str()
                .ok_or_else(|| ResolveError::InvalidOutputPath {
                    value: render_value(value),
                    reason: "must be a string".to_string(),
                })?
                .to_string(),
        };

        if !is_valid_path_text(&text) {
            return Err(ResolveError::InvalidOutputPath {
                value: text,
                reason: "contains characters invalid on this filesystem".to_string(),
            });
        }

        Ok(normalize_path(&root.join(&text)))
    }

    /// `build.manifest` defaults to `"manifest.json"` and must be a plain
    /// filename.
    fn resolve_manifest_name(raw: &RawConfig) -> Result<String, ResolveError> {
        let name = match raw.build_value("manifest") {
            None => DEFAULT_MANIFEST_FILE_NAME.to_string(),
            Some(value) => value
                .as_str()
                .ok_or_else(|| ResolveError::InvalidManifestName {
                    value: render_value(value),
                })?
                .to_string(),
        };

        if !is_valid_file_name(&name) {
            return Err(ResolveError::InvalidManifestName { value: name });
        }

        Ok(name)
    }

    /// `build.entryPoints` is required, non-empty, strings only; each entry
    /// resolves against `root` and must name an existing file. The first
    /// missing file in input order is the one reported.
    fn resolve_entry_points(raw: &RawConfig, root: &Path) -> Result<Vec<PathBuf>, ResolveError> {
        let Some(value) = raw.build_value("entryPoints") else {
            return Err(ResolveError::InvalidEntryPoints {
                reason: "required, but missing".to_string(),
            });
        };

        let Some(items) = value.as_sequence() else {
            return Err(ResolveError::InvalidEntryPoints {
                reason: "must be a list of strings".to_string(),
            });
        };

        if items.is_empty() {
            return Err(ResolveError::InvalidEntryPoints {
                reason: "list must not be empty".to_string(),
            });
        }

        let mut entry_points = Vec::with_capacity(items.len());
        for item in items {
            let Some(text) = item.as_str() else {
                return Err(ResolveError::InvalidEntryPoints {
                    reason: format!("element {} is not a string", render_value(item)),
                });
            };

            let candidate = normalize_path(&root.join(text));
            let path = canonicalize_native(&candidate).map_err(|_| {
                ResolveError::MissingEntryPoint {
                    path: candidate.clone(),
                }
            })?;

            if !path.is_file() {
                return Err(ResolveError::MissingEntryPoint { path: candidate });
            }

            entry_points.push(path);
        }

        Ok(entry_points)
    }
}
