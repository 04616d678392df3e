//! Advisory configuration checks
//!
//! Hard validation is fail-fast inside the resolver; the checks here only
//! surface suspicious-but-legal configurations. They produce warnings, never
//! errors, and never fail a load.

use std::collections::HashSet;
use types::ResolvedConfig;

/// Advisory checker over an already-resolved configuration
pub struct ConfigChecker;

impl ConfigChecker {
    /// Run all advisory checks.
    pub fn check(config: &ResolvedConfig) -> CheckReport {
        let mut report = CheckReport::new();

        Self::check_out_dir(config, &mut report);
        Self::check_manifest_name(config, &mut report);
        Self::check_entry_points(config, &mut report);

        report
    }

    fn check_out_dir(config: &ResolvedConfig, report: &mut CheckReport) {
        if config.out_dir() == config.root() {
            report.add_warning(
                "build.outDir",
                "Output directory is the project root; build output will mix with sources",
            );
        } else if !config.out_dir().starts_with(config.root()) {
            report.add_warning(
                "build.outDir",
                &format!(
                    "Output directory {} is outside the project root",
                    config.out_dir().display()
                ),
            );
        }
    }

    fn check_manifest_name(config: &ResolvedConfig, report: &mut CheckReport) {
        if !config.manifest_file_name().ends_with(".json") {
            report.add_warning(
                "build.manifest",
                &format!(
                    "Manifest filename '{}' has no .json extension",
                    config.manifest_file_name()
                ),
            );
        }
    }

    fn check_entry_points(config: &ResolvedConfig, report: &mut CheckReport) {
        let mut seen = HashSet::new();
        for entry in config.entry_points() {
            if !seen.insert(entry) {
                report.add_warning(
                    "build.entryPoints",
                    &format!("Duplicate entry point: {}", entry.display()),
                );
            }

            if entry.starts_with(config.out_dir()) {
                report.add_warning(
                    "build.entryPoints",
                    &format!(
                        "Entry point {} is inside the output directory",
                        entry.display()
                    ),
                );
            }
        }
    }
}

/// Report of advisory findings
#[derive(Debug, Clone)]
pub struct CheckReport {
    warnings: Vec<CheckIssue>,
}

/// A single advisory finding
#[derive(Debug, Clone)]
pub struct CheckIssue {
    pub field: String,
    pub message: String,
}

impl CheckReport {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(CheckIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn warnings(&self) -> &[CheckIssue] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Checks: {} warnings", self.warnings.len())
    }
}

impl Default for CheckReport {
    fn default() -> Self {
        Self::new()
    }
}
