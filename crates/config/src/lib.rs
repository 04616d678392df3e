//! Configuration management for the assetforge build pipeline
//!
//! This crate handles loading, validation, defaulting, and path
//! normalization of a project's build configuration, producing the immutable
//! `ResolvedConfig` handed to the bundling pipeline.

pub mod checks;
pub mod loader;
pub mod raw;
pub mod resolver;

pub use checks::{CheckIssue, CheckReport, ConfigChecker};
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use raw::RawConfig;
pub use resolver::{ConfigResolver, DEFAULT_MANIFEST_FILE_NAME, DEFAULT_OUT_DIR};
