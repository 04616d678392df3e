//! Error types for the assetforge build pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the assetforge system
#[derive(Error, Debug)]
pub enum AssetForgeError {
    /// Configuration loading or resolution errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Manifest loading or lookup errors
    #[error("Manifest error: {0}")]
    Manifest(String),
}

/// Result type alias for assetforge operations
pub type Result<T> = std::result::Result<T, AssetForgeError>;

/// Configuration resolution specific errors
///
/// Resolution is fail-fast: one resolution call produces at most one of
/// these, the first violation in rule order. Every variant concerns exactly
/// one configuration key; [`ResolveError::key`] returns that key so callers
/// can render field-addressed messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A key does not case-sensitively match any recognized option
    #[error("Unrecognized configuration key: {key}")]
    UnrecognizedKey { key: String },

    /// `root` does not resolve to an existing directory
    #[error("Invalid root {value:?}: {reason}")]
    InvalidRoot { value: String, reason: String },

    /// `build.outDir` is not usable as a path on the host filesystem
    #[error("Invalid output path {value:?}: {reason}")]
    InvalidOutputPath { value: String, reason: String },

    /// `build.manifest` is not a plain filename
    #[error("Invalid manifest filename {value:?}: must be a non-empty name without path separators")]
    InvalidManifestName { value: String },

    /// `build.entryPoints` is missing, empty, or not a list of strings
    #[error("Invalid entry points: {reason}")]
    InvalidEntryPoints { reason: String },

    /// A listed entry point does not reference an existing file
    #[error("Missing entry point: {}", .path.display())]
    MissingEntryPoint { path: PathBuf },
}

impl ResolveError {
    /// The configuration key the error concerns.
    pub fn key(&self) -> &str {
        match self {
            ResolveError::UnrecognizedKey { key } => key,
            ResolveError::InvalidRoot { .. } => "root",
            ResolveError::InvalidOutputPath { .. } => "build.outDir",
            ResolveError::InvalidManifestName { .. } => "build.manifest",
            ResolveError::InvalidEntryPoints { .. } | ResolveError::MissingEntryPoint { .. } => {
                "build.entryPoints"
            }
        }
    }
}

/// Configuration file loading errors
#[derive(Error, Debug)]
pub enum ConfigFileError {
    /// Configuration file does not exist
    #[error("Configuration file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid YAML or not a mapping
    #[error("Configuration parse error: {message}")]
    Parse { message: String },

    /// Document parsed but failed resolution
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Manifest loading and lookup errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file does not exist (the pipeline has not produced it yet)
    #[error("Manifest not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Manifest file could not be read
    #[error("Failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not valid JSON in the expected shape
    #[error("Manifest parse error: {message}")]
    Parse { message: String },

    /// No manifest record exists for the requested source asset
    #[error("Unknown asset in manifest: {name}")]
    UnknownAsset { name: String },
}

// Conversion implementations for common error types

impl From<ResolveError> for AssetForgeError {
    fn from(err: ResolveError) -> Self {
        AssetForgeError::Config(err.to_string())
    }
}

impl From<ConfigFileError> for AssetForgeError {
    fn from(err: ConfigFileError) -> Self {
        AssetForgeError::Config(err.to_string())
    }
}

impl From<ManifestError> for AssetForgeError {
    fn from(err: ManifestError) -> Self {
        AssetForgeError::Manifest(err.to_string())
    }
}
