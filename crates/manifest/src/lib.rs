//! Build manifest consumption for the assetforge pipeline
//!
//! The bundling pipeline writes a manifest into the resolved output
//! directory, mapping source asset names to their built, hashed outputs.
//! This crate loads that manifest, looks up built assets by source name, and
//! renders the HTML tags a server-side template needs to reference them.

pub mod entry;
pub mod manifest;
pub mod tags;

pub use entry::ManifestEntry;
pub use manifest::Manifest;
pub use tags::{script_tag, stylesheet_tags};
