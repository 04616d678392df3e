//! Raw configuration document and recognized-key schema

use serde_yaml::{Mapping, Value};
use types::{ConfigFileError, ResolveError};

/// Top-level keys the resolver understands.
pub const RECOGNIZED_KEYS: &[&str] = &["root", "build"];

/// Keys understood under `build`.
pub const RECOGNIZED_BUILD_KEYS: &[&str] = &["outDir", "manifest", "entryPoints"];

/// Unvalidated, as-authored configuration document.
///
/// An order-preserving mapping from string keys to arbitrary YAML values.
/// Carries no invariants of its own; the resolver either turns it into a
/// `ResolvedConfig` or rejects it with the first violation in document
/// order.
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    document: Mapping,
}

impl RawConfig {
    /// Parse a raw document from YAML text.
    ///
    /// An empty document is valid and behaves like an empty mapping; any
    /// other non-mapping top level is a parse error.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigFileError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_yaml::from_str(yaml).map_err(|e| ConfigFileError::Parse {
            message: e.to_string(),
        })?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(document) => Ok(Self { document }),
            other => Err(ConfigFileError::Parse {
                message: format!(
                    "expected a mapping at the top level, got {}",
                    value_kind(&other)
                ),
            }),
        }
    }

    /// Wrap an already-parsed mapping.
    pub fn from_mapping(document: Mapping) -> Self {
        Self { document }
    }

    /// Value for a top-level key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        mapping_get(&self.document, key)
    }

    /// The `build` section, if present and a mapping.
    pub fn build_section(&self) -> Option<&Mapping> {
        self.get("build").and_then(Value::as_mapping)
    }

    /// Value for a key under `build`, if present.
    pub fn build_value(&self, key: &str) -> Option<&Value> {
        self.build_section().and_then(|section| mapping_get(section, key))
    }

    /// First key, in document order, that does not case-sensitively match a
    /// recognized option. Non-string keys are never recognized.
    pub fn first_unrecognized_key(&self) -> Option<String> {
        for (key, value) in &self.document {
            let Some(name) = key.as_str() else {
                return Some(render_value(key));
            };
            if !RECOGNIZED_KEYS.contains(&name) {
                return Some(name.to_string());
            }
            if name == "build" {
                if let Some(section) = value.as_mapping() {
                    for (section_key, _) in section {
                        let Some(section_name) = section_key.as_str() else {
                            return Some(format!("build.{}", render_value(section_key)));
                        };
                        if !RECOGNIZED_BUILD_KEYS.contains(&section_name) {
                            return Some(format!("build.{section_name}"));
                        }
                    }
                }
            }
        }
        None
    }

    /// Reject the first unrecognized key, if any.
    pub fn check_keys(&self) -> Result<(), ResolveError> {
        match self.first_unrecognized_key() {
            Some(key) => Err(ResolveError::UnrecognizedKey { key }),
            None => Ok(()),
        }
    }

    /// Whether the document has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }
}

fn mapping_get<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping
        .iter()
        .find(|(k, _)| k.as_str() == Some(key))
        .map(|(_, v)| v)
}

/// Short YAML type name for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Compact rendering of a value for error messages.
pub(crate) fn render_value(value: &Value) -> String {
    if let Some(text) = value.as_str() {
        return text.to_string();
    }
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| String::from("<unprintable>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_document() {
        let raw = RawConfig::from_yaml_str(
            r#"
root: frontend
build:
  outDir: dist
  manifest: manifest.json
  entryPoints:
    - index.js
"#,
        )
        .unwrap();

        assert_eq!(raw.get("root").and_then(Value::as_str), Some("frontend"));
        assert_eq!(
            raw.build_value("outDir").and_then(Value::as_str),
            Some("dist")
        );
        assert!(raw.check_keys().is_ok());
    }

    #[test]
    fn test_empty_document_is_an_empty_mapping() {
        let raw = RawConfig::from_yaml_str("").unwrap();
        assert!(raw.is_empty());
        assert!(raw.check_keys().is_ok());
    }

    #[test]
    fn test_non_mapping_top_level_is_a_parse_error() {
        let err = RawConfig::from_yaml_str("- just\n- a\n- list\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
    }

    #[test]
    fn test_capitalized_key_is_unrecognized() {
        let raw = RawConfig::from_yaml_str(
            r#"
build:
  Outdir: dist
  entryPoints: [index.js]
"#,
        )
        .unwrap();

        assert_eq!(
            raw.first_unrecognized_key(),
            Some("build.Outdir".to_string())
        );
    }

    #[test]
    fn test_unknown_top_level_key_is_unrecognized() {
        let raw = RawConfig::from_yaml_str("plugins: []\n").unwrap();
        assert_eq!(raw.first_unrecognized_key(), Some("plugins".to_string()));
    }

    #[test]
    fn test_first_offender_in_document_order_wins() {
        let raw = RawConfig::from_yaml_str(
            r#"
server: {}
build:
  Outdir: dist
"#,
        )
        .unwrap();

        // `server` appears before `build.Outdir` in the document.
        assert_eq!(raw.first_unrecognized_key(), Some("server".to_string()));
    }

    #[test]
    fn test_check_keys_returns_typed_error() {
        let raw = RawConfig::from_yaml_str("Root: frontend\n").unwrap();
        assert_eq!(
            raw.check_keys(),
            Err(ResolveError::UnrecognizedKey {
                key: "Root".to_string()
            })
        );
    }
}
