//! HTML tag rendering for built assets
//!
//! Server-side templates reference built assets through these helpers: a
//! module script tag for a JS entry, and stylesheet links for the CSS an
//! entry emits. `public_base` is the URL prefix the output directory is
//! served under.

use crate::manifest::Manifest;
use types::ManifestError;

/// Render a module script tag for a built entry.
pub fn script_tag(
    manifest: &Manifest,
    name: &str,
    public_base: &str,
) -> Result<String, ManifestError> {
    let entry = manifest.entry(name)?;

    Ok(format!(
        r#"<script type="module" src="{}"></script>"#,
        asset_url(public_base, &entry.file)
    ))
}

/// Render stylesheet link tags for an entry: the built file itself when the
/// entry is a stylesheet, then every CSS file it emits.
pub fn stylesheet_tags(
    manifest: &Manifest,
    name: &str,
    public_base: &str,
) -> Result<Vec<String>, ManifestError> {
    let entry = manifest.entry(name)?;

    let mut files: Vec<&str> = Vec::new();
    if entry.is_stylesheet() {
        files.push(&entry.file);
    }
    files.extend(entry.css.iter().map(String::as_str));

    Ok(files
        .into_iter()
        .map(|file| {
            format!(
                r#"<link rel="stylesheet" href="{}">"#,
                asset_url(public_base, file)
            )
        })
        .collect())
}

fn asset_url(public_base: &str, file: &str) -> String {
    format!("{}/{}", public_base.trim_end_matches('/'), file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
        Manifest::from_json_str(
            r#"
{
  "frontend/index.js": {
    "file": "assets/index-B2b.js",
    "isEntry": true,
    "css": ["assets/index-D8k.css"]
  },
  "frontend/styles.scss": {
    "file": "assets/styles-9fC.css",
    "isEntry": true
  }
}
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_script_tag_for_js_entry() {
        let tag = script_tag(&manifest(), "frontend/index.js", "/static").unwrap();
        assert_eq!(
            tag,
            r#"<script type="module" src="/static/assets/index-B2b.js"></script>"#
        );
    }

    #[test]
    fn test_stylesheet_tags_for_css_entry() {
        let tags = stylesheet_tags(&manifest(), "frontend/styles.scss", "/static").unwrap();
        assert_eq!(
            tags,
            vec![r#"<link rel="stylesheet" href="/static/assets/styles-9fC.css">"#]
        );
    }

    #[test]
    fn test_stylesheet_tags_include_emitted_css() {
        let tags = stylesheet_tags(&manifest(), "frontend/index.js", "/static").unwrap();
        assert_eq!(
            tags,
            vec![r#"<link rel="stylesheet" href="/static/assets/index-D8k.css">"#]
        );
    }

    #[test]
    fn test_trailing_slash_in_base_is_folded() {
        let tag = script_tag(&manifest(), "frontend/index.js", "/static/").unwrap();
        assert!(tag.contains("/static/assets/index-B2b.js"));
    }

    #[test]
    fn test_unknown_asset_is_an_error() {
        let err = script_tag(&manifest(), "frontend/nope.js", "/static").unwrap_err();
        assert!(matches!(err, ManifestError::UnknownAsset { .. }));
    }
}
