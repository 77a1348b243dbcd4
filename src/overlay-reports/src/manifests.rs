//! JSON manifests shared by local and upstream lookups.
//!
//! `backstage.json` pins the framework version of a workspace; a plugin's
//! `package.json` yields its `name@version` display string.

use serde::Deserialize;

/// Framework manifest (`backstage.json`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackstageManifest {
    /// Framework version the workspace is built against.
    #[serde(default)]
    pub version: Option<String>,
}

impl BackstageManifest {
    /// Parses a manifest and returns its non-empty version.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the content is not a valid manifest.
    pub fn parse_version(content: &str) -> Result<Option<String>, serde_json::Error> {
        let manifest: Self = serde_json::from_str(content)?;
        Ok(manifest.version.filter(|v| !v.trim().is_empty()))
    }
}

/// Node package manifest (`package.json`), reduced to what the report shows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

impl PackageManifest {
    /// Returns `name@version` when both fields are present.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match (self.name.as_deref(), self.version.as_deref()) {
            (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
                Some(format!("{name}@{version}"))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_display_name() {
        let manifest: PackageManifest = serde_json::from_str(
            r#"{"name": "@backstage-community/plugin-3scale-backend", "version": "3.2.0", "private": false}"#,
        )
        .unwrap();

        assert_eq!(
            manifest.display_name().as_deref(),
            Some("@backstage-community/plugin-3scale-backend@3.2.0")
        );
    }

    #[test]
    fn package_without_version_has_no_display_name() {
        let manifest: PackageManifest = serde_json::from_str(r#"{"name": "foo"}"#).unwrap();
        assert_eq!(manifest.display_name(), None);
    }

    #[test]
    fn backstage_version() {
        assert_eq!(
            BackstageManifest::parse_version(r#"{"version": "1.39.1"}"#).unwrap(),
            Some("1.39.1".to_string())
        );
        assert_eq!(BackstageManifest::parse_version("{}").unwrap(), None);
        assert!(BackstageManifest::parse_version("not json").is_err());
    }
}
