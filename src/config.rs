// Config module for the site file and directory resolution

use crate::constants;
use crate::error::PageError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub fn config_dir() -> String {
    std::env::var("DLPAGE_DIR").unwrap_or_else(|_| ".".to_string())
}

pub fn site_path() -> String {
    let dir = config_dir();
    if dir == "." {
        constants::SITE_FILE.to_string()
    } else {
        format!("{}/{}", dir, constants::SITE_FILE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub hosts: Hosts,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default = "default_labels")]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hosts {
    /// Primary object storage prefix.
    pub canonical: String,
    pub mirror: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Site root holding `static/`: either an http(s) base URL or a directory.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub known_versions: Vec<String>,
    /// Versions that have an instructions panel. Defaults to `known_versions`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panels: Option<Vec<String>>,
}

impl Default for Hosts {
    fn default() -> Self {
        Self {
            canonical: constants::DEFAULT_CANONICAL_HOST.to_string(),
            mirror: constants::DEFAULT_MIRROR_HOST.to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: ".".to_string(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            known_versions: constants::DEFAULT_KNOWN_VERSIONS
                .iter()
                .map(|v| v.to_string())
                .collect(),
            panels: None,
        }
    }
}

fn default_labels() -> BTreeMap<String, String> {
    constants::DEFAULT_LABELS
        .iter()
        .map(|(version, label)| (version.to_string(), label.to_string()))
        .collect()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hosts: Hosts::default(),
            catalog: CatalogConfig::default(),
            page: PageConfig::default(),
            labels: default_labels(),
        }
    }
}

impl SiteConfig {
    /// Load `site.toml` from the config directory, falling back to defaults when it is absent.
    pub fn load() -> anyhow::Result<Self> {
        let path = site_path();
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Self::parse(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", path);
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(text: &str) -> Result<Self, PageError> {
        toml::from_str(text).map_err(|e| PageError::Config(e.to_string()))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let dir = config_dir();
        std::fs::create_dir_all(&dir)?;
        let text = toml::to_string_pretty(self)?;
        std::fs::write(site_path(), text)?;
        Ok(())
    }

    pub fn panel_versions(&self) -> &[String] {
        self.page
            .panels
            .as_deref()
            .unwrap_or(&self.page.known_versions)
    }

    /// Catalog location with relative directories resolved against the config directory.
    pub fn catalog_location(&self) -> String {
        let source = &self.catalog.source;
        if is_http_location(source) {
            return source.clone();
        }
        let path = PathBuf::from(source);
        if path.is_absolute() {
            source.clone()
        } else {
            PathBuf::from(config_dir())
                .join(path)
                .to_string_lossy()
                .to_string()
        }
    }
}

pub fn is_http_location(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = SiteConfig::parse("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.page.known_versions.len(), 12);
        assert_eq!(config.page.known_versions[0], "85");
        assert_eq!(config.labels.get("85").map(String::as_str), Some("WLM 8.5"));
    }

    #[test]
    fn test_partial_file_overrides_hosts() {
        let text = r#"
[hosts]
canonical = "https://primary.example/"
mirror = "https://mirror.example/"

[page]
known_versions = ["85", "81"]
panels = ["85"]
"#;
        let config = SiteConfig::parse(text).unwrap();
        assert_eq!(config.hosts.canonical, "https://primary.example/");
        assert_eq!(config.page.known_versions, vec!["85", "81"]);
        assert_eq!(config.panel_versions(), &["85".to_string()]);
        assert_eq!(config.catalog.source, ".");
        assert_eq!(config.labels.len(), 2);
    }

    #[test]
    fn test_panels_default_to_known_versions() {
        let config = SiteConfig::default();
        assert_eq!(config.panel_versions(), config.page.known_versions.as_slice());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let err = SiteConfig::parse("[hosts]\ncanonical = 3").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&SiteConfig::default()).unwrap();
        assert!(text.contains("[hosts]"));
        assert!(text.contains("known_versions"));
        assert_eq!(SiteConfig::parse(&text).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_http_location_detection() {
        assert!(is_http_location("https://site.example"));
        assert!(is_http_location("http://site.example"));
        assert!(!is_http_location("./public"));
    }
}
