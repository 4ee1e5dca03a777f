// Catalog document types

use crate::constants;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `downloads.json`: language code → version → `[patched, unpatched]` file names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DownloadsCatalog(BTreeMap<String, BTreeMap<String, InstallerPair>>);

/// The two installer files of one version. Empty names are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<Option<String>>>", into = "Vec<Option<String>>")]
pub struct InstallerPair {
    pub patched: Option<String>,
    pub unpatched: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallerKind {
    Patched,
    Unpatched,
}

/// `mirrored.json`: relative paths also served by the mirror host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MirrorList(Vec<String>);

fn non_empty(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.is_empty())
}

impl From<Option<Vec<Option<String>>>> for InstallerPair {
    fn from(files: Option<Vec<Option<String>>>) -> Self {
        let mut files = files.unwrap_or_default().into_iter();
        let patched = non_empty(files.next().flatten());
        let unpatched = non_empty(files.next().flatten());
        Self { patched, unpatched }
    }
}

impl From<InstallerPair> for Vec<Option<String>> {
    fn from(pair: InstallerPair) -> Self {
        vec![pair.patched, pair.unpatched]
    }
}

impl InstallerPair {
    pub fn new(patched: Option<&str>, unpatched: Option<&str>) -> Self {
        Self {
            patched: non_empty(patched.map(String::from)),
            unpatched: non_empty(unpatched.map(String::from)),
        }
    }

    pub fn file(&self, kind: InstallerKind) -> Option<&str> {
        match kind {
            InstallerKind::Patched => self.patched.as_deref(),
            InstallerKind::Unpatched => self.unpatched.as_deref(),
        }
    }
}

impl InstallerKind {
    pub const ALL: [InstallerKind; 2] = [InstallerKind::Patched, InstallerKind::Unpatched];

    pub fn directory(self) -> &'static str {
        match self {
            InstallerKind::Patched => constants::PATCHED_INSTALLER_DIR,
            InstallerKind::Unpatched => constants::UNPATCHED_INSTALLER_DIR,
        }
    }

    /// Path of an installer file relative to either host.
    pub fn relative_path(self, file: &str) -> String {
        format!("{}{}", self.directory(), file)
    }
}

impl std::fmt::Display for InstallerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstallerKind::Patched => write!(f, "patched"),
            InstallerKind::Unpatched => write!(f, "unpatched"),
        }
    }
}

impl DownloadsCatalog {
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn language(&self, language: &str) -> Option<&BTreeMap<String, InstallerPair>> {
        self.0.get(language)
    }

    pub fn insert(&mut self, language: &str, version: &str, pair: InstallerPair) {
        self.0
            .entry(language.to_string())
            .or_default()
            .insert(version.to_string(), pair);
    }

    /// Every relative path the catalog references, across languages and kinds.
    pub fn relative_paths(&self) -> impl Iterator<Item = String> + '_ {
        self.0.values().flat_map(|versions| {
            versions.values().flat_map(|pair| {
                InstallerKind::ALL
                    .into_iter()
                    .filter_map(move |kind| pair.file(kind).map(|file| kind.relative_path(file)))
            })
        })
    }
}

impl MirrorList {
    pub fn new(paths: Vec<String>) -> Self {
        Self(paths)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.iter().any(|p| p == path)
    }

    pub fn paths(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_downloads_catalog() {
        let json = r#"{
            "en": {
                "85": ["wlm85-en.exe", "msn85-en.exe"],
                "81": ["", "msn81-en.exe"],
                "75": [null, null],
                "70": ["wlm70-en.exe"]
            }
        }"#;
        let catalog: DownloadsCatalog = serde_json::from_str(json).unwrap();
        let en = catalog.language("en").unwrap();

        assert_eq!(en["85"].file(InstallerKind::Patched), Some("wlm85-en.exe"));
        assert_eq!(en["85"].file(InstallerKind::Unpatched), Some("msn85-en.exe"));
        assert_eq!(en["81"].patched, None);
        assert_eq!(en["75"], InstallerPair::default());
        assert_eq!(en["70"].unpatched, None);
        assert!(catalog.language("de").is_none());
    }

    #[test]
    fn test_null_pair_is_empty() {
        let catalog: DownloadsCatalog = serde_json::from_str(r#"{"en": {"10": null}}"#).unwrap();
        assert_eq!(catalog.language("en").unwrap()["10"], InstallerPair::default());
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(
            InstallerKind::Patched.relative_path("a.exe"),
            "patched-installer/a.exe"
        );
        assert_eq!(
            InstallerKind::Unpatched.relative_path("b.exe"),
            "msn-installer/b.exe"
        );

        let mut catalog = DownloadsCatalog::default();
        catalog.insert("en", "85", InstallerPair::new(Some("a.exe"), Some("")));
        let paths: Vec<String> = catalog.relative_paths().collect();
        assert_eq!(paths, vec!["patched-installer/a.exe"]);
    }

    #[test]
    fn test_mirror_list_membership_is_exact() {
        let mirrors: MirrorList =
            serde_json::from_str(r#"["patched-installer/a.exe", "msn-installer/b.exe"]"#).unwrap();
        assert!(mirrors.contains("patched-installer/a.exe"));
        assert!(!mirrors.contains("patched-installer/a.ex"));
        assert!(!mirrors.contains("a.exe"));
    }
}
