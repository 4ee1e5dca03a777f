// Catalog module: loading the downloads catalog and mirror list

use std::sync::Arc;

use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::config;
use crate::constants;

pub mod file;
pub mod http;
pub mod model;
pub mod source_trait;

pub use file::FileSource;
pub use http::HttpSource;
pub use model::{DownloadsCatalog, InstallerKind, InstallerPair, MirrorList};
pub use source_trait::DocumentSource;

/// Pick the source for a configured location: http(s) URLs go over the network,
/// anything else is a directory.
pub fn source_for(location: &str) -> Arc<dyn DocumentSource> {
    if config::is_http_location(location) {
        Arc::new(HttpSource::new(location))
    } else {
        Arc::new(FileSource::new(location))
    }
}

/// Fetch and parse a document by logical name.
///
/// Returns `None` for any failure: unreachable source, missing document, or a body
/// that does not parse. Failures are logged, never returned.
pub async fn load_json<T: DeserializeOwned>(source: &dyn DocumentSource, name: &str) -> Option<T> {
    match source.fetch(name).await {
        Ok(Some(body)) => match serde_json::from_str(&body) {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("Document '{}' from {} is malformed: {}", name, source.describe(), e);
                None
            }
        },
        Ok(None) => {
            warn!("Document '{}' not available from {}", name, source.describe());
            None
        }
        Err(e) => {
            warn!("Failed to fetch '{}' from {}: {}", name, source.describe(), e);
            None
        }
    }
}

/// Both static documents, loaded once before any link population.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub downloads: Option<DownloadsCatalog>,
    pub mirrors: Option<MirrorList>,
}

impl Catalogs {
    pub async fn load(source: &dyn DocumentSource) -> Self {
        let downloads: Option<DownloadsCatalog> =
            load_json(source, constants::DOWNLOADS_DOCUMENT).await;
        let mirrors: Option<MirrorList> = load_json(source, constants::MIRRORS_DOCUMENT).await;

        if let Some(ref catalog) = downloads {
            info!(
                "Loaded downloads catalog with {} language(s) from {}",
                catalog.languages().count(),
                source.describe()
            );
        }
        if let Some(ref list) = mirrors {
            info!("Loaded {} mirrored path(s)", list.paths().len());
        }

        Self { downloads, mirrors }
    }

    pub fn new(downloads: DownloadsCatalog, mirrors: MirrorList) -> Self {
        Self {
            downloads: Some(downloads),
            mirrors: Some(mirrors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory source keyed by logical document name
    struct StubSource {
        documents: HashMap<&'static str, &'static str>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl DocumentSource for StubSource {
        async fn fetch(&self, name: &str) -> anyhow::Result<Option<String>> {
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(self.documents.get(name).map(|body| body.to_string()))
        }

        fn describe(&self) -> String {
            "stub".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_both_documents() {
        let source = StubSource {
            documents: HashMap::from([
                ("json/downloads", r#"{"en": {"85": ["a.exe", "b.exe"]}}"#),
                ("json/mirrored", r#"["patched-installer/a.exe"]"#),
            ]),
            fail: false,
        };
        let catalogs = Catalogs::load(&source).await;
        assert!(catalogs.downloads.is_some());
        assert!(catalogs.mirrors.unwrap().contains("patched-installer/a.exe"));
    }

    #[tokio::test]
    async fn test_malformed_document_is_none() {
        let source = StubSource {
            documents: HashMap::from([("json/downloads", "{not json")]),
            fail: false,
        };
        let catalogs = Catalogs::load(&source).await;
        assert!(catalogs.downloads.is_none());
        assert!(catalogs.mirrors.is_none());
    }

    #[tokio::test]
    async fn test_source_failure_is_none() {
        let source = StubSource {
            documents: HashMap::new(),
            fail: true,
        };
        let downloads: Option<DownloadsCatalog> = load_json(&source, "json/downloads").await;
        assert!(downloads.is_none());
    }

    #[test]
    fn test_source_for_location() {
        assert_eq!(source_for("https://site.example").describe(), "https://site.example");
        assert_eq!(source_for("/srv/site").describe(), "/srv/site");
    }
}
