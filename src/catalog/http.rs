// HTTP document source

use crate::catalog::source_trait::DocumentSource;
use anyhow::Result;
use log::debug;
use reqwest::{Client, Response, StatusCode};

/// User-Agent string for all HTTP requests
const USER_AGENT: &str = concat!("dlpage/", env!("CARGO_PKG_VERSION"));

lazy_static::lazy_static! {
    /// Shared HTTP client with proper User-Agent
    static ref CLIENT: Client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client");
}

/// Reads documents from a site served over HTTP.
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn document_url(&self, name: &str) -> String {
        format!("{}/static/{}.json", self.base_url, name)
    }
}

#[async_trait::async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<Option<String>> {
        let url = self.document_url(name);
        let response: Response = CLIENT.get(&url).send().await?;

        // Anything but a plain 200 counts as no document, redirects included.
        if response.status() != StatusCode::OK {
            debug!("{} returned {}", url, response.status());
            return Ok(None);
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Ok(None);
        }
        Ok(Some(body))
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
