// Trait definition for static document sources

use anyhow::Result;

/// Somewhere the page's static documents can be read from (a web host, a directory on disk).
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the raw body of `/static/<name>.json`
    ///
    /// # Returns
    /// `Ok(Some(body))` for a present, non-empty document, `Ok(None)` when the document is
    /// absent or empty, and `Err` when the source itself failed.
    async fn fetch(&self, name: &str) -> Result<Option<String>>;

    /// Human-readable location, used in logs and reports
    fn describe(&self) -> String;
}
