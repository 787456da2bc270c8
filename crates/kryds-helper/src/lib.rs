mod client;
pub mod extract;

pub use client::{HelperClient, browser_headers};
pub use extract::extract_words;

use kryds_types::WordList;

/// Crossword-solution source for one language
#[async_trait::async_trait]
pub trait Helper: Send + Sync {
    /// Identifier used in `/help/{language}/...`, e.g. "danish"
    fn language_code(&self) -> &str;

    /// Letters the upstream cannot take in synonym URLs, with their replacements
    fn substitutions(&self) -> &[(char, &'static str)] {
        &[]
    }

    /// Words related to `term`
    async fn fetch_synonyms(&self, term: &str) -> Result<WordList, HelperError>;

    /// Words matching a `_`-templated pattern
    async fn fetch_pattern(&self, template: &str) -> Result<WordList, HelperError>;

    /// Provider metadata
    fn metadata(&self) -> HelperMetadata;
}

#[derive(Debug, Clone)]
pub struct HelperMetadata {
    pub name: String,
    pub host: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream responded with HTTP {0}")]
    UpstreamStatus(u16),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),
}
