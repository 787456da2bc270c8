use std::time::Duration;

use async_trait::async_trait;
use kryds_helper::{Helper, HelperClient, HelperError, HelperMetadata};
use kryds_types::WordList;

pub const DEFAULT_BASE_URL: &str = "https://krydsordexperten.dk";

/// Synonym lookups: `{base}/krydsord/{term}`
const SYNONYM_PATH: &str = "krydsord";
/// Pattern lookups: `{base}/ord/{template}`
const PATTERN_PATH: &str = "ord";

/// The site only accepts ASCII digraphs for these in synonym URLs
const SUBSTITUTIONS: &[(char, &str)] = &[('æ', "ae"), ('ø', "oe"), ('å', "aa")];

/// Danish helper backed by krydsordexperten.dk
#[derive(Clone)]
pub struct DanishHelper {
    client: HelperClient,
    base_url: String,
}

impl DanishHelper {
    pub fn new(timeout: Duration) -> Result<Self, HelperError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    /// Point the helper at a mirror or a local stand-in
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, HelperError> {
        let base_url = base_url.into();
        // Fail at startup rather than on the first lookup
        HelperClient::url(&base_url, &[])?;

        Ok(Self {
            client: HelperClient::new(timeout)?,
            base_url,
        })
    }

    async fn fetch(&self, path: &str, query: &str) -> Result<WordList, HelperError> {
        let url = HelperClient::url(&self.base_url, &[path, query])?;
        self.client.fetch_words(url).await
    }
}

#[async_trait]
impl Helper for DanishHelper {
    fn language_code(&self) -> &str {
        "danish"
    }

    fn substitutions(&self) -> &[(char, &'static str)] {
        SUBSTITUTIONS
    }

    async fn fetch_synonyms(&self, term: &str) -> Result<WordList, HelperError> {
        tracing::debug!("Danish synonym lookup: {}", term);
        self.fetch(SYNONYM_PATH, term).await
    }

    async fn fetch_pattern(&self, template: &str) -> Result<WordList, HelperError> {
        tracing::debug!("Danish pattern lookup: {}", template);
        self.fetch(PATTERN_PATH, template).await
    }

    fn metadata(&self) -> HelperMetadata {
        HelperMetadata {
            name: "Krydsordexperten".to_string(),
            host: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_table() {
        let helper = DanishHelper::new(Duration::from_secs(1)).unwrap();
        assert_eq!(helper.language_code(), "danish");
        assert_eq!(
            helper.substitutions(),
            &[('æ', "ae"), ('ø', "oe"), ('å', "aa")]
        );
    }

    #[test]
    fn test_bad_base_url_rejected() {
        assert!(DanishHelper::with_base_url("::nope::", Duration::from_secs(1)).is_err());
    }
}
