use std::collections::HashMap;
use std::sync::Arc;

use kryds_helper::Helper;
use kryds_types::{CacheKey, Query, QueryKind, WordList};

use crate::cache::LookupCache;
use crate::error::LookupError;
use crate::normalize::normalize;

/// Entry point for `/help/{language}/{word}` lookups
pub struct LookupService {
    helpers: HashMap<String, Arc<dyn Helper>>,
    cache: LookupCache,
}

impl LookupService {
    /// Registry is fixed here; a later helper for the same language replaces an earlier one
    pub fn new(helpers: impl IntoIterator<Item = Arc<dyn Helper>>) -> Self {
        let helpers = helpers
            .into_iter()
            .map(|helper| (helper.language_code().to_string(), helper))
            .collect();

        Self {
            helpers,
            cache: LookupCache::new(),
        }
    }

    /// Answer a pattern (`c_t`) or synonym (`kat`) query for `language`
    pub async fn ask(&self, language: &str, raw: &str) -> Result<WordList, LookupError> {
        let helper = self
            .helpers
            .get(language)
            .ok_or_else(|| LookupError::UnsupportedLanguage(language.to_string()))?;

        let query = Query::new(language, raw);
        let kind = query.kind();
        let normalized = normalize(kind, &query.raw, helper.substitutions());
        tracing::debug!("{} query '{}' normalized to '{}'", kind, raw, normalized);

        let key = CacheKey::new(language, kind, normalized.as_str());
        let helper = Arc::clone(helper);
        let words = self
            .cache
            .get_or_compute(key, move || async move {
                let words = match kind {
                    QueryKind::Pattern => helper.fetch_pattern(&normalized).await,
                    QueryKind::Synonym => helper.fetch_synonyms(&normalized).await,
                };
                words.map_err(LookupError::from)
            })
            .await?;

        Ok(words)
    }

    /// Registered language identifiers, sorted
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.helpers.keys().cloned().collect();
        languages.sort();
        languages
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }
}
