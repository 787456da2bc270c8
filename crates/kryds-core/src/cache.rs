use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use kryds_types::{CacheKey, WordList};
use tokio::sync::{Mutex, OnceCell};
use tokio::task::JoinError;

/// Process-lifetime memo of lookup results.
///
/// Every key owns an async cell. Callers racing on the same key queue on
/// that cell, so only one computation runs at a time and the first success
/// is kept for good. A failed computation leaves the cell empty and the
/// next caller tries again.
#[derive(Default)]
pub struct LookupCache {
    entries: Mutex<HashMap<CacheKey, Arc<OnceCell<WordList>>>>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for `key`, computing it on a miss.
    ///
    /// The fill runs on its own task, so a caller dropped mid-lookup does
    /// not abandon it; the next caller picks up the stored result.
    pub async fn get_or_compute<F, Fut, E>(&self, key: CacheKey, compute: F) -> Result<WordList, E>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<WordList, E>> + Send + 'static,
        E: From<JoinError> + Send + 'static,
    {
        let cell = self.cell(&key).await;

        if let Some(words) = cell.get() {
            tracing::debug!("Cache hit: {}", key);
            return Ok(words.clone());
        }

        let fill = tokio::spawn(async move {
            cell.get_or_try_init(|| async {
                tracing::debug!("Cache miss: {}", key);
                compute().await
            })
            .await
            .cloned()
        });

        fill.await?
    }

    /// Stored result for `key`, if any
    pub async fn get(&self, key: &CacheKey) -> Option<WordList> {
        let entries = self.entries.lock().await;
        entries.get(key).and_then(|cell| cell.get().cloned())
    }

    pub async fn contains(&self, key: &CacheKey) -> bool {
        self.get(key).await.is_some()
    }

    /// Number of stored results
    pub async fn len(&self) -> usize {
        let entries = self.entries.lock().await;
        entries.values().filter(|cell| cell.initialized()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn cell(&self, key: &CacheKey) -> Arc<OnceCell<WordList>> {
        let mut entries = self.entries.lock().await;
        Arc::clone(entries.entry(key.clone()).or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use kryds_types::QueryKind;

    use super::*;
    use crate::LookupError;

    fn key(query: &str) -> CacheKey {
        CacheKey::new("danish", QueryKind::Synonym, query)
    }

    fn words(list: &[&str]) -> WordList {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn test_computes_once_per_key() {
        let cache = LookupCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls = Arc::clone(&calls);
            let result: Result<WordList, LookupError> = cache
                .get_or_compute(key("kat"), move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(words(&["MIS"]))
                })
                .await;
            assert_eq!(result.unwrap(), vec!["MIS"]);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_result_is_stored() {
        let cache = LookupCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = Arc::clone(&calls);
            let result: Result<WordList, LookupError> = cache
                .get_or_compute(key("xyzzy"), move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(Vec::new())
                })
                .await;
            assert!(result.unwrap().is_empty());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.contains(&key("xyzzy")).await);
    }

    #[tokio::test]
    async fn test_error_not_stored() {
        let cache = LookupCache::new();

        let first: Result<WordList, LookupError> = cache
            .get_or_compute(key("hus"), || async { Err(LookupError::Fetch("boom".to_string())) })
            .await;
        assert_eq!(first, Err(LookupError::Fetch("boom".to_string())));
        assert!(!cache.contains(&key("hus")).await);
        assert!(cache.is_empty().await);

        let second: Result<WordList, LookupError> = cache
            .get_or_compute(key("hus"), || async { Ok(words(&["BOLIG"])) })
            .await;
        assert_eq!(second, Ok(words(&["BOLIG"])));
        assert_eq!(cache.get(&key("hus")).await, Some(words(&["BOLIG"])));
    }

    async fn explode() -> Result<WordList, LookupError> {
        panic!("helper blew up")
    }

    #[tokio::test]
    async fn test_panicking_fill_is_fetch_error() {
        let cache = LookupCache::new();

        let result: Result<WordList, LookupError> = cache
            .get_or_compute(key("panik"), explode)
            .await;
        assert!(matches!(result, Err(LookupError::Fetch(_))));
        assert!(!cache.contains(&key("panik")).await);

        let retry: Result<WordList, LookupError> = cache
            .get_or_compute(key("panik"), || async { Ok(words(&["RO"])) })
            .await;
        assert_eq!(retry.unwrap(), vec!["RO"]);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let cache = LookupCache::new();

        let pattern = CacheKey::new("danish", QueryKind::Pattern, "kat");
        let a: Result<WordList, LookupError> = cache
            .get_or_compute(key("kat"), || async { Ok(words(&["A"])) })
            .await;
        let b: Result<WordList, LookupError> = cache
            .get_or_compute(pattern, || async { Ok(words(&["B"])) })
            .await;

        assert_eq!(a.unwrap(), vec!["A"]);
        assert_eq!(b.unwrap(), vec!["B"]);
        assert_eq!(cache.len().await, 2);
    }
}
