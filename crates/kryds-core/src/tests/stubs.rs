use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use kryds_helper::{Helper, HelperError, HelperMetadata};
use kryds_types::{QueryKind, WordList};
use tokio::sync::Semaphore;

const DANISH: &[(char, &str)] = &[('æ', "ae"), ('ø', "oe"), ('å', "aa")];

fn metadata() -> HelperMetadata {
    HelperMetadata {
        name: "stub".to_string(),
        host: "http://stub.invalid".to_string(),
    }
}

/// Records every upstream call and answers with a fixed list
pub struct CountingHelper {
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<(QueryKind, String)>>,
    answer: WordList,
}

impl CountingHelper {
    pub fn new(answer: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            answer: answer.iter().map(|w| w.to_string()).collect(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(QueryKind, String)> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self, kind: QueryKind, query: &str) -> WordList {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((kind, query.to_string()));
        self.answer.clone()
    }
}

#[async_trait]
impl Helper for CountingHelper {
    fn language_code(&self) -> &str {
        "danish"
    }

    fn substitutions(&self) -> &[(char, &'static str)] {
        DANISH
    }

    async fn fetch_synonyms(&self, term: &str) -> Result<WordList, HelperError> {
        Ok(self.record(QueryKind::Synonym, term))
    }

    async fn fetch_pattern(&self, template: &str) -> Result<WordList, HelperError> {
        Ok(self.record(QueryKind::Pattern, template))
    }

    fn metadata(&self) -> HelperMetadata {
        metadata()
    }
}

/// Parks every call until the test hands out permits
pub struct GatedHelper {
    pub calls: AtomicUsize,
    pub gate: Semaphore,
}

impl GatedHelper {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            gate: Semaphore::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn wait(&self) -> WordList {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _permit = self.gate.acquire().await.unwrap();
        vec!["KAT".to_string(), "KIT".to_string()]
    }
}

#[async_trait]
impl Helper for GatedHelper {
    fn language_code(&self) -> &str {
        "danish"
    }

    async fn fetch_synonyms(&self, _term: &str) -> Result<WordList, HelperError> {
        Ok(self.wait().await)
    }

    async fn fetch_pattern(&self, _template: &str) -> Result<WordList, HelperError> {
        Ok(self.wait().await)
    }

    fn metadata(&self) -> HelperMetadata {
        metadata()
    }
}

/// Fails `failures` times with the given error, then answers `["A", "B"]`
pub struct FlakyHelper {
    pub calls: AtomicUsize,
    failures: usize,
    error: fn() -> HelperError,
}

impl FlakyHelper {
    pub fn new(failures: usize, error: fn() -> HelperError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            failures,
            error,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self) -> Result<WordList, HelperError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err((self.error)())
        } else {
            Ok(vec!["A".to_string(), "B".to_string()])
        }
    }
}

#[async_trait]
impl Helper for FlakyHelper {
    fn language_code(&self) -> &str {
        "danish"
    }

    async fn fetch_synonyms(&self, _term: &str) -> Result<WordList, HelperError> {
        self.answer()
    }

    async fn fetch_pattern(&self, _template: &str) -> Result<WordList, HelperError> {
        self.answer()
    }

    fn metadata(&self) -> HelperMetadata {
        metadata()
    }
}
