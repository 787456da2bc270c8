use std::fmt;

use serde::{Deserialize, Serialize};

/// Blank letter in a crossword template, e.g. `c_t`
pub const PLACEHOLDER: char = '_';

/// Candidate answers in the order the upstream returned them
pub type WordList = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// Template with blanks at fixed positions
    Pattern,
    /// Whole word whose related answers are requested
    Synonym,
}

impl QueryKind {
    /// Decide the kind from the shape of the raw query alone
    pub fn classify(raw: &str) -> Self {
        if raw.contains(PLACEHOLDER) {
            QueryKind::Pattern
        } else {
            QueryKind::Synonym
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Pattern => "pattern",
            QueryKind::Synonym => "synonym",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub language: String,
    pub raw: String,
    kind: QueryKind,
}

impl Query {
    pub fn new(language: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = QueryKind::classify(&raw);
        Self {
            language: language.into(),
            raw,
            kind,
        }
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }
}

/// Identity of one cache entry; `query` is already normalized
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub language: String,
    pub kind: QueryKind,
    pub query: String,
}

impl CacheKey {
    pub fn new(language: impl Into<String>, kind: QueryKind, query: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            kind,
            query: query.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.language, self.kind, self.query)
    }
}
