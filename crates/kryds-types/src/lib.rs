pub mod types;

pub use types::{CacheKey, PLACEHOLDER, Query, QueryKind, WordList};
