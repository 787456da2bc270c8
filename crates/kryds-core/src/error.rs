use kryds_helper::HelperError;
use tokio::task::JoinError;

/// Failures surfaced by `LookupService::ask`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Language '{0}' is not supported")]
    UnsupportedLanguage(String),

    #[error("Could not reach the solution site: {0}")]
    Fetch(String),

    #[error("Solution site answered HTTP {0}")]
    UpstreamStatus(u16),
}

impl From<HelperError> for LookupError {
    fn from(err: HelperError) -> Self {
        match err {
            HelperError::Network(e) => LookupError::Fetch(e.to_string()),
            HelperError::UpstreamStatus(status) => LookupError::UpstreamStatus(status),
            HelperError::InvalidUrl(msg) => LookupError::Fetch(msg),
        }
    }
}

impl From<JoinError> for LookupError {
    fn from(err: JoinError) -> Self {
        LookupError::Fetch(format!("lookup task failed: {err}"))
    }
}
