/// Errors raised by a single detection pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("invalid pattern for category '{category_id}': {reason}")]
    InvalidPattern { category_id: String, reason: String },

    #[error("matcher for category '{category_id}' failed: {reason}")]
    MatcherFailed { category_id: String, reason: String },
}
