//! Gallery Errors
//!
//! None of these are fatal. Every caller degrades to a safe default.

/// Common result type for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Gallery-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    /// Item fetch failed or returned an unusable payload
    #[error("item source unavailable: {0}")]
    SourceUnavailable(String),
    /// Clipboard write was rejected
    #[error("clipboard denied: {0}")]
    ClipboardDenied(String),
    /// Lookup referenced an id that is not in the list
    #[error("unknown item id: {0}")]
    UnknownId(u32),
    /// Stored reaction data could not be parsed
    #[error("malformed persisted ledger: {0}")]
    MalformedPersistedLedger(String),
    /// Key-value store write failed
    #[error("storage error: {0}")]
    Storage(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
