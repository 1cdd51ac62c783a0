/// Error types for save files
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a save file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A save file is not valid JSON for its format
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The saved game parsed but cannot be restored
    #[error("saved game is corrupt")]
    CorruptSnapshot,
}
