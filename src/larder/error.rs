use thiserror::Error;

#[derive(Error, Debug)]
pub enum LarderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored record does not satisfy the typed schema. This points at a
    /// corrupted or hand-mangled collection file, so it is a hard error
    /// rather than a skipped record.
    #[error("Invalid {kind} record: {reason}")]
    Validation { kind: &'static str, reason: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, LarderError>;
