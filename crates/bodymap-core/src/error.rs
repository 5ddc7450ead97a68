use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BodyMapError {
    #[error("failed to load input from {path}: {reason}")]
    InputLoad { path: PathBuf, reason: String },

    #[error("invalid body-part record: {0}")]
    InvalidRecord(String),

    #[error("unknown body region '{0}'. Run `bodymap regions` to list region ids")]
    UnknownRegion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
