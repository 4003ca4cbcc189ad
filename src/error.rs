use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LogscrubError {
    #[error("mask rule selects no case variant: fields {fields:?}")]
    EmptyCaseSet { fields: Vec<String> },

    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LogscrubError>;
