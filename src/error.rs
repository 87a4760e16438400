use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("Failed to launch '{command}': {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("Command '{command}' exited with status {code}")]
    CommandExited { command: String, code: i32 },

    #[error("Failed to fetch remote resource: {0}")]
    RemoteFetchError(String),

    #[error("Archive error: {0}")]
    ArchiveError(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;
