use {
    crate::container::Key,
    std::{io, path::PathBuf},
};

//  A probe that came back empty. The driver records it and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("key {0} not found")]
    KeyNotFound(Key),

    #[error("{0} is empty")]
    EmptyContainer(&'static str),
}

//  Fatal errors. Any of these aborts the run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
