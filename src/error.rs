use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordtabError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", .path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("No document is open")]
    NoActiveDocument,

    #[error("No file name given")]
    EmptyPath,
}
