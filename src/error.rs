use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FencecatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Input directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}
impl FencecatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FencecatError::Io {
            path: path.into(),
            source,
        }
    }
}
