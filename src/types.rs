use serde::Serialize;
use std::path::PathBuf;

/// A file selected for the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path relative to the walk root, as written in the record header.
    pub path: PathBuf,
    /// Path the content is read from.
    #[serde(skip)]
    pub source: PathBuf,
    /// Label placed after the opening fence.
    pub language: &'static str,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub output: PathBuf,
    /// Records written, including those with an error placeholder.
    pub files: usize,
    /// Records whose content could not be read.
    pub read_errors: usize,
    /// Directories listed during the walk; pruned directories are never listed.
    pub directories: usize,
}
