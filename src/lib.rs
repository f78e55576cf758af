//! # Fencecat
//!
//! `fencecat` walks a directory tree and concatenates its text and code files into one
//! Markdown document. Each file becomes a record: an HTML comment with the file's path
//! relative to the root, followed by its content inside a language-tagged code fence.
//!
//! The walk is depth-first and single-threaded. Directories named in the skip list are
//! pruned at every depth before they are read. Files are selected by name suffix, either
//! from a built-in default list (minus any excluded suffixes) or from an include-only list.
//! A file that cannot be read as UTF-8 gets an error placeholder inside its fence and the
//! run continues.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use fencecat::{FencecatBuilder, concatenate};
//!
//! let options = FencecatBuilder::new("my-project")
//!     .output("my-project_combined.md")
//!     .exclude(vec![".json".into()])
//!     .build();
//!
//! let summary = concatenate(&options).expect("Failed to concatenate directory");
//! println!("{} files written to {}", summary.files, summary.output.display());
//! ```

mod engine;
mod error;
pub mod filter;
mod options;
pub mod output;
mod types;

pub use engine::{FileStream, collect_records, concatenate};
pub use error::FencecatError;
pub use filter::{DEFAULT_EXTENSIONS, ExtensionFilter};
pub use options::{
    DEFAULT_SKIP_DIRS, FencecatBuilder, FencecatOptions, default_output_path, normalize_path,
};
pub use types::{FileRecord, RunSummary};
