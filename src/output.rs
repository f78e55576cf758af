//! Output formatting for fencecat records.
//!
//! Every record is a path comment followed by a fenced block:
//!
//! ````text
//!
//! <!-- File: src/main.py -->
//!
//! ```python
//! print(1)
//! ```
//! ````
//!
//! The fence is closed exactly once whether or not the content could be read.

use crate::types::FileRecord;
use std::io::{self, Write};
use std::path::Path;

/// Writes one record. `content` is the file text or the error that prevented reading it.
pub fn write_record<W: Write>(
    out: &mut W,
    record: &FileRecord,
    content: &Result<String, io::Error>,
) -> io::Result<()> {
    write!(
        out,
        "\n<!-- File: {} -->\n\n```{}\n",
        record.path.display(),
        record.language
    )?;
    match content {
        Ok(text) => {
            out.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                out.write_all(b"\n")?;
            }
        }
        Err(e) => writeln!(out, "<!-- Error reading file: {} -->", e)?,
    }
    out.write_all(b"```\n")
}

/// Fence label for a path, from its lowercased dot-extension.
pub fn language_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    language_from_extension(&ext)
}

fn language_from_extension(ext: &str) -> &'static str {
    match ext {
        "py" | "ipynb" => "python", "js" | "ts" => "javascript", "java" => "java",
        "c" | "cpp" | "h" | "hpp" => "cpp", "cs" => "csharp", "php" => "php",
        "rb" => "ruby", "go" => "go", "swift" => "swift", "html" => "html",
        "css" | "scss" | "sass" | "less" => "css", "json" => "json", "xml" => "xml",
        "yaml" | "yml" => "yaml", "sh" | "bash" => "bash", "sql" => "sql", "r" => "r",
        "md" | "markdown" => "markdown",
        _ => "text",
    }
}
