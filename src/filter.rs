//! File selection by name suffix.
//!
//! Matching is a raw string suffix test, not a dot-extension comparison:
//! `foo.xtoml` ends with `.toml` and is selected by the default list.

use crate::options::FencecatOptions;
/// Suffixes selected when no include-only list is given.
#[rustfmt::skip]
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    // text documents
    ".md", ".txt", ".text", ".markdown", ".rst", ".asciidoc", ".adoc", ".asc",
    // programming languages
    ".py", ".js", ".java", ".c", ".cpp", ".cs", ".php", ".rb", ".go", ".swift", ".kt", ".ts",
    ".html", ".css", ".scss", ".sass", ".less", ".json", ".xml", ".yaml", ".yml",
    ".sh", ".bash", ".ps1", ".bat", ".cmd",
    // configuration
    ".ini", ".cfg", ".conf", ".config", ".properties", ".toml", ".env",
    // sql and schemas
    ".sql", ".graphql", ".prisma",
    // other code
    ".r", ".dart", ".scala", ".groovy", ".lua", ".pl", ".pm", ".hs", ".elm", ".ex", ".exs",
    ".erl", ".fs", ".fsx", ".f90", ".f95", ".f03", ".f08",
    // documentation
    ".tex", ".wiki", ".org",
];
/// Decides which file names end up in the output document.
#[derive(Debug, Clone)]
pub enum ExtensionFilter {
    /// Only these suffixes; the default list and excludes are ignored.
    IncludeOnly(Vec<String>),
    /// The default list minus anything ending with one of these suffixes.
    Defaults { exclude: Vec<String> },
}
impl ExtensionFilter {
    pub fn from_options(options: &FencecatOptions) -> Self {
        if options.include_only.is_empty() {
            ExtensionFilter::Defaults {
                exclude: options.exclude.clone(),
            }
        } else {
            ExtensionFilter::IncludeOnly(options.include_only.clone())
        }
    }
    /// Whether a file with this name is selected.
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            ExtensionFilter::IncludeOnly(suffixes) => {
                suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
            }
            ExtensionFilter::Defaults { exclude } => {
                DEFAULT_EXTENSIONS.iter().any(|s| file_name.ends_with(s))
                    && !exclude.iter().any(|s| file_name.ends_with(s.as_str()))
            }
        }
    }
}
