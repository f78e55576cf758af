use std::path::{Component, Path, PathBuf};
/// Directory names pruned from the walk when no skip list is given.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    ".idea",
    ".vs",
];
#[derive(Debug, Clone)]
pub struct FencecatOptions {
    pub root: PathBuf,
    /// Output document; `None` means `<root name>_combined.md` in the working directory.
    pub output: Option<PathBuf>,
    pub skip_dirs: Vec<String>,
    /// When non-empty, replaces the default extension list and `exclude`.
    pub include_only: Vec<String>,
    pub exclude: Vec<String>,
    pub ignore_patterns: Vec<String>,
}
impl Default for FencecatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: None,
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            include_only: Vec::new(),
            exclude: Vec::new(),
            ignore_patterns: Vec::new(),
        }
    }
}
impl FencecatOptions {
    /// The output path this run writes to.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => default_output_path(&self.root),
        }
    }
}
/// `<basename>_combined.md` for the given input directory.
///
/// Inputs without a final component (such as `.`) fall back to the
/// canonical directory name.
pub fn default_output_path(root: &Path) -> PathBuf {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| "output".to_string());
    PathBuf::from(format!("{}_combined.md", name))
}
/// Lexically normalizes a path: drops `.` components and folds `name/..`.
///
/// `demo/` and `./demo` both become `demo`; an empty result is `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                let folds = matches!(last, Some(Component::Normal(_)));
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                if folds {
                    normalized.pop();
                } else if !at_root {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
fn non_empty(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.is_empty()).collect()
}
#[derive(Debug, Default)]
pub struct FencecatBuilder {
    options: FencecatOptions,
}
impl FencecatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: FencecatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = Some(path.into());
        self
    }
    pub fn skip_dirs(mut self, names: Vec<String>) -> Self {
        self.options.skip_dirs = non_empty(names);
        self
    }
    pub fn include_only(mut self, extensions: Vec<String>) -> Self {
        self.options.include_only = non_empty(extensions);
        self
    }
    pub fn exclude(mut self, extensions: Vec<String>) -> Self {
        self.options.exclude = non_empty(extensions);
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn build(self) -> FencecatOptions {
        self.options
    }
}
