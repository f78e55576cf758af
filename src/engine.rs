use crate::error::FencecatError;
use crate::filter::ExtensionFilter;
use crate::options::FencecatOptions;
use crate::output::{language_for, write_record};
use crate::types::{FileRecord, RunSummary};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::{HashSet, VecDeque};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
fn check_root(root: &Path) -> Result<(), FencecatError> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FencecatError::NotFound(root.to_path_buf()),
        _ => FencecatError::io(root, e),
    })?;
    if !metadata.is_dir() {
        return Err(FencecatError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|e| FencecatError::io(root, e))?;
    Ok(())
}
fn build_matcher(patterns: &[String]) -> Result<Option<GlobSet>, FencecatError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            FencecatError::InvalidPattern(format!("Invalid glob pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| FencecatError::InvalidPattern(format!("Failed to build glob set: {}", e)))
}
/// Depth-first walk yielding file paths.
///
/// Each directory is listed once; its files are yielded in listing order
/// before any of its subdirectories is opened. Subdirectories in the skip
/// set or matching an ignore pattern are dropped from the listing, so they
/// are never read. Directory symlinks are not followed.
struct Walker {
    root: PathBuf,
    skip: HashSet<OsString>,
    matcher: Option<GlobSet>,
    dirs: Vec<PathBuf>,
    files: VecDeque<PathBuf>,
    listed: usize,
}
impl Walker {
    fn new(options: &FencecatOptions) -> Result<Self, FencecatError> {
        Ok(Self {
            root: options.root.clone(),
            skip: options.skip_dirs.iter().map(OsString::from).collect(),
            matcher: build_matcher(&options.ignore_patterns)?,
            dirs: vec![options.root.clone()],
            files: VecDeque::new(),
            listed: 0,
        })
    }
    fn is_ignored(&self, path: &Path) -> bool {
        match &self.matcher {
            Some(matcher) => {
                let relative = path.strip_prefix(&self.root).unwrap_or(path);
                matcher.is_match(relative)
            }
            None => false,
        }
    }
    fn list(&mut self, dir: &Path) -> Result<(), FencecatError> {
        let entries = fs::read_dir(dir).map_err(|e| FencecatError::io(dir, e))?;
        self.listed += 1;
        let mut subdirs = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), _err);
                    continue;
                }
            };
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();
            if file_type.is_dir() {
                if self.skip.contains(&entry.file_name()) || self.is_ignored(&path) {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Pruning {}", path.display());
                    continue;
                }
                subdirs.push(path);
            } else if (file_type.is_file() || (file_type.is_symlink() && path.is_file()))
                && !self.is_ignored(&path)
            {
                self.files.push_back(path);
            }
        }
        self.dirs.extend(subdirs.into_iter().rev());
        Ok(())
    }
}
impl Iterator for Walker {
    type Item = Result<PathBuf, FencecatError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(file) = self.files.pop_front() {
                return Some(Ok(file));
            }
            let dir = self.dirs.pop()?;
            if let Err(e) = self.list(&dir) {
                return Some(Err(e));
            }
        }
    }
}
/// Lazily yields the files selected for the output document, in walk order.
pub struct FileStream {
    walker: Walker,
    filter: ExtensionFilter,
    excluded: Option<PathBuf>,
}
impl FileStream {
    /// Fails if the root is missing, not a directory or unreadable.
    pub fn new(options: &FencecatOptions) -> Result<Self, FencecatError> {
        check_root(&options.root)?;
        Ok(Self {
            walker: Walker::new(options)?,
            filter: ExtensionFilter::from_options(options),
            excluded: None,
        })
    }
    /// Never yield the file at this canonical path.
    pub fn excluding(mut self, canonical: PathBuf) -> Self {
        self.excluded = Some(canonical);
        self
    }
    /// Number of directories listed so far.
    pub fn directories_read(&self) -> usize {
        self.walker.listed
    }
    fn is_excluded(&self, path: &Path) -> bool {
        match &self.excluded {
            Some(excluded) => {
                path.file_name() == excluded.file_name()
                    && fs::canonicalize(path).is_ok_and(|p| &p == excluded)
            }
            None => false,
        }
    }
}
impl Iterator for FileStream {
    type Item = FileRecord;
    fn next(&mut self) -> Option<FileRecord> {
        loop {
            let source = match self.walker.next()? {
                Ok(path) => path,
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable directory: {}", _err);
                    continue;
                }
            };
            let matched = source
                .file_name()
                .is_some_and(|name| self.filter.matches(&name.to_string_lossy()));
            if !matched {
                continue;
            }
            if self.is_excluded(&source) {
                #[cfg(feature = "logging")]
                tracing::debug!("Leaving output file out: {}", source.display());
                continue;
            }
            let path = source
                .strip_prefix(&self.walker.root)
                .unwrap_or(&source)
                .to_path_buf();
            return Some(FileRecord {
                language: language_for(&path),
                path,
                source,
            });
        }
    }
}
/// Lists the records a run would write, without reading or writing any file.
pub fn collect_records(options: &FencecatOptions) -> Result<Vec<FileRecord>, FencecatError> {
    let mut stream = FileStream::new(options)?;
    if let Ok(output) = fs::canonicalize(options.output_path()) {
        stream = stream.excluding(output);
    }
    Ok(stream.collect())
}
/// Writes every selected file under the root into the output document.
///
/// The root is validated before the output is created, so a missing root
/// leaves no file behind. Files that cannot be read as UTF-8 get an error
/// placeholder inside their fence and the run carries on.
pub fn concatenate(options: &FencecatOptions) -> Result<RunSummary, FencecatError> {
    let output = options.output_path();
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Starting fencecat with root: {} -> {}",
        options.root.display(),
        output.display()
    );
    let mut stream = FileStream::new(options)?;
    let file = File::create(&output).map_err(|e| FencecatError::io(&output, e))?;
    if let Ok(canonical) = fs::canonicalize(&output) {
        stream = stream.excluding(canonical);
    }
    let mut writer = BufWriter::new(file);
    let mut summary = RunSummary {
        output: output.clone(),
        ..Default::default()
    };
    for record in stream.by_ref() {
        let content = fs::read_to_string(&record.source);
        if let Err(_err) = &content {
            #[cfg(feature = "logging")]
            tracing::warn!("Failed to read {}: {}", record.source.display(), _err);
            summary.read_errors += 1;
        }
        write_record(&mut writer, &record, &content).map_err(|e| FencecatError::io(&output, e))?;
        summary.files += 1;
    }
    writer.flush().map_err(|e| FencecatError::io(&output, e))?;
    summary.directories = stream.directories_read();
    #[cfg(feature = "logging")]
    tracing::info!(
        "Wrote {} files from {} directories ({} unreadable) to {}",
        summary.files,
        summary.directories,
        summary.read_errors,
        output.display()
    );
    Ok(summary)
}
