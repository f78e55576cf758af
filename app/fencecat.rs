//! Command-line interface for fencecat.
//!
//! Concatenates the text and code files of a directory into a single
//! Markdown document, or lists what would be written with `--dry-run`.

use clap::Parser;
use fencecat::{FencecatBuilder, FencecatOptions, collect_records, concatenate, normalize_path};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

/// fencecat — concatenate a directory's text and code files into one Markdown file
#[derive(Parser)]
#[command(name = "fencecat", version, about, long_about = None)]
struct Cli {
    /// Input directory containing text and code files
    input_dir: PathBuf,

    /// Output filename (default: <input directory name>_combined.md)
    #[arg(short, long)]
    output: Option<String>,

    /// Comma-separated list of file extensions to exclude (e.g. ".json,.xml")
    #[arg(short, long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Comma-separated list of file extensions to include (overrides default list)
    #[arg(short, long, value_delimiter = ',')]
    include_only: Vec<String>,

    /// Comma-separated list of directory names to skip (e.g. ".git,node_modules,venv")
    #[arg(short, long, value_delimiter = ',')]
    skip_dirs: Option<Vec<String>>,

    /// Glob patterns for paths to leave out (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Print the files that would be written as JSON lines instead of writing
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> (FencecatOptions, bool, bool) {
        let mut builder = FencecatBuilder::new(normalize_path(&self.input_dir))
            .exclude(self.exclude)
            .include_only(self.include_only)
            .ignore_patterns(self.ignore_patterns);

        // An empty -o or -s falls back to the default name or skip set.
        if let Some(output) = self.output.filter(|o| !o.is_empty()) {
            builder = builder.output(output);
        }
        if let Some(skip_dirs) = self
            .skip_dirs
            .filter(|names| names.iter().any(|n| !n.is_empty()))
        {
            builder = builder.skip_dirs(skip_dirs);
        }

        (builder.build(), self.dry_run, self.verbose)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let (options, dry_run, _verbose) = cli.into_options();

    #[cfg(feature = "logging")]
    init_logging(_verbose);

    if dry_run {
        run_dry(&options);
        return;
    }

    run_normal(&options);
}

fn run_normal(options: &FencecatOptions) {
    let output = options.output_path();
    println!(
        "Concatenating text and code files from '{}' into '{}'...",
        options.root.display(),
        output.display()
    );
    match concatenate(options) {
        Ok(summary) => println!("Done! Output written to '{}'", summary.output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn run_dry(options: &FencecatOptions) {
    let records = match collect_records(options) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for record in records {
        let json = serde_json::to_string(&record).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });

        if writeln!(handle, "{}", json).is_err() {
            eprintln!("Failed to write to stdout");
            exit(1);
        }
    }
}
