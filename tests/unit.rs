use fencecat::{
    ExtensionFilter,
    FencecatBuilder,
    FileRecord,
    default_output_path,
    normalize_path,
    output::{language_for, write_record},
};
use std::io;
use std::path::{Path, PathBuf};
fn render(path: &str, content: Result<String, io::Error>) -> String {
    let record = FileRecord {
        path: PathBuf::from(path),
        source: PathBuf::from(path),
        language: language_for(Path::new(path)),
    };
    let mut out = Vec::new();
    write_record(&mut out, &record, &content).unwrap();
    String::from_utf8(out).unwrap()
}
#[test]
fn test_record_adds_missing_newline() {
    let out = render("a.py", Ok("print(1)".to_string()));
    assert_eq!(out, "\n<!-- File: a.py -->\n\n```python\nprint(1)\n```\n");
}
#[test]
fn test_record_keeps_existing_newline() {
    let out = render("notes.txt", Ok("one\ntwo\n".to_string()));
    assert_eq!(out, "\n<!-- File: notes.txt -->\n\n```text\none\ntwo\n```\n");
}
#[test]
fn test_record_error_placeholder_closes_fence() {
    let err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let out = render("secret.md", Err(err));
    assert_eq!(
        out,
        "\n<!-- File: secret.md -->\n\n```markdown\n<!-- Error reading file: permission denied -->\n```\n"
    );
}
#[test]
fn test_language_table() {
    assert_eq!(language_for(Path::new("main.py")), "python");
    assert_eq!(language_for(Path::new("app.ts")), "javascript");
    assert_eq!(language_for(Path::new("lib.HPP")), "cpp");
    assert_eq!(language_for(Path::new("style.SCSS")), "css");
    assert_eq!(language_for(Path::new("config.yml")), "yaml");
    assert_eq!(language_for(Path::new("README.Markdown")), "markdown");
    assert_eq!(language_for(Path::new("Cargo.toml")), "text");
    assert_eq!(language_for(Path::new(".env")), "text");
    assert_eq!(language_for(Path::new("Makefile")), "text");
}
#[test]
fn test_default_filter_uses_raw_suffix() {
    let filter = ExtensionFilter::from_options(&FencecatBuilder::new(".").build());
    assert!(filter.matches("main.py"));
    assert!(filter.matches(".env"));
    assert!(filter.matches("foo.xtoml"));
    assert!(!filter.matches("image.png"));
    assert!(!filter.matches("Makefile"));
}
#[test]
fn test_exclude_applies_to_defaults() {
    let options = FencecatBuilder::new(".")
        .exclude(vec![".json".into(), "lock.yaml".into()])
        .build();
    let filter = ExtensionFilter::from_options(&options);
    assert!(!filter.matches("package.json"));
    assert!(!filter.matches("pnpm-lock.yaml"));
    assert!(filter.matches("config.yaml"));
}
#[test]
fn test_include_only_overrides_defaults_and_excludes() {
    let options = FencecatBuilder::new(".")
        .include_only(vec![".txt".into(), ".png".into()])
        .exclude(vec![".txt".into()])
        .build();
    let filter = ExtensionFilter::from_options(&options);
    assert!(filter.matches("b.txt"));
    assert!(filter.matches("logo.png"));
    assert!(!filter.matches("a.py"));
}
#[test]
fn test_empty_include_only_entries_are_dropped() {
    let options = FencecatBuilder::new(".")
        .include_only(vec![String::new()])
        .build();
    assert!(options.include_only.is_empty());
    let filter = ExtensionFilter::from_options(&options);
    assert!(!filter.matches("logo.png"));
}
#[test]
fn test_default_output_path() {
    assert_eq!(
        default_output_path(Path::new("projects/demo")),
        PathBuf::from("demo_combined.md")
    );
    assert_eq!(
        default_output_path(Path::new("demo/")),
        PathBuf::from("demo_combined.md")
    );
}
#[test]
fn test_normalize_path() {
    assert_eq!(normalize_path(Path::new("demo/")), PathBuf::from("demo"));
    assert_eq!(normalize_path(Path::new("./demo/./src")), PathBuf::from("demo/src"));
    assert_eq!(normalize_path(Path::new("demo/src/..")), PathBuf::from("demo"));
    assert_eq!(normalize_path(Path::new("../demo")), PathBuf::from("../demo"));
    assert_eq!(normalize_path(Path::new("/..")), PathBuf::from("/"));
    assert_eq!(normalize_path(Path::new(".")), PathBuf::from("."));
    assert_eq!(normalize_path(Path::new("demo/..")), PathBuf::from("."));
}
