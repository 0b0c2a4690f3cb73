use sessionbuilder::engine::{
    folder_name, has_extension, is_os_hidden_file, path_relative_to, split_session_day,
};
use sessionbuilder::pipeline::{COLUMNS, parse_companion};
use sessionbuilder::{CrawlError, Mode};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// --- path_relative_to ---

#[test]
fn test_path_relative_under_base() {
    let base = PathBuf::from("/foo/bar");
    let path = PathBuf::from("/foo/bar/1_Monday/Talk.mp4");
    assert_eq!(
        path_relative_to(&path, &base),
        Some(PathBuf::from("1_Monday/Talk.mp4"))
    );
}

#[test]
fn test_path_relative_not_under_base() {
    let base = PathBuf::from("/foo/bar");
    let path = PathBuf::from("/other/Talk.mp4");
    assert_eq!(path_relative_to(&path, &base), None);
}

#[test]
fn test_path_relative_path_equals_base() {
    let base = PathBuf::from("/foo/bar");
    assert_eq!(path_relative_to(&base, &base), Some(PathBuf::new()));
}

// --- folder names / session-day split ---

#[test]
fn test_folder_name() {
    assert_eq!(folder_name(Path::new("/r/1_Monday")), Some("1_Monday".to_string()));
    assert_eq!(folder_name(Path::new("/")), None);
}

#[test]
fn test_split_session_day_forms() {
    let item = Path::new("/r/x.mp4");
    for (folder, session, day) in [("1_Monday", "1", "Monday"), ("S2_Day3", "S2", "Day3")] {
        let (s, d) = split_session_day(folder, item).unwrap();
        assert_eq!((s.as_str(), d.as_str()), (session, day));
    }
}

#[test]
fn test_split_session_day_rejects_single_token() {
    for folder in ["Monday", "", "1-Monday"] {
        let err = split_session_day(folder, Path::new("/r/x.mp4")).unwrap_err();
        assert!(matches!(err, CrawlError::MalformedFolder { .. }));
    }
}

// --- discovery filters ---

#[test]
fn test_mode_target_extension() {
    assert_eq!(Mode::Final.target_extension(), "mp4");
    assert_eq!(Mode::Raw.target_extension(), "md");
    assert_eq!(Mode::from_raw_flag(true), Mode::Raw);
    assert_eq!(Mode::default(), Mode::Final);
}

#[test]
fn test_has_extension() {
    assert!(has_extension(Path::new("Talk.mp4"), Mode::Final.target_extension()));
    assert!(!has_extension(Path::new("Talk.md"), Mode::Final.target_extension()));
}

#[test]
fn test_os_hidden_files_skipped() {
    assert!(is_os_hidden_file(Path::new("/r/1_Monday/Thumbs.db")));
    assert!(is_os_hidden_file(Path::new("/r/1_Monday/._notes.md")));
    assert!(!is_os_hidden_file(Path::new("/r/1_Monday/notes.md")));
}

// --- companion parsing from disk ---

#[test]
fn test_parse_companion_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Talk.md");
    std::fs::write(&path, "{  a,b , c }\nTitle Only\n").unwrap();
    let meta = parse_companion(&path).unwrap();
    assert_eq!(meta.tags.as_deref(), Some("a,b , c"));
    assert_eq!(meta.title, "Title Only");
    assert_eq!(meta.markdown_description, "");
}

#[test]
fn test_parse_companion_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = parse_companion(&temp.path().join("gone.md")).unwrap_err();
    assert!(matches!(err, CrawlError::Io { .. }));
}

// --- columns ---

#[test]
fn test_columns_are_unique() {
    let mut names: Vec<&str> = COLUMNS.iter().map(|c| c.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), COLUMNS.len());
}
