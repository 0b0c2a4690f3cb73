//! Path and folder-name utilities

use std::path::{Path, PathBuf};

use crate::error::CrawlError;
use crate::utils::config::SESSION_DAY_SEPARATOR;

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// Check if a file should be excluded based on OS-specific hidden files
pub fn is_os_hidden_file(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        match name {
            // macOS
            ".DS_Store" | ".AppleDouble" | ".LSOverride" => true,
            // Windows
            "Thumbs.db" | "ehthumbs.db" | "Desktop.ini" | "$RECYCLE.BIN" => true,
            // Linux
            ".directory" => true,
            _ => {
                // macOS resource fork files start with ._
                name.starts_with("._") || name.starts_with(".Trash-")
            }
        }
    } else {
        false
    }
}

/// True if `path` has extension `ext` (ASCII case-insensitive, no leading dot).
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Final path component as a string (lossy), or None for `/` and `..`-terminated paths.
pub fn folder_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Split a `<session>_<day>` folder name. Tokens past the second are ignored.
/// `item` is the path being built, for error reporting.
pub fn split_session_day(folder: &str, item: &Path) -> Result<(String, String), CrawlError> {
    let mut tokens = folder.split(SESSION_DAY_SEPARATOR);
    match (tokens.next(), tokens.next()) {
        (Some(session), Some(day)) => Ok((session.to_string(), day.to_string())),
        _ => Err(CrawlError::MalformedFolder {
            folder: folder.to_string(),
            path: item.to_path_buf(),
        }),
    }
}

/// Platform path rendered for a sheet cell.
pub fn path_to_cell(path: &Path) -> String {
    path.display().to_string()
}
