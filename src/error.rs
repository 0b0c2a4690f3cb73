//! Typed failures raised while crawling and building records.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the crawl. Structural errors abort the whole run; the rest
/// are scoped to a single item.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Valid path is required: {0}")]
    InvalidRoot(PathBuf),

    #[error("folder {folder:?} does not follow <session>_<day> (item {path})")]
    MalformedFolder { folder: String, path: PathBuf },

    #[error("no session/day folder above {0}")]
    MissingFolder(PathBuf),

    #[error("companion file is empty: {0}")]
    EmptyCompanion(PathBuf),

    #[error("companion file has a tag line but no title line: {0}")]
    MissingTitle(PathBuf),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {msg}")]
    Walk { msg: String, path: Option<PathBuf> },
}

impl CrawlError {
    /// True when the folder naming convention itself is broken.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            CrawlError::MalformedFolder { .. } | CrawlError::MissingFolder(_)
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CrawlError::Io {
            path: path.into(),
            source,
        }
    }
}
