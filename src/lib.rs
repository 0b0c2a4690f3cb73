//! Sessionbuilder: crawl Session/Day/Interview folders into one spreadsheet row per interview

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod sessions;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::CrawlError;
pub use types::*;

use engine::progress::CrawlEvent;
use log::debug;
use std::path::Path;

/// Result alias used by public sessionbuilder API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: crawl `root` with `opts` and return the records in traversal order.
///
/// - **`on_event: None`** → silent crawl.
/// - **`on_event: Some(f)`** → `f` sees each directory, media file, stub and record as the walk reaches it.
///
/// Fails with [`CrawlError::InvalidRoot`] when `root` is not a directory, and with a structural
/// [`CrawlError`] when a session folder name does not split into `<session>_<day>`.
pub fn crawl_dir<F>(root: &Path, opts: &CrawlOpts, on_event: Option<F>) -> Result<Vec<Record>>
where
    F: FnMut(&CrawlEvent),
{
    if !root.is_dir() {
        return Err(CrawlError::InvalidRoot(root.to_path_buf()).into());
    }
    let root = root
        .canonicalize()
        .map_err(|e| CrawlError::io(root, e))?;
    debug!(
        "{} CRAWL {} {:?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        root.display(),
        opts
    );

    match on_event {
        None => pipeline::crawl(&root, opts, |_| {}),
        Some(f) => pipeline::crawl(&root, opts, f),
    }
}
