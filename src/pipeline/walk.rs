//! Depth-first crawl: directories before files, lexical per level, one record per discovered item.

use anyhow::Result;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::engine::progress::CrawlEvent;
use crate::engine::tools::{folder_name, has_extension, is_os_hidden_file};
use crate::error::CrawlError;
use crate::pipeline::builder::{BuildOutcome, build_record};
use crate::pipeline::error_handler::report_skipped;
use crate::{CrawlOpts, Mode, Record};

/// One result from the directory walk: an entry to consider or an error with optional path.
pub enum WalkOutcome {
    Dir { depth: usize, path: PathBuf },
    File { depth: usize, path: PathBuf },
    Err { msg: String, path: Option<PathBuf> },
}

/// Convert a walkdir result into [`WalkOutcome`].
pub fn to_outcome_walkdir(r: Result<DirEntry, walkdir::Error>) -> WalkOutcome {
    match r {
        Ok(entry) => {
            let depth = entry.depth();
            if entry.file_type().is_dir() {
                WalkOutcome::Dir {
                    depth,
                    path: entry.into_path(),
                }
            } else {
                WalkOutcome::File {
                    depth,
                    path: entry.into_path(),
                }
            }
        }
        Err(err) => WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        },
    }
}

/// Directories first, then files; each group by file name.
fn dirs_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.file_type()
        .is_dir()
        .cmp(&a.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn walkdir_iter(root: &Path, follow_links: bool) -> impl Iterator<Item = WalkOutcome> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(follow_links)
        .sort_by(dirs_first)
        .into_iter()
        .map(to_outcome_walkdir)
}

/// Crawl `root` (absolute, existing directory) and return records in traversal order.
/// Structural errors abort; other item errors are skipped unless `opts.strict`.
pub fn crawl<F>(root: &Path, opts: &CrawlOpts, on_event: F) -> Result<Vec<Record>>
where
    F: FnMut(&CrawlEvent),
{
    run_walk_loop(root, opts, walkdir_iter(root, opts.follow_links), on_event)
}

/// Consume `iter`, build a record for each target file, emit progress events.
pub fn run_walk_loop<I, F>(root: &Path, opts: &CrawlOpts, iter: I, mut on_event: F) -> Result<Vec<Record>>
where
    I: Iterator<Item = WalkOutcome>,
    F: FnMut(&CrawlEvent),
{
    let ext = opts.mode.target_extension();
    let mut records = Vec::new();
    let mut skipped: Vec<(PathBuf, String)> = Vec::new();

    for outcome in iter {
        match outcome {
            WalkOutcome::Dir { depth, path } => {
                on_event(&CrawlEvent::Directory {
                    depth,
                    name: folder_name(&path).unwrap_or_default(),
                });
            }
            WalkOutcome::File { depth, path } => {
                if !has_extension(&path, ext) || is_os_hidden_file(&path) {
                    continue;
                }
                if opts.mode == Mode::Final {
                    on_event(&CrawlEvent::MediaFile {
                        depth,
                        name: folder_name(&path).unwrap_or_default(),
                    });
                }
                match build_record(&path, root, opts) {
                    Ok(BuildOutcome::Built(record)) => {
                        let found_depth = match opts.mode {
                            Mode::Final => depth + 1,
                            Mode::Raw => depth,
                        };
                        on_event(&CrawlEvent::Found {
                            depth: found_depth,
                            title: record.title.clone(),
                        });
                        records.push(record);
                    }
                    Ok(BuildOutcome::StubWritten(stub)) => {
                        log::debug!("wrote stub {}", stub.display());
                        on_event(&CrawlEvent::StubWritten { depth, path: stub });
                    }
                    Ok(BuildOutcome::MissingCompanion(companion)) => {
                        log::debug!("no companion {}, skipping", companion.display());
                    }
                    Err(err) if err.is_structural() || opts.strict => return Err(err.into()),
                    Err(err) => {
                        log::warn!("skipping {}: {}", path.display(), err);
                        skipped.push((path, err.to_string()));
                    }
                }
            }
            WalkOutcome::Err { msg, path } => {
                if opts.strict {
                    return Err(CrawlError::Walk { msg, path }.into());
                }
                let to_push = path.unwrap_or_else(|| PathBuf::from("<no-path>"));
                log::warn!("{}", msg);
                skipped.push((to_push, msg));
            }
        }
    }

    report_skipped(&skipped);
    Ok(records)
}
