//! Turn one discovered file into a [`Record`].

use std::path::{Path, PathBuf};

use crate::engine::tools::{folder_name, path_relative_to, path_to_cell, split_session_day};
use crate::error::CrawlError;
use crate::pipeline::metadata::{Metadata, parse_companion};
use crate::utils::config::{COMPANION_EXTENSION, MEDIA_EXTENSION, STUB_TEMPLATE};
use crate::{CrawlOpts, Mode, Record};

/// What became of one discovered item.
#[derive(Debug)]
pub enum BuildOutcome {
    Built(Record),
    /// Final mode, no companion beside the media file and stubs are off.
    MissingCompanion(PathBuf),
    /// Final mode, no companion; a stub was written and will be read next run.
    StubWritten(PathBuf),
}

/// Build the record for `item`, a file discovered under `root` (both absolute).
pub fn build_record(item: &Path, root: &Path, opts: &CrawlOpts) -> Result<BuildOutcome, CrawlError> {
    match opts.mode {
        Mode::Final => build_final(item, root, opts.make_defaults),
        Mode::Raw => build_raw(item),
    }
}

/// `.../1_Monday/Talk.mp4` with `.../1_Monday/Talk.md` beside it.
fn build_final(media: &Path, root: &Path, make_defaults: bool) -> Result<BuildOutcome, CrawlError> {
    let companion = media.with_extension(COMPANION_EXTENSION);
    if !companion.is_file() {
        if !make_defaults {
            return Ok(BuildOutcome::MissingCompanion(companion));
        }
        std::fs::write(&companion, STUB_TEMPLATE).map_err(|e| CrawlError::io(&companion, e))?;
        return Ok(BuildOutcome::StubWritten(companion));
    }

    let (session, day) = session_day_above(media, 1)?;
    let meta = parse_companion(&companion)?;
    let relative = path_relative_to(media, root).unwrap_or_else(|| media.to_path_buf());
    Ok(BuildOutcome::Built(record_from(
        meta,
        session,
        day,
        folder_name(media).unwrap_or_default(),
        Some(path_to_cell(media)),
        Some(path_to_cell(&relative)),
    )))
}

/// `.../1_Monday/Talk/<notes>.md`; the media file does not exist yet.
fn build_raw(companion: &Path) -> Result<BuildOutcome, CrawlError> {
    let interview = companion
        .parent()
        .and_then(folder_name)
        .ok_or_else(|| CrawlError::MissingFolder(companion.to_path_buf()))?;
    let (session, day) = session_day_above(companion, 2)?;
    let meta = parse_companion(companion)?;
    // Raw items have no media path yet; file_path/relative_path stay empty.
    Ok(BuildOutcome::Built(record_from(
        meta,
        session,
        day,
        format!("{interview}.{MEDIA_EXTENSION}"),
        None,
        None,
    )))
}

/// Session/day from the folder `levels` above `item` (1 = parent, 2 = grandparent).
fn session_day_above(item: &Path, levels: usize) -> Result<(String, String), CrawlError> {
    let folder = item
        .ancestors()
        .nth(levels)
        .and_then(folder_name)
        .ok_or_else(|| CrawlError::MissingFolder(item.to_path_buf()))?;
    split_session_day(&folder, item)
}

fn record_from(
    meta: Metadata,
    session: String,
    day: String,
    file_name: String,
    file_path: Option<String>,
    relative_path: Option<String>,
) -> Record {
    Record {
        title: meta.title,
        description: meta.description,
        tags: meta.tags,
        markdown_description: meta.markdown_description,
        day,
        session,
        file_name,
        file_path,
        relative_path,
    }
}
