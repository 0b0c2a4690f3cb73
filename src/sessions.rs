//! One full run: crawl, then export when anything was found.

use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::engine::progress::CrawlEvent;
use crate::pipeline::write_spreadsheet;
use crate::utils::Colors;
use crate::utils::config::PackagePaths;
use crate::{CrawlOpts, Opts, crawl_dir};

/// Crawl `root` and write the spreadsheet to `opts.output` (default `root/sessions.xlsx`).
///
/// Returns the written path, or `None` when nothing was found; the output file is then left untouched.
pub fn build_sessions<F>(root: &Path, opts: &Opts, on_event: F) -> Result<Option<PathBuf>>
where
    F: FnMut(&CrawlEvent),
{
    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| root.join(PackagePaths::get().output_filename()));

    info!("Recursively reading in {} mode...", opts.mode);
    info!("{}", root.display());
    let records = crawl_dir(root, &CrawlOpts::from(opts), Some(on_event))?;

    if records.is_empty() {
        info!(
            "{}",
            Colors::colorize(Colors::NOTHING_FOUND, "No descriptions found...")
        );
        return Ok(None);
    }

    info!(
        "{}",
        Colors::colorize(
            Colors::FOUND,
            &format!(
                "Writing spreadsheet {} ({} records)...",
                output.display(),
                records.len()
            )
        )
    );
    write_spreadsheet(&records, &output)?;
    info!("Done");
    Ok(Some(output))
}
