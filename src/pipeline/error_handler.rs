use std::path::PathBuf;

/// Summarize items skipped during the crawl. Call after the walk completes.
pub fn report_skipped(skipped: &[(PathBuf, String)]) {
    if skipped.is_empty() {
        return;
    }
    log::warn!(
        "Skipped {} items due to unreadable files or access issues",
        skipped.len()
    );
    for (p, msg) in skipped {
        log::debug!("  skipped: {} ({})", p.display(), msg);
    }
}
