//! Public and internal types for the sessionbuilder API and pipeline.

use std::fmt;
use std::path::PathBuf;

use crate::utils::config::{COMPANION_EXTENSION, MEDIA_EXTENSION};

/// One interview entry: a single row of the exported sheet.
///
/// Fields are declared in column order. `tags` is `None` when the companion has no
/// `{...}` line; `file_path` and `relative_path` are only filled in [`Mode::Final`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    /// First content line of the companion, heading markers stripped.
    pub title: String,
    /// Body rendered to HTML.
    pub description: String,
    /// Brace-stripped, trimmed tag line.
    pub tags: Option<String>,
    /// Body as written, after the tag and title lines.
    pub markdown_description: String,
    pub day: String,
    pub session: String,
    /// Media file name (final) or `<interview folder>.mp4` (raw).
    pub file_name: String,
    /// Absolute path of the media file.
    pub file_path: Option<String>,
    /// Media path relative to the crawl root.
    pub relative_path: Option<String>,
}

/// What the crawl looks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// `.../1_Monday/NameOfInterview/<notes>.md`
    Raw,
    /// `.../1_Monday/NameOfInterview.mp4` beside `NameOfInterview.md`
    #[default]
    Final,
}

impl Mode {
    pub fn from_raw_flag(raw: bool) -> Self {
        if raw { Mode::Raw } else { Mode::Final }
    }

    /// Extension (without the dot) of the files this mode discovers.
    pub fn target_extension(self) -> &'static str {
        match self {
            Mode::Raw => COMPANION_EXTENSION,
            Mode::Final => MEDIA_EXTENSION,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Raw => f.write_str("raw"),
            Mode::Final => f.write_str("final"),
        }
    }
}

/// Lib-only options for [`crawl_dir`](crate::crawl_dir).
#[derive(Clone, Debug, Default)]
pub struct CrawlOpts {
    pub mode: Mode,
    /// Write a stub companion beside media files that have none (final mode only).
    pub make_defaults: bool,
    /// Follow symbolic links.
    pub follow_links: bool,
    /// Strict mode: fail on the first item-level error instead of skipping the item.
    pub strict: bool,
}

impl From<&Opts> for CrawlOpts {
    fn from(o: &Opts) -> Self {
        CrawlOpts {
            mode: o.mode,
            make_defaults: o.make_defaults,
            follow_links: o.follow_links,
            strict: o.strict,
        }
    }
}

/// Full options (CLI). Use [`CrawlOpts`] for lib.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    pub mode: Mode,
    pub make_defaults: bool,
    /// Spreadsheet path. When None, uses `root.join(<default output filename>)`.
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub follow_links: bool,
    pub strict: bool,
}
