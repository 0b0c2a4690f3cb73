//! Application configuration constants.
//! File names, extensions and the stub template in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived paths: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache paths from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Per-root settings file, e.g. `.sessionbuilder.toml`.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    pub fn output_filename(&self) -> &str {
        DEFAULT_OUTPUT_FILENAME
    }
}

// ---- Discovery ----

pub const MEDIA_EXTENSION: &str = "mp4";
pub const COMPANION_EXTENSION: &str = "md";

/// Marker that opens a tag line.
pub const TAG_OPEN: char = '{';
pub const TAG_CLOSE: char = '}';
/// Heading marker stripped from the title line.
pub const HEADING_MARKER: char = '#';
/// Separates session from day in a folder name (`1_Monday`).
pub const SESSION_DAY_SEPARATOR: char = '_';

// ---- Stub companion ----

/// Title written into stub companions. Records still carrying it need editing.
pub const PLACEHOLDER_TITLE: &str = "Title Here";

/// Literal content of a stub companion file.
pub const STUB_TEMPLATE: &str = "{ tag1, tag2, tag3 }\n# Title Here\n\nDescription here.";

// ---- Export ----

pub const DEFAULT_OUTPUT_FILENAME: &str = "sessions.xlsx";
pub const SHEET_NAME: &str = "Sessions";
/// Most characters Excel stores in one cell.
pub const MAX_CELL_CHARS: usize = 32_767;
