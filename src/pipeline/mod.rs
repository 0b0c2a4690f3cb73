//! Pipeline components: companion parsing, record building, walk loop, export.

pub mod builder;
pub mod error_handler;
pub mod export;
pub mod metadata;
pub mod walk;

pub use builder::{BuildOutcome, build_record};
pub use error_handler::report_skipped;
pub use export::{
    COLUMNS, Column, TableBuffer, TableSink, XlsxSink, fit_cell, render_table, write_spreadsheet,
    write_spreadsheet_with,
};
pub use metadata::{Metadata, parse_companion, parse_companion_str, render_markdown};
pub use walk::{WalkOutcome, crawl, run_walk_loop, to_outcome_walkdir};
