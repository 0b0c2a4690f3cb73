//! Records to rows: fixed column list, pluggable row sink, xlsx file output.

use anyhow::{Context, Result};
use rust_xlsxwriter::{DocProperties, Format, Workbook, Worksheet};
use std::borrow::Cow;
use std::path::Path;

use crate::Record;
use crate::utils::config::{MAX_CELL_CHARS, SHEET_NAME};

/// One sheet column: header text and how to read the cell from a record.
pub struct Column {
    pub name: &'static str,
    pub value: fn(&Record) -> Option<&str>,
}

fn title(r: &Record) -> Option<&str> {
    Some(&r.title)
}
fn description(r: &Record) -> Option<&str> {
    Some(&r.description)
}
fn tags(r: &Record) -> Option<&str> {
    r.tags.as_deref()
}
fn markdown_description(r: &Record) -> Option<&str> {
    Some(&r.markdown_description)
}
fn day(r: &Record) -> Option<&str> {
    Some(&r.day)
}
fn session(r: &Record) -> Option<&str> {
    Some(&r.session)
}
fn file_name(r: &Record) -> Option<&str> {
    Some(&r.file_name)
}
fn file_path(r: &Record) -> Option<&str> {
    r.file_path.as_deref()
}
fn relative_path(r: &Record) -> Option<&str> {
    r.relative_path.as_deref()
}

/// Sheet columns in [`Record`] field order.
pub const COLUMNS: [Column; 9] = [
    Column { name: "Title", value: title },
    Column { name: "Description", value: description },
    Column { name: "Tags", value: tags },
    Column { name: "MarkdownDescription", value: markdown_description },
    Column { name: "Day", value: day },
    Column { name: "Session", value: session },
    Column { name: "FileName", value: file_name },
    Column { name: "FilePath", value: file_path },
    Column { name: "RelativePath", value: relative_path },
];

/// Row/column destination for [`render_table`]. Rows arrive in order, header first.
pub trait TableSink {
    fn header(&mut self, names: &[&str]) -> Result<()>;
    /// `None` and `Some("")` are both an empty cell.
    fn row(&mut self, cells: &[Option<&str>]) -> Result<()>;
}

/// Write the header and one row per record to `sink`.
pub fn render_table<S: TableSink + ?Sized>(records: &[Record], sink: &mut S) -> Result<()> {
    let names: Vec<&str> = COLUMNS.iter().map(|c| c.name).collect();
    sink.header(&names)?;
    for record in records {
        let cells: Vec<Option<&str>> = COLUMNS.iter().map(|c| (c.value)(record)).collect();
        sink.row(&cells)?;
    }
    Ok(())
}

/// In-memory table: every row as owned strings, empty cells as `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableBuffer {
    pub rows: Vec<Vec<String>>,
}

impl TableSink for TableBuffer {
    fn header(&mut self, names: &[&str]) -> Result<()> {
        self.rows.push(names.iter().map(|n| n.to_string()).collect());
        Ok(())
    }

    fn row(&mut self, cells: &[Option<&str>]) -> Result<()> {
        self.rows
            .push(cells.iter().map(|c| c.unwrap_or_default().to_string()).collect());
        Ok(())
    }
}

/// Single-sheet xlsx writer. Call [`XlsxSink::save`] once all rows are in.
pub struct XlsxSink {
    worksheet: Worksheet,
    header_format: Format,
    properties: Option<DocProperties>,
    next_row: u32,
}

/// Cut `text` to the longest prefix Excel accepts in one cell.
pub fn fit_cell(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => Cow::Owned(text[..end].to_string()),
        None => Cow::Borrowed(text),
    }
}

impl XlsxSink {
    pub fn new() -> Result<Self> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(SHEET_NAME)?;
        Ok(Self {
            worksheet,
            header_format: Format::new().set_bold(),
            properties: None,
            next_row: 0,
        })
    }

    /// Document properties (author, creation date, ...) stored in the file.
    pub fn with_properties(mut self, properties: DocProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn save(self, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        if let Some(ref properties) = self.properties {
            workbook.set_properties(properties);
        }
        workbook.push_worksheet(self.worksheet);
        workbook
            .save(path)
            .with_context(|| format!("write spreadsheet {}", path.display()))
    }
}

impl TableSink for XlsxSink {
    fn header(&mut self, names: &[&str]) -> Result<()> {
        for (col, name) in names.iter().enumerate() {
            self.worksheet.write_string_with_format(
                self.next_row,
                u16::try_from(col)?,
                *name,
                &self.header_format,
            )?;
        }
        self.next_row += 1;
        Ok(())
    }

    fn row(&mut self, cells: &[Option<&str>]) -> Result<()> {
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Some(text) if !text.is_empty() => {
                    let fitted = fit_cell(text);
                    if fitted.len() < text.len() {
                        log::warn!(
                            "row {} column {}: {} characters cut to Excel's {} limit",
                            self.next_row,
                            COLUMNS.get(col).map(|c| c.name).unwrap_or("?"),
                            text.chars().count(),
                            MAX_CELL_CHARS
                        );
                    }
                    self.worksheet
                        .write_string(self.next_row, u16::try_from(col)?, fitted.as_ref())?;
                }
                _ => {}
            }
        }
        self.next_row += 1;
        Ok(())
    }
}

/// Replace whatever is at `path` with a fresh spreadsheet of `records`.
pub fn write_spreadsheet(records: &[Record], path: &Path) -> Result<()> {
    write_spreadsheet_with(records, path, XlsxSink::new()?)
}

/// [`write_spreadsheet`] through a caller-configured sink.
/// Rows are rendered before the old file is removed, so a rendering error leaves it in place.
pub fn write_spreadsheet_with(records: &[Record], path: &Path, mut sink: XlsxSink) -> Result<()> {
    render_table(records, &mut sink)?;
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("remove existing spreadsheet {}", path.display()))?;
    }
    sink.save(path)
}
