//! Row extraction from comma- or tab-separated uploads.

use std::env;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use csv::ReaderBuilder;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use pcv_model::{Record, Table};

use crate::error::{IngestError, Result};

/// Field separator of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Tab if the contents hold a tab byte, comma otherwise.
    #[default]
    Auto,
    Comma,
    Tab,
}

impl Delimiter {
    /// Separator byte to parse `contents` with.
    pub fn resolve(self, contents: &[u8]) -> u8 {
        match self {
            Self::Auto if contents.contains(&b'\t') => b'\t',
            Self::Auto | Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Comma => "csv",
            Self::Tab => "tsv",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "csv" | "comma" => Ok(Self::Comma),
            "tsv" | "tab" => Ok(Self::Tab),
            other => Err(format!("unknown delimiter '{other}' (expected auto, csv or tsv)")),
        }
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .trim()
        .trim_matches('"')
        .to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('"').to_string()
}

/// Copies the upload into a temporary file in `dir` that is removed on drop.
fn buffer_contents(contents: &[u8], dir: &Path) -> Result<File> {
    let mut buffer =
        NamedTempFile::new_in(dir).map_err(|source| IngestError::Buffer { source })?;
    buffer
        .write_all(contents)
        .and_then(|()| buffer.flush())
        .map_err(|source| IngestError::Buffer { source })?;
    debug!(path = %buffer.path().display(), bytes = contents.len(), "buffered upload");
    // The reopened handle keeps reading after the named file is unlinked.
    let file = buffer
        .reopen()
        .map_err(|source| IngestError::Buffer { source })?;
    Ok(file)
}

fn parse_error(error: &csv::Error) -> IngestError {
    IngestError::Parse {
        line: error.position().map_or(0, csv::Position::line),
        message: error.to_string(),
    }
}

/// Parses delimited text into a table of records.
///
/// The first non-blank line is the header. Every following non-blank line
/// becomes one record mapping header names to cell values; surrounding quotes
/// are stripped from both. Rows shorter than the header simply lack the
/// trailing columns.
pub fn read_records(contents: &[u8], delimiter: Delimiter) -> Result<Table> {
    read_buffered(contents, delimiter, &env::temp_dir())
}

fn read_buffered(contents: &[u8], delimiter: Delimiter, buffer_dir: &Path) -> Result<Table> {
    if let Err(error) = std::str::from_utf8(contents) {
        return Err(IngestError::Encoding {
            offset: error.valid_up_to(),
        });
    }

    let separator = delimiter.resolve(contents);
    let file = buffer_contents(contents, buffer_dir)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut headers: Option<Vec<String>> = None;
    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|error| parse_error(&error))?;
        if row.iter().all(|cell| normalize_cell(cell).trim().is_empty()) {
            continue;
        }
        let Some(columns) = headers.as_ref() else {
            headers = Some(row.iter().map(normalize_header).collect());
            continue;
        };
        if row.len() > columns.len() {
            warn!(
                line = row.position().map_or(0, csv::Position::line),
                cells = row.len(),
                columns = columns.len(),
                "row has more cells than the header; extra cells ignored"
            );
        }
        let mut record = Record::new();
        for (column, cell) in columns.iter().zip(row.iter()) {
            if column.is_empty() {
                continue;
            }
            record.insert(column.clone(), normalize_cell(cell));
        }
        records.push(record);
    }

    let headers = headers
        .filter(|columns| columns.iter().any(|name| !name.is_empty()))
        .ok_or(IngestError::NoHeader)?;
    debug!(
        delimiter = %char::from(separator).escape_default(),
        columns = headers.len(),
        rows = records.len(),
        "extracted records"
    );
    Ok(Table::new(headers, records))
}

/// Fail-soft variant of [`read_records`]: any failure yields an empty table,
/// which callers treat as a malformed file.
pub fn extract_records(contents: &[u8], delimiter: Delimiter) -> Table {
    match read_records(contents, delimiter) {
        Ok(table) => table,
        Err(error) => {
            warn!(%error, "failed to extract rows");
            Table::default()
        }
    }
}
