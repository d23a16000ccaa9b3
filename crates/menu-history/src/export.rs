use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::record::{OrderHistory, OrderRecord};

pub const CSV_HEADER: &str = "Timestamp,Item,Quantity";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Same blocks as the history view, blank-line separated.
    Text,
    /// `"timestamp","item",qty` rows under [`CSV_HEADER`].
    Csv,
}

impl ExportFormat {
    /// `.csv` (any case) selects CSV; every other suffix, or none, selects text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug)]
pub enum ExportError {
    /// Nothing has been ordered yet; no file is written.
    EmptyHistory,
    /// The encoder failed before anything touched the disk.
    Encode(String),
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EmptyHistory => f.write_str("no orders to export"),
            ExportError::Encode(msg) => write!(f, "order history encoding failed: {msg}"),
            ExportError::Write { path, source } => {
                write!(f, "write '{}' failed: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub records: usize,
    /// Item lines written (CSV rows, or `x` lines in text).
    pub lines: usize,
}

impl OrderHistory {
    /// Write the whole history to `path`, format chosen by suffix.
    ///
    /// The file is encoded in memory first and written in one go. History is
    /// never modified, whatever the outcome.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<ExportReport, ExportError> {
        let path = path.as_ref();
        if self.is_empty() {
            return Err(ExportError::EmptyHistory);
        }

        let format = ExportFormat::from_path(path);
        info!(format = format.as_str(), path = %path.display(), "exporting order history");

        let bytes = self.encode(format)?;
        fs::write(path, bytes).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(ExportReport {
            path: path.to_path_buf(),
            format,
            records: self.len(),
            lines: self.records().iter().map(|r| r.lines().len()).sum(),
        })
    }

    pub fn encode(&self, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        let mut buf = Vec::new();
        match format {
            ExportFormat::Text => write_text(self.records(), &mut buf),
            ExportFormat::Csv => write_csv(self.records(), &mut buf),
        }
        .map_err(|e| ExportError::Encode(e.to_string()))?;
        Ok(buf)
    }
}

fn write_text<W: Write>(records: &[OrderRecord], mut w: W) -> io::Result<()> {
    for r in records {
        writeln!(w, "{}\n", r.to_block())?;
    }
    Ok(())
}

fn write_csv<W: Write>(records: &[OrderRecord], mut w: W) -> io::Result<()> {
    writeln!(w, "{CSV_HEADER}")?;
    for r in records {
        for line in r.lines() {
            let text = quoted_fields(r.timestamp(), &line.item)?;
            writeln!(w, "{text},{}", line.quantity)?;
        }
    }
    Ok(())
}

/// `"<a>","<b>"`, always quoted whatever the content, embedded quotes doubled.
fn quoted_fields(a: &str, b: &str) -> io::Result<String> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record([a, b])?;
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;

    let mut text =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use menu_schemas::OrderLine;

    fn history() -> OrderHistory {
        let mut h = OrderHistory::default();
        let at = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        h.place_at(vec![OrderLine::new("A", 3), OrderLine::new("B", 2)], at);
        h
    }

    #[test]
    fn format_follows_suffix() {
        assert_eq!(ExportFormat::from_path(Path::new("out.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("OUT.CSV")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out.txt")), ExportFormat::Text);
        assert_eq!(ExportFormat::from_path(Path::new("out")), ExportFormat::Text);
        assert_eq!(ExportFormat::from_path(Path::new("out.csv.bak")), ExportFormat::Text);
    }

    #[test]
    fn csv_encoding_quotes_text_only() {
        let bytes = history().encode(ExportFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Timestamp,Item,Quantity\n\
             \"01/02/2025 10:00:00\",\"A\",3\n\
             \"01/02/2025 10:00:00\",\"B\",2\n"
        );
    }

    #[test]
    fn csv_escapes_embedded_quotes() {
        let mut h = OrderHistory::default();
        let at = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        h.place_at(vec![OrderLine::new("The \"Big\" One, large", 1)], at);
        let text = String::from_utf8(h.encode(ExportFormat::Csv).unwrap()).unwrap();
        assert!(text.contains("\"The \"\"Big\"\" One, large\",1"));
    }

    #[test]
    fn numeric_looking_text_is_still_quoted() {
        let mut h = OrderHistory::new("%Y%m%d%H%M%S").unwrap();
        let at = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        h.place_at(vec![OrderLine::new("7", 1), OrderLine::new("1.5", 2)], at);
        let text = String::from_utf8(h.encode(ExportFormat::Csv).unwrap()).unwrap();
        assert_eq!(
            text,
            "Timestamp,Item,Quantity\n\
             \"20250102100000\",\"7\",1\n\
             \"20250102100000\",\"1.5\",2\n"
        );
    }

    #[test]
    fn text_encoding_matches_blocks() {
        let bytes = history().encode(ExportFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "01/02/2025 10:00:00\nOrder:\nA x 3\nB x 2\n\n"
        );
    }

    #[test]
    fn empty_history_refuses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("h.txt");
        let err = OrderHistory::default().export(&path).unwrap_err();
        assert!(matches!(err, ExportError::EmptyHistory));
        assert!(!path.exists());
    }
}
