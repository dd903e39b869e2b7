// ============================================================
// CSV PARSER
// ============================================================
// Parse CSV files into header-addressed tables

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::dataset::ColumnMapping;
use crate::domain::error::{AppError, Result};

/// A parsed CSV file: header row plus string cells.
///
/// Every row holds exactly one cell per header; short rows are padded with
/// empty cells, which read as missing values downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// Where the table came from, used in error messages
    pub source: String,

    pub headers: Vec<String>,

    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Rename headers according to the mapping; cells are untouched
    pub fn rename_columns(mut self, mapping: &ColumnMapping) -> Self {
        self.headers = self
            .headers
            .iter()
            .map(|header| mapping.apply(header).to_string())
            .collect();
        self
    }

    /// Project the table onto `columns`, in that order.
    ///
    /// Fails with `NotFound` naming the first absent column.
    pub fn select(&self, columns: &[&str]) -> Result<CsvTable> {
        let indices = columns
            .iter()
            .map(|name| {
                self.column_index(name).ok_or_else(|| {
                    AppError::NotFound(format!("column '{}' in {}", name, self.source))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&idx| row[idx].clone()).collect::<Vec<String>>())
            .collect();

        Ok(CsvTable {
            source: self.source.clone(),
            headers: columns.iter().map(|name| name.to_string()).collect(),
            rows,
        })
    }
}

/// CSV parser for the training datasets
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parse a CSV file
    pub fn parse_file(&self, path: &Path) -> Result<CsvTable> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        // Invalid UTF-8 is replaced rather than rejected
        let content = String::from_utf8_lossy(&bytes);
        self.parse_content(&content, &path.display().to_string())
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str, source: &str) -> Result<CsvTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| {
                AppError::ParseError(format!("Failed to read CSV headers of {}: {}", source, e))
            })?
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!(
                    "Failed to parse CSV row {} of {}: {}",
                    index + 1,
                    source,
                    e
                ))
            })?;
            rows.push(Self::parse_row(headers.len(), &record));
        }

        Ok(CsvTable {
            source: source.to_string(),
            headers,
            rows,
        })
    }

    fn parse_row(width: usize, record: &StringRecord) -> Vec<String> {
        (0..width)
            .map(|idx| record.get(idx).unwrap_or("").to_string())
            .collect()
    }
}
