//! Local CSV file source

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::models::Table;
use crate::core::ports::{LoadError, TableSource};

/// Table source backed by a CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    /// Create a source for the given path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for CsvFile {
    fn load(&self) -> Result<Table, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::NotFound(self.path.clone()));
        }
        let file = std::fs::File::open(&self.path)?;
        read_table(file)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse CSV text with a header row into a [`Table`]
///
/// Rows may be ragged. Rows where every cell is blank are dropped.
pub fn read_table<R: Read>(reader: R) -> Result<Table, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(LoadError::NoHeader);
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}
