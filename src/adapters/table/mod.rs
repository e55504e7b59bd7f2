//! Table sources and typed mapping
//!
//! - [`csv_file`] - Local CSV files
//! - [`sheet`] - Google Sheets and other CSV URLs
//! - [`mapping`] - Raw rows to roster and response records

pub mod csv_file;
pub mod mapping;
pub mod sheet;

use std::path::Path;

pub use csv_file::{CsvFile, read_table};
pub use mapping::{
    ColumnAliases, Loaded, SkippedRow, parse_timestamp, responses_from_table, roster_from_table,
};
pub use sheet::{SheetUrl, export_url, extract_sheet_id};

use crate::core::ports::TableSource;

/// Whether a source string names a remote resource
#[must_use]
pub fn is_remote(location: &str) -> bool {
    let scheme = |prefix: &str| {
        location
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    scheme("http://") || scheme("https://")
}

/// Pick a source for a path or URL
///
/// Relative paths are resolved against `base_dir`.
#[must_use]
pub fn open_source(location: &str, base_dir: &Path) -> Box<dyn TableSource> {
    if is_remote(location) {
        Box::new(SheetUrl::new(location))
    } else {
        Box::new(CsvFile::new(base_dir.join(location)))
    }
}
