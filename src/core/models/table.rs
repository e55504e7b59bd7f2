//! Raw tabular data
//!
//! What a roster or response source hands back before typed mapping.

use serde::Serialize;

/// Header row plus string cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Column names, in source order
    pub headers: Vec<String>,
    /// Data rows; a row may be shorter than the header
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table, cleaning line breaks out of every cell
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers = headers.into_iter().map(|h| clean_cell(&h)).collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| clean_cell(&c)).collect())
            .collect();
        Self { headers, rows }
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header matching any alias, case-insensitively
    #[must_use]
    pub fn column_index<S: AsRef<str>>(&self, aliases: &[S]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            let alias = alias.as_ref().trim();
            self.headers.iter().position(|h| h.trim().eq_ignore_ascii_case(alias))
        })
    }

    /// Cell at `row`, `col`, or "" when the row is short
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    /// Copy of this table without the given columns
    #[must_use]
    pub fn without_columns(&self, drop: &[usize]) -> Self {
        let keep: Vec<usize> = (0..self.headers.len()).filter(|i| !drop.contains(i)).collect();
        let headers = keep.iter().map(|&i| self.headers[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| keep.iter().map(|&i| row.get(i).cloned().unwrap_or_default()).collect())
            .collect();
        Self { headers, rows }
    }

    /// Render as tab-separated text, header first
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = self.headers.join("\t");
        for row in &self.rows {
            out.push('\n');
            out.push_str(&row.join("\t"));
        }
        out
    }
}

fn clean_cell(value: &str) -> String {
    value.replace('\r', "").replace('\n', " ")
}
