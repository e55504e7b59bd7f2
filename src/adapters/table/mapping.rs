//! Typed mapping at the loader boundary
//!
//! Turns untyped [`Table`] rows into [`RosterEntry`] and [`ResponseEntry`]
//! records. A missing required column fails the whole load. A row without
//! an email is set aside as a [`SkippedRow`] and never reaches the core.
//! Emails are kept exactly as written; comparing them is the matcher's job.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::models::{Rating, ResponseEntry, RosterEntry, Table};
use crate::core::ports::LoadError;

/// Accepted `submitted_at` layouts, tried in order
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Header names recognized for each logical column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    /// Participant name
    pub name: Vec<String>,
    /// Team or company
    pub affiliation: Vec<String>,
    /// Email address
    pub email: Vec<String>,
    /// Satisfaction rating
    pub rating: Vec<String>,
    /// Free-form comment
    pub comment: Vec<String>,
    /// Submission time
    pub submitted_at: Vec<String>,
}

fn aliases(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            name: aliases(&["name", "full_name", "full name", "이름"]),
            affiliation: aliases(&["affiliation", "team", "department", "소속"]),
            email: aliases(&["email", "email address", "이메일"]),
            rating: aliases(&["rating", "satisfaction", "만족도"]),
            comment: aliases(&["comment", "comments", "의견"]),
            submitted_at: aliases(&["submitted_at", "timestamp", "제출일시"]),
        }
    }
}

/// A row that was dropped during mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based data row number (header excluded)
    pub row: usize,
    /// Why it was dropped
    pub reason: String,
}

/// Mapped records plus the rows that did not make it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    /// Valid records, in source order
    pub records: Vec<T>,
    /// Rows dropped during mapping
    pub skipped: Vec<SkippedRow>,
}

fn require(table: &Table, column: &str, names: &[String]) -> Result<usize, LoadError> {
    table.column_index(names).ok_or_else(|| LoadError::MissingColumn {
        column: column.to_string(),
        aliases: names.join(", "),
    })
}

fn optional_cell(table: &Table, row: usize, col: Option<usize>) -> String {
    col.map(|c| table.cell(row, c).trim().to_string()).unwrap_or_default()
}

fn skip_blank_email(row: usize, label: &str) -> SkippedRow {
    log::warn!("Skipping {label} row {}: no email address", row + 1);
    SkippedRow {
        row: row + 1,
        reason: "missing email".to_string(),
    }
}

/// Map a roster table
///
/// Requires name and email columns; affiliation is optional.
pub fn roster_from_table(
    table: &Table,
    names: &ColumnAliases,
) -> Result<Loaded<RosterEntry>, LoadError> {
    let email_col = require(table, "email", &names.email)?;
    let name_col = require(table, "name", &names.name)?;
    let affiliation_col = table.column_index(&names.affiliation);

    let mut records = Vec::with_capacity(table.len());
    let mut skipped = Vec::new();

    for row in 0..table.len() {
        let email = table.cell(row, email_col);
        if email.trim().is_empty() {
            skipped.push(skip_blank_email(row, "roster"));
            continue;
        }
        records.push(RosterEntry::new(
            table.cell(row, name_col).trim(),
            optional_cell(table, row, affiliation_col),
            email,
        ));
    }

    log::debug!("Mapped {} roster entries ({} skipped)", records.len(), skipped.len());
    Ok(Loaded { records, skipped })
}

/// Map a response table
///
/// Requires an email column. Every column not mapped to a known field is
/// kept as an answer.
pub fn responses_from_table(
    table: &Table,
    names: &ColumnAliases,
) -> Result<Loaded<ResponseEntry>, LoadError> {
    let email_col = require(table, "email", &names.email)?;
    let name_col = table.column_index(&names.name);
    let affiliation_col = table.column_index(&names.affiliation);
    let rating_col = table.column_index(&names.rating);
    let comment_col = table.column_index(&names.comment);
    let submitted_col = table.column_index(&names.submitted_at);

    let known: Vec<usize> = [
        Some(email_col),
        name_col,
        affiliation_col,
        rating_col,
        comment_col,
        submitted_col,
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut records = Vec::with_capacity(table.len());
    let mut skipped = Vec::new();

    for row in 0..table.len() {
        let email = table.cell(row, email_col);
        if email.trim().is_empty() {
            skipped.push(skip_blank_email(row, "response"));
            continue;
        }

        let rating_text = optional_cell(table, row, rating_col);
        let rating = if rating_text.is_empty() {
            None
        } else {
            rating_text
                .parse::<Rating>()
                .inspect_err(|e| log::debug!("Response row {}: {e}", row + 1))
                .ok()
        };

        let comment = Some(optional_cell(table, row, comment_col)).filter(|c| !c.is_empty());
        let submitted_at = parse_timestamp(&optional_cell(table, row, submitted_col));

        let answers = table
            .headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !known.contains(i))
            .map(|(i, header)| (header.clone(), table.cell(row, i).trim().to_string()))
            .collect();

        records.push(ResponseEntry {
            full_name: optional_cell(table, row, name_col),
            affiliation: optional_cell(table, row, affiliation_col),
            email: email.to_string(),
            rating,
            comment,
            submitted_at,
            answers,
        });
    }

    log::debug!("Mapped {} responses ({} skipped)", records.len(), skipped.len());
    Ok(Loaded { records, skipped })
}

/// Parse a submission time in any of the accepted layouts
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}
