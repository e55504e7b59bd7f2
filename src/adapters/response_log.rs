//! Local response log
//!
//! Appends survey responses to a CSV file that the response loader can
//! read back. An existing file keeps its own header layout.

use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use anyhow::Context;

use super::table::{ColumnAliases, read_table};
use crate::core::models::ResponseEntry;

/// Header written to a new response log
pub const RESPONSE_HEADERS: [&str; 6] =
    ["name", "affiliation", "email", "rating", "comment", "submitted_at"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append one response, creating the file with a header if needed
pub fn append_response(
    path: &Path,
    entry: &ResponseEntry,
    names: &ColumnAliases,
) -> anyhow::Result<()> {
    let existing = fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);

    let headers: Vec<String> = if existing {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        read_table(file)
            .with_context(|| format!("Failed to read header of {}", path.display()))?
            .headers
    } else {
        RESPONSE_HEADERS
            .iter()
            .map(ToString::to_string)
            .chain(entry.answers.iter().map(|(q, _)| q.clone()))
            .collect()
    };

    let row: Vec<String> = headers.iter().map(|h| field_for(h, entry, names)).collect();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .read(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for appending", path.display()))?;

    if existing && !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);
    if !existing {
        writer.write_record(&headers)?;
    }
    writer.write_record(&row)?;
    writer.flush()?;

    log::debug!("Appended response from {} to {}", entry.email, path.display());
    Ok(())
}

fn field_for(header: &str, entry: &ResponseEntry, names: &ColumnAliases) -> String {
    let is = |aliases: &[String]| aliases.iter().any(|a| a.trim().eq_ignore_ascii_case(header.trim()));

    if is(&names.email) {
        entry.email.clone()
    } else if is(&names.name) {
        entry.full_name.clone()
    } else if is(&names.affiliation) {
        entry.affiliation.clone()
    } else if is(&names.rating) {
        entry.rating.map(|r| r.label().to_string()).unwrap_or_default()
    } else if is(&names.comment) {
        entry.comment.clone().unwrap_or_default()
    } else if is(&names.submitted_at) {
        entry
            .submitted_at
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default()
    } else {
        entry
            .answers
            .iter()
            .find(|(q, _)| q == header)
            .map(|(_, a)| a.clone())
            .unwrap_or_default()
    }
}

fn ends_with_newline(file: &mut fs::File) -> std::io::Result<bool> {
    if file.seek(SeekFrom::End(0))? == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
