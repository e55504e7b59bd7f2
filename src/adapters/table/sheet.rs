//! Remote sheet source
//!
//! Google Sheets links are turned into their CSV export URL; any other
//! http(s) URL is fetched as CSV as-is.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use super::csv_file::read_table;
use crate::core::models::Table;
use crate::core::ports::{LoadError, TableSource};

static SHEET_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("sheet id regex is valid"));

static GID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#?&]gid=(\d+)").expect("gid regex is valid"));

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Extract the spreadsheet id from a Google Sheets URL
#[must_use]
pub fn extract_sheet_id(url: &str) -> Option<String> {
    SHEET_ID_RE.captures(url).map(|c| c[1].to_string())
}

/// URL that returns the sheet (or plain resource) as CSV
#[must_use]
pub fn export_url(url: &str) -> String {
    if !url.contains("docs.google.com/spreadsheets") {
        return url.to_string();
    }
    let Some(id) = extract_sheet_id(url) else {
        return url.to_string();
    };

    let mut export = format!("https://docs.google.com/spreadsheets/d/{id}/export?format=csv");
    if let Some(gid) = GID_RE.captures(url) {
        export.push_str("&gid=");
        export.push_str(&gid[1]);
    }
    export
}

/// Table source fetched over HTTP(S)
#[derive(Debug, Clone)]
pub struct SheetUrl {
    url: String,
}

impl SheetUrl {
    /// Create a source for the given URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl TableSource for SheetUrl {
    fn load(&self) -> Result<Table, LoadError> {
        let target = export_url(&self.url);
        let fetch_err = |reason: String| LoadError::Fetch {
            url: target.clone(),
            reason,
        };

        log::debug!("Fetching {target}");
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| fetch_err(e.to_string()))?;
        let body = client
            .get(&target)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|e| fetch_err(e.to_string()))?;

        read_table(body.as_bytes())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
