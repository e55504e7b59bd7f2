//! Append a response to the local response log

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use chrono::Local;

use rollcall::adapters::response_log::append_response;
use rollcall::adapters::table::is_remote;
use rollcall::core::models::{Rating, ResponseEntry};
use rollcall::output::{OperationResult, OutputMode};
use rollcall::paths;

use super::context::Context;

/// Fields for one recorded response
pub struct RecordInput {
    pub name: String,
    pub affiliation: String,
    pub email: String,
    pub rating: String,
    pub comment: Option<String>,
    pub file: Option<PathBuf>,
}

/// Validate and append one response with the current time
pub fn record(config: Option<&Path>, input: &RecordInput, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = Context::load(config)?;

    if input.name.trim().is_empty() {
        bail!("Name must not be empty");
    }
    if input.email.trim().is_empty() {
        bail!("Email must not be empty");
    }
    let rating: Rating = input.rating.parse().map_err(anyhow::Error::msg)?;

    let mut entry = ResponseEntry::new(input.name.trim(), input.affiliation.trim(), input.email.trim())
        .with_rating(rating);
    entry.comment = input.comment.clone().filter(|c| !c.trim().is_empty());
    entry.submitted_at = Some(Local::now().naive_local());

    let path = log_path(&ctx, input.file.as_deref())?;
    append_response(&path, &entry, &ctx.config.columns)
        .with_context(|| format!("Failed to record response in {}", path.display()))?;
    log::debug!("Recorded {} ({rating})", entry.email);

    OperationResult::success(format!(
        "Recorded response from {} <{}> in {}",
        entry.full_name,
        entry.email,
        path.display()
    ))
    .render(mode);
    Ok(())
}

fn log_path(ctx: &Context, explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match ctx.config.sources.responses.as_deref() {
        Some(location) if is_remote(location) => {
            bail!("[sources].responses is a URL; pass --file to record locally")
        },
        Some(location) => Ok(ctx.base_dir().join(location)),
        None => Ok(ctx.base_dir().join(paths::DEFAULT_RESPONSE_LOG)),
    }
}
