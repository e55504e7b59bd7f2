//! List participants who have not responded

use std::path::Path;

use rollcall::core::services::find_non_respondents_with;
use rollcall::output::{OutputMode, PendingResult};

use super::context::Context;
use crate::cli::SourceArgs;

/// Reconcile roster against responses and print who is missing
pub fn pending(config: Option<&Path>, sources: &SourceArgs, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = Context::load(config)?;
    let roster = ctx.roster(sources)?;
    let responses = ctx.responses(sources)?;

    let pending =
        find_non_respondents_with(&roster.records, &responses.records, ctx.config.matching.mode);

    PendingResult {
        roster_total: roster.records.iter().filter(|e| e.has_email()).count(),
        responses_total: responses.records.len(),
        pending,
        skipped: vec![roster.skipped, responses.skipped],
    }
    .render(mode);
    Ok(())
}
