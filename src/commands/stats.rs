//! Response rate and answer breakdowns

use std::path::Path;

use rollcall::core::services::stats::DEFAULT_MAX_DISTINCT;
use rollcall::core::services::{answer_distributions, rating_breakdown, response_rate};
use rollcall::output::{OutputMode, StatsResult};

use super::context::Context;
use crate::cli::SourceArgs;

/// Summarize the responses, with a response rate when a roster is known
pub fn stats(config: Option<&Path>, sources: &SourceArgs, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = Context::load(config)?;
    let responses = ctx.responses(sources)?;

    let has_roster = sources.roster.is_some() || ctx.config.sources.roster.is_some();
    let rate = if has_roster {
        let roster = ctx.roster(sources)?;
        Some(response_rate(&roster.records, &responses.records, ctx.config.matching.mode))
    } else {
        log::debug!("No roster configured; skipping response rate");
        None
    };

    StatsResult {
        rate,
        responses_total: responses.records.len(),
        ratings: rating_breakdown(&responses.records),
        distributions: answer_distributions(&responses.records, DEFAULT_MAX_DISTINCT),
    }
    .render(mode);
    Ok(())
}
