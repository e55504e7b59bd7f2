//! Send reminders to participants who have not responded

use std::path::Path;

use anyhow::Context as _;

use rollcall::core::services::find_non_respondents_with;
use rollcall::output::{DispatchKind, OperationResult, OutputMode};

use super::context::Context;
use super::send::{SendOptions, deliver};
use crate::cli::SourceArgs;

/// Reconcile, confirm and dispatch one reminder per non-respondent
pub fn remind(
    config: Option<&Path>,
    sources: &SourceArgs,
    options: &SendOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ctx = Context::load(config)?;

    let survey = options.survey(&ctx)?;
    let template = ctx.config.reminder.template().context("Invalid reminder template")?;

    let roster = ctx.roster(sources)?;
    let responses = ctx.responses(sources)?;
    let pending =
        find_non_respondents_with(&roster.records, &responses.records, ctx.config.matching.mode);

    if pending.is_empty() {
        OperationResult::success("Everyone has responded. No reminders to send.").render(mode);
        return Ok(());
    }

    deliver(&ctx, &pending, &template, &survey, DispatchKind::Reminder, options, mode)
}
