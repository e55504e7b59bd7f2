//! Send the survey link to a whole list

use std::path::Path;

use anyhow::Context as _;

use rollcall::core::models::RosterEntry;
use rollcall::output::{DispatchKind, OperationResult, OutputMode};

use super::context::Context;
use super::send::{SendOptions, deliver};
use crate::cli::SourceArgs;

/// Invite every roster entry, or only the addresses given with `--to`
pub fn invite(
    config: Option<&Path>,
    roster: Option<String>,
    to: &[String],
    options: &SendOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ctx = Context::load(config)?;

    let survey = options.survey(&ctx)?;
    let template = ctx.config.invitation.template().context("Invalid invitation template")?;

    let recipients = if to.is_empty() {
        let sources = SourceArgs {
            roster,
            responses: None,
        };
        ctx.roster(&sources)?.records
    } else {
        recipients_from_list(to)
    };

    if recipients.is_empty() {
        OperationResult::success("No recipients. No invitations to send.").render(mode);
        return Ok(());
    }

    deliver(&ctx, &recipients, &template, &survey, DispatchKind::Invitation, options, mode)
}

fn recipients_from_list(to: &[String]) -> Vec<RosterEntry> {
    to.iter()
        .filter(|email| !email.trim().is_empty())
        .map(|email| RosterEntry::new("", "", email.trim()))
        .collect()
}
