//! Draft a survey with a language model

use std::path::Path;

use anyhow::Context as _;

use rollcall::adapters::openai::OpenAiClient;
use rollcall::core::models::DraftRequest;
use rollcall::core::ports::TextGenerator;
use rollcall::core::services::prompt::DRAFT_SYSTEM;
use rollcall::core::services::{draft_prompt, parse_draft};
use rollcall::output::{DraftResult, OutputMode};

use super::context::Context;

/// Ask the model for a survey draft and print it
pub fn draft(
    config: Option<&Path>,
    request: &DraftRequest,
    show_prompt: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let prompt = draft_prompt(request);
    if show_prompt {
        println!("{prompt}");
        return Ok(());
    }

    let ctx = Context::load(config)?;
    let client = OpenAiClient::from_env(&ctx.config.llm)?;
    log::info!("Drafting survey for {} with {}", request.audience, ctx.config.llm.model);
    let reply = client.complete(DRAFT_SYSTEM, &prompt)?;
    let draft = parse_draft(&reply).context("Model reply was not a valid survey draft")?;

    DraftResult {
        model: ctx.config.llm.model.clone(),
        draft,
    }
    .render(mode);
    Ok(())
}
