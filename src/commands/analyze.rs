//! Summarize responses with a language model

use std::path::Path;

use anyhow::bail;

use rollcall::adapters::openai::OpenAiClient;
use rollcall::core::ports::TextGenerator;
use rollcall::core::services::analysis_prompt;
use rollcall::core::services::prompt::ANALYSIS_SYSTEM;
use rollcall::output::{AnalysisResult, OutputMode};

use super::context::Context;

/// Send every response to the model and print its analysis
pub fn analyze(
    config: Option<&Path>,
    responses: Option<&str>,
    show_prompt: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ctx = Context::load(config)?;
    let table = ctx.responses_table(responses)?;
    if table.is_empty() {
        bail!("No responses to analyze");
    }

    let prompt = analysis_prompt(&table);
    if show_prompt {
        println!("{prompt}");
        return Ok(());
    }

    let client = OpenAiClient::from_env(&ctx.config.llm)?;
    log::info!("Analyzing {} response(s) with {}", table.len(), ctx.config.llm.model);
    let analysis = client.complete(ANALYSIS_SYSTEM, &prompt)?;

    AnalysisResult {
        model: ctx.config.llm.model.clone(),
        responses: table.len(),
        analysis,
    }
    .render(mode);
    Ok(())
}
