//! Text generator port
//!
//! A black-box completion function. The core only builds prompts and
//! reads back text.

/// Language model completion
pub trait TextGenerator {
    /// Complete `prompt` under the given system instruction
    fn complete(&self, system: &str, prompt: &str) -> anyhow::Result<String>;
}
