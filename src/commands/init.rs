//! Write a starter rollcall.toml

use std::fs;
use std::path::Path;

use rollcall::config::CONFIG_TEMPLATE;
use rollcall::output::{OperationResult, OutputMode};
use rollcall::paths;

/// Initialize rollcall in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = Path::new(paths::PROJECT_CONFIG);

    if config_path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to overwrite.",
                paths::PROJECT_CONFIG
            ),
        }
        .render(mode);
        return Ok(());
    }

    fs::write(config_path, CONFIG_TEMPLATE)?;
    log::debug!("Wrote {}", config_path.display());

    OperationResult::success(format!(
        "Created {}\n\nNext steps:\n  \
         Edit [survey].link and [sources] in {}\n  \
         rollcall pending\n  \
         rollcall remind --dry-run",
        paths::PROJECT_CONFIG,
        paths::PROJECT_CONFIG
    ))
    .render(mode);
    Ok(())
}
