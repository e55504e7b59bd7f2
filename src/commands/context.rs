//! Shared loading for commands: config discovery and source resolution

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use rollcall::adapters::table::{Loaded, open_source, responses_from_table, roster_from_table};
use rollcall::config::Config;
use rollcall::core::models::{ResponseEntry, RosterEntry, Table};
use rollcall::output::SkippedReport;

use crate::cli::SourceArgs;

/// Loaded config plus the directory relative sources resolve against
pub struct Context {
    pub config: Config,
    base_dir: PathBuf,
}

/// Records from one source, with the rows that were dropped
pub struct Sourced<T> {
    pub records: Vec<T>,
    pub skipped: SkippedReport,
}

impl Context {
    /// Discover the config from the current directory
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        let config = Config::discover(explicit, &cwd)?;
        let base_dir = config.base_dir(&cwd);
        Ok(Self { config, base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn roster_location<'a>(&'a self, args: &'a SourceArgs) -> anyhow::Result<&'a str> {
        args.roster
            .as_deref()
            .or(self.config.sources.roster.as_deref())
            .context("No roster source: pass --roster or set [sources].roster")
    }

    fn responses_location<'a>(&'a self, args: &'a SourceArgs) -> anyhow::Result<&'a str> {
        args.responses
            .as_deref()
            .or(self.config.sources.responses.as_deref())
            .context("No responses source: pass --responses or set [sources].responses")
    }

    /// Load a raw table from a path or URL
    pub fn load_table(&self, location: &str) -> anyhow::Result<(Table, String)> {
        let source = open_source(location, &self.base_dir);
        let description = source.describe();
        log::debug!("Loading {description}");
        let table = source.load().with_context(|| format!("Failed to load {description}"))?;
        log::info!("Loaded {} row(s) from {description}", table.len());
        Ok((table, description))
    }

    /// Load and map the roster
    pub fn roster(&self, args: &SourceArgs) -> anyhow::Result<Sourced<RosterEntry>> {
        let (table, description) = self.load_table(self.roster_location(args)?)?;
        let loaded = roster_from_table(&table, &self.config.columns)
            .with_context(|| format!("Invalid roster {description}"))?;
        Ok(Sourced::new(loaded, description))
    }

    /// Load and map the responses
    pub fn responses(&self, args: &SourceArgs) -> anyhow::Result<Sourced<ResponseEntry>> {
        let (table, description) = self.load_table(self.responses_location(args)?)?;
        let loaded = responses_from_table(&table, &self.config.columns)
            .with_context(|| format!("Invalid responses {description}"))?;
        Ok(Sourced::new(loaded, description))
    }

    /// Raw responses table, for prompts that want every column
    pub fn responses_table(&self, location: Option<&str>) -> anyhow::Result<Table> {
        let args = SourceArgs {
            roster: None,
            responses: location.map(ToString::to_string),
        };
        let (table, _) = self.load_table(self.responses_location(&args)?)?;
        Ok(table)
    }
}

impl<T> Sourced<T> {
    fn new(loaded: Loaded<T>, source: String) -> Self {
        for row in &loaded.skipped {
            log::warn!("{source}: skipped row {}: {}", row.row, row.reason);
        }
        Self {
            records: loaded.records,
            skipped: SkippedReport {
                source,
                rows: loaded.skipped,
            },
        }
    }
}
