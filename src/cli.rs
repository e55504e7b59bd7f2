//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use rollcall::core::models::DraftRequest;
use rollcall::output::OutputMode;

/// rollcall - Survey response tracking and reminders
#[derive(Parser, Debug)]
#[command(
    name = "rollcall",
    version,
    about = "Survey response tracking and reminders",
    long_about = "Track who has answered a training survey and remind who has not.\n\n\
                  The roster lists everyone expected to answer. Responses are\n\
                  matched to it by email, and each missing participant can be\n\
                  sent a personalized reminder."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./rollcall.toml, then ~/.config/rollcall/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Overrides for the configured sources
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Roster CSV path or sheet URL
    #[arg(long)]
    pub roster: Option<String>,

    /// Responses CSV path or sheet URL
    #[arg(long)]
    pub responses: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter rollcall.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List participants who have not responded
    Pending {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Send reminders to participants who have not responded
    Remind {
        #[command(flatten)]
        sources: SourceArgs,

        /// Survey link (overrides [survey].link)
        #[arg(long)]
        link: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Log messages instead of sending them
        #[arg(long)]
        dry_run: bool,

        /// Write the dispatch summary as JSON to this file
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// Send the survey link to the roster or to a list of addresses
    Invite {
        /// Roster CSV path or sheet URL
        #[arg(long, conflicts_with = "to")]
        roster: Option<String>,

        /// Recipient emails (comma-separated) instead of the roster
        #[arg(long, value_delimiter = ',')]
        to: Vec<String>,

        /// Survey link (overrides [survey].link)
        #[arg(long)]
        link: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Log messages instead of sending them
        #[arg(long)]
        dry_run: bool,

        /// Write the dispatch summary as JSON to this file
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// Show response rate and answer breakdowns
    Stats {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Append a response to the local response log
    Record {
        /// Respondent name
        #[arg(long)]
        name: String,

        /// Respondent affiliation
        #[arg(long, default_value = "")]
        affiliation: String,

        /// Respondent email
        #[arg(long)]
        email: String,

        /// Satisfaction (e.g. "satisfied", "매우 만족", 1-5)
        #[arg(long)]
        rating: String,

        /// Free-text comment
        #[arg(long)]
        comment: Option<String>,

        /// Response log (default: [sources].responses, then responses.csv)
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Ask the language model to summarize the responses
    Analyze {
        /// Responses CSV path or sheet URL
        #[arg(long)]
        responses: Option<String>,

        /// Print the prompt instead of calling the model
        #[arg(long)]
        show_prompt: bool,
    },

    /// Ask the language model to draft a survey
    Draft {
        /// Who will answer the survey
        #[arg(long)]
        audience: String,

        /// What the survey is for
        #[arg(long)]
        purpose: String,

        /// Items the survey must cover (comma-separated)
        #[arg(long = "require", value_delimiter = ',')]
        required: Vec<String>,

        /// Print the prompt instead of calling the model
        #[arg(long)]
        show_prompt: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Pending { sources }) => commands::pending(config_path, &sources, output_mode),
        Some(Command::Remind {
            sources,
            link,
            yes,
            dry_run,
            report,
        }) => commands::remind(
            config_path,
            &sources,
            &commands::SendOptions {
                link,
                yes,
                dry_run,
                report,
            },
            output_mode,
        ),
        Some(Command::Invite {
            roster,
            to,
            link,
            yes,
            dry_run,
            report,
        }) => commands::invite(
            config_path,
            roster,
            &to,
            &commands::SendOptions {
                link,
                yes,
                dry_run,
                report,
            },
            output_mode,
        ),
        Some(Command::Stats { sources }) => commands::stats(config_path, &sources, output_mode),
        Some(Command::Record {
            name,
            affiliation,
            email,
            rating,
            comment,
            file,
        }) => commands::record(
            config_path,
            &commands::RecordInput {
                name,
                affiliation,
                email,
                rating,
                comment,
                file,
            },
            output_mode,
        ),
        Some(Command::Analyze {
            responses,
            show_prompt,
        }) => commands::analyze(config_path, responses.as_deref(), show_prompt, output_mode),
        Some(Command::Draft {
            audience,
            purpose,
            required,
            show_prompt,
        }) => commands::draft(
            config_path,
            &DraftRequest {
                audience,
                purpose,
                required_items: required,
            },
            show_prompt,
            output_mode,
        ),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("rollcall v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("rollcall v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'rollcall --help' for usage");
                println!("Run 'rollcall init' to get started");
            }
            Ok(())
        },
    }
}
