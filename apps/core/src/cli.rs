use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::LogFormat;
use crate::models::AssistTask;

/// Top-level CLI entry point.
#[derive(Debug, Parser)]
#[command(
    name = "assist",
    version,
    about = "Offline text assist: summaries, action items, clarity rewrites, bullet points"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
    /// Log output format (pretty, json, bunyan). Overrides ASSIST_LOG_FORMAT.
    #[arg(global = true, long, value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print an extractive summary of the input.
    Summarize(SummarizeArgs),
    /// Print a checklist of action items found in the input.
    Actions(InputArgs),
    /// Print the input rewritten for clarity.
    Clarify(InputArgs),
    /// Print the input as bullet points.
    Bullets(InputArgs),
    /// Run every operation and print a JSON report.
    Report(SummarizeArgs),
}

impl Commands {
    /// The single task this command runs, `None` for the full report
    pub fn task(&self) -> Option<AssistTask> {
        match self {
            Commands::Summarize(_) => Some(AssistTask::Summarize),
            Commands::Actions(_) => Some(AssistTask::Actions),
            Commands::Clarify(_) => Some(AssistTask::Clarify),
            Commands::Bullets(_) => Some(AssistTask::Bullets),
            Commands::Report(_) => None,
        }
    }

    pub fn input(&self) -> &InputArgs {
        match self {
            Commands::Summarize(args) | Commands::Report(args) => &args.input,
            Commands::Actions(args) | Commands::Clarify(args) | Commands::Bullets(args) => args,
        }
    }

    /// Summary length requested on the command line, if any
    pub fn max_sentences(&self) -> Option<usize> {
        match self {
            Commands::Summarize(args) | Commands::Report(args) => args.max_sentences,
            _ => None,
        }
    }
}

/// Where to read the input text from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Read input from this file instead of standard input.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Maximum number of sentences in the summary. Overrides ASSIST_MAX_SENTENCES.
    #[arg(short = 'n', long)]
    pub max_sentences: Option<usize>,
    #[command(flatten)]
    pub input: InputArgs,
}

fn parse_log_format(raw: &str) -> Result<LogFormat, String> {
    raw.parse::<LogFormat>().map_err(|e| e.to_string())
}
