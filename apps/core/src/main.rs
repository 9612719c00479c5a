// assist - command-line entry point
// Reads text from a file or stdin, prints the result of one assist operation.

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use validator::Validate;

use assist_core::cli::Cli;
use assist_core::input::read_input;
use assist_core::{telemetry, AssistAnalyzer, AssistConfig};

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AssistConfig::from_env().context("Failed to load configuration")?;

    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(max_sentences) = cli.command.max_sentences() {
        config.max_sentences = max_sentences;
    }

    config.validate().context("Invalid configuration")?;

    let directive =
        telemetry::verbosity_directive(cli.verbose).unwrap_or(config.log_level.as_str());
    telemetry::init_tracing(config.log_format, directive)?;
    debug!(?config, "Configuration loaded");

    let text = read_input(cli.command.input().file.as_deref()).context("Failed to read input")?;
    let analyzer = AssistAnalyzer::from_config(&config);

    let output = match cli.command.task() {
        Some(task) => analyzer.run(&analyzer.request(text, task))?,
        None => analyzer
            .analyze(&text)?
            .to_json_pretty()
            .context("Failed to encode report")?,
    };

    println!("{}", output);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    run(cli).inspect_err(|e| error!("assist failed: {:#}", e))
}
