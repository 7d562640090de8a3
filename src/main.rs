use std::process::ExitCode;

use clap::Parser;
use valyu::cli::Cli;
use valyu::config;
use valyu::envelope::FailureEnvelope;
use valyu::runner;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    config::load_dotenv();

    // stdout is reserved for the JSON envelope
    tracing_subscriber::fmt()
        .with_max_level(config::log_level())
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };

    match runner::execute(&cli, |key| std::env::var(key).ok()).await {
        Ok(envelope) => {
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!("invocation failed: {e:?}");
            let failure = FailureEnvelope::new(&e);
            eprintln!("{}", serde_json::to_string_pretty(&failure)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
