use std::process::ExitCode;

use clap::Parser;

use danci_srs::cli::{self, Cli, CliError, Command};
use danci_srs::config::Config;
use danci_srs::logging::init_tracing;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = Config::from_env();
    let _log_guard = init_tracing(&config.log_level);

    match execute(&cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(command = cli.command.name(), error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: &Command, config: &Config) -> Result<String, CliError> {
    let value = cli::run(command, config, config.resolve_now())?;
    Ok(serde_json::to_string_pretty(&value)?)
}
