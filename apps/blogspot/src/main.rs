//! # Blog Spot
//!
//! Command-line front end for the post administration core.

use std::process::ExitCode;

use clap::Parser;

use blogspot_core::DomainError;
use blogspot_shared::ErrorResponse;

mod cli;
mod commands;
mod config;
mod output;
mod state;
mod telemetry;

use config::AppConfig;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();
    let config = AppConfig::from_env().with_data_file(cli.data_file.clone());

    telemetry::init_telemetry(&TelemetryConfig {
        json_logs: config.json_logs,
        quiet: cli.quiet,
        verbose: cli.verbose,
    });

    let format = cli.format;
    let mut session = state::build_session(&config).await;

    match commands::dispatch(cli.command, &mut session, format).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let response = match err.downcast_ref::<DomainError>() {
                Some(domain) => ErrorResponse::from(domain),
                None => {
                    tracing::error!(error = %format!("{err:#}"), "Command failed");
                    ErrorResponse::internal_error(format!("{err:#}"))
                }
            };
            output::print_error(&response, format);
            ExitCode::FAILURE
        }
    }
}
