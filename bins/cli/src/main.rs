//! Farmbook command-line entry point.

use std::process::ExitCode;

use clap::Parser;
use farmbook_shared::config::LogConfig;
use farmbook_shared::{AppConfig, AppError};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::Cli;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => return fail(&AppError::from(err)),
    };
    init_tracing(&config.log);

    match commands::run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast::<AppError>() {
            Ok(app) => fail(&app),
            Err(other) => fail(&AppError::Internal(format!("{other:#}"))),
        },
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn fail(err: &AppError) -> ExitCode {
    eprintln!("error[{}]: {err}", err.error_code());
    ExitCode::from(err.exit_code())
}
