//! # litkit CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Logs go to stderr so that stdout carries only the JSON report.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use litkit_cli::auth_sig::{run_auth_sig, AuthSigArgs};
use litkit_cli::conditions::{run_conditions, ConditionsArgs};
use litkit_cli::config::{run_config, ConfigArgs};
use litkit_cli::errors::{run_errors, ErrorsArgs};
use litkit_cli::output::EXIT_OPERATIONAL_ERROR;

/// litkit: inspect access-control network payloads.
///
/// Decodes condition lists and auth signatures with the shared schemas and
/// prints the result as a `{"type", "result"}` envelope.
#[derive(Parser, Debug)]
#[command(name = "litkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode and summarize a unified access-control condition list.
    Conditions(ConditionsArgs),

    /// Decode and summarize an auth signature.
    AuthSig(AuthSigArgs),

    /// Print the effective SDK configuration.
    Config(ConfigArgs),

    /// Print the well-known error registry.
    Errors(ErrorsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "litkit CLI starting");

    let result = match cli.command {
        Commands::Conditions(args) => run_conditions(&args),
        Commands::AuthSig(args) => run_auth_sig(&args),
        Commands::Config(args) => run_config(&args),
        Commands::Errors(args) => run_errors(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_OPERATIONAL_ERROR)
        }
    }
}
