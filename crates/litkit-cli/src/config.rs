//! # Config Subcommand
//!
//! Prints the SDK configuration resolved from `LIT_*` environment variables.

use anyhow::{Context, Result};
use clap::Args;

use litkit_core::SdkConfig;

use crate::output;

/// Arguments for the `litkit config` subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Ignore the environment and print the local test configuration.
    #[arg(long)]
    pub local: bool,

    /// Print single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

pub fn resolve_config(args: &ConfigArgs) -> Result<SdkConfig> {
    let config = if args.local {
        SdkConfig::local()
    } else {
        SdkConfig::from_env()
    }
    .context("failed to resolve SDK configuration")?;
    tracing::info!(
        network = %config.network,
        chain = %config.default_chain,
        "resolved configuration"
    );
    Ok(config)
}

/// Execute the config subcommand.
pub fn run_config(args: &ConfigArgs) -> Result<u8> {
    let config = resolve_config(args)?;
    println!("{}", output::render(&config, args.compact)?);
    Ok(output::EXIT_SUCCESS)
}
