//! # Errors Subcommand
//!
//! Prints the registry of well-known error kinds, or a single entry. An
//! unknown key is bad input, reported as an ERROR envelope carrying an
//! `INVALID_ARGUMENT_EXCEPTION` error.

use anyhow::Result;
use clap::Args;

use litkit_core::{Either, LitError, LitErrorKind, LitErrorType, LitResult};

use crate::output;

/// Arguments for the `litkit errors` subcommand.
#[derive(Args, Debug)]
pub struct ErrorsArgs {
    /// Registry key to look up, e.g. `UNSUPPORTED_CHAIN_EXCEPTION`.
    #[arg(value_name = "KEY")]
    pub key: Option<String>,

    /// Print single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

/// The full registry, or only the entry named by `key`.
pub fn select_errors(key: Option<&str>) -> LitResult<LitErrorType> {
    let Some(key) = key else {
        return Either::right(LitErrorKind::registry());
    };
    match key.parse::<LitErrorKind>() {
        Ok(kind) => Either::right(LitErrorType(
            std::iter::once((kind.key().to_string(), kind.params())).collect(),
        )),
        Err(e) => {
            tracing::debug!(key, "unknown error registry key");
            Either::left(LitError::from_kind(
                LitErrorKind::InvalidArgumentException,
                e.to_string(),
            ))
        }
    }
}

/// Execute the errors subcommand.
///
/// Returns exit code: 0 for a known key or the full registry, 1 otherwise.
pub fn run_errors(args: &ErrorsArgs) -> Result<u8> {
    output::emit(&select_errors(args.key.as_deref()), args.compact)
}
