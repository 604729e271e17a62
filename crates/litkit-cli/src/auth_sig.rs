//! # Auth-Sig Subcommand
//!
//! Decodes a `JsonAuthSig` and reports who signed it and how.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use litkit_core::{LitErrorKind, LitResult};
use litkit_types::JsonAuthSig;

use crate::input;
use crate::output;

/// Arguments for the `litkit auth-sig` subcommand.
#[derive(Args, Debug)]
pub struct AuthSigArgs {
    /// JSON or YAML file holding one auth signature.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSigSummary {
    pub address: String,
    pub derived_via: String,
    pub capability_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algo: Option<String>,
}

impl From<&JsonAuthSig> for AuthSigSummary {
    fn from(sig: &JsonAuthSig) -> Self {
        Self {
            address: sig.address.clone(),
            derived_via: sig.derived_via.clone(),
            capability_count: sig.capability_count(),
            algo: sig.algo.clone(),
        }
    }
}

pub fn inspect_auth_sig(path: &Path) -> Result<LitResult<AuthSigSummary>> {
    tracing::debug!(path = %path.display(), "loading auth signature");
    let decoded: LitResult<JsonAuthSig> = input::load(path, LitErrorKind::WrongParamFormat)?;
    Ok(decoded.map(|sig| AuthSigSummary::from(&sig)))
}

/// Execute the auth-sig subcommand.
///
/// Returns exit code: 0 when the signature decodes, 1 when it does not.
pub fn run_auth_sig(args: &AuthSigArgs) -> Result<u8> {
    let envelope = inspect_auth_sig(&args.path)?;
    output::emit(&envelope, args.compact)
}
