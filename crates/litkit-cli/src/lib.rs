//! # litkit-cli — Payload Inspection CLI
//!
//! Decodes payload files with the litkit schemas and reports the outcome as
//! an `Either` envelope on stdout, so that the output can be piped into the
//! same consumers that read node responses.
//!
//! ## Subcommands
//!
//! - `conditions`: decode a unified access-control condition list
//! - `auth-sig`: decode a `JsonAuthSig`
//! - `config`: print the effective SDK configuration
//! - `errors`: print the well-known error registry
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers return data and
//!   an exit code, `main` owns printing of native errors.
//! - Payloads that fail to decode are expected errors: they are reported as
//!   an ERROR envelope with exit code 1, not as a native failure.
//! - Unreadable files are native failures (exit code 2).

pub mod auth_sig;
pub mod conditions;
pub mod config;
pub mod errors;
pub mod input;
pub mod output;
