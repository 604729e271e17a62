//! # litkit-core — Foundational Contracts
//!
//! This crate is the leaf of the litkit workspace. It defines the vocabulary
//! every other crate uses to report outcomes across call boundaries, plus the
//! SDK configuration shared by clients of the access-control network.
//!
//! ## Key Design Principles
//!
//! 1. **One `Either`, one tag enum.** Expected failures travel as
//!    `Either::Left`, successes as `Either::Right`. The tag is the closed
//!    two-case [`EitherType`]; every `match` on it is exhaustive.
//!
//! 2. **Error payloads are data.** [`LitError`] is a wire shape, not a panic
//!    vehicle. Well-known error kinds live in a single [`LitErrorKind`] enum
//!    whose `name()`/`code()` strings match the network's error registry.
//!
//! 3. **Configuration from the environment.** [`SdkConfig::from_env()`] reads
//!    `LIT_*` variables with documented defaults.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `litkit-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod either;
pub mod error;
pub mod lit_error;

pub use config::{ConfigError, LitNetwork, SdkConfig};
pub use either::{Either, EitherType, LitResult};
pub use error::LitKitError;
pub use lit_error::{
    LitError, LitErrorKind, LitErrorType, LitErrorTypeParams, LIT_ERROR_KIND_COUNT,
};
