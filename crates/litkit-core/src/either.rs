//! # Either — Expected-Outcome Result Wrapper
//!
//! A two-variant tagged value that lets calling code tell an expected error
//! from a success without unwinding. `Left` is the ERROR side, `Right` is the
//! SUCCESS side.
//!
//! ## Wire Shape
//!
//! ```json
//! { "type": "ERROR",   "result": { "message": "access denied" } }
//! { "type": "SUCCESS", "result": { "decryptedFile": [..], "metadata": "ok" } }
//! ```
//!
//! Only the two fields `type` and `result` are emitted.
//!
//! ## Contract
//!
//! Callers must check the tag before interpreting the payload. Holding an
//! `Either` does not mean the producing call could not also fail natively;
//! both mechanisms coexist.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LitKitError;
use crate::lit_error::LitError;

/// The two possible tags of an [`Either`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EitherType {
    /// An expected error outcome.
    #[serde(rename = "ERROR")]
    Error,
    /// A success outcome.
    #[serde(rename = "SUCCESS")]
    Success,
}

impl EitherType {
    /// Returns the wire identifier for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Success => "SUCCESS",
        }
    }
}

impl std::fmt::Display for EitherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EitherType {
    type Err = LitKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ERROR" => Ok(Self::Error),
            "SUCCESS" => Ok(Self::Success),
            other => Err(LitKitError::SchemaValidation(format!(
                "unknown either type: {other:?}"
            ))),
        }
    }
}

/// A standardized way to return either an expected error or a success.
///
/// Values are created once by [`Either::left`] or [`Either::right`] and never
/// mutated. Both constructors are total.
///
/// Producers that drop an empty payload send `{"type": "ERROR"}` with no
/// `result` key. That input only decodes when the payload type is an
/// `Option<_>`, which reads the missing key as `None`; model any side that
/// may arrive empty that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "result")]
pub enum Either<L, R> {
    /// ERROR-tagged payload.
    #[serde(rename = "ERROR")]
    Left(L),
    /// SUCCESS-tagged payload.
    #[serde(rename = "SUCCESS")]
    Right(R),
}

/// The conventional instantiation: a [`LitError`] on the left.
pub type LitResult<T> = Either<LitError, T>;

impl<L, R> Either<L, R> {
    /// Use when there is an expected error.
    pub fn left(payload: L) -> Self {
        Self::Left(payload)
    }

    /// Use when there is an expected success outcome.
    pub fn right(payload: R) -> Self {
        Self::Right(payload)
    }

    /// The discriminant of this value.
    pub fn kind(&self) -> EitherType {
        match self {
            Self::Left(_) => EitherType::Error,
            Self::Right(_) => EitherType::Success,
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Borrow the error payload, if this is a `Left`.
    pub fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// Borrow the success payload, if this is a `Right`.
    pub fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Borrow both sides, keeping the tag.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Transform the success payload, leaving an error untouched.
    pub fn map<T, F: FnOnce(R) -> T>(self, f: F) -> Either<L, T> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform the error payload, leaving a success untouched.
    pub fn map_left<T, F: FnOnce(L) -> T>(self, f: F) -> Either<T, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Fold both sides into a single value.
    pub fn either<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    /// Convert into a native `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(l) => Err(l),
            Self::Right(r) => Ok(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}
