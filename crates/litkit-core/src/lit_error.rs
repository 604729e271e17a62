//! # Error Payloads
//!
//! The structured payload carried by an ERROR-tagged [`crate::Either`], and the
//! registry of well-known error kinds.
//!
//! ## Wire Shapes
//!
//! `LitError` uses camelCase keys and omits absent fields:
//!
//! ```json
//! {
//!   "message": "access denied",
//!   "name": "InvalidAccessControlConditions",
//!   "errorCode": "invalid_access_control_conditions",
//!   "error": { "NAME": "InvalidAccessControlConditions", "CODE": "invalid_access_control_conditions" }
//! }
//! ```
//!
//! The registry (`LitErrorType`) is a JSON object keyed by the
//! SCREAMING_SNAKE_CASE kind identifier.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::LitKitError;

/// Error information reported by an expected-error outcome.
///
/// Every field is optional. Upstream nodes often set only `message` and
/// `errorCode`; locally raised errors built through [`LitError::from_kind`]
/// fill all four.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LitError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<LitErrorTypeParams>,
}

/// Name and machine-readable code of one registered error kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LitErrorTypeParams {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "CODE")]
    pub code: String,
}

/// Open registry of error kinds, keyed by kind identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LitErrorType(pub BTreeMap<String, LitErrorTypeParams>);

impl LitErrorType {
    pub fn get(&self, key: &str) -> Option<&LitErrorTypeParams> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl LitError {
    /// An error carrying only a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// An error for a well-known kind, with name, code, and nested detail set.
    pub fn from_kind(kind: LitErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            name: Some(kind.name().to_string()),
            error_code: Some(kind.code().to_string()),
            error: Some(kind.params()),
        }
    }

    /// Override the machine-readable code, e.g. with one reported by a node.
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    /// Resolve the well-known kind this error was raised with, if any.
    pub fn kind(&self) -> Option<LitErrorKind> {
        let code = self.error_code.as_deref()?;
        LitErrorKind::all_kinds()
            .iter()
            .copied()
            .find(|k| k.code() == code)
    }
}

impl std::fmt::Display for LitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message.as_deref().unwrap_or("unspecified error");
        match (&self.name, &self.error_code) {
            (Some(name), Some(code)) => write!(f, "{name} ({code}): {message}"),
            (Some(name), None) => write!(f, "{name}: {message}"),
            (None, Some(code)) => write!(f, "[{code}] {message}"),
            (None, None) => f.write_str(message),
        }
    }
}

impl std::error::Error for LitError {}

/// Well-known error kinds raised by SDK clients.
///
/// | Key | Name | Code |
/// |-----|------|------|
/// | `INVALID_PARAM_TYPE` | `InvalidParamType` | `invalid_param_type` |
/// | `INVALID_ACCESS_CONTROL_CONDITIONS` | `InvalidAccessControlConditions` | `invalid_access_control_conditions` |
/// | `WRONG_NETWORK_EXCEPTION` | `WrongNetworkException` | `wrong_network_exception` |
/// | `MINTING_NOT_SUPPORTED` | `MintingNotSupported` | `minting_not_supported` |
/// | `UNSUPPORTED_CHAIN_EXCEPTION` | `UnsupportedChainException` | `unsupported_chain_exception` |
/// | `INVALID_UNIFIED_CONDITION_TYPE` | `InvalidUnifiedConditionType` | `invalid_unified_condition_type` |
/// | `LIT_NODE_CLIENT_NOT_READY` | `LitNodeClientNotReady` | `lit_node_client_not_ready` |
/// | `UNAUTHORIZED_EXCEPTION` | `UnauthorizedException` | `unauthorized_exception` |
/// | `INVALID_ARGUMENT_EXCEPTION` | `InvalidArgumentException` | `invalid_argument_exception` |
/// | `INVALID_BOOLEAN_EXCEPTION` | `InvalidBooleanException` | `invalid_boolean_exception` |
/// | `UNKNOWN_ERROR` | `UnknownError` | `unknown_error` |
/// | `NO_WALLET_EXCEPTION` | `NoWalletException` | `no_wallet_exception` |
/// | `WRONG_PARAM_FORMAT` | `WrongParamFormat` | `wrong_param_format` |
/// | `LOCAL_STORAGE_ITEM_NOT_FOUND_EXCEPTION` | `LocalStorageItemNotFoundException` | `local_storage_item_not_found_exception` |
/// | `REMOVED_LISTENER_EXCEPTION` | `RemovedListenerException` | `removed_listener_exception` |
/// | `INVALID_SIGNATURE_EXCEPTION` | `InvalidSignatureException` | `invalid_signature_exception` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LitErrorKind {
    InvalidParamType,
    InvalidAccessControlConditions,
    WrongNetworkException,
    MintingNotSupported,
    UnsupportedChainException,
    InvalidUnifiedConditionType,
    LitNodeClientNotReady,
    UnauthorizedException,
    InvalidArgumentException,
    InvalidBooleanException,
    UnknownError,
    NoWalletException,
    WrongParamFormat,
    LocalStorageItemNotFoundException,
    RemovedListenerException,
    InvalidSignatureException,
}

/// Number of well-known error kinds.
pub const LIT_ERROR_KIND_COUNT: usize = 16;

impl LitErrorKind {
    /// All kinds in registry order.
    pub fn all_kinds() -> &'static [LitErrorKind] {
        &[
            Self::InvalidParamType,
            Self::InvalidAccessControlConditions,
            Self::WrongNetworkException,
            Self::MintingNotSupported,
            Self::UnsupportedChainException,
            Self::InvalidUnifiedConditionType,
            Self::LitNodeClientNotReady,
            Self::UnauthorizedException,
            Self::InvalidArgumentException,
            Self::InvalidBooleanException,
            Self::UnknownError,
            Self::NoWalletException,
            Self::WrongParamFormat,
            Self::LocalStorageItemNotFoundException,
            Self::RemovedListenerException,
            Self::InvalidSignatureException,
        ]
    }

    /// Registry key, matching the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::InvalidParamType => "INVALID_PARAM_TYPE",
            Self::InvalidAccessControlConditions => "INVALID_ACCESS_CONTROL_CONDITIONS",
            Self::WrongNetworkException => "WRONG_NETWORK_EXCEPTION",
            Self::MintingNotSupported => "MINTING_NOT_SUPPORTED",
            Self::UnsupportedChainException => "UNSUPPORTED_CHAIN_EXCEPTION",
            Self::InvalidUnifiedConditionType => "INVALID_UNIFIED_CONDITION_TYPE",
            Self::LitNodeClientNotReady => "LIT_NODE_CLIENT_NOT_READY",
            Self::UnauthorizedException => "UNAUTHORIZED_EXCEPTION",
            Self::InvalidArgumentException => "INVALID_ARGUMENT_EXCEPTION",
            Self::InvalidBooleanException => "INVALID_BOOLEAN_EXCEPTION",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::NoWalletException => "NO_WALLET_EXCEPTION",
            Self::WrongParamFormat => "WRONG_PARAM_FORMAT",
            Self::LocalStorageItemNotFoundException => "LOCAL_STORAGE_ITEM_NOT_FOUND_EXCEPTION",
            Self::RemovedListenerException => "REMOVED_LISTENER_EXCEPTION",
            Self::InvalidSignatureException => "INVALID_SIGNATURE_EXCEPTION",
        }
    }

    /// Symbolic name (PascalCase).
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidParamType => "InvalidParamType",
            Self::InvalidAccessControlConditions => "InvalidAccessControlConditions",
            Self::WrongNetworkException => "WrongNetworkException",
            Self::MintingNotSupported => "MintingNotSupported",
            Self::UnsupportedChainException => "UnsupportedChainException",
            Self::InvalidUnifiedConditionType => "InvalidUnifiedConditionType",
            Self::LitNodeClientNotReady => "LitNodeClientNotReady",
            Self::UnauthorizedException => "UnauthorizedException",
            Self::InvalidArgumentException => "InvalidArgumentException",
            Self::InvalidBooleanException => "InvalidBooleanException",
            Self::UnknownError => "UnknownError",
            Self::NoWalletException => "NoWalletException",
            Self::WrongParamFormat => "WrongParamFormat",
            Self::LocalStorageItemNotFoundException => "LocalStorageItemNotFoundException",
            Self::RemovedListenerException => "RemovedListenerException",
            Self::InvalidSignatureException => "InvalidSignatureException",
        }
    }

    /// Machine-readable code (snake_case).
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidParamType => "invalid_param_type",
            Self::InvalidAccessControlConditions => "invalid_access_control_conditions",
            Self::WrongNetworkException => "wrong_network_exception",
            Self::MintingNotSupported => "minting_not_supported",
            Self::UnsupportedChainException => "unsupported_chain_exception",
            Self::InvalidUnifiedConditionType => "invalid_unified_condition_type",
            Self::LitNodeClientNotReady => "lit_node_client_not_ready",
            Self::UnauthorizedException => "unauthorized_exception",
            Self::InvalidArgumentException => "invalid_argument_exception",
            Self::InvalidBooleanException => "invalid_boolean_exception",
            Self::UnknownError => "unknown_error",
            Self::NoWalletException => "no_wallet_exception",
            Self::WrongParamFormat => "wrong_param_format",
            Self::LocalStorageItemNotFoundException => "local_storage_item_not_found_exception",
            Self::RemovedListenerException => "removed_listener_exception",
            Self::InvalidSignatureException => "invalid_signature_exception",
        }
    }

    pub fn params(&self) -> LitErrorTypeParams {
        LitErrorTypeParams {
            name: self.name().to_string(),
            code: self.code().to_string(),
        }
    }

    /// Materialize the registry of every well-known kind.
    pub fn registry() -> LitErrorType {
        LitErrorType(
            Self::all_kinds()
                .iter()
                .map(|k| (k.key().to_string(), k.params()))
                .collect(),
        )
    }
}

impl std::fmt::Display for LitErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LitErrorKind {
    type Err = LitKitError;

    /// Parse from the registry key, e.g. `"UNKNOWN_ERROR"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_kinds()
            .iter()
            .copied()
            .find(|k| k.key() == s)
            .ok_or_else(|| LitKitError::SchemaValidation(format!("unknown error kind: {s:?}")))
    }
}
