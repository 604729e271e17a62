//! Auth signature shapes.
//!
//! A `JsonAuthSig` is the wallet-signed proof a client presents to nodes. Its
//! layout mirrors the node-side `JsonAuthSig` struct field for field, so the
//! keys here must not drift from `sig`, `derivedVia`, `signedMessage`,
//! `address`, `capabilities`, and `algo`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A signature over a sign-in message, plus how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAuthSig {
    pub sig: String,
    /// Derivation method, e.g. `web3.eth.personal.sign`.
    pub derived_via: String,
    pub signed_message: String,
    pub address: String,
    /// Delegated capability signatures, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<JsonAuthSig>>,
    /// Signature algorithm, when not the chain default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algo: Option<String>,
}

impl JsonAuthSig {
    pub fn new(
        sig: impl Into<String>,
        derived_via: impl Into<String>,
        signed_message: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            sig: sig.into(),
            derived_via: derived_via.into(),
            signed_message: signed_message.into(),
            address: address.into(),
            capabilities: None,
            algo: None,
        }
    }

    pub fn with_capabilities(mut self, capabilities: Vec<JsonAuthSig>) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    pub fn with_algo(mut self, algo: impl Into<String>) -> Self {
        self.algo = Some(algo.into());
        self
    }

    /// Number of delegated capabilities (zero when the list is absent).
    pub fn capability_count(&self) -> usize {
        self.capabilities.as_ref().map_or(0, Vec::len)
    }
}

/// Parameters for asking a wallet to sign an auth message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAndSignAuthParams {
    /// Chain to sign for.
    pub chain: String,
    /// EVM only. Resources embedded in the Sign-In with Ethereum message.
    #[serde(default)]
    pub resources: Vec<Value>,
    /// EVM only. Whether to ask the wallet to switch to `chain` before signing.
    #[serde(default = "default_switch_chain")]
    pub switch_chain: bool,
}

fn default_switch_chain() -> bool {
    true
}

impl CheckAndSignAuthParams {
    pub fn new(chain: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            resources: Vec::new(),
            switch_chain: true,
        }
    }
}
