//! # Crypto Bundles
//!
//! Inputs and outputs of the encrypt/decrypt helpers. These shapes carry raw
//! bytes and a live node client, so apart from [`DecryptZipFileWithMetadata`]
//! they are in-process types and do not implement serde.
//!
//! ## Security Invariant
//!
//! Symmetric key material lives only in [`SymmetricKey`], which zeroizes its
//! buffer on drop, redacts itself in `Debug`, and does not implement
//! `Serialize`. Callers must not store it; it is handed out so that further
//! access-control conditions can be attached to the same content.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::accs::{
    AccsDefaultParams, AccsEvmParams, AccsSolV2Params, UnifiedAccessControlCondition,
};
use crate::auth_sig::JsonAuthSig;

/// Raw symmetric key bytes.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey(Vec<u8>);

impl SymmetricKey {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymmetricKey([REDACTED; {} bytes])", self.0.len())
    }
}

/// An immutable chunk of bytes with an optional media type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
}

impl Blob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// A named blob, as picked by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub blob: Blob,
}

impl File {
    pub fn new(name: impl Into<String>, blob: impl Into<Blob>) -> Self {
        Self {
            name: name.into(),
            blob: blob.into(),
        }
    }
}

/// Result of encrypting a string.
#[derive(Debug, Clone)]
pub struct EncryptedString {
    pub symmetric_key: SymmetricKey,
    pub encrypted_string: Blob,
    pub encrypted_data: Option<Blob>,
}

/// Result of encrypting a zip archive.
#[derive(Debug, Clone)]
pub struct EncryptedZip {
    pub symmetric_key: SymmetricKey,
    pub encrypted_zip: Blob,
}

/// Inputs for encrypting a file into a zip that carries its own decryption
/// metadata.
///
/// At least one of the four condition lists is expected to be non-empty.
/// `C` is the connected node client; this crate only carries the reference.
#[derive(Debug)]
pub struct EncryptFileAndZipWithMetadataProps<'a, C> {
    /// Returned by the wallet's check-and-sign step.
    pub auth_sig: JsonAuthSig,
    /// Basic conditions (limited set of contract calls).
    pub access_control_conditions: Vec<AccsDefaultParams>,
    /// Conditions calling arbitrary EVM contract functions.
    pub evm_contract_conditions: Vec<AccsEvmParams>,
    pub sol_rpc_conditions: Vec<AccsSolV2Params>,
    /// Mixed-family list; every entry should carry a `conditionType`.
    pub unified_access_control_conditions: Vec<UnifiedAccessControlCondition>,
    pub chain: String,
    pub file: File,
    pub lit_node_client: &'a C,
    /// Written to `readme.txt` inside the zip, e.g. decryption instructions.
    pub readme: String,
}

impl<'a, C> EncryptFileAndZipWithMetadataProps<'a, C> {
    /// Props with every condition list empty and no readme.
    pub fn new(
        auth_sig: JsonAuthSig,
        chain: impl Into<String>,
        file: File,
        lit_node_client: &'a C,
    ) -> Self {
        Self {
            auth_sig,
            access_control_conditions: Vec::new(),
            evm_contract_conditions: Vec::new(),
            sol_rpc_conditions: Vec::new(),
            unified_access_control_conditions: Vec::new(),
            chain: chain.into(),
            file,
            lit_node_client,
            readme: String::new(),
        }
    }

    pub fn with_access_control_conditions(mut self, conditions: Vec<AccsDefaultParams>) -> Self {
        self.access_control_conditions = conditions;
        self
    }

    pub fn with_evm_contract_conditions(mut self, conditions: Vec<AccsEvmParams>) -> Self {
        self.evm_contract_conditions = conditions;
        self
    }

    pub fn with_sol_rpc_conditions(mut self, conditions: Vec<AccsSolV2Params>) -> Self {
        self.sol_rpc_conditions = conditions;
        self
    }

    pub fn with_unified_access_control_conditions(
        mut self,
        conditions: Vec<UnifiedAccessControlCondition>,
    ) -> Self {
        self.unified_access_control_conditions = conditions;
        self
    }

    pub fn with_readme(mut self, readme: impl Into<String>) -> Self {
        self.readme = readme.into();
        self
    }
}

/// The network-encrypted symmetric key, as bytes or in a provider-specific form.
#[derive(Debug, Clone, PartialEq)]
pub enum EncryptedSymmetricKey {
    Bytes(Vec<u8>),
    Opaque(Value),
}

/// Output of zip encryption.
#[derive(Debug, Clone)]
pub struct ThreeKeys {
    /// Zip holding the encrypted file and the metadata needed to decrypt it.
    pub zip_blob: Blob,
    /// Symmetric key encrypted with the network public key. Also stored inside
    /// `zip_blob`; keeping a copy speeds up later re-encryption.
    pub encrypted_symmetric_key: EncryptedSymmetricKey,
    /// Raw key. Do not store.
    pub symmetric_key: SymmetricKey,
}

/// Inputs for decrypting a zip produced by encrypt-with-metadata.
#[derive(Debug)]
pub struct DecryptZipFileWithMetadataProps<'a, C> {
    pub auth_sig: JsonAuthSig,
    pub file: File,
    pub lit_node_client: &'a C,
    /// Extra conditions, in whatever form the caller's node client accepts.
    pub additional_access_control_conditions: Vec<Value>,
}

impl<'a, C> DecryptZipFileWithMetadataProps<'a, C> {
    pub fn new(auth_sig: JsonAuthSig, file: File, lit_node_client: &'a C) -> Self {
        Self {
            auth_sig,
            file,
            lit_node_client,
            additional_access_control_conditions: Vec::new(),
        }
    }

    pub fn with_additional_access_control_conditions(mut self, conditions: Vec<Value>) -> Self {
        self.additional_access_control_conditions = conditions;
        self
    }
}

/// Output of zip decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptZipFileWithMetadata {
    pub decrypted_file: Vec<u8>,
    pub metadata: String,
}

/// Result of encrypting a single file. Both CryptoKey handles and raw bytes
/// are carried as a [`SymmetricKey`].
#[derive(Debug, Clone)]
pub struct EncryptedFile {
    pub encrypted_file: Blob,
    pub symmetric_key: SymmetricKey,
}
