//! # litkit-types -- Data-interchange schemas
//!
//! Typed request/response shapes exchanged with the access-control network:
//! - **Access-control conditions** (`accs`): basic, EVM contract, Solana RPC,
//!   and Cosmos predicates, plus the unified list form.
//! - **Auth signatures** (`auth_sig`): the signed proof a wallet hands to nodes.
//! - **Crypto bundles** (`crypto`): inputs and outputs of encrypt/decrypt calls.
//! - **Web3 provider** (`web3`): a connected wallet provider and its account.
//!
//! ## Schema Convention
//!
//! JSON keys are camelCase. Optional fields are `Option<_>` and are omitted
//! when absent, because downstream consumers depend on exact field presence.
//! Unknown fields are tolerated; `deny_unknown_fields` is intentionally not
//! used so that newer node versions can add keys.
//!
//! This crate performs no networking, no cryptography, and no validation.

pub mod accs;
pub mod auth_sig;
pub mod crypto;
pub mod web3;

pub use accs::{
    AbiConstant, AbiEntry, AbiParams, AccsCosmosParams, AccsDefaultParams, AccsEvmParams,
    AccsOperatorParams, AccsRegularParams, AccsSolV2Params, ConditionType, FunctionAbi,
    PdaInterface, ReturnValueTest, UnifiedAccessControlCondition,
};
pub use auth_sig::{CheckAndSignAuthParams, JsonAuthSig};
pub use crypto::{
    Blob, DecryptZipFileWithMetadata, DecryptZipFileWithMetadataProps,
    EncryptFileAndZipWithMetadataProps, EncryptedFile, EncryptedString, EncryptedSymmetricKey,
    EncryptedZip, File, SymmetricKey, ThreeKeys,
};
pub use web3::Web3Provider;
