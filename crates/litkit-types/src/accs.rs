//! # Access-Control Conditions
//!
//! Predicates that must hold before the network releases a decryption key.
//! Every condition carries the regular parameter set (return value test,
//! chain, optional method and params); chain-specific variants add their own
//! fields alongside it.
//!
//! ## Wire Layout
//!
//! Variant structs embed [`AccsRegularParams`] with `#[serde(flatten)]`, so the
//! JSON is a single flat object:
//!
//! ```json
//! {
//!   "conditionType": "evmBasic",
//!   "contractAddress": "",
//!   "standardContractType": "",
//!   "chain": "ethereum",
//!   "method": "eth_getBalance",
//!   "parameters": [":userAddress", "latest"],
//!   "returnValueTest": { "comparator": ">=", "value": "10000000000000" }
//! }
//! ```
//!
//! ## Unified Lists
//!
//! A unified list mixes condition families and boolean operators. Entries are
//! distinguished by the optional `conditionType` discriminant; when it is
//! absent the family is inferred from the keys present (`operator`,
//! `functionAbi`, `pdaKey`, `path`, otherwise basic).

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A boolean combinator between neighbouring conditions, e.g. `"and"` / `"or"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccsOperatorParams {
    pub operator: String,
}

/// Comparison applied to the value returned by the condition's call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnValueTest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub comparator: String,
    pub value: String,
}

/// Parameters shared by every condition family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccsRegularParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<String>,
    pub return_value_test: ReturnValueTest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Value>>,
    pub chain: String,
}

/// Basic EVM condition (`evmBasic`): standard contract calls and balance checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccsDefaultParams {
    #[serde(flatten)]
    pub regular: AccsRegularParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_contract_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Value>>,
}

/// Layout of a Solana program-derived account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdaInterface {
    pub offset: String,
    pub fields: String,
}

/// Solana RPC condition (`solRpc`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccsSolV2Params {
    #[serde(flatten)]
    pub regular: AccsRegularParams,
    pub pda_key: String,
    pub pda_interface: PdaInterface,
    pub pda_params: Vec<Value>,
}

/// A named, typed ABI parameter.
///
/// Keys beyond `name` and `type` (`internalType`, `indexed`, `components`, ...)
/// are kept in `extra` so that the ABI survives re-encoding unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbiParams {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An ABI input/output entry: a typed parameter or any other JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AbiEntry {
    Param(AbiParams),
    Other(Value),
}

/// The ABI `constant` flag, which older toolchains emit as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AbiConstant {
    Bool(bool),
    Text(String),
}

/// ABI of the contract function an EVM contract condition calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionAbi {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub abi_type: Option<String>,
    pub state_mutability: String,
    pub inputs: Vec<AbiEntry>,
    pub outputs: Vec<AbiEntry>,
    pub constant: AbiConstant,
}

/// Arbitrary EVM contract call condition (`evmContract`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccsEvmParams {
    #[serde(flatten)]
    pub regular: AccsRegularParams,
    pub function_abi: FunctionAbi,
    pub contract_address: String,
    pub function_name: String,
    pub function_params: Vec<Value>,
}

/// Cosmos REST query condition (`cosmos`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccsCosmosParams {
    #[serde(flatten)]
    pub regular: AccsRegularParams,
    pub path: String,
}

macro_rules! impl_as_regular {
    ($($ty:ty),+) => {
        $(
            impl AsRef<AccsRegularParams> for $ty {
                fn as_ref(&self) -> &AccsRegularParams {
                    &self.regular
                }
            }
        )+
    };
}

impl_as_regular!(AccsDefaultParams, AccsSolV2Params, AccsEvmParams, AccsCosmosParams);

impl AsRef<AccsRegularParams> for AccsRegularParams {
    fn as_ref(&self) -> &AccsRegularParams {
        self
    }
}

/// Values of the `conditionType` discriminant in unified lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionType {
    EvmBasic,
    EvmContract,
    SolRpc,
    Cosmos,
}

impl ConditionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EvmBasic => "evmBasic",
            Self::EvmContract => "evmContract",
            Self::SolRpc => "solRpc",
            Self::Cosmos => "cosmos",
        }
    }

    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "evmBasic" => Some(Self::EvmBasic),
            "evmContract" => Some(Self::EvmContract),
            "solRpc" => Some(Self::SolRpc),
            "cosmos" => Some(Self::Cosmos),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a unified access-control condition list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UnifiedAccessControlCondition {
    Operator(AccsOperatorParams),
    Basic(AccsDefaultParams),
    EvmContract(AccsEvmParams),
    SolRpc(AccsSolV2Params),
    Cosmos(AccsCosmosParams),
}

impl UnifiedAccessControlCondition {
    /// The condition family, or `None` for an operator entry.
    pub fn condition_type(&self) -> Option<ConditionType> {
        match self {
            Self::Operator(_) => None,
            Self::Basic(_) => Some(ConditionType::EvmBasic),
            Self::EvmContract(_) => Some(ConditionType::EvmContract),
            Self::SolRpc(_) => Some(ConditionType::SolRpc),
            Self::Cosmos(_) => Some(ConditionType::Cosmos),
        }
    }

    /// Shared parameters, or `None` for an operator entry.
    pub fn regular(&self) -> Option<&AccsRegularParams> {
        match self {
            Self::Operator(_) => None,
            Self::Basic(c) => Some(c.as_ref()),
            Self::EvmContract(c) => Some(c.as_ref()),
            Self::SolRpc(c) => Some(c.as_ref()),
            Self::Cosmos(c) => Some(c.as_ref()),
        }
    }

    pub fn chain(&self) -> Option<&str> {
        self.regular().map(|r| r.chain.as_str())
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }
}

/// Which family an untyped entry belongs to.
fn classify(value: &Value) -> Result<Option<ConditionType>, String> {
    let obj = value
        .as_object()
        .ok_or_else(|| format!("expected a condition object, got {value}"))?;

    if obj.contains_key("operator") && !obj.contains_key("returnValueTest") {
        return Ok(None);
    }

    match obj.get("conditionType") {
        Some(Value::String(s)) => ConditionType::from_wire(s)
            .map(Some)
            .ok_or_else(|| format!("unknown conditionType: {s:?}")),
        Some(other) => Err(format!("conditionType must be a string, got {other}")),
        None if obj.contains_key("functionAbi") => Ok(Some(ConditionType::EvmContract)),
        None if obj.contains_key("pdaKey") => Ok(Some(ConditionType::SolRpc)),
        None if obj.contains_key("path") => Ok(Some(ConditionType::Cosmos)),
        None => Ok(Some(ConditionType::EvmBasic)),
    }
}

impl<'de> Deserialize<'de> for UnifiedAccessControlCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = match classify(&value).map_err(de::Error::custom)? {
            None => serde_json::from_value(value).map(Self::Operator),
            Some(ConditionType::EvmBasic) => serde_json::from_value(value).map(Self::Basic),
            Some(ConditionType::EvmContract) => {
                serde_json::from_value(value).map(Self::EvmContract)
            }
            Some(ConditionType::SolRpc) => serde_json::from_value(value).map(Self::SolRpc),
            Some(ConditionType::Cosmos) => serde_json::from_value(value).map(Self::Cosmos),
        };
        decoded.map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn balance_condition() -> Value {
        json!({
            "contractAddress": "",
            "standardContractType": "",
            "chain": "ethereum",
            "method": "eth_getBalance",
            "parameters": [":userAddress", "latest"],
            "returnValueTest": { "comparator": ">=", "value": "10000000000000" }
        })
    }

    #[test]
    fn default_params_flatten_regular_fields() {
        let c: AccsDefaultParams = serde_json::from_value(balance_condition()).unwrap();
        assert_eq!(c.regular.chain, "ethereum");
        assert_eq!(c.regular.method.as_deref(), Some("eth_getBalance"));
        assert_eq!(c.regular.return_value_test.key, None);
        assert_eq!(c.contract_address.as_deref(), Some(""));
        assert_eq!(c.parameters.as_ref().map(Vec::len), Some(2));

        // Re-encoding yields the same flat object; absent optionals stay absent.
        assert_eq!(serde_json::to_value(&c).unwrap(), balance_condition());
    }

    #[test]
    fn regular_params_require_chain_and_test() {
        let missing_chain = json!({ "returnValueTest": { "comparator": "=", "value": "1" } });
        assert!(serde_json::from_value::<AccsRegularParams>(missing_chain).is_err());

        let missing_test = json!({ "chain": "ethereum" });
        assert!(serde_json::from_value::<AccsRegularParams>(missing_test).is_err());
    }

    #[test]
    fn abi_keeps_extra_parameter_keys() {
        let abi = json!({
            "name": "balanceOf",
            "stateMutability": "view",
            "inputs": [{ "name": "account", "type": "address", "internalType": "address" }],
            "outputs": [{ "name": "", "type": "uint256" }],
            "constant": true
        });
        let parsed: FunctionAbi = serde_json::from_value(abi.clone()).unwrap();
        match &parsed.inputs[0] {
            AbiEntry::Param(p) => {
                assert_eq!(p.param_type, "address");
                assert_eq!(p.extra["internalType"], "address");
            }
            AbiEntry::Other(v) => panic!("expected typed param, got {v}"),
        }
        assert_eq!(parsed.constant, AbiConstant::Bool(true));
        assert_eq!(parsed.abi_type, None);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), abi);
    }

    #[test]
    fn abi_entry_falls_back_to_open_value() {
        let entry: AbiEntry = serde_json::from_value(json!("uint256")).unwrap();
        assert_eq!(entry, AbiEntry::Other(json!("uint256")));

        let constant: AbiConstant = serde_json::from_value(json!("false")).unwrap();
        assert_eq!(constant, AbiConstant::Text("false".into()));
    }

    #[test]
    fn unified_uses_explicit_discriminant() {
        let mut v = balance_condition();
        v["conditionType"] = json!("evmBasic");
        let c: UnifiedAccessControlCondition = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(c.condition_type(), Some(ConditionType::EvmBasic));
        assert_eq!(c.chain(), Some("ethereum"));
        assert_eq!(serde_json::to_value(&c).unwrap(), v);
    }

    #[test]
    fn unified_infers_family_without_discriminant() {
        let cosmos = json!({
            "path": ":userAddress",
            "chain": "cosmos",
            "returnValueTest": { "key": "$.balances[0].amount", "comparator": ">=", "value": "1" }
        });
        let c: UnifiedAccessControlCondition = serde_json::from_value(cosmos).unwrap();
        assert_eq!(c.condition_type(), Some(ConditionType::Cosmos));

        let sol = json!({
            "method": "getBalance",
            "params": [":userAddress"],
            "pdaParams": [],
            "pdaInterface": { "offset": "0", "fields": "" },
            "pdaKey": "",
            "chain": "solana",
            "returnValueTest": { "key": "", "comparator": ">=", "value": "100000000" }
        });
        let c: UnifiedAccessControlCondition = serde_json::from_value(sol).unwrap();
        assert_eq!(c.condition_type(), Some(ConditionType::SolRpc));
        assert_eq!(c.chain(), Some("solana"));

        let c: UnifiedAccessControlCondition =
            serde_json::from_value(balance_condition()).unwrap();
        assert_eq!(c.condition_type(), Some(ConditionType::EvmBasic));
    }

    #[test]
    fn unified_infers_evm_contract_from_function_abi() {
        let contract = json!({
            "contractAddress": "0xb71a679cfff330591d556c4b9f21c7739ca9590c",
            "functionName": "members",
            "functionParams": [":userAddress"],
            "functionAbi": {
                "name": "members",
                "type": "function",
                "stateMutability": "view",
                "inputs": [{ "name": "", "type": "address" }],
                "outputs": [{ "name": "shares", "type": "uint256" }],
                "constant": true
            },
            "chain": "xdai",
            "returnValueTest": { "key": "shares", "comparator": ">=", "value": "1" }
        });
        let c: UnifiedAccessControlCondition = serde_json::from_value(contract.clone()).unwrap();
        assert_eq!(c.condition_type(), Some(ConditionType::EvmContract));
        assert_eq!(c.chain(), Some("xdai"));
        match &c {
            UnifiedAccessControlCondition::EvmContract(evm) => {
                assert_eq!(evm.function_name, "members");
                assert_eq!(evm.regular.condition_type, None);
            }
            other => panic!("expected an EVM contract condition, got {other:?}"),
        }
        // No discriminant is added on re-encode.
        assert_eq!(serde_json::to_value(&c).unwrap(), contract);
    }

    #[test]
    fn unified_operator_entry() {
        let c: UnifiedAccessControlCondition =
            serde_json::from_value(json!({ "operator": "or" })).unwrap();
        assert!(c.is_operator());
        assert_eq!(c.condition_type(), None);
        assert_eq!(c.chain(), None);
        assert_eq!(serde_json::to_value(&c).unwrap(), json!({ "operator": "or" }));
    }

    #[test]
    fn unified_rejects_bad_entries() {
        let unknown = json!({ "conditionType": "bitcoin", "chain": "btc",
            "returnValueTest": { "comparator": "=", "value": "1" } });
        let err = serde_json::from_value::<UnifiedAccessControlCondition>(unknown).unwrap_err();
        assert!(err.to_string().contains("unknown conditionType"));

        let not_string = json!({ "conditionType": 3 });
        assert!(serde_json::from_value::<UnifiedAccessControlCondition>(not_string).is_err());

        assert!(serde_json::from_value::<UnifiedAccessControlCondition>(json!([1, 2])).is_err());

        // Declared solRpc but without the Solana fields.
        let mut mislabeled = balance_condition();
        mislabeled["conditionType"] = json!("solRpc");
        assert!(serde_json::from_value::<UnifiedAccessControlCondition>(mislabeled).is_err());
    }

    #[test]
    fn condition_type_wire_names() {
        for t in [
            ConditionType::EvmBasic,
            ConditionType::EvmContract,
            ConditionType::SolRpc,
            ConditionType::Cosmos,
        ] {
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{t}\""));
            assert_eq!(ConditionType::from_wire(t.as_str()), Some(t));
        }
    }
}
