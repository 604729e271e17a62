//! # Wire Contract Tests
//!
//! Downstream consumers depend on exact field presence in these payloads.
//! These tests pin the JSON layout of the schemas when they travel inside an
//! `Either` envelope, using payloads shaped like real node traffic.

use litkit_core::{Either, EitherType, LitError, LitErrorKind, LitResult};
use litkit_types::{
    ConditionType, DecryptZipFileWithMetadata, JsonAuthSig, UnifiedAccessControlCondition,
};
use proptest::prelude::*;
use serde_json::json;

fn unified_list() -> serde_json::Value {
    json!([
        {
            "conditionType": "evmBasic",
            "contractAddress": "0x3110c39b428221012934A7F617913b095BC1078C",
            "standardContractType": "ERC1155",
            "chain": "polygon",
            "method": "balanceOf",
            "parameters": [":userAddress", "9541"],
            "returnValueTest": { "comparator": ">", "value": "0" }
        },
        { "operator": "or" },
        {
            "conditionType": "evmContract",
            "contractAddress": "0xb71a679cfff330591d556c4b9f21c7739ca9590c",
            "functionName": "members",
            "functionParams": [":userAddress"],
            "functionAbi": {
                "constant": true,
                "inputs": [{ "name": "", "type": "address" }],
                "name": "members",
                "outputs": [
                    { "name": "delegateKey", "type": "address" },
                    { "name": "shares", "type": "uint256" }
                ],
                "payable": false,
                "stateMutability": "view",
                "type": "function"
            },
            "chain": "xdai",
            "returnValueTest": { "key": "shares", "comparator": ">=", "value": "1" }
        },
        { "operator": "and" },
        {
            "conditionType": "solRpc",
            "method": "getBalance",
            "params": [":userAddress"],
            "pdaParams": [],
            "pdaInterface": { "offset": "0", "fields": "" },
            "pdaKey": "",
            "chain": "solana",
            "returnValueTest": { "key": "", "comparator": ">=", "value": "100000000" }
        },
        { "operator": "or" },
        {
            "conditionType": "cosmos",
            "path": "/cosmos/bank/v1beta1/balances/:userAddress",
            "chain": "cosmos",
            "returnValueTest": {
                "key": "$.balances[0].amount",
                "comparator": ">=",
                "value": "1000000"
            }
        }
    ])
}

#[test]
fn test_decrypted_file_success_scenario() {
    let payload = DecryptZipFileWithMetadata {
        decrypted_file: vec![0xde, 0xad, 0xbe, 0xef],
        metadata: "ok".to_string(),
    };
    let outcome: LitResult<DecryptZipFileWithMetadata> = Either::right(payload.clone());

    assert_eq!(outcome.kind(), EitherType::Success);
    assert_eq!(outcome.right_ref(), Some(&payload));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "type": "SUCCESS",
            "result": { "decryptedFile": [222, 173, 190, 239], "metadata": "ok" }
        })
    );
}

#[test]
fn test_access_denied_error_scenario() {
    let err = LitError::new("access denied")
        .with_error_code("NodeAccessControlConditionsNotSatisfied");
    let outcome: LitResult<DecryptZipFileWithMetadata> = Either::left(err.clone());

    assert_eq!(outcome.kind(), EitherType::Error);
    assert_eq!(outcome.left_ref(), Some(&err));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "type": "ERROR",
            "result": {
                "message": "access denied",
                "errorCode": "NodeAccessControlConditionsNotSatisfied"
            }
        })
    );
}

#[test]
fn test_absent_error_payload_scenario() {
    let outcome: Either<Option<LitError>, ()> = Either::left(None);
    assert_eq!(outcome.kind(), EitherType::Error);
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "type": "ERROR", "result": null })
    );
    let back: Either<Option<LitError>, ()> =
        serde_json::from_value(json!({ "type": "ERROR", "result": null })).unwrap();
    assert_eq!(back, outcome);
}

#[test]
fn test_unified_list_decodes_every_family() {
    let list: Vec<UnifiedAccessControlCondition> =
        serde_json::from_value(unified_list()).unwrap();

    let kinds: Vec<Option<ConditionType>> = list.iter().map(|c| c.condition_type()).collect();
    assert_eq!(
        kinds,
        vec![
            Some(ConditionType::EvmBasic),
            None,
            Some(ConditionType::EvmContract),
            None,
            Some(ConditionType::SolRpc),
            None,
            Some(ConditionType::Cosmos),
        ]
    );

    let chains: Vec<&str> = list.iter().filter_map(|c| c.chain()).collect();
    assert_eq!(chains, vec!["polygon", "xdai", "solana", "cosmos"]);
}

#[test]
fn test_unified_list_reencodes_to_same_json() {
    let list: Vec<UnifiedAccessControlCondition> =
        serde_json::from_value(unified_list()).unwrap();
    // `payable` is an unmodelled FunctionAbi key and is dropped on re-encode.
    let mut expected = unified_list();
    expected[2]["functionAbi"]
        .as_object_mut()
        .unwrap()
        .remove("payable");
    assert_eq!(serde_json::to_value(&list).unwrap(), expected);
}

#[test]
fn test_invalid_conditions_reported_as_left() {
    let bad = json!([{ "conditionType": "bitcoin", "chain": "btc" }]);
    let outcome: LitResult<Vec<UnifiedAccessControlCondition>> =
        serde_json::from_value::<Vec<UnifiedAccessControlCondition>>(bad)
            .map_err(|e| {
                LitError::from_kind(LitErrorKind::InvalidAccessControlConditions, e.to_string())
            })
            .into();

    let err = outcome.into_left().unwrap();
    assert_eq!(err.kind(), Some(LitErrorKind::InvalidAccessControlConditions));
    assert!(err.message.unwrap().contains("unknown conditionType"));
}

#[test]
fn test_auth_sig_inside_success_envelope() {
    let sig = JsonAuthSig::new("0xsig", "web3.eth.personal.sign", "msg", "0xaddr");
    let outcome: LitResult<JsonAuthSig> = Either::right(sig);
    let v = serde_json::to_value(&outcome).unwrap();
    let result = v["result"].as_object().unwrap();
    let mut keys: Vec<&str> = result.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["address", "derivedVia", "sig", "signedMessage"]);
}

proptest! {
    /// A basic condition decodes through the unified entry point with its
    /// chain and return value test intact, whatever the strings are.
    #[test]
    fn basic_condition_fields_pass_through(
        chain in "[a-z]{1,12}",
        comparator in prop::sample::select(vec!["=", ">", ">=", "<", "<="]),
        value in "[0-9]{1,20}",
    ) {
        let raw = json!({
            "chain": chain,
            "method": "eth_getBalance",
            "parameters": [":userAddress", "latest"],
            "returnValueTest": { "comparator": comparator, "value": value }
        });
        let c: UnifiedAccessControlCondition = serde_json::from_value(raw.clone()).unwrap();
        prop_assert_eq!(c.condition_type(), Some(ConditionType::EvmBasic));
        let regular = c.regular().unwrap();
        prop_assert_eq!(&regular.chain, &chain);
        prop_assert_eq!(&regular.return_value_test.value, &value);
        prop_assert_eq!(serde_json::to_value(&c).unwrap(), raw);
    }
}
