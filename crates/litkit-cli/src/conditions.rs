//! # Conditions Subcommand
//!
//! Decodes a unified access-control condition list and summarizes each entry.
//! A list that does not decode is reported as an ERROR envelope carrying an
//! `INVALID_ACCESS_CONTROL_CONDITIONS` error.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use litkit_core::{LitErrorKind, LitResult};
use litkit_types::{ConditionType, UnifiedAccessControlCondition};

use crate::input;
use crate::output;

/// Arguments for the `litkit conditions` subcommand.
#[derive(Args, Debug)]
pub struct ConditionsArgs {
    /// JSON or YAML file holding an array of conditions.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionSummary {
    pub index: usize,
    /// Condition family; absent for operator entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ConditionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<String>,
}

impl ConditionSummary {
    fn of(index: usize, condition: &UnifiedAccessControlCondition) -> Self {
        let regular = condition.regular();
        let method = match condition {
            UnifiedAccessControlCondition::EvmContract(c) => Some(c.function_name.clone()),
            _ => regular.and_then(|r| r.method.clone()),
        };
        Self {
            index,
            kind: condition.condition_type(),
            operator: match condition {
                UnifiedAccessControlCondition::Operator(op) => Some(op.operator.clone()),
                _ => None,
            },
            chain: condition.chain().map(str::to_string),
            method,
            comparator: regular.map(|r| r.return_value_test.comparator.clone()),
        }
    }
}

/// Decode and summarize the conditions in `path`.
pub fn inspect_conditions(path: &Path) -> Result<LitResult<Vec<ConditionSummary>>> {
    tracing::debug!(path = %path.display(), "loading access control conditions");
    let decoded: LitResult<Vec<UnifiedAccessControlCondition>> =
        input::load(path, LitErrorKind::InvalidAccessControlConditions)?;
    Ok(decoded.map(|conditions| {
        tracing::info!(count = conditions.len(), "decoded access control conditions");
        conditions
            .iter()
            .enumerate()
            .map(|(i, c)| ConditionSummary::of(i, c))
            .collect()
    }))
}

/// Execute the conditions subcommand.
///
/// Returns exit code: 0 when the list decodes, 1 when it does not.
pub fn run_conditions(args: &ConditionsArgs) -> Result<u8> {
    let envelope = inspect_conditions(&args.path)?;
    output::emit(&envelope, args.compact)
}
