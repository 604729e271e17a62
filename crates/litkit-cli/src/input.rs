//! Payload file loading.
//!
//! Files ending in `.yaml` / `.yml` are read as YAML, everything else as JSON.
//! Both are decoded into the target schema through the same serde model.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use litkit_core::{Either, LitError, LitErrorKind, LitResult};

/// Document syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read `path` and decode it as `T`.
///
/// I/O failures are returned as `Err`. Syntax or shape errors are expected
/// outcomes and come back as `Either::Left` tagged with `kind`.
pub fn load<T: DeserializeOwned>(path: &Path, kind: LitErrorKind) -> Result<LitResult<T>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(decode(&text, Format::for_path(path), kind).map_left(|e| prefix_path(e, path)))
}

/// Decode an in-memory document.
pub fn decode<T: DeserializeOwned>(
    text: &str,
    format: Format,
    kind: LitErrorKind,
) -> LitResult<T> {
    let decoded: Result<T, String> = match format {
        Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    };
    match decoded {
        Ok(value) => Either::right(value),
        Err(message) => {
            tracing::debug!(error = %message, kind = %kind, "payload rejected");
            Either::left(LitError::from_kind(kind, message))
        }
    }
}

fn prefix_path(mut err: LitError, path: &Path) -> LitError {
    err.message = Some(match err.message.take() {
        Some(m) => format!("{}: {m}", path.display()),
        None => path.display().to_string(),
    });
    err
}
