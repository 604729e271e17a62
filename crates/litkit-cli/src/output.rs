//! Envelope rendering and exit codes.

use anyhow::Result;
use serde::Serialize;

use litkit_core::{Either, EitherType};

/// Exit code for a SUCCESS envelope.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code for an ERROR envelope.
pub const EXIT_EXPECTED_ERROR: u8 = 1;
/// Exit code for a native failure (unreadable file, bad configuration).
pub const EXIT_OPERATIONAL_ERROR: u8 = 2;

/// Render any serializable value as JSON.
pub fn render<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    Ok(if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    })
}

/// Print an envelope to stdout and map its tag to an exit code.
pub fn emit<L: Serialize, R: Serialize>(envelope: &Either<L, R>, compact: bool) -> Result<u8> {
    println!("{}", render(envelope, compact)?);
    Ok(exit_code(envelope.kind()))
}

pub fn exit_code(kind: EitherType) -> u8 {
    match kind {
        EitherType::Error => EXIT_EXPECTED_ERROR,
        EitherType::Success => EXIT_SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_follows_tag() {
        assert_eq!(exit_code(EitherType::Success), 0);
        assert_eq!(exit_code(EitherType::Error), 1);
    }

    #[test]
    fn compact_render_is_single_line() {
        let e: Either<(), u8> = Either::right(1);
        let out = render(&e, true).unwrap();
        assert_eq!(out, r#"{"type":"SUCCESS","result":1}"#);
        assert!(render(&e, false).unwrap().contains('\n'));
    }
}
