//! Dynamic calling convention for the encoder
//!
//! Callers that cannot be checked at compile time (JSON argument lists on the
//! command line, batch input lines) go through `call`, which validates arity
//! and argument type before handing a `u64` to the encoder.

use serde_json::Value;
use thiserror::Error;

use super::{encode_with, EncodeError, OverflowPolicy, ShortCode};

/// Errors reported at the call boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// Wrong number of arguments
    #[error("Call error. Use: shorturl.encode(int)")]
    Arity { got: usize },

    /// The argument is not a non-negative machine integer
    #[error("Argument not int error")]
    Type { got: String },

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The argument list itself is not valid JSON
    #[error("Malformed arguments: {0}")]
    Malformed(String),
}

impl CallError {
    /// Stable error code used in result items
    pub fn code(&self) -> &'static str {
        match self {
            CallError::Arity { .. } => "ARITY_ERROR",
            CallError::Type { .. } => "TYPE_ERROR",
            CallError::Encode(err) => err.code(),
            CallError::Malformed(_) => "MALFORMED",
        }
    }

    /// What the caller actually passed, for diagnostics
    pub fn detail(&self) -> String {
        match self {
            CallError::Arity { got } => format!("got {} argument(s)", got),
            CallError::Type { got } => format!("got {}", got),
            CallError::Encode(err) => err.to_string(),
            CallError::Malformed(reason) => reason.clone(),
        }
    }
}

/// Parse a JSON argument list.
///
/// A top-level array is the argument list; any other JSON value is a single argument.
pub fn parse_args(text: &str) -> Result<Vec<Value>, CallError> {
    let value: Value =
        serde_json::from_str(text.trim()).map_err(|e| CallError::Malformed(e.to_string()))?;
    Ok(match value {
        Value::Array(args) => args,
        other => vec![other],
    })
}

/// Invoke the encoder with an untyped argument list.
///
/// Returns the validated integer together with its code.
pub fn call(args: &[Value], policy: OverflowPolicy) -> Result<(u64, ShortCode), CallError> {
    let [arg] = args else {
        return Err(CallError::Arity { got: args.len() });
    };

    let value = arg.as_u64().ok_or_else(|| CallError::Type {
        got: type_name(arg).to_string(),
    })?;

    tracing::trace!(value, "encoding call argument");
    Ok((value, encode_with(value, policy)?))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "negative int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CAPACITY;
    use serde_json::json;

    #[test]
    fn test_call_single_int() {
        let (value, code) = call(&[json!(62)], OverflowPolicy::Wrap).unwrap();
        assert_eq!(value, 62);
        assert_eq!(code, "0000010");
    }

    #[test]
    fn test_call_arity_error() {
        let err = call(&[], OverflowPolicy::Wrap).unwrap_err();
        assert_eq!(err, CallError::Arity { got: 0 });
        assert_eq!(err.to_string(), "Call error. Use: shorturl.encode(int)");
        assert_eq!(err.code(), "ARITY_ERROR");
        assert_eq!(err.detail(), "got 0 argument(s)");

        let err = call(&[json!(1), json!(2)], OverflowPolicy::Wrap).unwrap_err();
        assert_eq!(err, CallError::Arity { got: 2 });
    }

    #[test]
    fn test_call_type_error() {
        for arg in [
            json!("12"),
            json!(1.5),
            json!(true),
            json!(null),
            json!(-1),
            json!([1]),
            json!({"uid": 1}),
        ] {
            let err = call(&[arg.clone()], OverflowPolicy::Wrap).unwrap_err();
            assert_eq!(err.to_string(), "Argument not int error", "arg {}", arg);
            assert_eq!(err.code(), "TYPE_ERROR");
        }
    }

    #[test]
    fn test_call_type_error_reports_kind() {
        let err = call(&[json!(-5)], OverflowPolicy::Wrap).unwrap_err();
        assert_eq!(
            err,
            CallError::Type {
                got: "negative int".to_string()
            }
        );
        assert_eq!(err.detail(), "got negative int");
    }

    #[test]
    fn test_call_overflow_policies() {
        let (value, wrapped) = call(&[json!(CAPACITY)], OverflowPolicy::Wrap).unwrap();
        assert_eq!(value, CAPACITY);
        assert_eq!(wrapped, "0000000");

        let err = call(&[json!(CAPACITY)], OverflowPolicy::Reject).unwrap_err();
        assert_eq!(err.code(), "OUT_OF_RANGE");
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args("[1, 2]").unwrap(), vec![json!(1), json!(2)]);
        assert_eq!(parse_args(" 42 ").unwrap(), vec![json!(42)]);
        assert_eq!(parse_args("[]").unwrap(), Vec::<Value>::new());
        assert_eq!(parse_args("\"abc\"").unwrap(), vec![json!("abc")]);

        let err = parse_args("[1,").unwrap_err();
        assert_eq!(err.code(), "MALFORMED");
    }
}
