//! Call command - a single invocation through the dynamic call boundary

use anyhow::Result;

use super::{emit, EncodeOptions};
use crate::codec::call::{call, parse_args, CallError};
use crate::core::model::{ItemError, ResultItem, ResultSet};

/// Evaluate one JSON argument list into a result item
pub fn evaluate(args: &str, options: &EncodeOptions) -> Result<ResultItem, CallError> {
    let args = parse_args(args)?;
    let (value, code) = call(&args, options.policy)?;
    Ok(options.code_item(value, code))
}

/// Run the call command
///
/// Call errors are terminal: the error item is rendered and the command fails.
pub fn run_call(args: &str, options: &EncodeOptions) -> Result<()> {
    let mut result_set = ResultSet::new();

    match evaluate(args, options) {
        Ok(item) => {
            result_set.push(item);
            emit(&result_set, &options.renderer);
            Ok(())
        }
        Err(err) => {
            tracing::debug!(args, code = err.code(), detail = %err.detail(), "call failed");
            result_set.push(ResultItem::error(ItemError::from(&err)));
            emit(&result_set, &options.renderer);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{OverflowPolicy, CAPACITY};
    use crate::commands::parse_base_url;

    #[test]
    fn test_evaluate_ok() {
        let item = evaluate("[62]", &EncodeOptions::default()).unwrap();
        assert_eq!(item.value, Some(62));
        assert_eq!(item.code.as_deref(), Some("0000010"));
    }

    #[test]
    fn test_evaluate_bare_value() {
        let item = evaluate("61", &EncodeOptions::default()).unwrap();
        assert_eq!(item.code.as_deref(), Some("000000Z"));
    }

    #[test]
    fn test_evaluate_errors() {
        let options = EncodeOptions::default();
        assert_eq!(evaluate("[]", &options).unwrap_err().code(), "ARITY_ERROR");
        assert_eq!(evaluate("[1, 2]", &options).unwrap_err().code(), "ARITY_ERROR");
        assert_eq!(evaluate("[\"7\"]", &options).unwrap_err().code(), "TYPE_ERROR");
        assert_eq!(evaluate("{", &options).unwrap_err().code(), "MALFORMED");
    }

    #[test]
    fn test_evaluate_with_base_url() {
        let options = EncodeOptions {
            base_url: Some(parse_base_url("https://sho.rt/").unwrap()),
            ..Default::default()
        };
        let item = evaluate("[0]", &options).unwrap();
        assert_eq!(item.url.as_deref(), Some("https://sho.rt/0000000"));
    }

    #[test]
    fn test_evaluate_keeps_validated_value() {
        let options = EncodeOptions {
            policy: OverflowPolicy::Wrap,
            ..Default::default()
        };
        let item = evaluate(&format!("[{}]", CAPACITY + 61), &options).unwrap();
        assert_eq!(item.value, Some(CAPACITY + 61));
        assert_eq!(item.code.as_deref(), Some("000000Z"));

        let item = evaluate(&u64::MAX.to_string(), &options).unwrap();
        assert_eq!(item.value, Some(u64::MAX));
    }
}
