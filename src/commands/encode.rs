//! Encode command - typed integer ids to short codes

use anyhow::{bail, Result};

use super::{emit, EncodeOptions};
use crate::codec::encode_with;
use crate::core::model::{ItemError, ResultItem, ResultSet};

/// Encode each value, turning policy rejections into error items
pub fn encode_values(values: &[u64], options: &EncodeOptions) -> Result<ResultSet> {
    let mut result_set = ResultSet::new();

    for &value in values {
        match encode_with(value, options.policy) {
            Ok(code) => {
                tracing::debug!(value, code = %code, "encoded");
                result_set.push(options.code_item(value, code));
            }
            Err(err) => {
                tracing::warn!(value, error = %err, "value rejected");
                result_set.push(
                    ResultItem::error(ItemError::new(err.code(), err.to_string()))
                        .with_value(value),
                );
            }
        }
    }

    Ok(result_set)
}

/// Run the encode command
pub fn run_encode(values: &[u64], options: &EncodeOptions) -> Result<()> {
    let result_set = encode_values(values, options)?;
    emit(&result_set, &options.renderer);

    let failed = result_set.error_count();
    if failed > 0 {
        bail!("{} of {} value(s) could not be encoded", failed, values.len());
    }

    Ok(())
}
