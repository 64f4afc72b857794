//! Range command - encode a contiguous run of ids

use anyhow::{bail, Result};

use super::{emit, map_items, EncodeOptions};
use crate::codec::encode_with;
use crate::core::model::{ItemError, ResultItem, ResultSet};

/// Largest `--count` accepted in one invocation
pub const MAX_COUNT: u64 = 1_000_000;

/// Up to `count` values from `start`, stopping after `u64::MAX`
fn range_values(start: u64, count: u64) -> Vec<u64> {
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    (start..=u64::MAX).take(count).collect()
}

/// Encode a contiguous range of ids
pub fn encode_range(start: u64, count: u64, options: &EncodeOptions) -> ResultSet {
    let values = range_values(start, count);
    tracing::debug!(start, count = values.len(), "encoding range");

    map_items(&values, |&value| match encode_with(value, options.policy) {
        Ok(code) => options.code_item(value, code),
        Err(err) => {
            ResultItem::error(ItemError::new(err.code(), err.to_string())).with_value(value)
        }
    })
    .into_iter()
    .collect()
}

/// Run the range command
pub fn run_range(start: u64, count: u64, options: &EncodeOptions) -> Result<()> {
    if count > MAX_COUNT {
        bail!("--count {} exceeds the limit of {}", count, MAX_COUNT);
    }

    let result_set = encode_range(start, count, options);
    emit(&result_set, &options.renderer);

    let failed = result_set.error_count();
    if failed > 0 {
        bail!("{} of {} value(s) could not be encoded", failed, result_set.len());
    }

    Ok(())
}
