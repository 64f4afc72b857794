//! Batch command - one call per input line

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::call::evaluate;
use super::{emit, map_items, EncodeOptions};
use crate::codec::call::CallError;
use crate::core::model::{ItemError, ResultItem, ResultSet};

/// One input line: its text, or why it could not be decoded
type Line = (usize, Result<String, CallError>);

/// Read non-empty lines as (1-indexed line number, trimmed text).
///
/// A line that is not valid UTF-8 is kept as a MALFORMED error so the rest of
/// the batch still runs. Only I/O failures abort.
fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<Line>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read input line {}", line_no + 1))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        match std::str::from_utf8(&buf) {
            Ok(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    lines.push((line_no, Ok(trimmed.to_string())));
                }
            }
            Err(err) => lines.push((
                line_no,
                Err(CallError::Malformed(format!("line is not valid UTF-8 ({})", err))),
            )),
        }
    }

    Ok(lines)
}

/// Evaluate every line; bad lines become error items and do not stop the batch
pub fn encode_lines<R: BufRead>(reader: R, options: &EncodeOptions) -> Result<ResultSet> {
    let lines = read_lines(reader)?;

    let items = map_items(&lines, |(line_no, line)| {
        let outcome = line
            .as_ref()
            .map_err(Clone::clone)
            .and_then(|text| evaluate(text, options));
        match outcome {
            Ok(item) => item.with_line(*line_no),
            Err(err) => {
                let input = line.as_deref().unwrap_or("<invalid utf-8>");
                tracing::warn!(
                    line = *line_no,
                    input = %input,
                    error = %err,
                    detail = %err.detail(),
                    "rejected batch line"
                );
                ResultItem::error(ItemError::from(&err)).with_line(*line_no)
            }
        }
    });

    Ok(items.into_iter().collect())
}

/// Run the batch command. `None` or `-` reads stdin.
pub fn run_batch(input: Option<&Path>, options: &EncodeOptions) -> Result<()> {
    let result_set = match input {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input: {:?}", path))?;
            encode_lines(BufReader::new(file), options)?
        }
        _ => encode_lines(io::stdin().lock(), options)?,
    };

    tracing::info!(
        items = result_set.len(),
        errors = result_set.error_count(),
        "batch complete"
    );

    emit(&result_set, &options.renderer);
    Ok(())
}
