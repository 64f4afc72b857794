//! Renderer module
//!
//! Turns a ResultSet of codes and errors into jsonl, json, md or raw text.

use clap::ValueEnum;
use serde::Serialize;

use crate::core::model::{Kind, ResultItem, ResultSet};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Jsonl,
    /// A single JSON array
    Json,
    /// Markdown table of codes plus an error list
    #[value(name = "md", alias = "markdown")]
    Markdown,
    /// One code (or URL) per line
    Raw,
}

/// Renders result sets in one output format
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub format: OutputFormat,
    /// Indent JSON output (jsonl/json only)
    pub pretty: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    pub fn render(&self, result_set: &ResultSet) -> String {
        let items = &result_set.items;
        match self.format {
            OutputFormat::Jsonl => {
                let sep = if self.pretty { "\n\n" } else { "\n" };
                items
                    .iter()
                    .map(|item| self.to_json(item))
                    .collect::<Vec<_>>()
                    .join(sep)
            }
            OutputFormat::Json => self.to_json(items),
            OutputFormat::Markdown => markdown(items),
            OutputFormat::Raw => items.iter().map(raw_line).collect::<Vec<_>>().join("\n"),
        }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> String {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        // Result items hold only strings and integers
        json.unwrap_or_default()
    }
}

fn markdown(items: &[ResultItem]) -> String {
    let mut output = String::new();

    let (codes, errors): (Vec<&ResultItem>, Vec<&ResultItem>) =
        items.iter().partition(|item| item.kind == Kind::Code);

    if !errors.is_empty() {
        output.push_str("## Errors\n\n");
        for item in errors {
            let at = item.line.map(|l| format!("line {}: ", l)).unwrap_or_default();
            for error in &item.errors {
                output.push_str(&format!("- {}**{}**: {}\n", at, error.code, error.message));
            }
        }
        output.push('\n');
    }

    if !codes.is_empty() {
        let with_urls = codes.iter().any(|item| item.url.is_some());

        output.push_str("## Codes\n\n");
        output.push_str(if with_urls {
            "| Value | Code | URL |\n|---:|---|---|\n"
        } else {
            "| Value | Code |\n|---:|---|\n"
        });
        for item in codes {
            let value = item.value.map(|v| v.to_string()).unwrap_or_default();
            output.push_str(&format!(
                "| {} | `{}` |",
                value,
                item.code.as_deref().unwrap_or_default()
            ));
            if with_urls {
                output.push_str(&format!(" {} |", item.url.as_deref().unwrap_or_default()));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

/// Codes print as-is (or as their URL); errors as `!CODE message`
fn raw_line(item: &ResultItem) -> String {
    match item.kind {
        Kind::Code => item
            .url
            .as_deref()
            .or(item.code.as_deref())
            .unwrap_or_default()
            .to_string(),
        Kind::Error => item
            .errors
            .iter()
            .map(|e| format!("!{} {}", e.code, e.message))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use crate::core::model::ItemError;
    use serde_json::Value;

    fn mixed_set() -> ResultSet {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::code(61, encode(61)));
        result_set.push(
            ResultItem::error(ItemError::new("TYPE_ERROR", "Argument not int error")).with_line(2),
        );
        result_set.push(ResultItem::code(62, encode(62)));
        result_set
    }

    #[test]
    fn test_jsonl_one_object_per_item() {
        let output = Renderer::new(OutputFormat::Jsonl, false).render(&mixed_set());
        let lines: Vec<Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["code"], "000000Z");
        assert_eq!(lines[1]["kind"], "error");
        assert_eq!(lines[1]["line"], 2);
        assert_eq!(lines[2]["code"], "0000010");
    }

    #[test]
    fn test_jsonl_pretty_separates_items_with_blank_line() {
        let output = Renderer::new(OutputFormat::Jsonl, true).render(&mixed_set());
        assert_eq!(output.split("\n\n").count(), 3);
        assert!(output.contains("  \"code\": \"000000Z\""));
    }

    #[test]
    fn test_json_array_keeps_order() {
        let output = Renderer::new(OutputFormat::Json, false).render(&mixed_set());
        let items: Vec<Value> = serde_json::from_str(&output).unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["value"], 61);
        assert_eq!(items[1]["errors"][0]["code"], "TYPE_ERROR");
    }

    #[test]
    fn test_markdown_empty() {
        let output = Renderer::new(OutputFormat::Markdown, false).render(&ResultSet::new());
        assert!(output.is_empty());
    }

    #[test]
    fn test_markdown_codes_and_errors() {
        let output = Renderer::new(OutputFormat::Markdown, false).render(&mixed_set());

        assert!(output.contains("## Errors"));
        assert!(output.contains("- line 2: **TYPE_ERROR**: Argument not int error"));
        assert!(output.contains("## Codes"));
        assert!(output.contains("| 62 | `0000010` |"));
        assert!(!output.contains("URL"));
    }

    #[test]
    fn test_markdown_url_column() {
        let mut result_set = ResultSet::new();
        result_set
            .push(ResultItem::code(62, encode(62)).with_url("https://sho.rt/0000010"));

        let output = Renderer::new(OutputFormat::Markdown, false).render(&result_set);

        assert!(output.contains("| Value | Code | URL |"));
        assert!(output.contains("| 62 | `0000010` | https://sho.rt/0000010 |"));
    }

    #[test]
    fn test_raw_codes_and_errors() {
        let output = Renderer::new(OutputFormat::Raw, false).render(&mixed_set());
        assert_eq!(output, "000000Z\n!TYPE_ERROR Argument not int error\n0000010");
    }

    #[test]
    fn test_raw_prefers_url() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::code(0, encode(0)).with_url("https://sho.rt/0000000"));

        let output = Renderer::new(OutputFormat::Raw, false).render(&result_set);
        assert_eq!(output, "https://sho.rt/0000000");
    }

    #[test]
    fn test_format_names() {
        assert_eq!(
            OutputFormat::from_str("md", true).unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(
            OutputFormat::from_str("MARKDOWN", true).unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }
}
