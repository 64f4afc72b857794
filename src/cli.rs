//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::codec::OverflowPolicy;
use crate::commands::{parse_base_url, EncodeOptions};
use crate::core::render::{OutputFormat, Renderer};

/// shorturl - turn integer ids into fixed-width base-62 short codes.
#[derive(Parser, Debug)]
#[command(name = "shorturl")]
#[command(
    author,
    version,
    about,
    long_about = r#"shorturl maps every non-negative integer id to a 7 character code drawn
from 0-9, a-z, A-Z (in that digit order), left-padded with '0'.

Each command prints a ResultSet in the selected format (default: jsonl).

Output formats:
- jsonl: one JSON object per line (best for piping)
- json: a single JSON array
- md: human-friendly Markdown
- raw: one code per line

Examples:
    shorturl encode 0 61 62
    shorturl call '[12345]'
    shorturl batch ids.txt
    shorturl range --start 1000 --count 5
    shorturl --base-url https://sho.rt/ encode 42
"#
)]
pub struct Cli {
    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        env = "SHORTURL_FORMAT",
        value_enum,
        ignore_case = true,
        default_value_t = OutputFormat::Jsonl,
        value_name = "FORMAT"
    )]
    pub format: OutputFormat,

    /// What to do with ids that do not fit in 7 digits (wrap/reject).
    #[arg(
        long,
        global = true,
        env = "SHORTURL_OVERFLOW",
        default_value = "wrap",
        value_name = "POLICY",
        long_help = "Policy for ids >= 62^7 (3521614606208).\n\n\
Supported values:\n\
- wrap (default): keep only the lowest 7 digits, so 62^7 encodes like 0\n\
- reject: report an OUT_OF_RANGE error instead"
    )]
    pub overflow: OverflowPolicy,

    /// Base URL to join codes onto.
    #[arg(
        long,
        global = true,
        env = "SHORTURL_BASE_URL",
        value_name = "URL",
        long_help = "When set, every code result also carries `url`: the code appended to\n\
this base URL as a final path segment.\n\n\
Example: --base-url https://sho.rt/s"
    )]
    pub base_url: Option<String>,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logs on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug logging on stderr. RUST_LOG overrides this when set."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode one or more integer ids.
    #[command(
        long_about = "Encode each VALUE into a short code and emit one result per value.\n\n\
Values must be non-negative integers that fit in 64 bits.\n\n\
Examples:\n\
  shorturl encode 62\n\
  shorturl encode 0 1 2 --format raw\n"
    )]
    Encode {
        /// Integer ids to encode.
        #[arg(value_name = "VALUE", required = true, num_args = 1..)]
        values: Vec<u64>,
    },

    /// Encode through the dynamically typed call boundary.
    #[command(
        long_about = r#"Treat ARGS as a JSON argument list and call the encoder with it.

Exactly one non-negative integer argument is accepted. Anything else fails:
- wrong number of arguments: "Call error. Use: shorturl.encode(int)"
- non-integer argument: "Argument not int error"

A JSON value that is not an array is treated as a single argument.

Examples:
    shorturl call '[12345]'
    shorturl call 12345
"#
    )]
    Call {
        /// JSON argument list.
        #[arg(value_name = "ARGS", allow_hyphen_values = true)]
        args: String,
    },

    /// Encode one call per input line.
    #[command(
        long_about = "Read FILE (or stdin) and treat every non-empty line as the ARGS of a\n\
`call`. Lines that fail produce error results carrying their line number;\n\
the batch continues.\n\n\
Examples:\n\
  shorturl batch ids.txt\n\
  seq 1 100 | shorturl batch\n"
    )]
    Batch {
        /// Input file ('-' or omitted for stdin).
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Encode a contiguous range of ids.
    #[command(
        long_about = "Encode START, START+1, ... for COUNT ids (stopping at the largest\n\
64-bit value).\n\n\
Example:\n\
  shorturl range --start 3521614606200 --count 10 --overflow reject\n"
    )]
    Range {
        /// First id.
        #[arg(long, default_value = "0", value_name = "START")]
        start: u64,

        /// Number of ids.
        #[arg(long, default_value = "10", value_name = "COUNT")]
        count: u64,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let renderer = Renderer::new(cli.format, cli.pretty);

    let base_url = cli.base_url.as_deref().map(parse_base_url).transpose()?;

    let options = EncodeOptions {
        renderer,
        policy: cli.overflow,
        base_url,
    };
    tracing::debug!(?options, "resolved options");

    match cli.command {
        Commands::Encode { values } => crate::commands::encode::run_encode(&values, &options),

        Commands::Call { args } => crate::commands::call::run_call(&args, &options),

        Commands::Batch { input } => {
            crate::commands::batch::run_batch(input.as_deref(), &options)
        }

        Commands::Range { start, count } => {
            crate::commands::range::run_range(start, count, &options)
        }
    }
}
