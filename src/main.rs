//! pathvalidate CLI - validate and sanitize file names and paths
//!
//! # Commands
//!
//! - `pathvalidate sanitize` - Rewrite inputs into valid names or paths
//! - `pathvalidate validate` - Report violations for each input
//! - `pathvalidate error` - Describe error reason codes
//!
//! # Usage
//!
//! ```bash
//! # Sanitize a path for Windows
//! pathvalidate --platform windows sanitize 'fi:l*e/p"a?t>h|.t<xt'
//!
//! # Validate file names read from stdin
//! ls | pathvalidate --filename validate -
//!
//! # Look up an error code
//! pathvalidate error PV1100
//! ```

mod commands;
mod config;
mod ui;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for configuration and usage errors.
const EXIT_USAGE: u8 = 2;

/// pathvalidate CLI - validate and sanitize file names and paths
#[derive(Parser)]
#[command(name = "pathvalidate")]
#[command(about = "Validate and sanitize file names and file paths")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Target platform (case-insensitive): auto, universal, posix, linux,
    /// macos or windows [default: universal]
    #[arg(long, value_name = "PLATFORM", global = true)]
    pub platform: Option<String>,

    /// Treat inputs as file names instead of paths
    #[arg(long, global = true)]
    pub filename: bool,

    /// Maximum byte length; -1 uses the platform limit [default: -1]
    #[arg(
        long = "max-len",
        visible_alias = "max-bytes",
        value_name = "BYTES",
        allow_negative_numbers = true,
        global = true
    )]
    pub max_len: Option<i64>,

    /// TOML file with rule defaults
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging with source locations
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub debug: bool,

    /// Suppress log messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize file paths
    Sanitize {
        /// Inputs to sanitize; a single `-` reads lines from stdin
        paths: Vec<String>,

        /// Replacement for invalid characters [default: ""]
        #[arg(long, value_name = "TEXT")]
        replacement_text: Option<String>,

        /// Normalize the path before sanitizing
        #[arg(long)]
        normalize: bool,

        /// Validate each result after sanitizing
        #[arg(long)]
        validate_after_sanitize: bool,
    },

    /// Validate file paths
    Validate {
        /// Inputs to validate; a single `-` reads lines from stdin
        paths: Vec<String>,

        /// Minimum byte length [default: 1]
        #[arg(long = "min-len", visible_alias = "min-bytes", value_name = "BYTES")]
        min_len: Option<usize>,

        /// Skip reserved-name checks
        #[arg(long)]
        no_check_reserved: bool,

        /// Output format for invalid inputs
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print error reasons
    Error {
        /// Reason codes to describe, e.g. PV1100
        codes: Vec<String>,

        /// List every error reason
        #[arg(long)]
        list: bool,
    },
}

/// Output format for `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Jsonl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    let result = match cli.command {
        Commands::Sanitize {
            paths,
            replacement_text,
            normalize,
            validate_after_sanitize,
        } => commands::sanitize::execute(
            &cli.global,
            &paths,
            &commands::sanitize::SanitizeOptions {
                replacement_text,
                normalize,
                validate_after_sanitize,
            },
        ),
        Commands::Validate {
            paths,
            min_len,
            no_check_reserved,
            format,
        } => commands::validate::execute(
            &cli.global,
            &paths,
            &commands::validate::ValidateOptions {
                min_len,
                no_check_reserved,
                format,
            },
        ),
        Commands::Error { codes, list } => commands::error::execute(&codes, list),
    };

    match result {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_USAGE)
        },
    }
}

/// Initialize logging to stderr. `RUST_LOG` overrides the level unless
/// `--quiet` is given.
fn init_tracing(args: &GlobalArgs) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_level = if args.debug { "debug" } else { "info" };
    let filter = if args.quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(args.debug)
        .with_file(args.debug)
        .with_line_number(args.debug);

    tracing_subscriber::registry().with(filter).with(layer).init();
}
