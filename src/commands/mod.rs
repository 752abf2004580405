//! CLI command implementations for pathvalidate.
//!
//! - [`sanitize`] - Rewrite inputs so they validate
//! - [`validate`] - Report violations per input
//! - [`error`] - Error reason lookup table
//!
//! Helpers here merge global flags with the optional config file into a
//! [`RuleSet`] and collect inputs from arguments or stdin.

pub mod error;
pub mod sanitize;
pub mod validate;

use anyhow::{Context, Result};
use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;
use tracing::{debug, error, warn};

use pathvalidate::{Platform, RuleSet};

use crate::GlobalArgs;
use crate::config::{Config, length_limit};

/// Outcome of a command that processed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every record was processed successfully.
    Success,
    /// At least one record was invalid or could not be sanitized.
    RecordFailure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::RecordFailure => ExitCode::from(1),
        }
    }
}

/// Load the config file named by `--config`, or defaults when absent.
///
/// Validation warnings are logged.
pub fn load_config(args: &GlobalArgs) -> Result<Config> {
    let Some(path) = &args.config else {
        return Ok(Config::default());
    };

    let config = Config::load_from(path)?;
    let validation = config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    for warning in &validation.warnings {
        warn!(path = %path.display(), "{warning}");
    }
    debug!(path = %path.display(), ?config, "Loaded configuration");

    Ok(config)
}

/// Build the rule set shared by `sanitize` and `validate`.
///
/// Flags win over config values, which win over defaults.
pub fn base_rules(args: &GlobalArgs, config: &Config) -> Result<RuleSet> {
    let specifier = args
        .platform
        .as_deref()
        .or(config.rules.platform.as_deref())
        .unwrap_or("universal");
    let platform = Platform::resolve(specifier)?;

    let max_len = match args.max_len {
        Some(value) => length_limit("--max-len", value)?,
        None => match config.rules.max_len {
            Some(value) => length_limit("rules.max_len", value)?,
            None => None,
        },
    };

    let filename = args.filename || config.rules.filename;
    debug!(
        platform = %platform,
        filename,
        max_len = ?max_len,
        "Resolved rule set"
    );

    Ok(RuleSet::new(platform)
        .with_filename(filename)
        .with_max_length(max_len))
}

/// Records collected from arguments or stdin.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Inputs {
    pub records: Vec<String>,
    /// Stdin lines skipped because they were not valid UTF-8.
    pub undecodable: usize,
}

/// Collect inputs from arguments, or from stdin for a lone `-`.
pub fn read_inputs(paths: &[String]) -> Result<Inputs> {
    let stdin = io::stdin();
    if !uses_stdin(paths, stdin.is_terminal()) {
        return Ok(Inputs {
            records: paths.to_vec(),
            undecodable: 0,
        });
    }

    read_records(stdin.lock()).context("Failed to read inputs from stdin")
}

/// Split `reader` into lines, skipping (and logging) lines that are not UTF-8.
///
/// A line that fails to decode is a per-record failure, not a read error:
/// the remaining lines are still returned.
fn read_records<R: BufRead>(reader: R) -> io::Result<Inputs> {
    let mut inputs = Inputs::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        match String::from_utf8(line) {
            Ok(record) => inputs.records.push(record),
            Err(e) => {
                error!(line = index + 1, error = %e.utf8_error(), "Skipping input that is not valid UTF-8");
                inputs.undecodable += 1;
            },
        }
    }

    Ok(inputs)
}

fn uses_stdin(paths: &[String], stdin_is_terminal: bool) -> bool {
    !stdin_is_terminal && paths.len() == 1 && paths[0] == "-"
}
