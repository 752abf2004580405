//! `pathvalidate validate` - report violations for each input.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, info};

use pathvalidate::{RuleSet, Validator, Violations};

use super::{Status, base_rules, load_config, read_inputs};
use crate::config::Config;
use crate::{GlobalArgs, OutputFormat};

/// Flags specific to `validate`.
#[derive(Debug)]
pub struct ValidateOptions {
    pub min_len: Option<usize>,
    pub no_check_reserved: bool,
    pub format: OutputFormat,
}

/// One line of `--format jsonl` output.
#[derive(Debug, Serialize)]
struct InvalidRecord<'a> {
    value: &'a str,
    platform: &'static str,
    violations: &'a Violations,
}

pub fn execute(args: &GlobalArgs, paths: &[String], options: &ValidateOptions) -> Result<Status> {
    let config = load_config(args)?;
    let rules = validate_rules(base_rules(args, &config)?, options, &config)?;
    rules.check_satisfiable()?;

    let validator = Validator::new(&rules);
    let platform = rules.platform();
    let inputs = read_inputs(paths)?;
    let mut stdout = io::stdout().lock();
    let mut status = if inputs.undecodable > 0 {
        Status::RecordFailure
    } else {
        Status::Success
    };

    for input in &inputs.records {
        debug!(input = %input, platform = %platform, "Validating");

        match validator.validate(input) {
            Ok(()) => {
                if args.verbose >= 1 {
                    info!("{input} is a valid path for {platform}");
                }
            },
            Err(violations) => {
                status = Status::RecordFailure;
                write_invalid(&mut stdout, input, platform.name(), &violations, options.format)?;
            },
        }
    }

    Ok(status)
}

fn validate_rules(rules: RuleSet, options: &ValidateOptions, config: &Config) -> Result<RuleSet> {
    let min_len = match options.min_len {
        Some(value) => value,
        None => match config.rules.min_len {
            Some(value) => usize::try_from(value)
                .with_context(|| format!("rules.min_len must be >= 0 (got: {value})"))?,
            None => pathvalidate::constants::DEFAULT_MIN_LEN,
        },
    };
    let check_reserved = !options.no_check_reserved && config.rules.check_reserved.unwrap_or(true);

    Ok(rules
        .with_min_length(min_len)
        .with_check_reserved(check_reserved))
}

fn write_invalid<W: Write>(
    out: &mut W,
    input: &str,
    platform: &'static str,
    violations: &Violations,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{violations}, value={input:?}, platform={platform}")?;
        },
        OutputFormat::Jsonl => {
            let record = InvalidRecord {
                value: input,
                platform,
                violations,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        },
    }
    Ok(())
}
