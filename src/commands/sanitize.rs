//! `pathvalidate sanitize` - print a sanitized form of each input.
//!
//! Records that cannot be sanitized are logged and skipped; the remaining
//! inputs are still processed and the command exits 0.

use anyhow::Result;
use std::io::{self, Write};
use tracing::{debug, error};

use pathvalidate::Sanitizer;

use super::{Status, base_rules, load_config, read_inputs};
use crate::GlobalArgs;

/// Flags specific to `sanitize`.
#[derive(Debug, Default)]
pub struct SanitizeOptions {
    pub replacement_text: Option<String>,
    pub normalize: bool,
    pub validate_after_sanitize: bool,
}

pub fn execute(args: &GlobalArgs, paths: &[String], options: &SanitizeOptions) -> Result<Status> {
    let config = load_config(args)?;
    let rules = base_rules(args, &config)?
        .with_normalize(options.normalize || config.rules.normalize)
        .with_validate_after_sanitize(
            options.validate_after_sanitize || config.rules.validate_after_sanitize,
        );

    let replacement = options
        .replacement_text
        .as_deref()
        .or(config.rules.replacement_text.as_deref())
        .unwrap_or("");
    let sanitizer = Sanitizer::new(rules, replacement)?;

    let inputs = read_inputs(paths)?;
    let mut stdout = io::stdout().lock();

    for input in &inputs.records {
        debug!(input = %input, platform = %sanitizer.rules().platform(), "Sanitizing");

        match sanitizer.sanitize(input) {
            Ok(sanitized) => writeln!(stdout, "{sanitized}")?,
            Err(e) => error!("{e}"),
        }
    }

    Ok(Status::Success)
}
