//! Configuration file support for the pathvalidate CLI.
//!
//! An optional TOML file supplies defaults for the rule set. Command-line
//! flags override anything set here.
//!
//! ```toml
//! [rules]
//! platform = "windows"
//! filename = false
//! max_len = 200
//! min_len = 1
//! check_reserved = true
//! replacement_text = "_"
//! normalize = true
//! validate_after_sanitize = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use pathvalidate::Platform;

/// Sentinel for "use the platform limit".
pub const PLATFORM_MAX_LEN: i64 = -1;

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Non-fatal warnings that should be logged but don't prevent operation.
    pub warnings: Vec<String>,
}

/// Root of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Rule set defaults. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    pub platform: Option<String>,
    pub filename: bool,
    pub max_len: Option<i64>,
    pub min_len: Option<i64>,
    pub check_reserved: Option<bool>,
    pub replacement_text: Option<String>,
    pub normalize: bool,
    pub validate_after_sanitize: bool,
}

impl Config {
    /// Load configuration from the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or has unknown keys or mistyped values.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate value ranges.
    ///
    /// Returns a `ValidationResult` containing any non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns an error listing every problem found:
    /// - unknown platform specifier
    /// - `max_len` below -1 or `min_len` below 0
    /// - `min_len` greater than an explicit `max_len`
    pub fn validate(&self) -> Result<ValidationResult> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let rules = &self.rules;

        if let Some(platform) = &rules.platform
            && let Err(e) = Platform::resolve(platform)
        {
            errors.push(format!("rules.platform: {e}"));
        }

        if let Some(max_len) = rules.max_len
            && let Err(e) = length_limit("rules.max_len", max_len)
        {
            errors.push(e.to_string());
        }

        if let Some(min_len) = rules.min_len {
            if min_len < 0 {
                errors.push(format!("rules.min_len must be >= 0 (got: {min_len})"));
            } else if let Some(max_len) = rules.max_len
                && max_len >= 0
                && min_len > max_len
            {
                errors.push(format!(
                    "rules.min_len ({min_len}) is greater than rules.max_len ({max_len})"
                ));
            }
        }

        if rules.filename && rules.normalize {
            warnings.push("rules.normalize has no effect when rules.filename is set".to_string());
        }

        if !errors.is_empty() {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }

        Ok(ValidationResult { warnings })
    }
}

/// Convert a signed byte limit into a rule-set limit.
///
/// `-1` means "platform limit"; other negative values are rejected.
///
/// # Errors
///
/// Returns an error for values below -1.
pub fn length_limit(name: &str, value: i64) -> Result<Option<usize>> {
    if value == PLATFORM_MAX_LEN {
        return Ok(None);
    }
    let limit = usize::try_from(value)
        .map_err(|_| anyhow::anyhow!("{name} must be -1 or a non-negative byte count (got: {value})"))?;
    Ok(Some(limit))
}
