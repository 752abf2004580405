//! # pathvalidate
//!
//! Validate and sanitize file names and file paths for a target platform.
//!
//! - [`Platform`] - target platform, resolved from a specifier such as
//!   `"windows"`, `"universal"` or `"auto"`
//! - [`RuleSet`] - immutable rules: platform plus length limits and modes
//! - [`validate`] - report every [`Violation`] with a stable [`Reason`] code
//! - [`sanitize`] - rewrite an input into one that validates
//!
//! Everything here is pure: no filesystem access, no shared mutable state.
//!
//! ```
//! use pathvalidate::{Platform, Reason, RuleSet, sanitize, validate};
//!
//! let rules = RuleSet::new(Platform::resolve("windows")?).with_filename(true);
//!
//! let violations = validate("aux.txt", &rules).unwrap_err();
//! assert_eq!(violations.first().reason, Reason::ReservedName);
//!
//! let fixed = sanitize("aux?.txt", &rules, "")?;
//! assert_eq!(fixed, "aux_.txt");
//! assert!(validate(&fixed, &rules).is_ok());
//! # Ok::<(), pathvalidate::Error>(())
//! ```

pub mod constants;
pub mod error;
pub mod platform;
pub mod reason;
pub mod rules;
pub mod sanitizer;
pub mod validator;

pub use error::{Error, Result};
pub use platform::Platform;
pub use reason::{Reason, Violation, Violations};
pub use rules::RuleSet;
pub use sanitizer::{Sanitizer, sanitize};
pub use validator::{ValidationResult, Validator, validate};
