//! Error types for the errtag workspace.
//!
//! The annotation core never fails. The only fallible surface is loading
//! capture configuration, and those failures are reported with the types in
//! this crate.
//!
//! # Error Hierarchy
//!
//! - `ConfigErrorKind` enum names the specific failure
//! - `ConfigError` wraps the kind with the source location that raised it
//! - `ErrtagError` boxes every kind the workspace can produce
//!
//! # Examples
//!
//! ```
//! use errtag_error::{ConfigError, ConfigErrorKind, ErrtagResult};
//!
//! fn load() -> ErrtagResult<()> {
//!     Err(ConfigError::new(ConfigErrorKind::Invalid("max_depth must be positive".into())))?
//! }
//!
//! let err = load().unwrap_err();
//! assert!(err.to_string().contains("max_depth"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{ErrtagError, ErrtagErrorKind, ErrtagResult};
