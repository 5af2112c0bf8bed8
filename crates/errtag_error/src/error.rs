//! Top-level error wrapper types.

use crate::ConfigError;

/// Every failure the errtag workspace can report.
///
/// # Examples
///
/// ```
/// use errtag_error::{ConfigError, ConfigErrorKind, ErrtagError};
///
/// let config_err = ConfigError::new(ConfigErrorKind::Read("no such file".into()));
/// let err: ErrtagError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ErrtagErrorKind {
    /// Capture configuration could not be loaded
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Errtag error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Errtag Error: {}", _0)]
pub struct ErrtagError(Box<ErrtagErrorKind>);

impl ErrtagError {
    /// Create a new error from a kind.
    pub fn new(kind: ErrtagErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ErrtagErrorKind {
        &self.0
    }
}

impl<T> From<T> for ErrtagError
where
    T: Into<ErrtagErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for fallible errtag operations.
pub type ErrtagResult<T> = std::result::Result<T, ErrtagError>;
