//! Tag, classify and group errors while keeping the stack trace from where
//! they began.
//!
//! # Overview
//!
//! - [`Tag`] is a value-equal classification. Wrapping an error in a tag
//!   produces an [`Error`] node; wrapping again adds another tag.
//! - The first wrap of a foreign error captures the stack. Later wraps share
//!   that capture, and wrapping with the tag an error already carries
//!   returns it unchanged.
//! - `{}` renders `"outer: inner: message"`; `{:#}` appends the stack.
//! - [`Group`] folds independent errors into one.
//!
//! # Examples
//!
//! ```
//! use errtag::{Group, Tag, errorf};
//!
//! const STORAGE: Tag = Tag::new_static("storage");
//! const CONFIG: Tag = Tag::new_static("config");
//!
//! fn read_settings() -> Result<String, errtag::Error> {
//!     let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml");
//!     Err(CONFIG.wrap(STORAGE.wrap(io)))
//! }
//!
//! let err = read_settings().unwrap_err();
//! assert_eq!(err.to_string(), "config: storage: settings.toml");
//! assert!(STORAGE.has(&err));
//! assert!(errtag::unwrap(&err).is::<std::io::Error>());
//!
//! let mut group = Group::new();
//! group.add(err);
//! group.add(errorf!("retry budget {} exhausted", 3));
//! let combined = group.err().unwrap();
//! assert!(combined.to_string().contains("; retry budget 3 exhausted"));
//! ```
//!
//! # Stack depth
//!
//! Captures record at most 64 entries unless a [`StackConfig`] says
//! otherwise; deeper stacks are truncated.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chain;
mod error;
mod ext;
mod group;
#[macro_use]
mod macros;
pub mod render;
pub mod report;
mod tag;

pub use chain::{Chain, is, tags, unwrap};
pub use error::{Error, Named};
pub use errtag_error::{ConfigError, ConfigErrorKind, ErrtagError, ErrtagErrorKind, ErrtagResult};
pub use errtag_stack::{Frame, Frames, StackConfig, StackConfigBuilder};
pub use ext::ResultExt;
pub use group::{Group, MultiError};
pub use tag::Tag;

use std::fmt;

/// The boxed form every wrapped cause is stored as.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Attach a stack to `err` without classifying it.
///
/// An [`Error`] is returned unchanged, since it already carries a stack.
pub fn wrap<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Tag::empty().wrap(err)
}

/// Like [`wrap`], for an error that may be absent. `None` stays `None`.
pub fn wrap_opt<E>(err: Option<E>) -> Option<Error>
where
    E: Into<BoxError>,
{
    Tag::empty().wrap_opt(err)
}

/// Like [`wrap`], capturing with `config` if a capture is needed.
pub fn wrap_with<E>(err: E, config: &StackConfig) -> Error
where
    E: Into<BoxError>,
{
    Tag::empty().wrap_with(err, config)
}

/// Build an untagged error from format arguments.
///
/// Usually reached through [`errorf!`].
pub fn errorf(args: fmt::Arguments<'_>) -> Error {
    Tag::empty().errorf(args)
}

/// Shorthand for `Tag::new(tag).wrap(err)`.
pub fn tagged<T, E>(tag: T, err: E) -> Error
where
    T: Into<Tag>,
    E: Into<BoxError>,
{
    tag.into().wrap(err)
}
