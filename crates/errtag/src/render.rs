//! Rendering errors that may be absent.
//!
//! `None` renders as `<nil>` in both modes.

use std::error::Error as StdError;

/// Placeholder text for a missing error.
pub const NIL: &str = "<nil>";

/// The terse rendering of `err`, or `<nil>`.
///
/// ```
/// use errtag::{Tag, render};
///
/// assert_eq!(render::terse(None), "<nil>");
/// let err = Tag::new_static("io").wrap("closed");
/// assert_eq!(render::terse(Some(&err)), "io: closed");
/// ```
pub fn terse(err: Option<&(dyn StdError + 'static)>) -> String {
    match err {
        Some(err) => err.to_string(),
        None => NIL.to_string(),
    }
}

/// The detailed rendering of `err` (terse text plus stack), or `<nil>`.
pub fn detailed(err: Option<&(dyn StdError + 'static)>) -> String {
    match err {
        Some(err) => format!("{err:#}"),
        None => NIL.to_string(),
    }
}
