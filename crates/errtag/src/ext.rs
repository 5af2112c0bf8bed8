//! Tagging adaptors for `Result`.

use crate::{BoxError, Error, Tag};

/// Tagging adaptors for `Result`.
///
/// `Ok` values pass through untouched, so these can be applied to any
/// fallible call without checking it first.
///
/// ```
/// use errtag::{ResultExt, Tag};
///
/// const PARSE: Tag = Tag::new_static("parse");
///
/// fn port(text: &str) -> Result<u16, errtag::Error> {
///     text.parse::<u16>().tag(&PARSE)
/// }
///
/// assert_eq!(port("8080").unwrap(), 8080);
/// assert!(PARSE.has(&port("http").unwrap_err()));
/// ```
pub trait ResultExt<T> {
    /// Wrap the error, if any, in `tag`.
    fn tag(self, tag: &Tag) -> Result<T, Error>;

    /// Wrap the error, if any, without a tag. Only attaches a stack.
    fn wrap_err(self) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn tag(self, tag: &Tag) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(tag.wrap(err)),
        }
    }

    fn wrap_err(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Tag::empty().wrap(err)),
        }
    }
}
