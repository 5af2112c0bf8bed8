//! Error classification tags.

use crate::{BoxError, Error};
use errtag_stack::StackConfig;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// A value-equal textual classification for errors.
///
/// Two tags are equal exactly when their text is equal, so tags built in
/// different places from the same string are interchangeable. The empty tag
/// means "untagged".
///
/// A tag is also an error whose message is its text, which makes it usable
/// as a string-constant error.
///
/// # Examples
///
/// ```
/// use errtag::Tag;
///
/// const DATABASE: Tag = Tag::new_static("database");
///
/// let err = DATABASE.wrap("connection refused");
/// assert_eq!(err.to_string(), "database: connection refused");
/// assert!(Tag::new(String::from("database")).has(&err));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{}", _0)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// Create a tag from owned or static text.
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    /// Create a tag from static text in a const context.
    pub const fn new_static(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// The untagged value.
    pub const fn empty() -> Self {
        Self::new_static("")
    }

    /// The tag's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the untagged value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wrap `err` in this tag.
    ///
    /// If `err` is already an [`Error`] whose outermost tag is this tag, or
    /// this tag is empty and `err` is already an [`Error`], `err` is returned
    /// unchanged. Otherwise a new node is created that shares the existing
    /// stack capture, or captures one if `err` is foreign.
    pub fn wrap<E>(&self, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error::wrap_with(self, err.into(), &StackConfig::default())
    }

    /// Like [`Tag::wrap`], capturing with `config` if a capture is needed.
    pub fn wrap_with<E>(&self, err: E, config: &StackConfig) -> Error
    where
        E: Into<BoxError>,
    {
        Error::wrap_with(self, err.into(), config)
    }

    /// Wrap an optional error. `None` stays `None`.
    pub fn wrap_opt<E>(&self, err: Option<E>) -> Option<Error>
    where
        E: Into<BoxError>,
    {
        let err = err?;
        Some(Error::wrap_with(self, err.into(), &StackConfig::default()))
    }

    /// Build an error from format arguments and wrap it in this tag.
    ///
    /// Usually reached through [`errorf!`](crate::errorf) with a `tag =>` prefix.
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Error {
        Error::wrap_with(self, BoxError::from(args.to_string()), &StackConfig::default())
    }

    /// Whether this tag appears anywhere in `err`'s chain.
    pub fn has(&self, err: &(dyn StdError + 'static)) -> bool {
        crate::chain::is(err, self)
    }
}

impl StdError for Tag {}

impl From<&'static str> for Tag {
    fn from(text: &'static str) -> Self {
        Self::new_static(text)
    }
}

impl From<String> for Tag {
    fn from(text: String) -> Self {
        Self(Cow::Owned(text))
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn static_and_owned_tags_are_equal() {
        let a = Tag::new_static("io");
        let b = Tag::new(format!("{}{}", "i", "o"));
        assert_eq!(a, b);

        let set: HashSet<Tag> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_tag() {
        assert!(Tag::empty().is_empty());
        assert!(Tag::default().is_empty());
        assert_eq!(Tag::empty(), Tag::new(""));
        assert!(!Tag::new("x").is_empty());
    }

    #[test]
    fn tag_is_an_error_with_its_text() {
        let tag = Tag::new_static("not found");
        let err: &dyn StdError = &tag;
        assert_eq!(err.to_string(), "not found");
        assert!(err.source().is_none());
    }
}
