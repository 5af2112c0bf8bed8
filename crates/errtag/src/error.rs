//! The annotated error node.

use crate::{BoxError, Chain, Tag};
use errtag_stack::{Frames, StackConfig};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Implemented by errors that can report the name of their classification.
pub trait Named {
    /// The outermost tag's text, or `None` when untagged.
    fn name(&self) -> Option<&str>;
}

/// An error annotated with an optional [`Tag`] and a captured stack.
///
/// `Error` is a cheap handle to an immutable node; clones share the node.
/// Every node of a chain shares the single stack captured when the chain was
/// started from a foreign error.
///
/// Equality is handle identity: two `Error`s are equal when they are the same
/// node, which is what lets callers check that a wrap collapsed into an
/// existing error.
///
/// `{}` renders the terse form, `{:#}` appends the stack.
///
/// # Examples
///
/// ```
/// use errtag::Tag;
///
/// let io = Tag::new_static("io");
/// let config = Tag::new_static("config");
///
/// let err = config.wrap(io.wrap("file missing"));
/// assert_eq!(err.to_string(), "config: io: file missing");
/// assert_eq!(err.tags(), vec![config.clone(), io.clone()]);
/// assert!(format!("{err:#}").contains("\n\t"));
/// ```
#[derive(Clone)]
pub struct Error {
    inner: Arc<Node>,
}

struct Node {
    tag: Tag,
    cause: Cause,
    frames: Frames,
}

enum Cause {
    Annotated(Error),
    Foreign(BoxError),
}

impl Cause {
    /// Sort an incoming error into one of ours or a foreign one.
    fn classify(err: BoxError) -> Self {
        match err.downcast::<Error>() {
            Ok(annotated) => Cause::Annotated(*annotated),
            Err(foreign) => Cause::Foreign(foreign),
        }
    }

    fn as_dyn(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match self {
            Cause::Annotated(err) => err as &(dyn StdError + Send + Sync + 'static),
            Cause::Foreign(err) => err.as_ref(),
        }
    }
}

impl Error {
    pub(crate) fn wrap_with(tag: &Tag, err: BoxError, config: &StackConfig) -> Error {
        match Cause::classify(err) {
            Cause::Annotated(existing) => {
                if tag.is_empty() || existing.tag() == tag {
                    trace!(tag = %tag, "Wrap collapsed into existing error");
                    return existing;
                }
                trace!(tag = %tag, "Wrap reuses existing stack capture");
                let frames = existing.frames().clone();
                Error::from_parts(tag.clone(), Cause::Annotated(existing), frames)
            }
            Cause::Foreign(foreign) => {
                let frames = Frames::capture_with(config);
                Error::from_parts(tag.clone(), Cause::Foreign(foreign), frames)
            }
        }
    }

    fn from_parts(tag: Tag, cause: Cause, frames: Frames) -> Error {
        Error {
            inner: Arc::new(Node { tag, cause, frames }),
        }
    }

    /// This node's tag. Empty for plain wraps.
    pub fn tag(&self) -> &Tag {
        &self.inner.tag
    }

    /// The immediately wrapped error.
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.cause.as_dyn()
    }

    /// The stack captured when this chain began.
    pub fn frames(&self) -> &Frames {
        &self.inner.frames
    }

    pub(crate) fn annotated_cause(&self) -> Option<&Error> {
        match &self.inner.cause {
            Cause::Annotated(err) => Some(err),
            Cause::Foreign(_) => None,
        }
    }

    /// The first error in the chain that was not produced by this crate.
    pub fn foreign_cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        let mut node = self;
        loop {
            match &node.inner.cause {
                Cause::Annotated(next) => node = next,
                Cause::Foreign(err) => return err.as_ref(),
            }
        }
    }

    /// Annotated nodes of this chain, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Every non-empty tag in the chain, most recent wrap first.
    pub fn tags(&self) -> Vec<Tag> {
        crate::chain::tags(self)
    }

    /// Whether `tag` appears anywhere in the chain.
    pub fn is(&self, tag: &Tag) -> bool {
        crate::chain::is(self, tag)
    }

    /// Whether two handles refer to the same node.
    pub fn ptr_eq(a: &Error, b: &Error) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// The terse text followed by the stack listing.
    pub fn to_detailed_string(&self) -> String {
        format!("{self:#}")
    }
}

impl Named for Error {
    fn name(&self) -> Option<&str> {
        let tag = self.tag();
        (!tag.is_empty()).then(|| tag.as_str())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if !self.tag().is_empty() {
            f.write_str(self.tag().as_str())?;
            sep = ": ";
        }

        let message = self.cause().to_string();
        if !message.is_empty() {
            write!(f, "{sep}{message}")?;
        }

        if f.alternate() {
            self.frames().render(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause())
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        Error::ptr_eq(self, other)
    }
}

impl Eq for Error {}
