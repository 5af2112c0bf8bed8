//! Walking a chain of annotated errors.
//!
//! Walks stop at the first error not produced by this crate. Anything past
//! that point is opaque, even if it happens to wrap an [`Error`] of its own.

use crate::{Error, Tag};
use std::error::Error as StdError;

/// Iterator over the annotated nodes of a chain, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(err: &'a Error) -> Self {
        Self { next: Some(err) }
    }

    /// Start a walk from any error. Empty if `err` is foreign.
    pub fn from_dyn(err: &'a (dyn StdError + 'static)) -> Self {
        Self {
            next: err.downcast_ref::<Error>(),
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.annotated_cause();
        Some(node)
    }
}

/// Every non-empty tag that has wrapped `err`, most recent wrap first.
///
/// ```
/// use errtag::{Tag, tags};
///
/// let err = Tag::new_static("b").wrap(errtag::wrap(Tag::new_static("a").wrap("leaf")));
/// assert_eq!(tags(&err), vec![Tag::new_static("b"), Tag::new_static("a")]);
/// ```
pub fn tags(err: &(dyn StdError + 'static)) -> Vec<Tag> {
    Chain::from_dyn(err)
        .map(Error::tag)
        .filter(|tag| !tag.is_empty())
        .cloned()
        .collect()
}

/// Whether `tag` has wrapped `err` at any depth. The empty tag never matches.
pub fn is(err: &(dyn StdError + 'static), tag: &Tag) -> bool {
    !tag.is_empty() && Chain::from_dyn(err).any(|node| node.tag() == tag)
}

/// Strip every annotated layer and return the original foreign error.
///
/// Foreign input is returned as is. For an optional error, use
/// `Option::map(errtag::unwrap)`.
///
/// ```
/// use errtag::{Tag, unwrap};
///
/// let err = Tag::new_static("outer").wrap(std::fmt::Error);
/// assert!(unwrap(&err).is::<std::fmt::Error>());
/// ```
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    match err.downcast_ref::<Error>() {
        Some(annotated) => annotated.foreign_cause(),
        None => err,
    }
}
