//! Collecting independent errors into one.

use crate::BoxError;
use std::error::Error as StdError;
use std::fmt;
use tracing::trace;

/// An ordered accumulator of errors.
///
/// `Group` has no internal locking; `add` takes `&mut self`. Collect per task
/// and merge, or guard a shared group with a mutex.
///
/// # Examples
///
/// ```
/// use errtag::Group;
///
/// let mut group = Group::new();
/// group.add("first");
/// group.add_opt(None::<&str>);
/// group.add("second");
///
/// let err = group.err().unwrap();
/// assert_eq!(err.to_string(), "first; second");
/// assert!(format!("{err:#}").starts_with("group:"));
/// ```
#[derive(Debug, Default)]
pub struct Group {
    errors: Vec<BoxError>,
}

impl Group {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error.
    pub fn add<E>(&mut self, err: E)
    where
        E: Into<BoxError>,
    {
        self.errors.push(err.into());
    }

    /// Append an error if there is one.
    pub fn add_opt<E>(&mut self, err: Option<E>)
    where
        E: Into<BoxError>,
    {
        if let Some(err) = err {
            self.add(err);
        }
    }

    /// Number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Resolve the group into a single error.
    ///
    /// Returns `None` when empty and the sole error unchanged when there is
    /// exactly one. Two or more become a [`MultiError`].
    ///
    /// Consumes the group, so the sole error can be handed back without a
    /// clone. Resolve once, after the last `add`.
    pub fn err(mut self) -> Option<BoxError> {
        match self.errors.len() {
            0 => None,
            1 => self.errors.pop(),
            n => {
                trace!(errors = n, "Group resolved to a multi-error");
                Some(Box::new(MultiError {
                    errors: self.errors,
                }))
            }
        }
    }
}

impl<E> Extend<E> for Group
where
    E: Into<BoxError>,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.errors.extend(iter.into_iter().map(Into::into));
    }
}

impl<E> FromIterator<E> for Group
where
    E: Into<BoxError>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut group = Group::new();
        group.extend(iter);
        group
    }
}

/// Two or more errors combined.
///
/// `{}` joins each error's terse text with `"; "`. `{:#}` writes a `group:`
/// header followed by one `--- ` line per error holding its terse text, with
/// the rest of its detailed text indented beneath the marker.
pub struct MultiError {
    errors: Vec<BoxError>,
}

impl MultiError {
    /// The combined errors, in the order they were added.
    pub fn errors(&self) -> &[BoxError] {
        &self.errors
    }

    /// Take the combined errors back.
    pub fn into_errors(self) -> Vec<BoxError> {
        self.errors
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("group:")?;
            for err in &self.errors {
                let terse = err.to_string();
                let detailed = format!("{err:#}");
                let body = match detailed.strip_prefix(terse.as_str()) {
                    Some(rest) => rest.to_string(),
                    None => format!("\n{detailed}"),
                };
                write!(f, "\n--- {terse}{}", body.replace('\n', "\n    "))?;
            }
            return Ok(());
        }

        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#}")
    }
}

impl StdError for MultiError {}
