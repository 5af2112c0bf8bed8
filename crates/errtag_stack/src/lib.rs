//! Call-stack capture for errtag.
//!
//! A [`Frames`] value is a snapshot of raw instruction pointers taken when an
//! error chain begins. Capture is cheap: symbols are only resolved the first
//! time the frames are rendered, and the result is memoized and shared by
//! every clone of the handle.
//!
//! Resolved stacks are bounded by [`StackConfig::max_depth`] (64 by default),
//! counted from the caller of the capture. Deeper stacks are truncated without
//! error.
//!
//! ```
//! use errtag_stack::Frames;
//!
//! let frames = Frames::capture();
//! let mut text = String::new();
//! frames.render(&mut text).unwrap();
//! assert!(frames.resolve().len() <= 64);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod frames;

pub use config::{DEFAULT_MAX_DEPTH, StackConfig, StackConfigBuilder};
pub use frames::{Frame, Frames};
