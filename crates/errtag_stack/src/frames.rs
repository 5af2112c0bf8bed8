//! Raw stack capture and lazy symbol resolution.

use crate::StackConfig;
use std::ffi::c_void;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// Symbol path prefixes of the capture path: the unwinder itself, this crate,
/// and the errtag constructors that call into it.
const INTERNAL_PREFIXES: &[&str] = &["_Unwind_", "backtrace::", "errtag_stack::", "errtag::"];

/// Extra raw addresses recorded beyond `max_depth` to cover the capture path,
/// which is trimmed before the depth bound applies.
const INTERNAL_ALLOWANCE: usize = 16;

/// A resolved stack entry.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Frame {
    /// Demangled function path, or `<unknown>` when no symbol was found.
    function: String,
    /// Source file, when debug info is available.
    file: Option<PathBuf>,
    /// Source line, or 0 when unknown.
    line: u32,
}

impl Frame {
    fn unknown() -> Self {
        Self {
            function: "<unknown>".to_string(),
            file: None,
            line: 0,
        }
    }

    /// Whether this frame belongs to the capture path rather than to the caller.
    fn is_internal(&self) -> bool {
        let name = self.function.trim_start_matches('<');
        if name.contains("::tests::") {
            return false;
        }
        INTERNAL_PREFIXES.iter().any(|prefix| {
            name.starts_with(prefix) || name.contains(&format!(" as {prefix}"))
        })
    }

    /// Resolve one instruction pointer. Inlined calls yield several frames,
    /// innermost first.
    fn resolve_ip(ip: usize, out: &mut Vec<Frame>) {
        let before = out.len();
        backtrace::resolve(ip as *mut c_void, |symbol| {
            out.push(Frame {
                function: symbol
                    .name()
                    .map(|name| format!("{name:#}"))
                    .unwrap_or_else(|| "<unknown>".to_string()),
                file: symbol.filename().map(Path::to_path_buf),
                line: symbol.lineno().unwrap_or(0),
            });
        });
        if out.len() == before {
            out.push(Frame::unknown());
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.function, self.line)
    }
}

#[derive(Debug)]
struct Capture {
    ips: Vec<usize>,
    max_depth: usize,
    trim_internal: bool,
    resolved: OnceLock<Vec<Frame>>,
}

/// A shared, immutable stack snapshot.
///
/// Cloning is cheap and every clone refers to the same capture, so an error
/// chain built on one capture resolves its symbols at most once.
#[derive(Debug, Clone)]
pub struct Frames {
    inner: Arc<Capture>,
}

impl Frames {
    /// Capture the calling thread's stack with the default settings.
    #[inline(never)]
    pub fn capture() -> Self {
        Self::capture_with(&StackConfig::default())
    }

    /// Capture the calling thread's stack.
    ///
    /// The resolved stack holds at most `max_depth` frames, counted after the
    /// capture path itself is trimmed; the rest of a deeper stack is dropped.
    /// Returns [`Frames::empty`] when capture is disabled.
    #[inline(never)]
    pub fn capture_with(config: &StackConfig) -> Self {
        let max_depth = *config.max_depth();
        if !*config.capture() || max_depth == 0 {
            return Self::empty();
        }

        let limit = max_depth.saturating_add(INTERNAL_ALLOWANCE);
        let mut ips = Vec::with_capacity(limit);
        backtrace::trace(|frame| {
            ips.push(frame.ip() as usize);
            ips.len() < limit
        });

        trace!(depth = ips.len(), max_depth, "Captured stack");
        Self::from_ips(ips, max_depth, *config.trim_internal())
    }

    /// A capture with no entries. Renders nothing.
    pub fn empty() -> Self {
        Self::from_ips(Vec::new(), 0, false)
    }

    fn from_ips(ips: Vec<usize>, max_depth: usize, trim_internal: bool) -> Self {
        Self {
            inner: Arc::new(Capture {
                ips,
                max_depth,
                trim_internal,
                resolved: OnceLock::new(),
            }),
        }
    }

    /// Number of raw addresses recorded, including the capture path that
    /// [`Frames::resolve`] trims.
    pub fn len(&self) -> usize {
        self.inner.ips.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.inner.ips.is_empty()
    }

    /// The raw instruction pointers, innermost first.
    pub fn ips(&self) -> &[usize] {
        &self.inner.ips
    }

    /// Whether two handles share one capture.
    pub fn ptr_eq(a: &Frames, b: &Frames) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Resolved frames, innermost first, at most `max_depth` of them.
    ///
    /// Symbols are looked up on the first call and memoized for every clone
    /// of this handle.
    pub fn resolve(&self) -> &[Frame] {
        self.inner.resolved.get_or_init(|| {
            let mut frames = Vec::with_capacity(self.inner.ips.len());
            for &ip in &self.inner.ips {
                Frame::resolve_ip(ip, &mut frames);
            }

            let skip = if self.inner.trim_internal {
                frames.iter().take_while(|frame| frame.is_internal()).count()
            } else {
                0
            };

            trace!(frames = frames.len(), skip, "Resolved stack symbols");
            frames.drain(..skip);
            frames.truncate(self.inner.max_depth);
            frames
        })
    }

    /// Write each frame as `\n\t<function>:<line>`, innermost first.
    pub fn render<W: fmt::Write + ?Sized>(&self, w: &mut W) -> fmt::Result {
        for frame in self.resolve() {
            write!(w, "\n\t{}", frame)?;
        }
        Ok(())
    }
}

impl fmt::Display for Frames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
