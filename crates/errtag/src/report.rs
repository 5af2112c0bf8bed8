//! Routing errors to `tracing`.

use std::error::Error as StdError;
use tracing::Level;

/// Emit `err` as a tracing event at `level`.
///
/// The event carries the terse text as `error` and the detailed text as
/// `detail`, so subscribers can keep log lines short and still have the
/// stack at hand.
pub fn emit(err: &(dyn StdError + 'static), level: Level, message: &str) {
    let detail = format!("{err:#}");
    match level {
        Level::ERROR => tracing::event!(Level::ERROR, error = %err, detail = %detail, "{message}"),
        Level::WARN => tracing::event!(Level::WARN, error = %err, detail = %detail, "{message}"),
        Level::INFO => tracing::event!(Level::INFO, error = %err, detail = %detail, "{message}"),
        Level::DEBUG => tracing::event!(Level::DEBUG, error = %err, detail = %detail, "{message}"),
        _ => tracing::event!(Level::TRACE, error = %err, detail = %detail, "{message}"),
    }
}
