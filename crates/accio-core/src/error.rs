// ── Core error type ──
//
// The only failure the view layer knows about. Every transport-level
// problem (connection refused, timeout, non-2xx, undecodable body) is
// folded into a `FetchFailure` carrying a human-readable reason, caught
// at the fetch boundary and shown inline instead of the loader.

use thiserror::Error;

/// A data load failed. No retry is attempted and no distinction is made
/// between transient and permanent causes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to fetch: {reason}")]
pub struct FetchFailure {
    pub reason: String,
}

impl FetchFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<accio_api::Error> for FetchFailure {
    fn from(err: accio_api::Error) -> Self {
        match err {
            accio_api::Error::Status { status, .. } => Self::new(format!("HTTP {}", status.as_u16())),
            accio_api::Error::Transport(ref e) if e.is_timeout() => {
                Self::new("request timed out")
            }
            accio_api::Error::Transport(ref e) if e.is_connect() => {
                Self::new(format!("connection failed: {e}"))
            }
            accio_api::Error::Transport(e) => Self::new(e.to_string()),
            accio_api::Error::InvalidUrl(e) => Self::new(format!("invalid URL: {e}")),
            accio_api::Error::Client(message) | accio_api::Error::Deserialization { message, .. } => {
                Self::new(message)
            }
        }
    }
}
