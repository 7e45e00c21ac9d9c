//! Error types for the viewer core.
//!
//! Everything fallible in the session returns `Result<T, DrcError>`.
//! The session loop is the only place errors are acted upon; see
//! [`DrcError::is_fatal`] for how they are classified there.

use std::time::Duration;
use thiserror::Error;

/// The canonical error type for the viewer core.
#[derive(Debug, Error)]
pub enum DrcError {
    // ── Configuration Errors ─────────────────────────────────────
    /// The remote desktop does not match the controller's physical screen.
    #[error(
        "remote display is {remote_width}x{remote_height} but the controller \
         screen is {expected_width}x{expected_height}; start the server with \
         a matching geometry"
    )]
    ResolutionMismatch {
        remote_width: u32,
        remote_height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    /// A connect target or configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Connection Errors ────────────────────────────────────────
    /// The IO layer reported an error.
    #[error("connection error: {0}")]
    Connection(#[from] std::io::Error),

    /// Connecting to (or accepting from) the remote side failed.
    #[error("could not establish session: {0}")]
    ConnectFailed(String),

    /// Waiting for remote traffic failed.
    #[error("wait for server message failed after {0:?}")]
    WaitFailed(Duration),

    // ── Protocol Errors ──────────────────────────────────────────
    /// The remote-protocol client could not process a server message.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The framebuffer handed to the client has the wrong size.
    #[error("framebuffer size mismatch: expected {expected} bytes, got {actual}")]
    FramebufferSize { expected: usize, actual: usize },

    // ── Collaborator Errors ──────────────────────────────────────
    /// The gamepad streaming subsystem failed.
    #[error("streamer error: {0}")]
    Streamer(String),

    /// The local display or render surface failed.
    #[error("display error: {0}")]
    Display(String),

    /// Catch-all for errors that do not fit another variant.
    #[error("{0}")]
    Other(String),
}

impl DrcError {
    /// Fatal errors end the whole session, even in listen mode.
    ///
    /// Everything else ends only the current connection.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DrcError::ResolutionMismatch { .. }
                | DrcError::InvalidConfig(_)
                | DrcError::FramebufferSize { .. }
                | DrcError::Display(_)
        )
    }
}

// ── Convenient From implementations ──────────────────────────────

impl From<String> for DrcError {
    fn from(s: String) -> Self {
        DrcError::Other(s)
    }
}

impl From<&str> for DrcError {
    fn from(s: &str) -> Self {
        DrcError::Other(s.to_string())
    }
}
