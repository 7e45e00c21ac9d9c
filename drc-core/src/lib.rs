//! # drc-core
//!
//! Session loop and input translation for a VNC viewer that mirrors a
//! remote desktop onto the Wii U GamePad.
//!
//! This crate contains:
//! - **Session**: `Session`, the single-threaded loop merging GamePad
//!   polls, local window events and server messages
//! - **GamePad input**: `GamepadInput`, the edge-triggered button/mode
//!   state machine that turns touches and triggers into pointer events
//! - **Keyboard**: `KeyPressSet` and the static keysym table
//! - **Video**: `VideoSurface` (framebuffer negotiation) and
//!   `FrameLimiter` (outbound frame rate)
//! - **Backends**: the traits the remote-framebuffer client, the GamePad
//!   streamer and the local window implement
//! - **Error**: `DrcError`, typed with `thiserror`

pub mod backend;
pub mod error;
pub mod gamepad;
pub mod keysym;
pub mod limiter;
pub mod session;
pub mod types;
pub mod video;

// ── Re-exports for ergonomic usage ───────────────────────────────

pub use backend::{
    ConnectMode, LocalDisplay, LocalEvent, RemoteClient, RemoteConnector, ServerEvent, Streamer,
    WaitOutcome,
};
pub use error::DrcError;
pub use gamepad::{GamepadAction, GamepadButtons, GamepadInput, InputMode, InputSnapshot};
pub use keysym::{KeyPressSet, Keycode, Modifiers};
pub use limiter::FrameLimiter;
pub use session::{Session, SessionConfig, SessionState};
pub use types::{ButtonMask, FrameFormat, KeyEvent, KeySym, PixelFormat, PointerEvent};
pub use video::{CONTROLLER_HEIGHT, CONTROLLER_WIDTH, RemoteSurfaceFormat, VideoSurface};
