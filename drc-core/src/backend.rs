//! Seams to the collaborators the session drives.
//!
//! ```text
//!                 ┌──────────────┐
//!  RemoteConnector│   Session    │ Streamer (GamePad video + input)
//!  RemoteClient ◄─┤              ├─► poll_input / push_frame / feeder
//!                 │              │
//!                 └──────┬───────┘
//!                        ▼
//!                  LocalDisplay (window, events)
//! ```
//!
//! None of these are implemented here. The remote-framebuffer wire
//! protocol, the GamePad streaming stack and the window system live
//! behind these traits.

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::DrcError;
use crate::gamepad::InputSnapshot;
use crate::keysym::{Keycode, Modifiers};
use crate::types::{ButtonMask, FrameFormat, KeyEvent, PixelFormat, PointerEvent};

// ── Remote side ──────────────────────────────────────────────────

/// How a session reaches its server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectMode {
    /// Dial `host:port`.
    Connect { host: String, port: u16 },
    /// Wait for a server to connect in (reverse connection).
    Listen { addr: SocketAddr },
}

impl std::fmt::Display for ConnectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect { host, port } => write!(f, "{host}:{port}"),
            Self::Listen { addr } => write!(f, "listen on {addr}"),
        }
    }
}

/// Result of a bounded wait for server traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// A message is ready to be handled.
    Ready,
    /// Nothing arrived within the timeout.
    Timeout,
}

/// Notifications produced while handling a server message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// A region of the framebuffer was written.
    FramebufferUpdate { x: u16, y: u16, width: u16, height: u16 },
    /// The server changed the desktop size; a new buffer is needed.
    Resize { width: u32, height: u32 },
    /// Keyboard LED state changed.
    KeyboardLeds(u32),
    Bell,
    CutText(String),
}

/// Opens sessions to a remote-framebuffer server.
#[async_trait]
pub trait RemoteConnector: Send {
    type Client: RemoteClient;

    /// Dial or accept a server, asking it to send pixels as `format`.
    ///
    /// The handshake is complete when this returns; the client reports
    /// the server's desktop size through [`RemoteClient::dimensions`].
    async fn open(&mut self, mode: &ConnectMode, format: PixelFormat)
    -> Result<Self::Client, DrcError>;
}

/// An established remote-framebuffer session.
#[async_trait]
pub trait RemoteClient: Send {
    /// Wait up to `timeout` for a server message.
    async fn wait_for_message(&mut self, timeout: Duration) -> Result<WaitOutcome, DrcError>;

    /// Read and handle exactly one server message.
    async fn handle_message(&mut self) -> Result<Vec<ServerEvent>, DrcError>;

    async fn send_pointer(&mut self, event: PointerEvent) -> Result<(), DrcError>;

    async fn send_key(&mut self, event: KeyEvent) -> Result<(), DrcError>;

    /// Request a framebuffer update for the whole desktop.
    async fn request_update(&mut self, incremental: bool) -> Result<(), DrcError>;

    /// Server desktop size.
    fn dimensions(&self) -> (u32, u32);

    /// Give the client the buffer incoming pixels are written to and
    /// the format they must be written in.
    fn install_framebuffer(&mut self, buffer: Vec<u8>, format: PixelFormat) -> Result<(), DrcError>;

    /// The buffer installed by [`install_framebuffer`](Self::install_framebuffer).
    fn framebuffer(&self) -> &[u8];

    /// Close the session.
    async fn close(&mut self);
}

// ── GamePad side ─────────────────────────────────────────────────

/// The GamePad streaming subsystem.
pub trait Streamer {
    fn start(&mut self) -> Result<(), DrcError>;

    fn stop(&mut self);

    /// Latest input state. Must not block.
    fn poll_input(&mut self) -> InputSnapshot;

    /// Queue a frame for the GamePad screen.
    fn push_frame(&mut self, pixels: &[u8], width: u32, height: u32, format: FrameFormat);

    /// Turn on system input injection from GamePad sticks and buttons.
    fn enable_input_feeder(&mut self);

    fn pause_input_feeder(&mut self);

    fn resume_input_feeder(&mut self);
}

// ── Local window ─────────────────────────────────────────────────

/// Events from the local window system.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalEvent {
    /// The window needs repainting.
    Exposed,
    /// Pointer moved; `buttons` is the set currently held.
    PointerMotion { x: i32, y: i32, buttons: ButtonMask },
    /// Pointer button `button` (1-based) changed state.
    PointerButton { x: i32, y: i32, button: u8, pressed: bool },
    /// Wheel moved; positive is up.
    Wheel { x: i32, y: i32, delta: i32 },
    Key { code: Keycode, modifiers: Modifiers, pressed: bool },
    /// Composed text.
    Text(String),
    /// The user closed the window.
    Close,
    /// Anything else; carries the raw event type for logging.
    Unknown(u32),
}

/// The local window the remote desktop is mirrored into.
pub trait LocalDisplay {
    /// (Re)create the render surface at `width`×`height`, cleared to black.
    fn create_surface(&mut self, width: u32, height: u32) -> Result<(), DrcError>;

    /// Upload `pixels` (BGRA, `pitch` bytes per row) and present them.
    fn present(&mut self, pixels: &[u8], pitch: usize) -> Result<(), DrcError>;

    /// Next pending event, without blocking.
    fn poll_event(&mut self) -> Option<LocalEvent>;

    /// Tear down the surface at the end of a session.
    fn close_surface(&mut self);
}
