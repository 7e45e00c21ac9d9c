//! Collaborator backends linked into the stock binary.
//!
//! The remote-framebuffer client and the GamePad streamer are provided
//! by platform libraries this crate does not bind. The stock binary
//! ships placeholders that fail cleanly at startup; embedders pass
//! their own [`RemoteConnector`] and [`Streamer`] to
//! [`crate::app::run`]. The local window is headless: frames are kept
//! in memory and no input is produced.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use drc_core::{
    ConnectMode, DrcError, FrameFormat, InputSnapshot, KeyEvent, LocalDisplay, LocalEvent,
    PixelFormat, PointerEvent, RemoteClient, RemoteConnector, ServerEvent, Streamer, WaitOutcome,
};

// ── HeadlessDisplay ──────────────────────────────────────────────

/// A display with no window: keeps the last presented frame.
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    title: String,
    size: Option<(u32, u32)>,
    frame: Vec<u8>,
    pitch: usize,
    presented: u64,
}

impl HeadlessDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current surface size, if one exists.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// Last presented frame and its row pitch.
    pub fn frame(&self) -> (&[u8], usize) {
        (&self.frame, self.pitch)
    }

    /// Frames presented since the surface was created.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl LocalDisplay for HeadlessDisplay {
    fn create_surface(&mut self, width: u32, height: u32) -> Result<(), DrcError> {
        debug!(title = %self.title, width, height, "headless surface created");
        self.size = Some((width, height));
        self.frame.clear();
        self.pitch = 0;
        self.presented = 0;
        Ok(())
    }

    fn present(&mut self, pixels: &[u8], pitch: usize) -> Result<(), DrcError> {
        if self.size.is_none() {
            return Err(DrcError::Display("present without a surface".into()));
        }
        self.frame.clear();
        self.frame.extend_from_slice(pixels);
        self.pitch = pitch;
        self.presented += 1;
        Ok(())
    }

    fn poll_event(&mut self) -> Option<LocalEvent> {
        None
    }

    fn close_surface(&mut self) {
        debug!(frames = self.presented, "headless surface closed");
        self.size = None;
        self.frame.clear();
    }
}

// ── Unavailable backends ─────────────────────────────────────────

/// Streamer placeholder; [`Streamer::start`] always fails.
#[derive(Debug, Default)]
pub struct UnavailableStreamer;

impl Streamer for UnavailableStreamer {
    fn start(&mut self) -> Result<(), DrcError> {
        Err(DrcError::Streamer(
            "GamePad streaming is not available in this build".into(),
        ))
    }

    fn stop(&mut self) {}

    fn poll_input(&mut self) -> InputSnapshot {
        InputSnapshot::default()
    }

    fn push_frame(&mut self, _pixels: &[u8], _width: u32, _height: u32, _format: FrameFormat) {}

    fn enable_input_feeder(&mut self) {}

    fn pause_input_feeder(&mut self) {}

    fn resume_input_feeder(&mut self) {}
}

/// Connector placeholder; every [`RemoteConnector::open`] fails.
#[derive(Debug, Default)]
pub struct UnavailableConnector;

/// A client that cannot exist.
#[derive(Debug)]
pub enum NoClient {}

#[async_trait]
impl RemoteConnector for UnavailableConnector {
    type Client = NoClient;

    async fn open(&mut self, mode: &ConnectMode, _format: PixelFormat) -> Result<NoClient, DrcError> {
        Err(DrcError::ConnectFailed(format!(
            "{mode}: no remote-framebuffer client is available in this build"
        )))
    }
}

#[async_trait]
impl RemoteClient for NoClient {
    async fn wait_for_message(&mut self, _timeout: Duration) -> Result<WaitOutcome, DrcError> {
        match *self {}
    }

    async fn handle_message(&mut self) -> Result<Vec<ServerEvent>, DrcError> {
        match *self {}
    }

    async fn send_pointer(&mut self, _event: PointerEvent) -> Result<(), DrcError> {
        match *self {}
    }

    async fn send_key(&mut self, _event: KeyEvent) -> Result<(), DrcError> {
        match *self {}
    }

    async fn request_update(&mut self, _incremental: bool) -> Result<(), DrcError> {
        match *self {}
    }

    fn dimensions(&self) -> (u32, u32) {
        match *self {}
    }

    fn install_framebuffer(&mut self, _buffer: Vec<u8>, _format: PixelFormat) -> Result<(), DrcError> {
        match *self {}
    }

    fn framebuffer(&self) -> &[u8] {
        match *self {}
    }

    async fn close(&mut self) {
        match *self {}
    }
}

// ── Tests ────────────────────────────────────────────────────────
