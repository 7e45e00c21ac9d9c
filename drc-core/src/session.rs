//! The viewer session loop.
//!
//! ```text
//!  Connecting ──► Serving ──► Closing
//!      ▲             │
//!      │             ▼
//!      └──────── Reconnecting   (listen mode only)
//! ```
//!
//! Each `Serving` iteration runs, in this order:
//!
//! 1. poll the GamePad and feed the snapshot to [`GamepadInput`];
//! 2. take at most one local window event (never blocks);
//! 3. only if there was no local event, wait a bounded time for the
//!    server and handle one message;
//! 4. if the framebuffer changed, present it locally and push it to
//!    the GamePad when the [`FrameLimiter`] allows.
//!
//! So GamePad actions always precede local input, which precedes
//! server traffic, which precedes rendering.

use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::backend::{
    ConnectMode, LocalDisplay, LocalEvent, RemoteClient, RemoteConnector, ServerEvent, Streamer,
    WaitOutcome,
};
use crate::error::DrcError;
use crate::gamepad::{GamepadAction, GamepadInput};
use crate::keysym::KeyPressSet;
use crate::limiter::FrameLimiter;
use crate::types::{ButtonMask, FrameFormat, KeyEvent, PointerEvent};
use crate::video::{CONTROLLER_HEIGHT, CONTROLLER_WIDTH, VideoSurface};

// ── SessionConfig ────────────────────────────────────────────────

/// Settings for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Where the server is.
    pub mode: ConnectMode,
    /// Enable the GamePad input feeder and POWER mode toggle.
    pub joystick: bool,
    /// Render only; never send pointer or key events.
    pub view_only: bool,
    /// Maximum frames per second pushed to the GamePad.
    pub frame_rate: u32,
    /// Upper bound on each wait for server traffic.
    pub wait_timeout: Duration,
    /// Pause before listening again after a session ends.
    pub reconnect_delay: Duration,
    /// GamePad screen `(width, height)`.
    pub controller: (u32, u32),
}

impl SessionConfig {
    pub fn new(mode: ConnectMode) -> Self {
        Self {
            mode,
            joystick: false,
            view_only: false,
            frame_rate: 60,
            wait_timeout: Duration::from_millis(500),
            reconnect_delay: Duration::from_secs(1),
            controller: (CONTROLLER_WIDTH, CONTROLLER_HEIGHT),
        }
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.mode, ConnectMode::Listen { .. })
    }
}

// ── SessionState ─────────────────────────────────────────────────

/// Where the session is in its connection lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Connecting,
    Serving,
    Reconnecting,
    Closing,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connecting => write!(f, "Connecting"),
            Self::Serving => write!(f, "Serving"),
            Self::Reconnecting => write!(f, "Reconnecting"),
            Self::Closing => write!(f, "Closing"),
        }
    }
}

/// Whether the serving loop keeps going after a local event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Close,
}

// ── Session ──────────────────────────────────────────────────────

/// Ties the remote client, the GamePad and the local window together.
pub struct Session<C, S, D> {
    config: SessionConfig,
    connector: C,
    streamer: S,
    video: VideoSurface<D>,
    gamepad: GamepadInput,
    keys: KeyPressSet,
    limiter: FrameLimiter,
    /// Buttons held on the local mouse.
    local_buttons: ButtonMask,
    state: SessionState,
}

impl<C, S, D> Session<C, S, D>
where
    C: RemoteConnector,
    S: Streamer,
    D: LocalDisplay,
{
    pub fn new(config: SessionConfig, connector: C, streamer: S, display: D) -> Self {
        let video = VideoSurface::new(display, config.controller);
        let gamepad = GamepadInput::new(config.joystick);
        let limiter = FrameLimiter::new(config.frame_rate);
        Self {
            config,
            connector,
            streamer,
            video,
            gamepad,
            keys: KeyPressSet::new(),
            limiter,
            local_buttons: ButtonMask::empty(),
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn gamepad(&self) -> &GamepadInput {
        &self.gamepad
    }

    pub fn streamer(&self) -> &S {
        &self.streamer
    }

    pub fn video(&self) -> &VideoSurface<D> {
        &self.video
    }

    /// Start the GamePad streamer and set up the input feeder.
    pub fn init(&mut self) -> Result<(), DrcError> {
        self.streamer.start()?;
        if self.config.joystick {
            info!("started in joystick mode, toggle mouse mode with POWER");
            self.streamer.enable_input_feeder();
        } else {
            info!("started in mouse-only mode");
        }
        Ok(())
    }

    /// Stop the GamePad streamer.
    pub fn shutdown(&mut self) {
        self.state = SessionState::Closing;
        self.streamer.stop();
    }

    /// Run sessions until the viewer should exit.
    ///
    /// Returns `Ok` when a direct session ends (window closed, server
    /// gone, connect failed) and `Err` only for fatal errors. In listen
    /// mode every non-fatal end leads back to listening.
    pub async fn run(&mut self) -> Result<(), DrcError> {
        loop {
            self.state = SessionState::Connecting;
            let outcome = match self.connect().await {
                Ok(mut client) => {
                    self.state = SessionState::Serving;
                    let result = self.serve(&mut client).await;
                    client.close().await;
                    result
                }
                Err(e) => Err(e),
            };
            self.teardown();

            match outcome {
                Ok(()) => info!("window closed"),
                Err(e) if e.is_fatal() => {
                    self.state = SessionState::Closing;
                    return Err(e);
                }
                Err(e) => warn!("session ended: {e}"),
            }

            if !self.config.is_listening() {
                self.state = SessionState::Closing;
                return Ok(());
            }

            self.state = SessionState::Reconnecting;
            debug!(delay = ?self.config.reconnect_delay, "listening again");
            tokio::time::sleep(self.config.reconnect_delay).await;
        }
    }

    // ── Connecting ───────────────────────────────────────────────

    async fn connect(&mut self) -> Result<C::Client, DrcError> {
        info!(server = %self.config.mode, "connecting");
        let mut client = self
            .connector
            .open(&self.config.mode, self.video.pixel_format())
            .await?;

        let (width, height) = client.dimensions();
        if let Err(e) = self.negotiate(&mut client, width, height) {
            client.close().await;
            return Err(e);
        }
        Ok(client)
    }

    fn negotiate(&mut self, client: &mut C::Client, width: u32, height: u32) -> Result<(), DrcError> {
        let buffer = self.video.negotiate(width, height)?;
        client.install_framebuffer(buffer, self.video.pixel_format())
    }

    fn teardown(&mut self) {
        self.video.close();
        self.keys.clear();
        self.gamepad.reset_pointer();
        self.local_buttons = ButtonMask::empty();
    }

    // ── Serving ──────────────────────────────────────────────────

    /// Serve one connection. `Ok` means the window was closed.
    async fn serve(&mut self, client: &mut C::Client) -> Result<(), DrcError> {
        let mut dirty = false;

        loop {
            let snapshot = self.streamer.poll_input();
            if snapshot.valid {
                let (width, height) = self.video.dimensions();
                for action in self.gamepad.process(&snapshot, width, height) {
                    self.apply_gamepad(client, action).await;
                }
            }

            match self.video.display_mut().poll_event() {
                Some(event) => {
                    if self.handle_local_event(client, event).await == Flow::Close {
                        return Ok(());
                    }
                }
                None => {
                    if client.wait_for_message(self.config.wait_timeout).await? == WaitOutcome::Ready {
                        for event in client.handle_message().await? {
                            dirty |= self.handle_server_event(client, event).await?;
                        }
                    }
                }
            }

            if dirty {
                self.render(client)?;
                dirty = false;
            }
        }
    }

    fn render(&mut self, client: &C::Client) -> Result<(), DrcError> {
        self.video.present(client.framebuffer())?;

        if self.limiter.try_accept() {
            if let Some(format) = self.video.format() {
                let (width, height, len) = (format.width, format.height, format.buffer_len());
                self.streamer
                    .push_frame(&client.framebuffer()[..len], width, height, FrameFormat::Bgra8);
            }
        }
        Ok(())
    }

    async fn apply_gamepad(&mut self, client: &mut C::Client, action: GamepadAction) {
        match action {
            GamepadAction::Pointer(event) => {
                let buttons = event.buttons | self.local_buttons;
                self.send_pointer(client, PointerEvent { buttons, ..event }).await;
            }
            GamepadAction::PauseFeeder => self.streamer.pause_input_feeder(),
            GamepadAction::ResumeFeeder => self.streamer.resume_input_feeder(),
        }
    }

    async fn handle_local_event(&mut self, client: &mut C::Client, event: LocalEvent) -> Flow {
        match event {
            LocalEvent::Exposed => {
                if let Err(e) = client.request_update(false).await {
                    warn!("failed to request update: {e}");
                }
            }
            LocalEvent::PointerMotion { x, y, buttons } => {
                self.local_buttons = buttons;
                self.send_local_pointer(client, x, y).await;
            }
            LocalEvent::PointerButton { x, y, button, pressed } => {
                self.local_buttons.set(ButtonMask::for_button(button), pressed);
                self.send_local_pointer(client, x, y).await;
            }
            LocalEvent::Wheel { x, y, delta } => {
                let wheel = match delta.signum() {
                    1 => ButtonMask::BUTTON_4,
                    -1 => ButtonMask::BUTTON_5,
                    _ => return Flow::Continue,
                };
                let held = self.local_buttons | self.gamepad.mouse_buttons();
                self.send_pointer(client, PointerEvent::new(x, y, held | wheel)).await;
                self.send_pointer(client, PointerEvent::new(x, y, held)).await;
            }
            LocalEvent::Key { code, modifiers, pressed } => {
                if self.config.view_only {
                    return Flow::Continue;
                }
                let event = if pressed {
                    self.keys.key_down(code, modifiers)
                } else {
                    self.keys.key_up(code, modifiers)
                };
                if let Some(event) = event {
                    self.send_key(client, event).await;
                }
            }
            LocalEvent::Text(text) => {
                if self.config.view_only {
                    return Flow::Continue;
                }
                for event in self.keys.text_input(&text) {
                    self.send_key(client, event).await;
                }
            }
            LocalEvent::Close => return Flow::Close,
            LocalEvent::Unknown(kind) => debug!("ignore local event: {kind:#x}"),
        }
        Flow::Continue
    }

    /// Returns whether the framebuffer needs presenting.
    async fn handle_server_event(
        &mut self,
        client: &mut C::Client,
        event: ServerEvent,
    ) -> Result<bool, DrcError> {
        match event {
            ServerEvent::FramebufferUpdate { x, y, width, height } => {
                trace!(x, y, width, height, "framebuffer update");
                Ok(true)
            }
            ServerEvent::Resize { width, height } => {
                info!(width, height, "server resized desktop");
                self.negotiate(client, width, height)?;
                if let Err(e) = client.request_update(false).await {
                    warn!("failed to request update: {e}");
                }
                Ok(false)
            }
            ServerEvent::KeyboardLeds(state) => {
                info!("LED state = {state:#04x}");
                Ok(false)
            }
            ServerEvent::Bell => {
                debug!("bell");
                Ok(false)
            }
            ServerEvent::CutText(text) => {
                debug!(len = text.len(), "server cut text ignored");
                Ok(false)
            }
        }
    }

    // ── Dispatch ─────────────────────────────────────────────────

    async fn send_local_pointer(&mut self, client: &mut C::Client, x: i32, y: i32) {
        let buttons = self.local_buttons | self.gamepad.mouse_buttons();
        self.send_pointer(client, PointerEvent::new(x, y, buttons)).await;
    }

    async fn send_pointer(&self, client: &mut C::Client, event: PointerEvent) {
        if self.config.view_only {
            return;
        }
        if let Err(e) = client.send_pointer(event).await {
            warn!("failed to send pointer event: {e}");
        }
    }

    async fn send_key(&self, client: &mut C::Client, event: KeyEvent) {
        if self.config.view_only {
            return;
        }
        if let Err(e) = client.send_key(event).await {
            warn!("failed to send key event: {e}");
        }
    }
}
