//! Integration tests: whole sessions driven through scripted
//! in-memory collaborators: server messages, GamePad polls and local
//! window events.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio_test::{assert_err, assert_ok};

use drc_core::keysym::xk;
use drc_core::{
    ButtonMask, ConnectMode, DrcError, FrameFormat, GamepadButtons, InputMode, InputSnapshot,
    KeyEvent, KeySym, Keycode, LocalDisplay, LocalEvent, Modifiers, PixelFormat, PointerEvent,
    RemoteClient, RemoteConnector, ServerEvent, Session, SessionConfig, SessionState, Streamer,
    WaitOutcome,
};

// ── Fakes ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Sent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    UpdateRequest { incremental: bool },
}

#[derive(Debug, Default)]
struct ClientLog {
    sent: Vec<Sent>,
    installs: Vec<(usize, PixelFormat)>,
    closed: usize,
    opened: Vec<ConnectMode>,
}

type Log = Arc<Mutex<ClientLog>>;

/// One scripted answer to `wait_for_message`.
enum Step {
    Timeout,
    Sleep(Duration),
    Message(Vec<ServerEvent>),
    Fail,
}

struct FakeClient {
    dims: (u32, u32),
    steps: VecDeque<Step>,
    pending: Vec<ServerEvent>,
    framebuffer: Vec<u8>,
    log: Log,
}

impl FakeClient {
    fn new(log: &Log, dims: (u32, u32), steps: Vec<Step>) -> Self {
        Self {
            dims,
            steps: steps.into(),
            pending: Vec::new(),
            framebuffer: Vec::new(),
            log: Arc::clone(log),
        }
    }
}

#[async_trait]
impl RemoteClient for FakeClient {
    async fn wait_for_message(&mut self, timeout: Duration) -> Result<WaitOutcome, DrcError> {
        match self.steps.pop_front() {
            // Script exhausted: the server went away.
            None => Err(DrcError::WaitFailed(timeout)),
            Some(Step::Timeout) => Ok(WaitOutcome::Timeout),
            Some(Step::Sleep(d)) => {
                tokio::time::sleep(d).await;
                Ok(WaitOutcome::Timeout)
            }
            Some(Step::Message(events)) => {
                self.pending = events;
                Ok(WaitOutcome::Ready)
            }
            Some(Step::Fail) => Err(DrcError::Protocol("connection reset".into())),
        }
    }

    async fn handle_message(&mut self) -> Result<Vec<ServerEvent>, DrcError> {
        let events = std::mem::take(&mut self.pending);
        for event in &events {
            if let ServerEvent::Resize { width, height } = event {
                self.dims = (*width, *height);
            }
        }
        Ok(events)
    }

    async fn send_pointer(&mut self, event: PointerEvent) -> Result<(), DrcError> {
        self.log.lock().unwrap().sent.push(Sent::Pointer(event));
        Ok(())
    }

    async fn send_key(&mut self, event: KeyEvent) -> Result<(), DrcError> {
        self.log.lock().unwrap().sent.push(Sent::Key(event));
        Ok(())
    }

    async fn request_update(&mut self, incremental: bool) -> Result<(), DrcError> {
        self.log
            .lock()
            .unwrap()
            .sent
            .push(Sent::UpdateRequest { incremental });
        Ok(())
    }

    fn dimensions(&self) -> (u32, u32) {
        self.dims
    }

    fn install_framebuffer(&mut self, buffer: Vec<u8>, format: PixelFormat) -> Result<(), DrcError> {
        self.log.lock().unwrap().installs.push((buffer.len(), format));
        self.framebuffer = buffer;
        Ok(())
    }

    fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }

    async fn close(&mut self) {
        self.log.lock().unwrap().closed += 1;
    }
}

struct FakeConnector {
    sessions: VecDeque<Result<FakeClient, DrcError>>,
    log: Log,
}

impl FakeConnector {
    fn new(log: &Log, sessions: Vec<Result<FakeClient, DrcError>>) -> Self {
        Self {
            sessions: sessions.into(),
            log: Arc::clone(log),
        }
    }
}

#[async_trait]
impl RemoteConnector for FakeConnector {
    type Client = FakeClient;

    async fn open(&mut self, mode: &ConnectMode, format: PixelFormat) -> Result<FakeClient, DrcError> {
        assert_eq!(format, PixelFormat::ARGB8888);
        self.log.lock().unwrap().opened.push(mode.clone());
        self.sessions
            .pop_front()
            .unwrap_or_else(|| Err(DrcError::InvalidConfig("no more scripted sessions".into())))
    }
}

#[derive(Default)]
struct FakeStreamer {
    inputs: VecDeque<InputSnapshot>,
    frames: Vec<(usize, u32, u32, FrameFormat)>,
    feeder: Vec<&'static str>,
    started: bool,
    stopped: bool,
    fail_start: bool,
}

impl FakeStreamer {
    fn with_inputs(inputs: Vec<InputSnapshot>) -> Self {
        Self {
            inputs: inputs.into(),
            ..Self::default()
        }
    }
}

impl Streamer for FakeStreamer {
    fn start(&mut self) -> Result<(), DrcError> {
        if self.fail_start {
            return Err(DrcError::Streamer("no GamePad".into()));
        }
        self.started = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn poll_input(&mut self) -> InputSnapshot {
        self.inputs.pop_front().unwrap_or_default()
    }

    fn push_frame(&mut self, pixels: &[u8], width: u32, height: u32, format: FrameFormat) {
        self.frames.push((pixels.len(), width, height, format));
    }

    fn enable_input_feeder(&mut self) {
        self.feeder.push("enable");
    }

    fn pause_input_feeder(&mut self) {
        self.feeder.push("pause");
    }

    fn resume_input_feeder(&mut self) {
        self.feeder.push("resume");
    }
}

#[derive(Default)]
struct FakeDisplay {
    /// One entry per poll; `None` means nothing pending that iteration.
    events: VecDeque<Option<LocalEvent>>,
    surfaces: Vec<(u32, u32)>,
    presented: usize,
    closed: usize,
}

impl FakeDisplay {
    fn with_events(events: Vec<Option<LocalEvent>>) -> Self {
        Self {
            events: events.into(),
            ..Self::default()
        }
    }
}

impl LocalDisplay for FakeDisplay {
    fn create_surface(&mut self, width: u32, height: u32) -> Result<(), DrcError> {
        self.surfaces.push((width, height));
        Ok(())
    }

    fn present(&mut self, _pixels: &[u8], _pitch: usize) -> Result<(), DrcError> {
        self.presented += 1;
        Ok(())
    }

    fn poll_event(&mut self) -> Option<LocalEvent> {
        self.events.pop_front().flatten()
    }

    fn close_surface(&mut self) {
        self.closed += 1;
    }
}

// ── Helpers ──────────────────────────────────────────────────────

const DIMS: (u32, u32) = (864, 480);

type TestSession = Session<FakeConnector, FakeStreamer, FakeDisplay>;

fn direct() -> ConnectMode {
    ConnectMode::Connect {
        host: "127.0.0.1".into(),
        port: 5901,
    }
}

fn listen() -> ConnectMode {
    ConnectMode::Listen {
        addr: SocketAddr::from(([0, 0, 0, 0], 5500)),
    }
}

fn config(mode: ConnectMode) -> SessionConfig {
    let mut config = SessionConfig::new(mode);
    config.controller = DIMS;
    config.wait_timeout = Duration::from_millis(10);
    config.reconnect_delay = Duration::ZERO;
    config
}

fn session(
    config: SessionConfig,
    log: &Log,
    clients: Vec<Result<FakeClient, DrcError>>,
    streamer: FakeStreamer,
    display: FakeDisplay,
) -> TestSession {
    Session::new(config, FakeConnector::new(log, clients), streamer, display)
}

fn timeouts(n: usize) -> Vec<Step> {
    (0..n).map(|_| Step::Timeout).collect()
}

fn sent(log: &Log) -> Vec<Sent> {
    log.lock().unwrap().sent.clone()
}

fn pointer(x: i32, y: i32, buttons: ButtonMask) -> Sent {
    Sent::Pointer(PointerEvent::new(x, y, buttons))
}

fn update() -> ServerEvent {
    ServerEvent::FramebufferUpdate {
        x: 0,
        y: 0,
        width: 864,
        height: 480,
    }
}

fn key(code: Keycode, pressed: bool) -> Option<LocalEvent> {
    Some(LocalEvent::Key {
        code,
        modifiers: Modifiers::empty(),
        pressed,
    })
}

// ── GamePad scenarios ────────────────────────────────────────────

#[tokio::test]
async fn touch_centre_sends_one_pointer() {
    let log = Log::default();
    let streamer = FakeStreamer::with_inputs(vec![InputSnapshot::touch(
        GamepadButtons::empty(),
        0.5,
        0.5,
    )]);
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, timeouts(2)))],
        streamer,
        FakeDisplay::default(),
    );

    assert_ok!(s.run().await);

    assert_eq!(sent(&log), vec![pointer(431, 239, ButtonMask::empty())]);
    assert_eq!(s.state(), SessionState::Closing);
    let log = log.lock().unwrap();
    assert_eq!(log.installs, vec![(864 * 480 * 4, PixelFormat::ARGB8888)]);
    assert_eq!(log.closed, 1);
    assert_eq!(s.video().display().surfaces, vec![DIMS]);
    assert_eq!(s.video().display().closed, 1);
}

#[tokio::test]
async fn trigger_click_at_last_touch() {
    let log = Log::default();
    let streamer = FakeStreamer::with_inputs(vec![
        InputSnapshot::touch(GamepadButtons::empty(), 0.5, 0.5),
        InputSnapshot::buttons(GamepadButtons::ZL),
        InputSnapshot::buttons(GamepadButtons::empty()),
    ]);
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, timeouts(3)))],
        streamer,
        FakeDisplay::default(),
    );

    assert_ok!(s.run().await);

    assert_eq!(
        sent(&log),
        vec![
            pointer(431, 239, ButtonMask::empty()),
            pointer(431, 239, ButtonMask::BUTTON_1),
            pointer(431, 239, ButtonMask::empty()),
        ]
    );
}

#[tokio::test]
async fn power_button_toggles_feeder() {
    let log = Log::default();
    let streamer = FakeStreamer::with_inputs(vec![
        InputSnapshot::buttons(GamepadButtons::POWER),
        InputSnapshot::buttons(GamepadButtons::empty()),
        InputSnapshot::buttons(GamepadButtons::POWER),
    ]);
    let mut cfg = config(direct());
    cfg.joystick = true;
    let mut s = session(
        cfg,
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, timeouts(3)))],
        streamer,
        FakeDisplay::default(),
    );

    assert_ok!(s.init());
    assert_eq!(s.gamepad().mode(), InputMode::Joystick);
    assert_ok!(s.run().await);

    assert_eq!(s.streamer().feeder, vec!["enable", "pause", "resume"]);
    assert_eq!(s.gamepad().mode(), InputMode::Joystick);
    assert!(sent(&log).is_empty());
}

#[tokio::test]
async fn gamepad_precedes_local_input() {
    let log = Log::default();
    let streamer = FakeStreamer::with_inputs(vec![InputSnapshot::touch(
        GamepadButtons::empty(),
        0.5,
        0.5,
    )]);
    let display = FakeDisplay::with_events(vec![Some(LocalEvent::PointerMotion {
        x: 10,
        y: 20,
        buttons: ButtonMask::BUTTON_2,
    })]);
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, Vec::new()))],
        streamer,
        display,
    );

    assert_ok!(s.run().await);

    assert_eq!(
        sent(&log),
        vec![
            pointer(431, 239, ButtonMask::empty()),
            pointer(10, 20, ButtonMask::BUTTON_2),
        ]
    );
}

#[tokio::test]
async fn local_and_gamepad_buttons_merge() {
    let log = Log::default();
    let streamer = FakeStreamer::with_inputs(vec![
        InputSnapshot::touch(GamepadButtons::empty(), 0.5, 0.5),
        InputSnapshot::buttons(GamepadButtons::ZL),
    ]);
    let display = FakeDisplay::with_events(vec![
        None,
        None,
        Some(LocalEvent::PointerButton {
            x: 5,
            y: 6,
            button: 3,
            pressed: true,
        }),
    ]);
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, timeouts(2)))],
        streamer,
        display,
    );

    assert_ok!(s.run().await);

    assert_eq!(
        sent(&log).last(),
        Some(&pointer(5, 6, ButtonMask::BUTTON_1 | ButtonMask::BUTTON_3))
    );
}

// ── Local input ──────────────────────────────────────────────────

#[tokio::test]
async fn keyboard_two_phase_resolution() {
    let log = Log::default();
    let a = Keycode(b'a' as u32);
    let display = FakeDisplay::with_events(vec![
        key(a, true),
        Some(LocalEvent::Text("a".into())),
        key(a, false),
        key(Keycode::RETURN, true),
        key(Keycode::RETURN, false),
    ]);
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, Vec::new()))],
        FakeStreamer::default(),
        display,
    );

    assert_ok!(s.run().await);

    assert_eq!(
        sent(&log),
        vec![
            Sent::Key(KeyEvent::press(KeySym(0x61))),
            Sent::Key(KeyEvent::release(KeySym(0x61))),
            Sent::Key(KeyEvent::press(xk::RETURN)),
            Sent::Key(KeyEvent::release(xk::RETURN)),
        ]
    );
}

#[tokio::test]
async fn view_only_sends_nothing() {
    let log = Log::default();
    let streamer = FakeStreamer::with_inputs(vec![
        InputSnapshot::touch(GamepadButtons::empty(), 0.5, 0.5),
        InputSnapshot::buttons(GamepadButtons::ZL),
    ]);
    let display = FakeDisplay::with_events(vec![
        key(Keycode::ESCAPE, true),
        Some(LocalEvent::Text("x".into())),
        Some(LocalEvent::Wheel { x: 1, y: 1, delta: 1 }),
        Some(LocalEvent::PointerMotion {
            x: 3,
            y: 4,
            buttons: ButtonMask::empty(),
        }),
    ]);
    let mut cfg = config(direct());
    cfg.view_only = true;
    let mut s = session(
        cfg,
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, vec![Step::Message(vec![update()])]))],
        streamer,
        display,
    );

    assert_ok!(s.run().await);

    assert!(sent(&log).is_empty());
    assert_eq!(s.video().display().presented, 1);
}

#[tokio::test]
async fn wheel_is_button_four_and_five_tap() {
    let log = Log::default();
    let display = FakeDisplay::with_events(vec![
        Some(LocalEvent::Wheel { x: 7, y: 8, delta: 1 }),
        Some(LocalEvent::Wheel { x: 7, y: 8, delta: -2 }),
        Some(LocalEvent::Wheel { x: 7, y: 8, delta: 0 }),
    ]);
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, Vec::new()))],
        FakeStreamer::default(),
        display,
    );

    assert_ok!(s.run().await);

    assert_eq!(
        sent(&log),
        vec![
            pointer(7, 8, ButtonMask::BUTTON_4),
            pointer(7, 8, ButtonMask::empty()),
            pointer(7, 8, ButtonMask::BUTTON_5),
            pointer(7, 8, ButtonMask::empty()),
        ]
    );
}

#[tokio::test]
async fn expose_requests_full_update_and_unknown_is_ignored() {
    let log = Log::default();
    let display = FakeDisplay::with_events(vec![
        Some(LocalEvent::Unknown(0x1234)),
        Some(LocalEvent::Exposed),
    ]);
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, Vec::new()))],
        FakeStreamer::default(),
        display,
    );

    assert_ok!(s.run().await);

    assert_eq!(sent(&log), vec![Sent::UpdateRequest { incremental: false }]);
}

// ── Rendering ────────────────────────────────────────────────────

#[tokio::test]
async fn frames_are_rate_limited() {
    let log = Log::default();
    let steps = vec![
        Step::Message(vec![update()]),
        Step::Message(vec![update()]),
        Step::Sleep(Duration::from_millis(40)),
        Step::Message(vec![update(), update()]),
    ];
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, steps))],
        FakeStreamer::default(),
        FakeDisplay::default(),
    );

    assert_ok!(s.run().await);

    // Every update is presented locally, one message at a time.
    assert_eq!(s.video().display().presented, 3);
    // The first frame only sets the baseline; the third is far enough out.
    assert_eq!(
        s.streamer().frames,
        vec![(864 * 480 * 4, 864, 480, FrameFormat::Bgra8)]
    );
}

#[tokio::test]
async fn first_frame_after_reconnect_is_pushed() {
    let log = Log::default();
    let clients = vec![
        Ok(FakeClient::new(
            &log,
            DIMS,
            vec![
                Step::Message(vec![update()]),
                Step::Sleep(Duration::from_millis(40)),
                Step::Message(vec![update()]),
            ],
        )),
        Ok(FakeClient::new(
            &log,
            DIMS,
            vec![Step::Sleep(Duration::from_millis(40)), Step::Message(vec![update()])],
        )),
    ];
    let mut s = session(
        config(listen()),
        &log,
        clients,
        FakeStreamer::default(),
        FakeDisplay::default(),
    );

    assert_err!(s.run().await);

    assert_eq!(s.video().display().presented, 3);
    assert_eq!(s.streamer().frames.len(), 2);
}

#[tokio::test]
async fn resize_renegotiates_surface() {
    let log = Log::default();
    let steps = vec![Step::Message(vec![ServerEvent::Resize {
        width: 864,
        height: 480,
    }])];
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, steps))],
        FakeStreamer::default(),
        FakeDisplay::default(),
    );

    assert_ok!(s.run().await);

    assert_eq!(log.lock().unwrap().installs.len(), 2);
    assert_eq!(s.video().display().surfaces, vec![DIMS, DIMS]);
    assert_eq!(sent(&log), vec![Sent::UpdateRequest { incremental: false }]);
}

#[tokio::test]
async fn mismatched_resolution_is_fatal() {
    let log = Log::default();
    let mut s = session(
        config(listen()),
        &log,
        vec![Ok(FakeClient::new(&log, (1024, 768), Vec::new()))],
        FakeStreamer::default(),
        FakeDisplay::default(),
    );

    let err = assert_err!(s.run().await);

    assert!(matches!(err, DrcError::ResolutionMismatch { remote_width: 1024, .. }));
    assert_eq!(s.state(), SessionState::Closing);
    let log = log.lock().unwrap();
    assert_eq!(log.opened.len(), 1);
    assert_eq!(log.closed, 1);
    assert!(log.installs.is_empty());
}

#[tokio::test]
async fn resize_to_wrong_size_is_fatal() {
    let log = Log::default();
    let steps = vec![Step::Message(vec![ServerEvent::Resize {
        width: 800,
        height: 600,
    }])];
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, steps))],
        FakeStreamer::default(),
        FakeDisplay::default(),
    );

    let err = assert_err!(s.run().await);
    assert!(err.is_fatal());
}

// ── Lifecycle ────────────────────────────────────────────────────

#[tokio::test]
async fn window_close_ends_direct_session() {
    let log = Log::default();
    let display = FakeDisplay::with_events(vec![None, Some(LocalEvent::Close)]);
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, timeouts(10)))],
        FakeStreamer::default(),
        display,
    );

    assert_ok!(s.run().await);

    assert_eq!(s.state(), SessionState::Closing);
    let log = log.lock().unwrap();
    assert_eq!(log.opened, vec![direct()]);
    assert_eq!(log.closed, 1);
}

#[tokio::test]
async fn protocol_failure_ends_direct_session() {
    let log = Log::default();
    let mut s = session(
        config(direct()),
        &log,
        vec![Ok(FakeClient::new(&log, DIMS, vec![Step::Timeout, Step::Fail]))],
        FakeStreamer::default(),
        FakeDisplay::default(),
    );

    assert_ok!(s.run().await);
    assert_eq!(log.lock().unwrap().opened.len(), 1);
}

#[tokio::test]
async fn connect_failure_ends_direct_session() {
    let log = Log::default();
    let mut s = session(
        config(direct()),
        &log,
        vec![Err(DrcError::ConnectFailed("refused".into()))],
        FakeStreamer::default(),
        FakeDisplay::default(),
    );

    assert_ok!(s.run().await);
    assert_eq!(s.state(), SessionState::Closing);
}

#[tokio::test]
async fn listen_mode_reconnects() {
    let log = Log::default();
    let display = FakeDisplay::with_events(vec![Some(LocalEvent::Close)]);
    let clients = vec![
        Ok(FakeClient::new(&log, DIMS, Vec::new())),
        Err(DrcError::ConnectFailed("peer hung up".into())),
        Ok(FakeClient::new(&log, DIMS, vec![Step::Fail])),
    ];
    let mut s = session(config(listen()), &log, clients, FakeStreamer::default(), display);

    // Runs until the connector runs out of scripted sessions.
    let err = assert_err!(s.run().await);

    assert!(matches!(err, DrcError::InvalidConfig(_)));
    let log = log.lock().unwrap();
    assert_eq!(log.opened, vec![listen(); 4]);
    assert_eq!(log.closed, 2);
    assert_eq!(s.video().display().closed, 4);
}

#[tokio::test]
async fn gamepad_pointer_starts_fresh_after_reconnect() {
    let log = Log::default();
    let streamer = FakeStreamer::with_inputs(vec![
        // First session: touch, then pull the trigger.
        InputSnapshot::touch(GamepadButtons::empty(), 0.5, 0.5),
        InputSnapshot::buttons(GamepadButtons::ZL),
        // Second session: trigger still held, then the same touch.
        InputSnapshot::buttons(GamepadButtons::ZL),
        InputSnapshot::touch(GamepadButtons::ZL, 0.5, 0.5),
    ]);
    let clients = vec![
        Ok(FakeClient::new(&log, DIMS, timeouts(1))),
        Ok(FakeClient::new(&log, DIMS, timeouts(1))),
    ];
    let mut s = session(config(listen()), &log, clients, streamer, FakeDisplay::default());

    assert_err!(s.run().await);

    assert_eq!(
        sent(&log),
        vec![
            pointer(431, 239, ButtonMask::empty()),
            pointer(431, 239, ButtonMask::BUTTON_1),
            pointer(431, 239, ButtonMask::BUTTON_1),
        ]
    );
    assert_eq!(s.gamepad().cursor(), None);
    assert_eq!(s.gamepad().mouse_buttons(), ButtonMask::empty());
}

#[tokio::test]
async fn streamer_start_failure_is_reported() {
    let log = Log::default();
    let streamer = FakeStreamer {
        fail_start: true,
        ..FakeStreamer::default()
    };
    let mut s = session(config(direct()), &log, Vec::new(), streamer, FakeDisplay::default());

    let err = assert_err!(s.init());
    assert!(matches!(err, DrcError::Streamer(_)));
    assert!(!s.streamer().started);
}

#[tokio::test]
async fn shutdown_stops_streamer() {
    let log = Log::default();
    let mut s = session(
        config(direct()),
        &log,
        Vec::new(),
        FakeStreamer::default(),
        FakeDisplay::default(),
    );

    assert_ok!(s.init());
    assert!(s.streamer().started);
    assert!(s.streamer().feeder.is_empty());
    s.shutdown();
    assert!(s.streamer().stopped);
    assert_eq!(s.state(), SessionState::Closing);
}
