//! GamePad input → remote pointer actions.
//!
//! [`GamepadInput`] is fed one [`InputSnapshot`] per loop iteration.
//! Button groups are edge-detected against the previous snapshot:
//! the triggers act as the left mouse button, the shoulder buttons as
//! the right one, and (with the input feeder enabled) the POWER button
//! toggles between mouse and joystick mode. Touches move the pointer
//! independently of the buttons.

use bitflags::bitflags;
use tracing::{debug, info};

use crate::types::{ButtonMask, PointerEvent};

// ── Buttons ──────────────────────────────────────────────────────

bitflags! {
    /// GamePad buttons as reported by the controller.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GamepadButtons: u32 {
        const SYNC = 0x0000_0001;
        const HOME = 0x0000_0002;
        const MINUS = 0x0000_0004;
        const PLUS = 0x0000_0008;
        const R = 0x0000_0010;
        const L = 0x0000_0020;
        const ZR = 0x0000_0040;
        const ZL = 0x0000_0080;
        const DOWN = 0x0000_0100;
        const UP = 0x0000_0200;
        const RIGHT = 0x0000_0400;
        const LEFT = 0x0000_0800;
        const Y = 0x0000_1000;
        const X = 0x0000_2000;
        const B = 0x0000_4000;
        const A = 0x0000_8000;
        const TV = 0x0002_0000;
        const R3 = 0x0004_0000;
        const L3 = 0x0008_0000;
        const POWER = 0x0200_0000;

        /// Buttons acting as the left mouse button.
        const LEFT_CLICK = Self::ZL.bits() | Self::ZR.bits();
        /// Buttons acting as the right mouse button.
        const RIGHT_CLICK = Self::L.bits() | Self::R.bits();
    }
}

/// One poll of the controller's input state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub buttons: GamepadButtons,
    pub touch_pressed: bool,
    /// Normalised touch position, 0.0 ..= 1.0.
    pub touch_x: f32,
    pub touch_y: f32,
    /// False when the poll produced no fresh data.
    pub valid: bool,
}

impl InputSnapshot {
    /// A valid snapshot with only buttons held.
    pub fn buttons(buttons: GamepadButtons) -> Self {
        Self {
            buttons,
            valid: true,
            ..Self::default()
        }
    }

    /// A valid snapshot with the screen touched at `(x, y)`.
    pub fn touch(buttons: GamepadButtons, x: f32, y: f32) -> Self {
        Self {
            buttons,
            touch_pressed: true,
            touch_x: x,
            touch_y: y,
            valid: true,
        }
    }
}

// ── Mode ─────────────────────────────────────────────────────────

/// How controller buttons are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Triggers and shoulders are mouse clicks.
    #[default]
    Mouse,
    /// Buttons go raw to the input feeder.
    Joystick,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mouse => write!(f, "mouse"),
            Self::Joystick => write!(f, "joystick"),
        }
    }
}

/// Something the session must do in response to GamePad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadAction {
    /// Send a pointer event to the remote side.
    Pointer(PointerEvent),
    /// Stop the input feeder from emitting joystick state.
    PauseFeeder,
    /// Let the input feeder emit joystick state again.
    ResumeFeeder,
}

// ── ButtonEdgeState ──────────────────────────────────────────────

/// State remembered between snapshots.
#[derive(Debug, Clone, Default)]
pub struct ButtonEdgeState {
    pub prev_buttons: GamepadButtons,
    pub prev_left_click: GamepadButtons,
    pub prev_right_click: GamepadButtons,
    pub prev_power: GamepadButtons,
    /// Last dispatched pointer position; `None` until the first touch.
    pub cursor: Option<(i32, i32)>,
    /// Remote buttons currently held by the GamePad.
    pub mouse_buttons: ButtonMask,
    pub mode: InputMode,
}

// ── GamepadInput ─────────────────────────────────────────────────

/// Edge-triggered GamePad → pointer translator.
#[derive(Debug, Clone)]
pub struct GamepadInput {
    state: ButtonEdgeState,
    feeder_enabled: bool,
}

impl GamepadInput {
    /// With the input feeder enabled the GamePad starts in joystick
    /// mode, otherwise it is mouse-only.
    pub fn new(feeder_enabled: bool) -> Self {
        let mode = if feeder_enabled {
            InputMode::Joystick
        } else {
            InputMode::Mouse
        };
        Self::with_mode(feeder_enabled, mode)
    }

    /// Start in an explicit mode.
    pub fn with_mode(feeder_enabled: bool, mode: InputMode) -> Self {
        Self {
            state: ButtonEdgeState {
                mode,
                ..ButtonEdgeState::default()
            },
            feeder_enabled,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.state.mode
    }

    pub fn mouse_buttons(&self) -> ButtonMask {
        self.state.mouse_buttons
    }

    pub fn cursor(&self) -> Option<(i32, i32)> {
        self.state.cursor
    }

    pub fn state(&self) -> &ButtonEdgeState {
        &self.state
    }

    /// Forget the cursor and held clicks of a finished session.
    ///
    /// Mode and POWER edge state are kept; the feeder outlives sessions.
    pub fn reset_pointer(&mut self) {
        self.state.cursor = None;
        self.state.mouse_buttons = ButtonMask::empty();
        self.state.prev_left_click = GamepadButtons::empty();
        self.state.prev_right_click = GamepadButtons::empty();
        self.state.prev_buttons &= GamepadButtons::POWER;
    }

    /// Process one snapshot against a `width`×`height` remote surface.
    pub fn process(
        &mut self,
        input: &InputSnapshot,
        width: u32,
        height: u32,
    ) -> Vec<GamepadAction> {
        let mut actions = Vec::new();
        if !input.valid {
            return actions;
        }

        if input.buttons != self.state.prev_buttons {
            self.handle_buttons(input.buttons, &mut actions);
        }

        if input.touch_pressed {
            let pos = touch_to_pointer(input.touch_x, input.touch_y, width, height);
            if self.state.cursor != Some(pos) {
                self.state.cursor = Some(pos);
                actions.push(GamepadAction::Pointer(PointerEvent::new(
                    pos.0,
                    pos.1,
                    self.state.mouse_buttons,
                )));
            }
        }

        actions
    }

    fn handle_buttons(&mut self, buttons: GamepadButtons, actions: &mut Vec<GamepadAction>) {
        let left = buttons & GamepadButtons::LEFT_CLICK;
        let right = buttons & GamepadButtons::RIGHT_CLICK;
        let power = buttons & GamepadButtons::POWER;

        if self.state.mode == InputMode::Mouse {
            if left != self.state.prev_left_click {
                self.state
                    .mouse_buttons
                    .set(ButtonMask::BUTTON_1, !left.is_empty());
                self.push_click(actions);
            }
            if right != self.state.prev_right_click {
                self.state
                    .mouse_buttons
                    .set(ButtonMask::BUTTON_3, !right.is_empty());
                self.push_click(actions);
            }
        }

        if self.feeder_enabled && power != self.state.prev_power && !power.is_empty() {
            self.state.mode = match self.state.mode {
                InputMode::Mouse => InputMode::Joystick,
                InputMode::Joystick => InputMode::Mouse,
            };
            info!("{} mode", self.state.mode);
            if self.state.mode == InputMode::Joystick && !self.state.mouse_buttons.is_empty() {
                self.state.mouse_buttons = ButtonMask::empty();
                self.push_click(actions);
            }
            actions.push(match self.state.mode {
                InputMode::Mouse => GamepadAction::PauseFeeder,
                InputMode::Joystick => GamepadAction::ResumeFeeder,
            });
        }

        self.state.prev_left_click = left;
        self.state.prev_right_click = right;
        self.state.prev_power = power;
        self.state.prev_buttons = buttons;
    }

    /// Click at the last cursor position. Suppressed until a touch has
    /// placed the cursor; the mask still carries over to that touch.
    fn push_click(&self, actions: &mut Vec<GamepadAction>) {
        match self.state.cursor {
            Some((x, y)) => actions.push(GamepadAction::Pointer(PointerEvent::new(
                x,
                y,
                self.state.mouse_buttons,
            ))),
            None => debug!("click before first touch, pointer not moved"),
        }
    }
}

/// Scale a normalised touch position onto a `width`×`height` surface.
///
/// Results lie in `[-1, width - 1] × [-1, height - 1]`.
pub fn touch_to_pointer(tx: f32, ty: f32, width: u32, height: u32) -> (i32, i32) {
    fn axis(t: f32, extent: u32) -> i32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let v = (f64::from(t) * f64::from(extent)).round() as i64 - 1;
        v.clamp(-1, i64::from(extent) - 1) as i32
    }
    (axis(tx, width), axis(ty, height))
}

// ── Tests ────────────────────────────────────────────────────────
