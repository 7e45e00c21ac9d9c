//! Local key codes → remote keysyms.
//!
//! Non-printable keys resolve through a fixed table. Printable keys
//! are resolved in two phases: the raw key-down is parked in the
//! [`KeyPressSet`] until the windowing layer delivers the composed
//! text for it, and the resolved symbol is remembered so the key-up
//! releases the same keysym.
//!
//! ```text
//!  Idle ──key down──► AwaitingComposedText ──text──► Resolved
//!   ▲                        │                          │
//!   └────── key up ──────────┴──────── key up ──────────┘
//! ```

use std::collections::HashMap;

use bitflags::bitflags;
use tracing::trace;

use crate::types::{KeyEvent, KeySym};

// ── Keycode ──────────────────────────────────────────────────────

/// A local keyboard key code.
///
/// Printable keys carry their ASCII value; every other key has bit 30
/// set over its scancode, the convention SDL keycodes follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keycode(pub u32);

const fn scancode(sc: u32) -> Keycode {
    Keycode(sc | 1 << 30)
}

impl Keycode {
    pub const BACKSPACE: Keycode = Keycode(0x08);
    pub const TAB: Keycode = Keycode(0x09);
    pub const RETURN: Keycode = Keycode(0x0d);
    pub const ESCAPE: Keycode = Keycode(0x1b);
    pub const DELETE: Keycode = Keycode(0x7f);

    pub const CAPSLOCK: Keycode = scancode(57);
    pub const F1: Keycode = scancode(58);
    pub const F12: Keycode = scancode(69);
    pub const PRINTSCREEN: Keycode = scancode(70);
    pub const SCROLLLOCK: Keycode = scancode(71);
    pub const PAUSE: Keycode = scancode(72);
    pub const INSERT: Keycode = scancode(73);
    pub const HOME: Keycode = scancode(74);
    pub const PAGEUP: Keycode = scancode(75);
    pub const END: Keycode = scancode(77);
    pub const PAGEDOWN: Keycode = scancode(78);
    pub const RIGHT: Keycode = scancode(79);
    pub const LEFT: Keycode = scancode(80);
    pub const DOWN: Keycode = scancode(81);
    pub const UP: Keycode = scancode(82);
    pub const NUMLOCKCLEAR: Keycode = scancode(83);
    pub const KP_ENTER: Keycode = scancode(88);
    pub const F13: Keycode = scancode(104);
    pub const F24: Keycode = scancode(115);
    pub const EXECUTE: Keycode = scancode(116);
    pub const HELP: Keycode = scancode(117);
    pub const MENU: Keycode = scancode(118);
    pub const SELECT: Keycode = scancode(119);
    pub const STOP: Keycode = scancode(120);
    pub const AGAIN: Keycode = scancode(121);
    pub const UNDO: Keycode = scancode(122);
    pub const FIND: Keycode = scancode(126);
    pub const SYSREQ: Keycode = scancode(154);
    pub const CLEAR: Keycode = scancode(156);
    pub const KP_TAB: Keycode = scancode(186);
    pub const LCTRL: Keycode = scancode(224);
    pub const LSHIFT: Keycode = scancode(225);
    pub const LALT: Keycode = scancode(226);
    pub const LGUI: Keycode = scancode(227);
    pub const RCTRL: Keycode = scancode(228);
    pub const RSHIFT: Keycode = scancode(229);
    pub const RALT: Keycode = scancode(230);
    pub const RGUI: Keycode = scancode(231);
    pub const MODE: Keycode = scancode(257);

    /// Whether the code is a printable ASCII character.
    pub fn is_printable_ascii(self) -> bool {
        (0x20..0x7f).contains(&self.0)
    }
}

bitflags! {
    /// Keyboard modifiers held when a key event was generated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u16 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const GUI = 1 << 3;
    }
}

// ── X11 keysyms ──────────────────────────────────────────────────

pub mod xk {
    use crate::types::KeySym;

    pub const BACKSPACE: KeySym = KeySym(0xff08);
    pub const TAB: KeySym = KeySym(0xff09);
    pub const CLEAR: KeySym = KeySym(0xff0b);
    pub const RETURN: KeySym = KeySym(0xff0d);
    pub const PAUSE: KeySym = KeySym(0xff13);
    pub const SCROLL_LOCK: KeySym = KeySym(0xff14);
    pub const SYS_REQ: KeySym = KeySym(0xff15);
    pub const ESCAPE: KeySym = KeySym(0xff1b);
    pub const HOME: KeySym = KeySym(0xff50);
    pub const LEFT: KeySym = KeySym(0xff51);
    pub const UP: KeySym = KeySym(0xff52);
    pub const RIGHT: KeySym = KeySym(0xff53);
    pub const DOWN: KeySym = KeySym(0xff54);
    pub const PAGE_UP: KeySym = KeySym(0xff55);
    pub const PAGE_DOWN: KeySym = KeySym(0xff56);
    pub const END: KeySym = KeySym(0xff57);
    pub const SELECT: KeySym = KeySym(0xff60);
    pub const PRINT: KeySym = KeySym(0xff61);
    pub const EXECUTE: KeySym = KeySym(0xff62);
    pub const INSERT: KeySym = KeySym(0xff63);
    pub const UNDO: KeySym = KeySym(0xff65);
    pub const REDO: KeySym = KeySym(0xff66);
    pub const MENU: KeySym = KeySym(0xff67);
    pub const FIND: KeySym = KeySym(0xff68);
    pub const CANCEL: KeySym = KeySym(0xff69);
    pub const HELP: KeySym = KeySym(0xff6a);
    pub const MODE_SWITCH: KeySym = KeySym(0xff7e);
    pub const NUM_LOCK: KeySym = KeySym(0xff7f);
    pub const KP_TAB: KeySym = KeySym(0xff89);
    pub const KP_ENTER: KeySym = KeySym(0xff8d);
    /// F1; F2..F35 follow consecutively.
    pub const F1: KeySym = KeySym(0xffbe);
    pub const SHIFT_L: KeySym = KeySym(0xffe1);
    pub const SHIFT_R: KeySym = KeySym(0xffe2);
    pub const CONTROL_L: KeySym = KeySym(0xffe3);
    pub const CONTROL_R: KeySym = KeySym(0xffe4);
    pub const CAPS_LOCK: KeySym = KeySym(0xffe5);
    pub const META_L: KeySym = KeySym(0xffe7);
    pub const META_R: KeySym = KeySym(0xffe8);
    pub const ALT_L: KeySym = KeySym(0xffe9);
    pub const ALT_R: KeySym = KeySym(0xffea);
    pub const DELETE: KeySym = KeySym(0xffff);
}

/// Resolve a key through the static table of non-printable keys.
///
/// With Control held, printable ASCII codes resolve to themselves
/// because the windowing layer suppresses composed text for chords.
pub fn resolve_static(code: Keycode, mods: Modifiers) -> Option<KeySym> {
    let sym = match code {
        Keycode::RETURN => xk::RETURN,
        Keycode::ESCAPE => xk::ESCAPE,
        Keycode::BACKSPACE => xk::BACKSPACE,
        Keycode::TAB => xk::TAB,
        Keycode::DELETE => xk::DELETE,
        Keycode::CAPSLOCK => xk::CAPS_LOCK,

        Keycode::PRINTSCREEN => xk::PRINT,
        Keycode::SCROLLLOCK => xk::SCROLL_LOCK,
        Keycode::PAUSE => xk::PAUSE,
        Keycode::INSERT => xk::INSERT,
        Keycode::HOME => xk::HOME,
        Keycode::PAGEUP => xk::PAGE_UP,
        Keycode::END => xk::END,
        Keycode::PAGEDOWN => xk::PAGE_DOWN,
        Keycode::RIGHT => xk::RIGHT,
        Keycode::LEFT => xk::LEFT,
        Keycode::DOWN => xk::DOWN,
        Keycode::UP => xk::UP,

        Keycode::NUMLOCKCLEAR => xk::NUM_LOCK,
        Keycode::KP_ENTER => xk::KP_ENTER,

        Keycode::EXECUTE => xk::EXECUTE,
        Keycode::HELP => xk::HELP,
        Keycode::MENU => xk::MENU,
        Keycode::SELECT => xk::SELECT,
        Keycode::STOP => xk::CANCEL,
        Keycode::AGAIN => xk::REDO,
        Keycode::UNDO => xk::UNDO,
        Keycode::FIND => xk::FIND,
        Keycode::SYSREQ => xk::SYS_REQ,
        Keycode::CLEAR => xk::CLEAR,
        Keycode::KP_TAB => xk::KP_TAB,

        Keycode::LCTRL => xk::CONTROL_L,
        Keycode::LSHIFT => xk::SHIFT_L,
        Keycode::LALT => xk::ALT_L,
        Keycode::LGUI => xk::META_L,
        Keycode::RCTRL => xk::CONTROL_R,
        Keycode::RSHIFT => xk::SHIFT_R,
        Keycode::RALT => xk::ALT_R,
        Keycode::RGUI => xk::META_R,

        Keycode::MODE => xk::MODE_SWITCH,

        c if (Keycode::F1.0..=Keycode::F12.0).contains(&c.0) => {
            KeySym(xk::F1.0 + (c.0 - Keycode::F1.0))
        }
        c if (Keycode::F13.0..=Keycode::F24.0).contains(&c.0) => {
            KeySym(xk::F1.0 + 12 + (c.0 - Keycode::F13.0))
        }

        c if mods.contains(Modifiers::CTRL) && c.is_printable_ascii() => KeySym(c.0),

        _ => return None,
    };
    Some(sym)
}

// ── KeyPressSet ──────────────────────────────────────────────────

/// Keys waiting for, or resolved through, composed text.
#[derive(Debug, Default)]
pub struct KeyPressSet {
    /// The raw key whose composed text has not arrived yet.
    pending: Option<Keycode>,
    /// Raw key → keysym sent on its key-down.
    held: HashMap<Keycode, KeySym>,
}

impl KeyPressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The key currently awaiting composed text.
    pub fn pending(&self) -> Option<Keycode> {
        self.pending
    }

    /// Keysym held for a raw key, if it was resolved through text.
    pub fn held(&self, code: Keycode) -> Option<KeySym> {
        self.held.get(&code).copied()
    }

    /// Number of keys resolved through text and not yet released.
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Handle a local key-down.
    ///
    /// Returns the press to dispatch now, or `None` when the key is
    /// parked until [`text_input`](Self::text_input) resolves it.
    pub fn key_down(&mut self, code: Keycode, mods: Modifiers) -> Option<KeyEvent> {
        if let Some(sym) = resolve_static(code, mods) {
            if code.is_printable_ascii() {
                // Control chord; the release may come after Control is let go.
                self.held.insert(code, sym);
            }
            return Some(KeyEvent::press(sym));
        }
        if let Some(previous) = self.pending.replace(code) {
            trace!(?previous, "pending key superseded before composed text");
        }
        None
    }

    /// Handle composed text from the windowing layer.
    ///
    /// The first character resolves the pending key. Text that arrives
    /// with no key pending (input methods, paste) is typed as a tap.
    pub fn text_input(&mut self, text: &str) -> Vec<KeyEvent> {
        let Some(c) = text.chars().next() else {
            return Vec::new();
        };
        let sym = KeySym::from_char(c);
        match self.pending.take() {
            Some(code) => {
                self.held.insert(code, sym);
                vec![KeyEvent::press(sym)]
            }
            None => vec![KeyEvent::press(sym), KeyEvent::release(sym)],
        }
    }

    /// Handle a local key-up.
    ///
    /// A key released before its composed text arrived is dropped
    /// without sending anything.
    pub fn key_up(&mut self, code: Keycode, mods: Modifiers) -> Option<KeyEvent> {
        if let Some(sym) = self.held.remove(&code) {
            return Some(KeyEvent::release(sym));
        }
        if let Some(sym) = resolve_static(code, mods) {
            return Some(KeyEvent::release(sym));
        }
        if self.pending == Some(code) {
            self.pending = None;
            trace!(?code, "key released before composed text, dropped");
        }
        None
    }

    /// Forget all pending and held keys.
    pub fn clear(&mut self) {
        self.pending = None;
        self.held.clear();
    }
}

// ── Tests ────────────────────────────────────────────────────────
