//! Shared types passed between the input translators, the session and
//! the remote-protocol client.
//!
//! These mirror what a remote-framebuffer client sends on the wire
//! (pointer events with a button mask, key events carrying an X11
//! keysym) and the pixel layouts both sides of the viewer agree on.

use bitflags::bitflags;

// ── Pointer ──────────────────────────────────────────────────────

bitflags! {
    /// Remote pointer button mask. Bit `n` is button `n + 1`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ButtonMask: u8 {
        /// Left button.
        const BUTTON_1 = 1 << 0;
        /// Middle button.
        const BUTTON_2 = 1 << 1;
        /// Right button.
        const BUTTON_3 = 1 << 2;
        /// Wheel up.
        const BUTTON_4 = 1 << 3;
        /// Wheel down.
        const BUTTON_5 = 1 << 4;
    }
}

impl ButtonMask {
    /// Mask for a 1-based button number, or empty if out of range.
    pub fn for_button(button: u8) -> Self {
        match button {
            1..=8 => Self::from_bits_truncate(1 << (button - 1)),
            _ => Self::empty(),
        }
    }
}

/// An absolute pointer update for the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub buttons: ButtonMask,
}

impl PointerEvent {
    pub fn new(x: i32, y: i32, buttons: ButtonMask) -> Self {
        Self { x, y, buttons }
    }
}

// ── Keyboard ─────────────────────────────────────────────────────

/// An X11 keysym as used by the remote-framebuffer protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySym(pub u32);

impl KeySym {
    /// Keysym for a Unicode character.
    ///
    /// Latin-1 characters map to themselves; everything else uses the
    /// `0x0100_0000 + codepoint` range.
    pub fn from_char(c: char) -> Self {
        let cp = c as u32;
        if cp < 0x100 {
            KeySym(cp)
        } else {
            KeySym(0x0100_0000 | cp)
        }
    }
}

/// A key press or release for the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub sym: KeySym,
    pub down: bool,
}

impl KeyEvent {
    pub fn press(sym: KeySym) -> Self {
        Self { sym, down: true }
    }

    pub fn release(sym: KeySym) -> Self {
        Self { sym, down: false }
    }
}

// ── PixelFormat ──────────────────────────────────────────────────

/// True-colour pixel format reported to the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    pub bits_per_pixel: u8,
    pub depth: u8,
    pub big_endian: bool,
    pub red_max: u16,
    pub green_max: u16,
    pub blue_max: u16,
    pub red_shift: u8,
    pub green_shift: u8,
    pub blue_shift: u8,
}

impl PixelFormat {
    /// 32-bit ARGB, little-endian. In memory this is B, G, R, A.
    pub const ARGB8888: PixelFormat = PixelFormat {
        bits_per_pixel: 32,
        depth: 24,
        big_endian: false,
        red_max: 0xff,
        green_max: 0xff,
        blue_max: 0xff,
        red_shift: 16,
        green_shift: 8,
        blue_shift: 0,
    };

    /// Bytes consumed by a single pixel.
    pub const fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel as usize / 8
    }
}

/// Byte order of frames pushed to the controller stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameFormat {
    /// 4 bytes per pixel: Blue, Green, Red, Alpha.
    Bgra8,
}

// ── Tests ────────────────────────────────────────────────────────
