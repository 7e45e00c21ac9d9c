//! Render surface and framebuffer negotiation.
//!
//! The GamePad screen has a fixed physical resolution. The remote
//! desktop must match it exactly: the framebuffer handed to the remote
//! client is sized for the GamePad and frames are pushed to it without
//! scaling. Every negotiation checks this up front.

use tracing::{debug, info};

use crate::backend::LocalDisplay;
use crate::error::DrcError;
use crate::types::PixelFormat;

/// Physical GamePad screen size.
///
/// Servers started with `-geometry 864x480` fail negotiation against
/// this default; set `display.controller_width = 864` to accept them.
pub const CONTROLLER_WIDTH: u32 = 854;
pub const CONTROLLER_HEIGHT: u32 = 480;

// ── RemoteSurfaceFormat ──────────────────────────────────────────

/// The outcome of the last negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteSurfaceFormat {
    pub pixel: PixelFormat,
    pub width: u32,
    pub height: u32,
}

impl RemoteSurfaceFormat {
    /// Bytes per framebuffer row.
    pub fn pitch(&self) -> usize {
        self.width as usize * self.pixel.bytes_per_pixel()
    }

    /// Bytes in the whole framebuffer.
    pub fn buffer_len(&self) -> usize {
        self.pitch() * self.height as usize
    }
}

// ── VideoSurface ─────────────────────────────────────────────────

/// Owns the local display and the negotiated remote format.
pub struct VideoSurface<D> {
    display: D,
    controller: (u32, u32),
    format: Option<RemoteSurfaceFormat>,
}

impl<D: LocalDisplay> VideoSurface<D> {
    /// `controller` is the GamePad's `(width, height)`.
    pub fn new(display: D, controller: (u32, u32)) -> Self {
        Self {
            display,
            controller,
            format: None,
        }
    }

    /// The pixel format every framebuffer is written in.
    pub fn pixel_format(&self) -> PixelFormat {
        PixelFormat::ARGB8888
    }

    /// Format of the current session, if negotiated.
    pub fn format(&self) -> Option<&RemoteSurfaceFormat> {
        self.format.as_ref()
    }

    /// Remote surface size, falling back to the controller size before
    /// negotiation.
    pub fn dimensions(&self) -> (u32, u32) {
        self.format
            .map(|f| (f.width, f.height))
            .unwrap_or(self.controller)
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Negotiate a `width`×`height` remote desktop.
    ///
    /// Recreates the render surface and returns the zeroed buffer the
    /// remote client should write into.
    pub fn negotiate(&mut self, width: u32, height: u32) -> Result<Vec<u8>, DrcError> {
        let (expected_width, expected_height) = self.controller;
        if (width, height) != self.controller {
            return Err(DrcError::ResolutionMismatch {
                remote_width: width,
                remote_height: height,
                expected_width,
                expected_height,
            });
        }

        self.display.create_surface(width, height)?;

        let format = RemoteSurfaceFormat {
            pixel: self.pixel_format(),
            width: expected_width,
            height: expected_height,
        };
        let buffer = vec![0u8; format.buffer_len()];
        info!(width, height, bpp = format.pixel.bits_per_pixel, "surface negotiated");
        self.format = Some(format);
        Ok(buffer)
    }

    /// Upload and present a framebuffer.
    pub fn present(&mut self, framebuffer: &[u8]) -> Result<(), DrcError> {
        let Some(format) = self.format else {
            debug!("present before negotiation, skipped");
            return Ok(());
        };
        let expected = format.buffer_len();
        if framebuffer.len() < expected {
            return Err(DrcError::FramebufferSize {
                expected,
                actual: framebuffer.len(),
            });
        }
        self.display.present(&framebuffer[..expected], format.pitch())
    }

    /// Drop the session's surface.
    pub fn close(&mut self) {
        self.format = None;
        self.display.close_surface();
    }
}

// ── Tests ────────────────────────────────────────────────────────
