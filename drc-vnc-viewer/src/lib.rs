//! # drc-vnc-viewer
//!
//! Mirrors a VNC desktop onto the Wii U GamePad. Connects to (or waits
//! for) a VNC server, pushes the framebuffer to the GamePad, and turns
//! GamePad touches, triggers and the local window's mouse and keyboard
//! into remote pointer and key events.

pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
