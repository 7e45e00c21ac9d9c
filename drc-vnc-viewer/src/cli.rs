//! Command-line interface.
//!
//! ```text
//! drc-vnc-viewer [--joystick] [--viewonly] host[:display]
//! drc-vnc-viewer --listen
//! drc-vnc-viewer --gen-config
//! ```
//!
//! The single-dash spellings `-joystick`, `-viewonly` and `-listen`
//! are accepted as well.

use std::path::PathBuf;

use clap::Parser;

/// Flags that may be written with a single dash.
const SINGLE_DASH_FLAGS: &[&str] = &["joystick", "viewonly", "listen"];

#[derive(Parser, Debug)]
#[command(name = "drc-vnc-viewer", about = "VNC viewer for the Wii U GamePad")]
pub struct Cli {
    /// Path to configuration TOML file.
    #[arg(short, long, default_value = "drc-vnc-viewer.toml")]
    pub config: PathBuf,

    /// Print the default configuration to stdout and exit.
    #[arg(long)]
    pub gen_config: bool,

    /// Feed GamePad sticks and buttons to the system; POWER toggles
    /// between joystick and mouse mode.
    #[arg(long)]
    pub joystick: bool,

    /// Show the desktop only; send no input.
    #[arg(long)]
    pub viewonly: bool,

    /// Wait for the server to connect in; listen again after each session.
    #[arg(long)]
    pub listen: bool,

    /// Server as host[:display] or host::port.
    pub server: Option<String>,
}

/// Rewrite single-dash long flags into the `--flag` form clap expects.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| match arg.strip_prefix('-') {
            Some(name) if SINGLE_DASH_FLAGS.contains(&name) => format!("--{name}"),
            _ => arg,
        })
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_dash_flags_are_rewritten() {
        let out = normalize_args(args(&["viewer", "-joystick", "-listen", "-c", "x.toml", "host:1"]));
        assert_eq!(out, args(&["viewer", "--joystick", "--listen", "-c", "x.toml", "host:1"]));
    }

    #[test]
    fn double_dash_untouched() {
        let out = normalize_args(args(&["viewer", "--viewonly"]));
        assert_eq!(out, args(&["viewer", "--viewonly"]));
    }

    #[test]
    fn parses_single_dash_command_line() {
        let cli = Cli::parse_from(normalize_args(args(&["viewer", "-joystick", "-viewonly", "pc:1"])));
        assert!(cli.joystick);
        assert!(cli.viewonly);
        assert!(!cli.listen);
        assert_eq!(cli.server.as_deref(), Some("pc:1"));
    }
}
