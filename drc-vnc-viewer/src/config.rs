//! Viewer configuration.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use drc_core::{CONTROLLER_HEIGHT, CONTROLLER_WIDTH, ConnectMode, DrcError, SessionConfig};

use crate::cli::Cli;

/// Top-level configuration for the viewer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Where the VNC server is.
    pub connection: ConnectionConfig,
    /// GamePad screen and local window.
    pub display: DisplayConfig,
    /// Outbound GamePad video.
    pub streaming: StreamingConfig,
    /// Input forwarding.
    pub input: InputConfig,
    /// Logging.
    pub logging: LoggingConfig,
}

/// Connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Server as `host[:display]` or `host::port`.
    pub server: String,
    /// Wait for the server to connect to us instead of dialling.
    pub listen: bool,
    /// Port used when `server` names no display or port.
    pub default_port: u16,
    /// Port to accept reverse connections on.
    pub listen_port: u16,
    /// Upper bound on each wait for server messages.
    pub wait_timeout_ms: u64,
    /// Pause before listening again after a session ends.
    pub reconnect_delay_ms: u64,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// GamePad screen width; the server desktop must match.
    pub controller_width: u32,
    /// GamePad screen height; the server desktop must match.
    pub controller_height: u32,
    /// Local window title.
    pub title: String,
}

/// GamePad video settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamingConfig {
    /// Maximum frames per second pushed to the GamePad.
    pub frame_rate: u32,
}

/// Input forwarding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Feed GamePad sticks and buttons to the system; POWER toggles mouse mode.
    pub joystick: bool,
    /// Never send pointer or key events.
    pub view_only: bool,
}

/// Logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level.
    pub level: String,
}

// ── Defaults ─────────────────────────────────────────────────────

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            listen: false,
            default_port: 5900,
            listen_port: 5500,
            wait_timeout_ms: 500,
            reconnect_delay_ms: 1000,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            controller_width: CONTROLLER_WIDTH,
            controller_height: CONTROLLER_HEIGHT,
            title: "DRC VNC Viewer".into(),
        }
    }
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self { frame_rate: 60 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────

impl ViewerConfig {
    /// Load from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("invalid config {}: {e}; using defaults", path.display());
                Self::default()
            }),
            Err(_) => {
                tracing::debug!("no config at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Command-line flags override the file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(server) = &cli.server {
            self.connection.server = server.clone();
        }
        self.connection.listen |= cli.listen;
        self.input.joystick |= cli.joystick;
        self.input.view_only |= cli.viewonly;
    }

    /// Build the session settings.
    pub fn session_config(&self) -> Result<SessionConfig, DrcError> {
        let conn = &self.connection;
        let mode = if conn.listen {
            ConnectMode::Listen {
                addr: SocketAddr::from(([0, 0, 0, 0], conn.listen_port)),
            }
        } else if conn.server.is_empty() {
            return Err(DrcError::InvalidConfig("no server given".into()));
        } else {
            let (host, port) = parse_server(&conn.server, conn.default_port)?;
            ConnectMode::Connect { host, port }
        };

        let mut config = SessionConfig::new(mode);
        config.joystick = self.input.joystick;
        config.view_only = self.input.view_only;
        config.frame_rate = self.streaming.frame_rate;
        config.wait_timeout = Duration::from_millis(conn.wait_timeout_ms);
        config.reconnect_delay = Duration::from_millis(conn.reconnect_delay_ms);
        config.controller = (self.display.controller_width, self.display.controller_height);
        Ok(config)
    }
}

/// Parse `host`, `host:display` or `host::port`.
///
/// Displays below 100 are offsets from `base_port`; larger values are
/// taken as a port.
pub fn parse_server(server: &str, base_port: u16) -> Result<(String, u16), DrcError> {
    let invalid = || DrcError::InvalidConfig(format!("invalid server {server:?}"));

    let (host, port) = if let Some((host, port)) = server.split_once("::") {
        (host, port.parse::<u16>().map_err(|_| invalid())?)
    } else if let Some((host, display)) = server.rsplit_once(':') {
        let n = display.parse::<u16>().map_err(|_| invalid())?;
        let port = if n < 100 {
            base_port.checked_add(n).ok_or_else(invalid)?
        } else {
            n
        };
        (host, port)
    } else {
        (server, base_port)
    };

    if host.is_empty() {
        return Err(invalid());
    }
    Ok((host.to_string(), port))
}

// ── Tests ────────────────────────────────────────────────────────
