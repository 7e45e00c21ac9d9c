//! DRC VNC viewer: entry point.
//!
//! ```text
//! drc-vnc-viewer host:1            Connect to display 1 on host
//! drc-vnc-viewer -listen           Wait for a reverse connection
//! drc-vnc-viewer --gen-config      Dump default config and exit
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use drc_core::Session;

use drc_vnc_viewer::app;
use drc_vnc_viewer::backend::{HeadlessDisplay, UnavailableConnector, UnavailableStreamer};
use drc_vnc_viewer::cli::{Cli, normalize_args};
use drc_vnc_viewer::config::ViewerConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse_from(normalize_args(std::env::args()));

    if cli.gen_config {
        let text = toml::to_string_pretty(&ViewerConfig::default())?;
        println!("{text}");
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = ViewerConfig::load(&cli.config);
    config.apply_cli(&cli);

    // Init tracing.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("drc-vnc-viewer v{}", env!("CARGO_PKG_VERSION"));

    let session_config = match config.session_config() {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut session = Session::new(
        session_config,
        UnavailableConnector,
        UnavailableStreamer,
        HeadlessDisplay::new(config.display.title.clone()),
    );

    match app::run(&mut session).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
