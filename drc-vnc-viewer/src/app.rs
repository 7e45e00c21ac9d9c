//! Process-level driver around a [`Session`].

use tracing::{error, info};

use drc_core::{DrcError, LocalDisplay, RemoteConnector, Session, Streamer};

/// Start the streamer, run sessions until done or interrupted, stop.
///
/// Fails if the streamer cannot start or a session hits a fatal error.
pub async fn run<C, S, D>(session: &mut Session<C, S, D>) -> Result<(), DrcError>
where
    C: RemoteConnector,
    S: Streamer,
    D: LocalDisplay,
{
    if let Err(e) = session.init() {
        error!("unable to start streamer: {e}");
        return Err(e);
    }

    let result = tokio::select! {
        result = session.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted");
            Ok(())
        }
    };

    info!("shutting down");
    session.shutdown();
    result
}

// ── Tests ────────────────────────────────────────────────────────
