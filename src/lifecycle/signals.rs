//! OS signal handling.
//!
//! SIGHUP re-reads the configuration file through the `ConfigStore`. A bad
//! file is logged and the running configuration is kept. Installing the
//! handler also stops SIGHUP from terminating the process mid-build.

use std::io;

use tokio::sync::broadcast;

use crate::config::ConfigStore;

/// Registered SIGHUP listener.
///
/// Registration happens in `install`, before any task is spawned, so a
/// signal that arrives right after startup is never lost.
pub struct ReloadSignal {
    #[cfg(unix)]
    hangup: tokio::signal::unix::Signal,
}

impl ReloadSignal {
    /// Register the SIGHUP handler. Must be called inside a Tokio runtime.
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let hangup = signal(SignalKind::hangup())?;
        tracing::debug!("SIGHUP reload handler installed");
        Ok(Self { hangup })
    }

    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        tracing::debug!("SIGHUP is not available on this platform; reload via --watch only");
        Ok(Self {})
    }

    /// Reload on every SIGHUP until shutdown is triggered.
    pub async fn run(mut self, store: ConfigStore, mut shutdown: broadcast::Receiver<()>) {
        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                received = self.next() => {
                    if !received {
                        break;
                    }
                    tracing::info!(path = %store.path().display(), "SIGHUP received, reloading configuration");
                    // Errors are logged by the store; the old config stays.
                    let _ = store.reload();
                }
            }
        }
        tracing::debug!("Reload listener stopped");
    }

    #[cfg(unix)]
    async fn next(&mut self) -> bool {
        self.hangup.recv().await.is_some()
    }

    #[cfg(not(unix))]
    async fn next(&mut self) -> bool {
        std::future::pending::<bool>().await
    }
}
