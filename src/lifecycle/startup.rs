//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration (fail fast)
//! - Start reload sources (SIGHUP, optional file watcher)
//! - Run the archive build off the async threads
//! - Stop background tasks once the build is done

use crate::archive::{build_archive, BuildReport};
use crate::cli::Cli;
use crate::config::{ConfigError, ConfigStore};
use crate::config::watcher::ConfigWatcher;
use crate::error::Error;
use crate::lifecycle::signals::ReloadSignal;
use crate::lifecycle::Shutdown;

/// Run one build as described by the command line.
pub async fn run(cli: Cli) -> Result<BuildReport, Error> {
    let path = cli.config_path()?;

    let store = ConfigStore::load(&path).map_err(|e| {
        log_config_error(&e);
        tracing::error!(path = %path.display(), "Config file is invalid");
        e
    })?;

    let config = store.current();
    tracing::info!(
        path = %path.display(),
        inputs = config.input_files.len(),
        output = %config.output_file.display(),
        archive_type = %config.archive_type,
        compress_level = config.compress_level,
        "Configuration loaded"
    );

    // Dropping the watcher stops it, so it lives until the build returns.
    let _watcher = if cli.watch {
        Some(ConfigWatcher::new(store.clone()).run()?)
    } else {
        None
    };

    let shutdown = Shutdown::new();
    let reload = ReloadSignal::install()?;
    let listener = tokio::spawn(reload.run(store.clone(), shutdown.subscribe()));

    let build = tokio::task::spawn_blocking(move || build_archive(&config)).await;

    shutdown.trigger();
    if let Err(e) = listener.await {
        tracing::warn!(error = %e, "Reload listener ended abnormally");
    }

    let report = build??;
    Ok(report)
}

fn log_config_error(error: &ConfigError) {
    match error {
        ConfigError::Validation(errors) => {
            for e in errors {
                tracing::error!("{}", e);
            }
        }
        other => tracing::error!("{}", other),
    }
}
