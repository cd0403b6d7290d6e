use thiserror::Error;

use crate::archive::ArchiveError;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("build task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("config watcher error: {0}")]
    Watch(#[from] notify::Error),
}
