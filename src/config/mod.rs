//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (INI/TOML)
//!     → loader.rs (parse [app] section)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → held by store.rs behind an ArcSwap
//!
//! On reload (SIGHUP or watcher.rs):
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of Arc<AppConfig>
//!     → failure keeps the previous config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - Validation separates syntactic (parsers) from semantic checks
//! - A build works on one snapshot; reloads apply to the next snapshot

pub mod loader;
pub mod schema;
pub mod store;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, ArchiveFormat, ArchiveType, TarCodec};
pub use store::ConfigStore;
pub use validation::ValidationError;
