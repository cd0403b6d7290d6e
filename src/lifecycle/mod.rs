//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Start reload sources → Build → Stop
//!
//! Shutdown (shutdown.rs):
//!     Build finished → Broadcast → Background tasks exit
//!
//! Signals (signals.rs):
//!     SIGHUP → Trigger config reload
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bad config at startup is fatal
//! - Reload sources start only after the first config is accepted
//! - A reload never changes the build already running

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::ReloadSignal;
