//! Observability subsystem.
//!
//! All subsystems emit `tracing` events with structured fields
//! (paths, archive type, pass counts); `logging.rs` installs the subscriber
//! that renders them.

pub mod logging;
