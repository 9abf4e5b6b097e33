//! Observability subsystem.
//!
//! All subsystems emit `tracing` events with structured fields; this module
//! only owns subscriber installation.

pub mod logging;

pub use logging::init_logging;
