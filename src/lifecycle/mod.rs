//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Snapshot env → Resolve → Lint → Log → Arc<RuntimeConfig>
//! ```
//!
//! # Design Decisions
//! - Configuration is resolved before anything else starts
//! - Background tasks (source watcher) start last and stop on Ctrl+C

pub mod startup;

pub use startup::bootstrap;
