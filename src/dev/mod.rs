//! Development server support.
//!
//! # Responsibilities
//! - Host header allow-list check (hosts.rs)
//! - Source tree watching with optional polling (watch.rs)

pub mod hosts;
pub mod watch;

pub use hosts::AllowedHosts;
pub use watch::{ActiveWatcher, SourceChange, SourceWatcher, WatchError};
