//! Site runtime configuration library.
//!
//! Resolves the backend targets, bind settings and dev-server options a
//! server-rendered site needs at boot.

pub mod config;
pub mod dev;
pub mod lifecycle;
pub mod observability;
pub mod probe;

pub use config::{resolve, EnvSnapshot, RuntimeConfig};
