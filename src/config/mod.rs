//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → env.rs (snapshot of recognised variables)
//!     → resolver.rs (present-and-non-empty or literal default)
//!     → RuntimeConfig (immutable, shared via Arc)
//!     → defines.rs (build-time constant table)
//!     → validation.rs (non-fatal lint)
//! ```
//!
//! # Design Decisions
//! - Only the three backend URLs are environment-driven
//! - An empty variable counts as unset
//! - Resolution never fails; problems surface as lint warnings

pub mod defines;
pub mod env;
pub mod render;
pub mod resolver;
pub mod schema;
pub mod validation;

pub use env::EnvSnapshot;
pub use resolver::resolve;
pub use schema::{
    AdapterMode, BackendTargets, DevServerConfig, OutputMode, RuntimeConfig, ServerConfig,
    WatchConfig,
};
