//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT)
//!     → env.rs (read & parse)
//!     → ServerConfig (defaults + override, immutable)
//!     → passed to the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload mechanism
//! - All fields have code-level defaults; the environment only overrides the port
//! - No config files: the deployment contract is a single PORT variable

pub mod env;
pub mod schema;

pub use env::load_from_env;
pub use env::ConfigError;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ServerConfig;
pub use schema::TimeoutConfig;
