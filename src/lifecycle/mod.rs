//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init observability → Bind listener → Serve
//!
//! Shutdown:
//!     SIGTERM/SIGINT → signals.rs → Shutdown::trigger
//!     → server stops accepting → in-flight requests drain → exit
//! ```
//!
//! # Design Decisions
//! - One trigger, many observers: shutdown is a broadcast channel
//! - Fail fast on startup: any error before serving is fatal

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
