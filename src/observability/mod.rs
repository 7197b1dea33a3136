//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (structured log events inside request spans)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Prometheus scrape of the metrics address
//! ```
//!
//! # Design Decisions
//! - The request ID flows through every log line via the request span
//! - Metrics are cheap (atomic updates); recording never fails a request
//! - The exporter is optional; a failed install is logged, not fatal

pub mod logging;
pub mod metrics;
