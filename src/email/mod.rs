//! Seneca email address core.
//!
//! # Data Flow
//! ```text
//! Path parameter (URL-decoded string)
//!     → validator.rs (suffix test → bool)
//!     → formatter.rs (interpolation → String)
//!     → serialized by the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Both operations are pure and total over strings
//! - No shared state; safe to call concurrently from any handler
//! - The HTTP layer owns serialization; this module never sees a request

pub mod formatter;
pub mod validator;

pub use formatter::format_email;
pub use validator::is_valid_email;
pub use validator::SENECA_SUFFIX;

/// Mail domain of all Seneca email addresses.
pub const SENECA_DOMAIN: &str = "myseneca.ca";
