//! Seneca email address validation.
//!
//! # Responsibilities
//! - Decide whether a candidate string is a well-formed Seneca address
//!
//! # Design Decisions
//! - Validation is a suffix test, not full address-grammar validation
//! - Matching is case-sensitive and anchored at the end of the string
//! - The local part is never inspected; an empty local part passes

/// Suffix every well-formed Seneca address ends with.
pub const SENECA_SUFFIX: &str = "@myseneca.ca";

/// Returns `true` when `email` ends with [`SENECA_SUFFIX`].
///
/// Any prefix is accepted, including an empty one or one containing further
/// `@` separators: `"@myseneca.ca"` and `"a@b@myseneca.ca"` both validate.
pub fn is_valid_email(email: &str) -> bool {
    // TODO: require a non-empty local part before the separator.
    email.ends_with(SENECA_SUFFIX)
}
