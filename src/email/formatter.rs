//! Seneca email address formatting.
//!
//! # Responsibilities
//! - Build a Seneca address from a bare name
//!
//! # Design Decisions
//! - The name is interpolated verbatim; no trimming, escaping, or validation
//! - Formatting is total: every input yields an address-shaped string

use crate::email::SENECA_DOMAIN;

/// Returns `name` followed by `@` and the Seneca domain.
///
/// The name is not validated: an empty string, control characters, or a
/// name already containing `@` are concatenated as-is. The resulting
/// address does not need to belong to a real account.
pub fn format_email(name: &str) -> String {
    format!("{name}@{SENECA_DOMAIN}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::is_valid_email;

    #[test]
    fn test_appends_domain() {
        assert_eq!(format_email("jchen"), "jchen@myseneca.ca");
        assert_eq!(format_email("first.last"), "first.last@myseneca.ca");
    }

    #[test]
    fn test_name_is_not_sanitized() {
        assert_eq!(format_email(""), "@myseneca.ca");
        assert_eq!(format_email("a@b"), "a@b@myseneca.ca");
        assert_eq!(format_email("jane doe"), "jane doe@myseneca.ca");
    }

    #[test]
    fn test_formatted_addresses_validate() {
        assert!(is_valid_email(&format_email("jchen")));
        assert!(is_valid_email(&format_email("")));
        assert!(is_valid_email(&format_email("a@b")));
    }
}
