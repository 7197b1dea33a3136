//! JSON response payloads for the email endpoints.
//!
//! # Responsibilities
//! - Fix the wire shape of validation and formatting results
//!
//! # Design Decisions
//! - Field declaration order is the wire order; tests pin the exact shape
//! - Payloads echo the input verbatim so clients can correlate responses

use serde::{Deserialize, Serialize};

/// Body of `GET /validate/{email}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// The candidate exactly as received, after URL decoding.
    pub email: String,

    /// Whether the candidate ends with the Seneca domain suffix.
    pub valid: bool,
}

/// Body of `GET /format/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatResponse {
    /// The name exactly as received, after URL decoding.
    pub name: String,

    /// The formatted Seneca address.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_response_shape() {
        let body = ValidationResponse {
            email: "jchen@myseneca.ca".to_string(),
            valid: true,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"email":"jchen@myseneca.ca","valid":true}"#
        );
    }

    #[test]
    fn test_format_response_shape() {
        let body = FormatResponse {
            name: "jchen".to_string(),
            email: "jchen@myseneca.ca".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"name":"jchen","email":"jchen@myseneca.ca"}"#
        );
    }
}
