//! usps_tracking - USPS tracking code validation
//!
//! Checks the human-readable form of two USPS barcode symbologies:
//! - USS Code 128 Subset C: 20-22 digits ending in a mod10 check digit
//! - USS Code 39: `AA` + 8 digits + check digit + `US`, mod11 (or mod10)
//!
//! Every call is a pure function of its input string.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Check digit arithmetic (weighted sums, mod10, mod11)
pub mod checksum;
/// Validator settings and environment overrides
pub mod config;
/// Error types
pub mod error;
/// Shape grammars for each symbology
pub mod grammar;
/// Core value types (NormalizedCode, Symbology, ValidCode, ...)
pub mod models;
/// Whitespace removal and classification
pub mod normalizer;
/// Helpers for the command-line tool
pub mod tools;
/// Orchestration across symbologies
pub mod validator;

pub use config::ValidatorConfig;
pub use error::{PayloadError, Rejection, TrackingValidationError};
pub use models::{CheckRule, NormalizedCode, ParsedCandidate, ShapeClass, Symbology, ValidCode};
pub use normalizer::normalize;
pub use validator::{Attempt, ValidationReport, Validator, check_digit, complete};

/// Validate a raw tracking code with default settings
///
/// Whitespace anywhere in `raw` is ignored. On success the normalized code is
/// returned; on failure the error carries `raw` unchanged.
///
/// # Example
/// ```
/// let code = usps_tracking::validate(" EJ 958083578 US ").unwrap();
/// assert_eq!(code.as_str(), "EJ958083578US");
///
/// let err = usps_tracking::validate("EJ958083579US").unwrap_err();
/// assert_eq!(err.to_string(), "The Tracking Code \"EJ958083579US\" is not valid");
/// ```
pub fn validate(raw: &str) -> Result<ValidCode, TrackingValidationError> {
    Validator::new().validate(raw)
}

/// Diagnose a raw tracking code with default settings
pub fn explain(raw: &str) -> ValidationReport {
    Validator::new().explain(raw)
}

/// Validate many codes with default settings, preserving order
pub fn validate_batch<S>(inputs: &[S]) -> Vec<Result<ValidCode, TrackingValidationError>>
where
    S: AsRef<str> + Sync,
{
    Validator::new().validate_batch(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty() {
        let err = validate("").unwrap_err();
        assert_eq!(err.value(), "");
    }

    #[test]
    fn test_validate_known_codes() {
        let code = validate("70132630000013657033").unwrap();
        assert_eq!(code.symbology(), Symbology::Uss128);
        assert_eq!(code.rule(), CheckRule::Mod10);

        let code = validate("EJ958083578US").unwrap();
        assert_eq!(code.symbology(), Symbology::Uss39);
        assert_eq!(code.rule(), CheckRule::Mod11);
    }

    #[test]
    fn test_explain_agrees_with_validate() {
        for input in ["", "EJ958083578US", "71921137587335660817", "70132630000013657033"] {
            assert_eq!(explain(input).is_valid(), validate(input).is_ok(), "{input}");
        }
    }
}
