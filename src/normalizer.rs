//! Whitespace removal and shape classification
//!
//! Every whitespace character is deleted, not only leading and trailing ones,
//! so `" EJ 958083578 US "` and `"EJ958083578US"` normalize identically.

use crate::models::NormalizedCode;

/// Strip all whitespace from `raw` and classify what remains
///
/// Never fails: empty or unrecognisable input yields a code that no grammar
/// accepts.
pub fn normalize(raw: &str) -> NormalizedCode {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    NormalizedCode::from_stripped(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShapeClass;

    #[test]
    fn test_strips_interior_whitespace() {
        let code = normalize(" EJ 958083578\tUS \n");
        assert_eq!(code.as_str(), "EJ958083578US");
        assert_eq!(code.len(), 13);
        assert_eq!(code.shape(), ShapeClass::Alphanumeric);
    }

    #[test]
    fn test_unicode_whitespace() {
        // no-break space and ideographic space
        let code = normalize("7013\u{00A0}2630\u{3000}000013657033");
        assert_eq!(code.as_str(), "70132630000013657033");
        assert!(code.is_all_digits());
    }

    #[test]
    fn test_whitespace_only() {
        let code = normalize(" \t\r\n ");
        assert!(code.is_empty());
        assert!(!code.is_all_digits());
    }

    #[test]
    fn test_preserves_case() {
        assert_eq!(normalize("ej958083578us").as_str(), "ej958083578us");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  AB 1234 5678 5 US");
        let twice = normalize(once.as_str());
        assert_eq!(once, twice);
    }
}
