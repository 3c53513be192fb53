use super::digit_value;
use crate::models::{NormalizedCode, ParsedCandidate, ShapeClass, Symbology};

/// Shortest accepted code: 19 payload digits plus the check digit
pub const MIN_LEN: usize = 20;
/// Longest accepted code: 21 payload digits plus the check digit
pub const MAX_LEN: usize = 22;

/// All digits, 20 to 22 long; the last digit is the declared check
pub fn match_uss128(code: &NormalizedCode) -> Option<ParsedCandidate> {
    if code.shape() != ShapeClass::Numeric {
        return None;
    }
    if !(MIN_LEN..=MAX_LEN).contains(&code.len()) {
        return None;
    }

    let bytes = code.as_str().as_bytes();
    let (payload, check) = bytes.split_at(bytes.len() - 1);

    Some(ParsedCandidate {
        symbology: Symbology::Uss128,
        payload: payload.iter().copied().map(digit_value).collect(),
        declared_check: digit_value(check[0]) as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    #[test]
    fn test_match_20_digits() {
        let candidate = match_uss128(&normalize("70132630000013657033")).unwrap();
        assert_eq!(candidate.symbology, Symbology::Uss128);
        assert_eq!(
            candidate.payload,
            vec![7, 0, 1, 3, 2, 6, 3, 0, 0, 0, 0, 0, 1, 3, 6, 5, 7, 0, 3]
        );
        assert_eq!(candidate.declared_check, 3);
    }

    #[test]
    fn test_length_bounds() {
        assert!(match_uss128(&normalize(&"1".repeat(19))).is_none());
        assert_eq!(match_uss128(&normalize(&"1".repeat(20))).unwrap().payload.len(), 19);
        assert_eq!(match_uss128(&normalize(&"1".repeat(21))).unwrap().payload.len(), 20);
        assert_eq!(match_uss128(&normalize(&"1".repeat(22))).unwrap().payload.len(), 21);
        assert!(match_uss128(&normalize(&"1".repeat(23))).is_none());
        assert!(match_uss128(&normalize(&"1".repeat(30))).is_none());
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(match_uss128(&normalize("7013263000001365703A")).is_none());
        assert!(match_uss128(&normalize("x70132630000013657033")).is_none());
        assert!(match_uss128(&normalize("70132630000013657033.")).is_none());
    }
}
