use super::digit_value;
use crate::models::{NormalizedCode, ParsedCandidate, ShapeClass, Symbology};

/// Total length: prefix(2) + payload(8) + check(1) + suffix(2)
pub const CODE_LEN: usize = 13;
/// Number of weighted digits
pub const PAYLOAD_LEN: usize = 8;
/// Fixed suffix, case-sensitive
pub const SUFFIX: &str = "US";

const PREFIX_LEN: usize = 2;
const CHECK_POS: usize = PREFIX_LEN + PAYLOAD_LEN;

/// Two ASCII alphanumerics, eight digits, one check digit, literal "US"
pub fn match_uss39(code: &NormalizedCode) -> Option<ParsedCandidate> {
    // A letter is mandatory in the suffix, so a numeric string can never match
    if code.shape() != ShapeClass::Alphanumeric || code.len() != CODE_LEN {
        return None;
    }

    let bytes = code.as_str().as_bytes();
    if !bytes.ends_with(SUFFIX.as_bytes()) {
        return None;
    }

    let digits = &bytes[PREFIX_LEN..=CHECK_POS];
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    Some(ParsedCandidate {
        symbology: Symbology::Uss39,
        payload: digits[..PAYLOAD_LEN].iter().copied().map(digit_value).collect(),
        declared_check: digit_value(bytes[CHECK_POS]) as u32,
    })
}
