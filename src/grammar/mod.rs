//! Shape grammars
//!
//! Decides whether a normalized code has the structure of a symbology and,
//! if so, splits it into weighted payload and declared check digit. A shape
//! mismatch is an ordinary `None`, not an error.

/// USS Code 128 Subset C grammar
pub mod uss128;
/// USS Code 39 grammar
pub mod uss39;

use crate::models::{NormalizedCode, ParsedCandidate, Symbology};

/// Match `code` against the grammar of `symbology`, anchored to the whole
/// string
pub fn match_shape(code: &NormalizedCode, symbology: Symbology) -> Option<ParsedCandidate> {
    match symbology {
        Symbology::Uss128 => uss128::match_uss128(code),
        Symbology::Uss39 => uss39::match_uss39(code),
    }
}

/// Value of an ASCII digit byte; callers have already checked the class
#[inline]
pub(crate) fn digit_value(b: u8) -> u8 {
    b - b'0'
}
