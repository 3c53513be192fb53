use super::weights::{WeightTable, weighted_sum};

/// Mod 11 check digit, weights applied left to right
///
/// A remainder of 0 maps to 5 and a remainder of 1 maps to 0; everything
/// else is `11 - remainder`.
pub fn mod11_check_digit(payload: &[u8]) -> u32 {
    let sum = weighted_sum(payload.iter().copied(), WeightTable::MOD11);
    match sum % 11 {
        0 => 5,
        1 => 0,
        m => (11 - m) as u32,
    }
}
