use super::weights::{WeightTable, weighted_sum};

/// Mod 10 check digit with weight 3 on the rightmost payload digit
///
/// `payload` is in reading order; the reversal happens here so callers never
/// pre-reverse.
pub fn mod10_check_digit(payload: &[u8]) -> u32 {
    let sum = weighted_sum(payload.iter().rev().copied(), WeightTable::MOD10);
    ((10 - sum % 10) % 10) as u32
}
