//! Check digit arithmetic
//!
//! Both rules share one primitive: a positional weighted sum where a short
//! weight table repeats cyclically across the payload.
//! - Mod10: weights [3, 1], first weight on the rightmost digit
//! - Mod11: weights [8, 6, 4, 2, 3, 5, 9, 7], first weight on the leftmost digit

/// Mod 10 rule (USS-128, USS-39 fallback)
pub mod mod10;
/// Mod 11 rule (USS-39)
pub mod mod11;
/// Cyclic weight tables
pub mod weights;

pub use mod10::mod10_check_digit;
pub use mod11::mod11_check_digit;
pub use weights::{WeightTable, weighted_sum};

use crate::models::CheckRule;

impl CheckRule {
    /// Compute the check digit for `payload` (digits in reading order)
    pub fn check_digit(&self, payload: &[u8]) -> u32 {
        match self {
            CheckRule::Mod10 => mod10_check_digit(payload),
            CheckRule::Mod11 => mod11_check_digit(payload),
        }
    }
}
