/// Non-empty table of positional weights, repeated cyclically past its end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightTable {
    weights: &'static [u32],
}

impl WeightTable {
    /// [3, 1], aligned with the rightmost digit
    pub const MOD10: WeightTable = WeightTable { weights: &[3, 1] };

    /// Carrier position weights, aligned with the leftmost digit
    pub const MOD11: WeightTable = WeightTable {
        weights: &[8, 6, 4, 2, 3, 5, 9, 7],
    };

    /// Returns None for an empty table
    pub fn new(weights: &'static [u32]) -> Option<Self> {
        if weights.is_empty() {
            return None;
        }
        Some(Self { weights })
    }

    /// Weight applied at position `i`
    #[inline]
    pub fn weight_at(&self, i: usize) -> u32 {
        self.weights[i % self.weights.len()]
    }

    /// Number of distinct weights before the table repeats
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Endless iterator over the effective weight sequence
    pub fn cycle(&self) -> impl Iterator<Item = u32> + '_ {
        self.weights.iter().copied().cycle()
    }
}

/// Sum of `digit * weight` with weights taken cyclically from position 0
///
/// Direction is the caller's choice: pass `payload.iter().rev()` to align
/// weight 0 with the last digit.
pub fn weighted_sum<I>(digits: I, weights: WeightTable) -> u64
where
    I: IntoIterator<Item = u8>,
{
    digits
        .into_iter()
        .zip(weights.cycle())
        .map(|(d, w)| d as u64 * w as u64)
        .sum()
}
