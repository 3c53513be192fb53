//! Property tests for normalization and validation

use proptest::prelude::*;
use usps_tracking::checksum::{WeightTable, weighted_sum};
use usps_tracking::{Symbology, complete, normalize, validate};

fn digit_string(min: usize, max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, min..=max)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

prop_compose! {
    fn arb_uss39_partial()(
        prefix in "[A-Za-z0-9]{2}",
        digits in digit_string(8, 8),
    ) -> String {
        format!("{prefix}{digits}")
    }
}

proptest! {
    #[test]
    fn validate_is_total(input in any::<String>()) {
        let result = validate(&input);
        if let Err(err) = result {
            prop_assert_eq!(err.value(), input.as_str());
        }
    }

    #[test]
    fn normalize_is_idempotent(input in any::<String>()) {
        let once = normalize(&input);
        let twice = normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_does_not_change_verdict(input in "[ \tA-Z0-9]{0,30}") {
        let normalized = normalize(&input);
        let direct = validate(&input).map(|c| c.into_string());
        let via_normalized = validate(normalized.as_str()).map(|c| c.into_string());
        prop_assert_eq!(direct.is_ok(), via_normalized.is_ok());
        if let (Ok(a), Ok(b)) = (direct, via_normalized) {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn completed_uss128_codes_validate(payload in digit_string(19, 21)) {
        let code = complete(Symbology::Uss128, &payload).unwrap();
        let valid = validate(&code).unwrap();
        prop_assert_eq!(valid.symbology(), Symbology::Uss128);
        prop_assert_eq!(valid.as_str(), code.as_str());
    }

    #[test]
    fn completed_uss39_codes_validate(partial in arb_uss39_partial()) {
        let code = complete(Symbology::Uss39, &partial).unwrap();
        prop_assert!(code.ends_with("US"));
        let valid = validate(&code).unwrap();
        prop_assert_eq!(valid.symbology(), Symbology::Uss39);
    }

    #[test]
    fn single_digit_change_breaks_uss128(
        payload in digit_string(19, 21),
        position in any::<prop::sample::Index>(),
        delta in 1u8..10,
    ) {
        let code = complete(Symbology::Uss128, &payload).unwrap();
        let mut bytes = code.into_bytes();
        let i = position.index(bytes.len());
        bytes[i] = b'0' + (bytes[i] - b'0' + delta) % 10;
        let corrupted = String::from_utf8(bytes).unwrap();
        prop_assert!(validate(&corrupted).is_err());
    }

    #[test]
    fn weights_cycle_from_position_zero(digits in proptest::collection::vec(0u8..10, 0..40)) {
        let table = WeightTable::MOD11;
        let expected: u64 = digits
            .iter()
            .enumerate()
            .map(|(i, &d)| d as u64 * [8u64, 6, 4, 2, 3, 5, 9, 7][i % 8])
            .sum();
        prop_assert_eq!(weighted_sum(digits.iter().copied(), table), expected);
    }
}
