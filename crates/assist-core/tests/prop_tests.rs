//! Property-based tests over the utility functions.
//!
//! Uses `proptest` to exercise the lottery, phone, and day-difference
//! contracts across randomly generated inputs, catching edge cases that
//! hand-written vectors might miss.

use assist_core::{days_from, generate_ticket_numbers, normalize_phone};
use chrono::NaiveDate;
use proptest::prelude::*;

/// Generate a parameter triple satisfying every lottery constraint.
fn arb_valid_lottery_params() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..=999).prop_flat_map(|min| {
        (min + 1..=1000).prop_flat_map(move |max| {
            (1u32..=max - min + 1).prop_map(move |quantity| (min, max, quantity))
        })
    })
}

/// Generate a valid date, capped at day 28 so every (y, m, d) combination exists.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn valid_lottery_params_yield_exact_unique_sorted_picks(
        (min, max, quantity) in arb_valid_lottery_params()
    ) {
        let numbers = generate_ticket_numbers(min, max, quantity);

        prop_assert_eq!(numbers.len(), quantity as usize);
        prop_assert!(numbers.iter().all(|&n| (min..=max).contains(&n)));
        // Strictly ascending implies sorted and unique at once.
        prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn oversized_quantity_yields_empty(min in 1u32..=999, extra in 1u32..100) {
        let max = 1000u32.min(min + 10);
        let span = max - min + 1;
        prop_assert!(generate_ticket_numbers(min, max, span + extra).is_empty());
    }

    #[test]
    fn inverted_or_degenerate_range_yields_empty(min in 1u32..=1000, quantity in 1u32..50) {
        // min >= max is always invalid, whatever the quantity.
        prop_assert!(generate_ticket_numbers(min, min, quantity).is_empty());
        prop_assert!(generate_ticket_numbers(min, min.saturating_sub(1), quantity).is_empty());
    }

    #[test]
    fn out_of_bounds_range_yields_empty(max in 2u32..=1000, above in 1001u32..2000) {
        prop_assert!(generate_ticket_numbers(0, max, 1).is_empty());
        prop_assert!(generate_ticket_numbers(1, above, 1).is_empty());
    }

    #[test]
    fn normalized_phone_is_plus_followed_by_digits(raw in ".*") {
        let normalized = normalize_phone(&raw);

        prop_assert!(normalized.starts_with('+'));
        prop_assert!(normalized[1..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn phone_normalization_is_idempotent(raw in ".*") {
        let once = normalize_phone(&raw);
        prop_assert_eq!(normalize_phone(&once), once);
    }

    #[test]
    fn days_from_matches_date_arithmetic(given in arb_date(), today in arb_date()) {
        let formatted = given.format("%Y-%m-%d").to_string();
        prop_assert_eq!(days_from(&formatted, today).unwrap(), (today - given).num_days());
    }
}
