//! Sale price calculation.

use rust_decimal::prelude::*;

/// Compute the sale price for a unit bought at `purchase_value` and sold with
/// a `margin_percent` markup: `purchase_value * (1 + margin_percent / 100)`.
///
/// No rounding is applied. Negative margins are accepted and yield a price
/// below cost; margins below -100% yield a negative price. Arithmetic
/// saturates at the `Decimal` bounds instead of panicking.
pub fn compute_sale_price(purchase_value: Decimal, margin_percent: Decimal) -> Decimal {
    let factor = Decimal::ONE.saturating_add(margin_percent / Decimal::ONE_HUNDRED);
    purchase_value.saturating_mul(factor)
}

/// Render a monetary value with exactly two decimal places (half away from
/// zero). Display only; stored values keep full precision.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wine_with_forty_percent_margin_sells_at_63() {
        let sale = compute_sale_price(Decimal::new(4500, 2), Decimal::new(40, 0));
        assert_eq!(sale, Decimal::new(63, 0));
        assert_eq!(format_amount(sale), "63.00");
    }

    #[test]
    fn beer_sale_price_is_stored_unrounded() {
        let sale = compute_sale_price(Decimal::new(850, 2), Decimal::new(35, 0));
        // Stored value keeps the third decimal; only the display rounds it.
        assert_eq!(sale, Decimal::new(11475, 3));
        assert_ne!(sale, Decimal::new(1148, 2));
        assert_eq!(format_amount(sale), "11.48");
    }

    #[test]
    fn zero_purchase_value_yields_zero() {
        assert_eq!(
            compute_sale_price(Decimal::ZERO, Decimal::new(50, 0)),
            Decimal::ZERO
        );
    }

    #[test]
    fn negative_margin_sells_below_cost() {
        let sale = compute_sale_price(Decimal::new(100, 0), Decimal::new(-25, 0));
        assert_eq!(sale, Decimal::new(75, 0));
    }

    #[test]
    fn minus_hundred_percent_margin_is_free() {
        let sale = compute_sale_price(Decimal::new(100, 0), Decimal::new(-100, 0));
        assert!(sale.is_zero());
    }

    #[test]
    fn margin_below_minus_hundred_yields_negative_price() {
        let sale = compute_sale_price(Decimal::new(10, 0), Decimal::new(-150, 0));
        assert_eq!(sale, Decimal::new(-5, 0));
    }

    #[test]
    fn format_amount_pads_and_rounds() {
        assert_eq!(format_amount(Decimal::new(270, 0)), "270.00");
        assert_eq!(format_amount(Decimal::new(-5, 1)), "-0.50");
        assert_eq!(format_amount(Decimal::new(12344, 3)), "12.34");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the sale price equals the closed-form formula exactly.
            #[test]
            fn sale_price_matches_formula(
                purchase_cents in 0i64..100_000_000,
                margin_tenths in -2_000i64..10_000
            ) {
                let purchase = Decimal::new(purchase_cents, 2);
                let margin = Decimal::new(margin_tenths, 1);

                let expected = purchase * (Decimal::ONE + margin / Decimal::ONE_HUNDRED);
                prop_assert_eq!(compute_sale_price(purchase, margin), expected);
            }

            /// Property: a non-negative margin never sells below cost.
            #[test]
            fn non_negative_margin_never_below_cost(
                purchase_cents in 0i64..100_000_000,
                margin in 0i64..1_000
            ) {
                let purchase = Decimal::new(purchase_cents, 2);
                prop_assert!(compute_sale_price(purchase, Decimal::new(margin, 0)) >= purchase);
            }
        }
    }
}
