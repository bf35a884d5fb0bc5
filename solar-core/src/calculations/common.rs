//! Shared helpers for the estimation calculators.

use rust_decimal::Decimal;

/// Rounds a monetary value to two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a monetary value to whole currency units, half-up.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(99704.5)), dec!(99705));
/// assert_eq!(round_whole(dec!(99704.4)), dec!(99704));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(16617.504)), dec!(16617.50));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(16617.505)), dec!(16617.51));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01)); // Away from zero
    }

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_up_at_midpoint() {
        assert_eq!(round_whole(dec!(0.5)), dec!(1));
    }

    #[test]
    fn round_whole_preserves_whole_values() {
        assert_eq!(round_whole(dec!(99705)), dec!(99705));
    }

    // =========================================================================
    // deg_to_rad tests
    // =========================================================================

    #[test]
    fn deg_to_rad_maps_180_to_pi() {
        assert_relative_eq!(deg_to_rad(180.0), std::f64::consts::PI);
    }

    #[test]
    fn deg_to_rad_maps_zero_to_zero() {
        assert_eq!(deg_to_rad(0.0), 0.0);
    }
}
