use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RoofDirection;

/// User-provided answers, collected one wizard step at a time.
///
/// All fields are optional because the record starts empty and fills in
/// as the user answers. Mutation always goes through the `with_*`
/// builders, which return a fresh record rather than editing in place;
/// the wizard swaps the whole record on every answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Roof area available for panels, in square metres.
    pub roof_area_sqm: Option<f64>,

    /// Roof tilt angle in degrees (0 = flat, 90 = vertical).
    pub roof_angle_deg: Option<f64>,

    /// Compass direction the roof faces.
    pub roof_direction: Option<RoofDirection>,

    /// Monthly electricity bill, in the configured currency.
    pub monthly_bill: Option<Decimal>,
}

impl EstimateInput {
    /// An input with no answers yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_roof_area(&self, area_sqm: f64) -> Self {
        Self {
            roof_area_sqm: Some(area_sqm),
            ..self.clone()
        }
    }

    pub fn with_roof_angle(&self, angle_deg: f64) -> Self {
        Self {
            roof_angle_deg: Some(angle_deg),
            ..self.clone()
        }
    }

    pub fn with_roof_direction(&self, direction: RoofDirection) -> Self {
        Self {
            roof_direction: Some(direction),
            ..self.clone()
        }
    }

    pub fn with_monthly_bill(&self, bill: Decimal) -> Self {
        Self {
            monthly_bill: Some(bill),
            ..self.clone()
        }
    }

    /// True when every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.roof_area_sqm.is_some()
            && self.roof_angle_deg.is_some()
            && self.roof_direction.is_some()
            && self.monthly_bill.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_input_has_no_answers() {
        let input = EstimateInput::empty();

        assert_eq!(input.roof_area_sqm, None);
        assert!(!input.is_complete());
    }

    #[test]
    fn builders_preserve_unrelated_fields() {
        let input = EstimateInput::empty()
            .with_roof_area(30.0)
            .with_roof_direction(RoofDirection::South);

        let updated = input.with_roof_angle(45.0);

        assert_eq!(updated.roof_area_sqm, Some(30.0));
        assert_eq!(updated.roof_direction, Some(RoofDirection::South));
        assert_eq!(updated.roof_angle_deg, Some(45.0));
        // The original record is untouched.
        assert_eq!(input.roof_angle_deg, None);
    }

    #[test]
    fn is_complete_requires_all_four_answers() {
        let input = EstimateInput::empty()
            .with_roof_area(30.0)
            .with_roof_angle(45.0)
            .with_roof_direction(RoofDirection::South);

        assert!(!input.is_complete());
        assert!(input.with_monthly_bill(dec!(900)).is_complete());
    }
}
