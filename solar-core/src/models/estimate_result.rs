use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived estimate, recomputed in full from an [`EstimateInput`].
///
/// Never user-edited and never updated incrementally: the wizard throws
/// the old record away and computes a fresh one whenever results are
/// shown, so stale derived values cannot survive an input change.
///
/// [`EstimateInput`]: super::EstimateInput
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Whole panels that fit on the roof.
    pub panel_count: u32,

    /// Area actually covered by those panels, in square metres.
    pub usable_area_sqm: f64,

    /// Estimated system output in kW.
    pub estimated_production_kw: f64,

    /// Estimated savings per year.
    pub yearly_savings: Decimal,

    /// Estimated installation cost, rounded to whole currency units.
    pub installation_cost: Decimal,

    /// Years until the installation pays for itself.
    ///
    /// `None` when yearly savings are zero, where a payback period is
    /// undefined rather than infinite.
    pub payback_years: Option<Decimal>,
}
