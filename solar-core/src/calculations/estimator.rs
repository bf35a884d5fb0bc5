//! Full-estimate facade: input record in, complete result out.
//!
//! Every call recomputes the whole chain — panel fit, production,
//! savings — from the current input. Nothing is cached between calls,
//! so a changed answer can never leave a stale derived value behind.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use solar_core::{EstimateInput, RoofDirection, SystemConfig};
//! use solar_core::calculations::Estimator;
//!
//! let estimator = Estimator::new(SystemConfig::default());
//! let input = EstimateInput::empty()
//!     .with_roof_area(30.0)
//!     .with_roof_angle(42.0)
//!     .with_roof_direction(RoofDirection::South)
//!     .with_monthly_bill(dec!(900));
//!
//! let result = estimator.estimate(&input).unwrap();
//!
//! assert_eq!(result.panel_count, 17);
//! assert_eq!(result.yearly_savings, dec!(16617.50));
//! ```

use thiserror::Error;
use tracing::debug;

use crate::calculations::panels::PanelFit;
use crate::calculations::production::ProductionEstimator;
use crate::calculations::savings::{SavingsError, SavingsEstimator};
use crate::models::{EstimateInput, EstimateResult, SystemConfig, SystemConfigError};

/// Errors that can occur when computing a full estimate.
#[derive(Debug, Error, PartialEq)]
pub enum EstimateError {
    /// A required answer is missing from the input record.
    #[error("required input '{0}' has not been provided")]
    MissingInput(&'static str),

    #[error(transparent)]
    Config(#[from] SystemConfigError),

    #[error(transparent)]
    Savings(#[from] SavingsError),
}

/// Runs the three calculators in sequence over a complete input record.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: SystemConfig,
}

impl Estimator {
    pub fn new(config: SystemConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Computes a complete [`EstimateResult`] from the input record.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::MissingInput`] if the roof area, tilt
    /// angle, or direction is absent (the monthly bill does not feed the
    /// formulas and is not required here), and propagates calculator
    /// errors otherwise.
    pub fn estimate(
        &self,
        input: &EstimateInput,
    ) -> Result<EstimateResult, EstimateError> {
        let roof_area_sqm = input
            .roof_area_sqm
            .ok_or(EstimateError::MissingInput("roof area"))?;
        let roof_angle_deg = input
            .roof_angle_deg
            .ok_or(EstimateError::MissingInput("roof angle"))?;
        let direction = input
            .roof_direction
            .ok_or(EstimateError::MissingInput("roof direction"))?;

        let fit = PanelFit::new(&self.config).calculate(roof_area_sqm)?;
        let production = ProductionEstimator::new(&self.config).calculate(
            fit.usable_area_sqm,
            roof_angle_deg,
            direction,
        )?;
        let savings =
            SavingsEstimator::new(&self.config).calculate(production.estimated_production_kw)?;

        debug!(
            panels = fit.panel_count,
            kw = production.estimated_production_kw,
            "estimate computed"
        );

        Ok(EstimateResult {
            panel_count: fit.panel_count,
            usable_area_sqm: fit.usable_area_sqm,
            estimated_production_kw: production.estimated_production_kw,
            yearly_savings: savings.yearly_savings,
            installation_cost: savings.installation_cost,
            payback_years: savings.payback_years,
        })
    }
}
