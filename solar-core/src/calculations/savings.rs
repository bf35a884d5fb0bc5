//! Savings, installation cost, and payback period.
//!
//! Money is carried in [`Decimal`]; the estimated production figure is
//! the single point where the `f64` world crosses over. The annual
//! energy figure uses the configured flat kWh-per-kW factor, which is a
//! placeholder conversion rather than an irradiance model.
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | yearly production | production kW × kWh/kW factor |
//! | yearly savings | yearly production × price per kWh |
//! | installation cost | round(production kW × cost per kW) |
//! | payback period | installation cost ÷ yearly savings |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use solar_core::SystemConfig;
//! use solar_core::calculations::SavingsEstimator;
//!
//! let config = SystemConfig::default();
//! let estimator = SavingsEstimator::new(&config);
//!
//! let estimate = estimator.calculate(5.0).unwrap();
//!
//! assert_eq!(estimate.yearly_savings, dec!(12500.00));
//! assert_eq!(estimate.installation_cost, dec!(75000));
//! assert_eq!(estimate.payback_years, Some(dec!(6.00)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{round_half_up, round_whole};
use crate::models::{SystemConfig, SystemConfigError};

/// Errors that can occur during savings calculations.
#[derive(Debug, Error, PartialEq)]
pub enum SavingsError {
    #[error(transparent)]
    Config(#[from] SystemConfigError),

    /// The production figure was NaN or infinite and cannot be priced.
    #[error("estimated production is not a finite number: {0}")]
    NonFiniteProduction(f64),
}

/// Result of the savings calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    /// Energy produced per year, in kWh.
    pub yearly_production_kwh: Decimal,

    /// Savings per year at the configured energy price.
    pub yearly_savings: Decimal,

    /// Installation cost, rounded to whole currency units.
    pub installation_cost: Decimal,

    /// Years until the installation pays for itself; `None` when yearly
    /// savings are not positive, where no payback period exists.
    pub payback_years: Option<Decimal>,
}

/// Calculator for yearly savings, installation cost, and payback.
#[derive(Debug, Clone)]
pub struct SavingsEstimator<'a> {
    config: &'a SystemConfig,
}

impl<'a> SavingsEstimator<'a> {
    pub fn new(config: &'a SystemConfig) -> Self {
        Self { config }
    }

    /// Prices an estimated production figure.
    ///
    /// Zero production is a valid input and yields zero savings with an
    /// undefined payback period, signalled as `None` rather than a
    /// division artifact.
    ///
    /// # Errors
    ///
    /// Returns [`SavingsError`] if the configuration is invalid or the
    /// production figure is not a finite number.
    pub fn calculate(
        &self,
        estimated_production_kw: f64,
    ) -> Result<SavingsEstimate, SavingsError> {
        self.config.validate()?;

        // from_f64_retain is None for NaN, infinities, and values beyond
        // Decimal's range; none of those can be priced.
        let production = Decimal::from_f64_retain(estimated_production_kw).ok_or_else(|| {
            warn!(
                production = estimated_production_kw,
                "unpriceable production figure"
            );
            SavingsError::NonFiniteProduction(estimated_production_kw)
        })?;
        let yield_factor = Decimal::from_f64_retain(self.config.kwh_per_kw_year)
            .ok_or(SavingsError::NonFiniteProduction(self.config.kwh_per_kw_year))?;

        let yearly_production_kwh = round_half_up(production * yield_factor);
        let yearly_savings = round_half_up(yearly_production_kwh * self.config.price_per_kwh);
        let installation_cost = round_whole(production * self.config.cost_per_kw);

        let payback_years = if yearly_savings > Decimal::ZERO {
            Some(round_half_up(installation_cost / yearly_savings))
        } else {
            None
        };

        Ok(SavingsEstimate {
            yearly_production_kwh,
            yearly_savings,
            installation_cost,
            payback_years,
        })
    }
}
