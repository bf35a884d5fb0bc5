use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a [`SystemConfig`] contains out-of-range coefficients.
#[derive(Debug, Error, PartialEq)]
pub enum SystemConfigError {
    /// Panel width must be positive.
    #[error("panel width must be positive, got {0}")]
    InvalidPanelWidth(f64),

    /// Panel height must be positive.
    #[error("panel height must be positive, got {0}")]
    InvalidPanelHeight(f64),

    /// The production coefficient must be positive.
    #[error("production coefficient must be positive, got {0} kW/m²")]
    InvalidProductionCoefficient(f64),

    /// The optimal tilt angle must lie within 0–90 degrees.
    #[error("optimal tilt angle must be between 0 and 90 degrees, got {0}")]
    InvalidOptimalAngle(f64),

    /// The annual yield factor must be positive.
    #[error("annual yield factor must be positive, got {0} kWh/kW")]
    InvalidYieldFactor(f64),

    /// The energy price must not be negative.
    #[error("energy price must not be negative, got {0}")]
    InvalidEnergyPrice(Decimal),

    /// The installation cost per kW must not be negative.
    #[error("installation cost per kW must not be negative, got {0}")]
    InvalidInstallCost(Decimal),
}

/// Fixed coefficient set the estimators run on.
///
/// The defaults are the canonical constants: a 1.7 m × 1.0 m panel
/// footprint, 0.23 kW of rated output per m² of panel, a 42° optimal
/// tilt, and a flat 1000 kWh/kW annual yield factor. The yield factor
/// is a placeholder conversion, not an irradiance model.
///
/// Prices are unit-agnostic scalars: whatever currency the price per
/// kWh is given in is the currency of every monetary output.
///
/// # Example
///
/// ```
/// use solar_core::SystemConfig;
///
/// let config = SystemConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.panel_width_m, 1.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Width of a single panel in metres.
    pub panel_width_m: f64,

    /// Height of a single panel in metres.
    pub panel_height_m: f64,

    /// Rated panel output per square metre of panel, in kW.
    pub kw_per_sqm: f64,

    /// Tilt angle at which production peaks, in degrees.
    pub optimal_angle_deg: f64,

    /// Annual energy yield per kW of rated output, in kWh.
    pub kwh_per_kw_year: f64,

    /// Price of one kWh of electricity.
    pub price_per_kwh: Decimal,

    /// Installation cost per kW of rated output.
    pub cost_per_kw: Decimal,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            panel_width_m: 1.7,
            panel_height_m: 1.0,
            kw_per_sqm: 0.23,
            optimal_angle_deg: 42.0,
            kwh_per_kw_year: 1000.0,
            price_per_kwh: Decimal::new(250, 2),
            cost_per_kw: Decimal::new(15_000, 0),
        }
    }
}

impl SystemConfig {
    /// Footprint of a single panel in square metres.
    pub fn panel_area_sqm(&self) -> f64 {
        self.panel_width_m * self.panel_height_m
    }

    /// Validates the coefficient set.
    ///
    /// # Errors
    ///
    /// Returns [`SystemConfigError`] if:
    /// - either panel dimension is not positive
    /// - the production coefficient is not positive
    /// - the optimal angle is outside 0–90 degrees
    /// - the annual yield factor is not positive
    /// - either price is negative
    pub fn validate(&self) -> Result<(), SystemConfigError> {
        if !(self.panel_width_m > 0.0) {
            return Err(SystemConfigError::InvalidPanelWidth(self.panel_width_m));
        }
        if !(self.panel_height_m > 0.0) {
            return Err(SystemConfigError::InvalidPanelHeight(self.panel_height_m));
        }
        if !(self.kw_per_sqm > 0.0) {
            return Err(SystemConfigError::InvalidProductionCoefficient(
                self.kw_per_sqm,
            ));
        }
        if !(0.0..=90.0).contains(&self.optimal_angle_deg) {
            return Err(SystemConfigError::InvalidOptimalAngle(
                self.optimal_angle_deg,
            ));
        }
        if !(self.kwh_per_kw_year > 0.0) {
            return Err(SystemConfigError::InvalidYieldFactor(self.kwh_per_kw_year));
        }
        if self.price_per_kwh < Decimal::ZERO {
            return Err(SystemConfigError::InvalidEnergyPrice(self.price_per_kwh));
        }
        if self.cost_per_kw < Decimal::ZERO {
            return Err(SystemConfigError::InvalidInstallCost(self.cost_per_kw));
        }
        Ok(())
    }
}
