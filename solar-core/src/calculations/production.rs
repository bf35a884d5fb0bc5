//! Production estimation from panel area, tilt, and orientation.
//!
//! The model is three factors multiplied together:
//!
//! | Factor | Formula |
//! |--------|---------|
//! | base production | usable area × rated kW/m² |
//! | angle efficiency | cos(\|tilt − optimal tilt\|) |
//! | direction multiplier | fixed per-direction table |
//!
//! Angle efficiency is exactly 1.0 at the optimal tilt and decays
//! smoothly with angular distance. It is not clamped at zero: a tilt
//! more than 90° from optimal would go negative, but tilt input is
//! restricted to 0–90° so that cannot happen through the wizard.
//!
//! # Example
//!
//! ```
//! use solar_core::{RoofDirection, SystemConfig};
//! use solar_core::calculations::ProductionEstimator;
//!
//! let config = SystemConfig::default();
//! let estimator = ProductionEstimator::new(&config);
//!
//! // 28.9 m² of panels at the optimal 42° tilt, facing south.
//! let estimate = estimator.calculate(28.9, 42.0, RoofDirection::South).unwrap();
//!
//! assert_eq!(estimate.angle_efficiency, 1.0);
//! assert_eq!(estimate.direction_multiplier, 1.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::deg_to_rad;
use crate::models::{RoofDirection, SystemConfig, SystemConfigError};

/// Result of a production estimate, with the intermediate factors kept
/// for display on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionEstimate {
    /// Production before tilt and orientation losses, in kW.
    pub base_production_kw: f64,

    /// Tilt loss factor, 1.0 at the optimal angle.
    pub angle_efficiency: f64,

    /// Orientation loss factor from the direction table.
    pub direction_multiplier: f64,

    /// Final estimated output in kW.
    pub estimated_production_kw: f64,
}

/// Calculator for estimated system output.
#[derive(Debug, Clone)]
pub struct ProductionEstimator<'a> {
    config: &'a SystemConfig,
}

impl<'a> ProductionEstimator<'a> {
    pub fn new(config: &'a SystemConfig) -> Self {
        Self { config }
    }

    /// Estimates system output for the given panel area and orientation.
    ///
    /// Pure and deterministic; the result is non-negative for any tilt
    /// within 90° of the configured optimum.
    ///
    /// # Errors
    ///
    /// Returns [`SystemConfigError`] if the configured coefficients are
    /// invalid.
    pub fn calculate(
        &self,
        usable_area_sqm: f64,
        roof_angle_deg: f64,
        direction: RoofDirection,
    ) -> Result<ProductionEstimate, SystemConfigError> {
        self.config.validate()?;

        let base_production_kw = self.base_production(usable_area_sqm);
        let angle_efficiency = self.angle_efficiency(roof_angle_deg);
        let direction_multiplier = direction.production_multiplier();
        let estimated_production_kw =
            base_production_kw * angle_efficiency * direction_multiplier;

        debug!(
            base_kw = base_production_kw,
            angle_efficiency,
            direction = direction.as_str(),
            estimated_kw = estimated_production_kw,
            "production estimate"
        );

        Ok(ProductionEstimate {
            base_production_kw,
            angle_efficiency,
            direction_multiplier,
            estimated_production_kw,
        })
    }

    /// Production at the rated coefficient, before any losses.
    fn base_production(
        &self,
        usable_area_sqm: f64,
    ) -> f64 {
        usable_area_sqm * self.config.kw_per_sqm
    }

    /// Cosine falloff from the optimal tilt angle.
    fn angle_efficiency(
        &self,
        roof_angle_deg: f64,
    ) -> f64 {
        let distance = (roof_angle_deg - self.config.optimal_angle_deg).abs();
        deg_to_rad(distance).cos()
    }
}
