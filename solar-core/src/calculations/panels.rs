//! Panel fitting: how many whole panels a roof can take.
//!
//! The layout model is deliberately crude — it divides the roof area by
//! a single panel's footprint and keeps the whole-panel floor. Row
//! spacing, obstacles, and orientation of individual panels are ignored.
//!
//! # Example
//!
//! ```
//! use solar_core::SystemConfig;
//! use solar_core::calculations::PanelFit;
//!
//! let config = SystemConfig::default();
//! let fit = PanelFit::new(&config);
//!
//! let result = fit.calculate(30.0).unwrap();
//!
//! assert_eq!(result.panel_count, 17);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{SystemConfig, SystemConfigError};

/// Result of fitting whole panels onto a roof.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelFitResult {
    /// Number of whole panels that fit.
    pub panel_count: u32,

    /// Area covered by those panels, in square metres.
    ///
    /// Always `panel_count × panel footprint`, so it never exceeds the
    /// roof area.
    pub usable_area_sqm: f64,
}

/// Calculator that fits whole panels onto a roof area.
#[derive(Debug, Clone)]
pub struct PanelFit<'a> {
    config: &'a SystemConfig,
}

impl<'a> PanelFit<'a> {
    pub fn new(config: &'a SystemConfig) -> Self {
        Self { config }
    }

    /// Fits whole panels onto `roof_area_sqm`.
    ///
    /// A roof smaller than one panel's footprint yields zero panels and
    /// zero usable area; that is a valid answer, not an error. Areas
    /// that are negative or not finite are treated the same way (the
    /// wizard rejects them before they get here).
    ///
    /// # Errors
    ///
    /// Returns [`SystemConfigError`] if the configured panel dimensions
    /// are invalid.
    pub fn calculate(
        &self,
        roof_area_sqm: f64,
    ) -> Result<PanelFitResult, SystemConfigError> {
        self.config.validate()?;

        let footprint = self.config.panel_area_sqm();
        let panel_count = if roof_area_sqm.is_finite() && roof_area_sqm > 0.0 {
            (roof_area_sqm / footprint).floor() as u32
        } else {
            0
        };
        let usable_area_sqm = f64::from(panel_count) * footprint;

        Ok(PanelFitResult {
            panel_count,
            usable_area_sqm,
        })
    }
}
