//! Estimation calculators for the solar wizard.
//!
//! Three small pure calculators run in sequence: panel fitting turns a
//! roof area into a whole-panel count, production turns panel area and
//! orientation into a kW figure, and savings turns that figure into
//! money. [`Estimator`] chains the three from a complete input record.

pub mod common;
pub mod estimator;
pub mod panels;
pub mod production;
pub mod savings;

pub use estimator::{EstimateError, Estimator};
pub use panels::{PanelFit, PanelFitResult};
pub use production::{ProductionEstimate, ProductionEstimator};
pub use savings::{SavingsEstimate, SavingsEstimator, SavingsError};
