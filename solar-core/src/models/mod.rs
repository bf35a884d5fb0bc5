mod estimate_input;
mod estimate_result;
mod roof_direction;
mod system_config;

pub use estimate_input::EstimateInput;
pub use estimate_result::EstimateResult;
pub use roof_direction::RoofDirection;
pub use system_config::{SystemConfig, SystemConfigError};
