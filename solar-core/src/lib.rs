pub mod calculations;
pub mod models;
pub mod wizard;

pub use models::*;
pub use wizard::{ValidationError, Wizard, WizardError, WizardState};
