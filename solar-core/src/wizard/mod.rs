//! Linear wizard state machine.
//!
//! A [`Wizard`] walks the configured question sequence one step at a
//! time. Advancing validates the current step's required answer and is
//! rejected — step unchanged, user-visible message returned — when it is
//! missing or out of range. Passing validation on the last question
//! moves to the results state and computes a fresh [`EstimateResult`];
//! retreating and resetting are always allowed.

pub mod steps;

pub use steps::{StepDescriptor, StepField, default_steps};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::{EstimateError, Estimator};
use crate::models::{EstimateInput, EstimateResult, RoofDirection, SystemConfig};

/// A rejected step advance. Always recoverable: the wizard stays on the
/// same question and the message is meant for the user.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The current step's answer has not been given.
    #[error("please enter your {} before continuing", .field.name())]
    MissingField { field: StepField },

    /// Roof area must be a positive number of square metres.
    #[error("roof area must be greater than zero")]
    NonPositiveRoofArea(f64),

    /// Tilt angle outside the supported 0–90 degree range.
    #[error("roof angle must be between 0 and 90 degrees")]
    RoofAngleOutOfRange(f64),

    /// Monthly bill must be a positive amount.
    #[error("monthly bill must be greater than zero")]
    NonPositiveMonthlyBill(Decimal),
}

/// Errors surfaced by [`Wizard::advance`].
#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// Where the wizard currently is: a 1-based question, or the results
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Question(usize),
    Results,
}

/// Progress through the question sequence, for a progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    pub percent: u32,
}

/// Checks the rule for a single field against the current input.
///
/// Pure: used by [`Wizard::advance`] and usable on its own.
pub fn validate_field(
    field: StepField,
    input: &EstimateInput,
) -> Result<(), ValidationError> {
    match field {
        StepField::RoofArea => match input.roof_area_sqm {
            None => Err(ValidationError::MissingField { field }),
            // NaN fails the comparison and is rejected with the area message.
            Some(area) if !(area > 0.0) => Err(ValidationError::NonPositiveRoofArea(area)),
            Some(_) => Ok(()),
        },
        StepField::RoofAngle => match input.roof_angle_deg {
            None => Err(ValidationError::MissingField { field }),
            Some(angle) if !(0.0..=90.0).contains(&angle) => {
                Err(ValidationError::RoofAngleOutOfRange(angle))
            }
            Some(_) => Ok(()),
        },
        StepField::RoofDirection => match input.roof_direction {
            None => Err(ValidationError::MissingField { field }),
            Some(_) => Ok(()),
        },
        StepField::MonthlyBill => match input.monthly_bill {
            None => Err(ValidationError::MissingField { field }),
            Some(bill) if bill <= Decimal::ZERO => {
                Err(ValidationError::NonPositiveMonthlyBill(bill))
            }
            Some(_) => Ok(()),
        },
    }
}

/// The wizard: question sequence, collected input, and derived result.
#[derive(Debug, Clone)]
pub struct Wizard {
    estimator: Estimator,
    steps: Vec<StepDescriptor>,
    current: usize,
    at_results: bool,
    input: EstimateInput,
    result: Option<EstimateResult>,
}

impl Wizard {
    /// A wizard over the canonical question sequence.
    pub fn new(config: SystemConfig) -> Self {
        Self::with_steps(config, default_steps())
    }

    /// A wizard over a custom question sequence.
    pub fn with_steps(
        config: SystemConfig,
        steps: Vec<StepDescriptor>,
    ) -> Self {
        Self {
            estimator: Estimator::new(config),
            steps,
            current: 1,
            at_results: false,
            input: EstimateInput::empty(),
            result: None,
        }
    }

    pub fn state(&self) -> WizardState {
        if self.at_results {
            WizardState::Results
        } else {
            WizardState::Question(self.current)
        }
    }

    /// True once the wizard has reached the results screen.
    pub fn is_complete(&self) -> bool {
        self.at_results
    }

    /// Current question number, 1-based.
    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Descriptor of the question being asked, `None` on the results
    /// screen.
    pub fn current_descriptor(&self) -> Option<&StepDescriptor> {
        if self.at_results {
            None
        } else {
            self.steps.get(self.current - 1)
        }
    }

    pub fn input(&self) -> &EstimateInput {
        &self.input
    }

    /// The computed estimate, present only in the results state.
    pub fn result(&self) -> Option<&EstimateResult> {
        self.result.as_ref()
    }

    pub fn config(&self) -> &SystemConfig {
        self.estimator.config()
    }

    /// Progress through the questions; pinned to 100% on the results
    /// screen.
    pub fn progress(&self) -> Progress {
        let total = self.steps.len();
        let current = if self.at_results { total } else { self.current };
        let percent = if total == 0 {
            100
        } else {
            (current as f64 / total as f64 * 100.0).round() as u32
        };
        Progress {
            current,
            total,
            percent,
        }
    }

    /// Validates the current question's answer without advancing.
    pub fn validate_current(&self) -> Result<(), ValidationError> {
        match self.current_descriptor() {
            Some(descriptor) => validate_field(descriptor.field, &self.input),
            None => Ok(()),
        }
    }

    /// Moves to the next question, or to results from the last one.
    ///
    /// On a validation failure the step is unchanged and the error
    /// carries the message to show the user. Entering the results state
    /// computes a fresh estimate from the full input.
    ///
    /// # Errors
    ///
    /// [`WizardError::Validation`] when the current answer is missing or
    /// out of range; [`WizardError::Estimate`] if the estimate itself
    /// fails (misconfigured coefficients, or a custom step sequence that
    /// never collects a required answer).
    pub fn advance(&mut self) -> Result<WizardState, WizardError> {
        if self.at_results {
            return Ok(WizardState::Results);
        }

        if let Err(error) = self.validate_current() {
            warn!(step = self.current, %error, "step rejected");
            return Err(error.into());
        }

        if self.current < self.steps.len() {
            self.current += 1;
            debug!(step = self.current, "advanced");
        } else {
            self.result = Some(self.estimator.estimate(&self.input)?);
            self.at_results = true;
            debug!("entered results");
        }
        Ok(self.state())
    }

    /// Moves one step back, floored at the first question. Leaving the
    /// results screen returns to the last question and drops the derived
    /// result, which is recomputed on the next advance.
    pub fn retreat(&mut self) -> WizardState {
        if self.at_results {
            self.at_results = false;
            self.result = None;
        } else if self.current > 1 {
            self.current -= 1;
        }
        debug!(step = self.current, "retreated");
        self.state()
    }

    /// Back to the first question with a fresh empty input.
    pub fn reset(&mut self) {
        self.current = 1;
        self.at_results = false;
        self.input = EstimateInput::empty();
        self.result = None;
        debug!("wizard reset");
    }

    // Answer setters. Each replaces the whole input record.

    pub fn set_roof_area(
        &mut self,
        area_sqm: f64,
    ) {
        self.input = self.input.with_roof_area(area_sqm);
    }

    pub fn set_roof_angle(
        &mut self,
        angle_deg: f64,
    ) {
        self.input = self.input.with_roof_angle(angle_deg);
    }

    pub fn set_roof_direction(
        &mut self,
        direction: RoofDirection,
    ) {
        self.input = self.input.with_roof_direction(direction);
    }

    pub fn set_monthly_bill(
        &mut self,
        bill: Decimal,
    ) {
        self.input = self.input.with_monthly_bill(bill);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn wizard() -> Wizard {
        Wizard::new(SystemConfig::default())
    }

    fn answer_all(wizard: &mut Wizard) {
        wizard.set_roof_area(30.0);
        wizard.set_roof_angle(42.0);
        wizard.set_roof_direction(RoofDirection::South);
        wizard.set_monthly_bill(dec!(900));
    }

    // =========================================================================
    // validate_field tests
    // =========================================================================

    #[test]
    fn validate_field_reports_missing_answers() {
        let input = EstimateInput::empty();

        for field in [
            StepField::RoofArea,
            StepField::RoofAngle,
            StepField::RoofDirection,
            StepField::MonthlyBill,
        ] {
            assert_eq!(
                validate_field(field, &input),
                Err(ValidationError::MissingField { field })
            );
        }
    }

    #[test]
    fn validate_field_rejects_zero_roof_area() {
        let input = EstimateInput::empty().with_roof_area(0.0);

        assert_eq!(
            validate_field(StepField::RoofArea, &input),
            Err(ValidationError::NonPositiveRoofArea(0.0))
        );
    }

    #[test]
    fn validate_field_rejects_angle_above_90() {
        let input = EstimateInput::empty().with_roof_angle(120.0);

        assert_eq!(
            validate_field(StepField::RoofAngle, &input),
            Err(ValidationError::RoofAngleOutOfRange(120.0))
        );
    }

    #[test]
    fn validate_field_accepts_flat_roof_angle() {
        let input = EstimateInput::empty().with_roof_angle(0.0);

        assert_eq!(validate_field(StepField::RoofAngle, &input), Ok(()));
    }

    #[test]
    fn validate_field_rejects_zero_bill() {
        let input = EstimateInput::empty().with_monthly_bill(dec!(0));

        assert_eq!(
            validate_field(StepField::MonthlyBill, &input),
            Err(ValidationError::NonPositiveMonthlyBill(dec!(0)))
        );
    }

    // =========================================================================
    // advance tests
    // =========================================================================

    #[test]
    fn advance_without_answer_stays_on_step() {
        let mut wizard = wizard();

        let result = wizard.advance();

        assert_eq!(
            result,
            Err(WizardError::Validation(ValidationError::MissingField {
                field: StepField::RoofArea
            }))
        );
        assert_eq!(wizard.state(), WizardState::Question(1));
    }

    #[test]
    fn advance_moves_through_all_questions_to_results() {
        let mut wizard = wizard();
        answer_all(&mut wizard);

        assert_eq!(wizard.advance(), Ok(WizardState::Question(2)));
        assert_eq!(wizard.advance(), Ok(WizardState::Question(3)));
        assert_eq!(wizard.advance(), Ok(WizardState::Question(4)));
        assert_eq!(wizard.advance(), Ok(WizardState::Results));
        assert!(wizard.result().is_some());
    }

    #[test]
    fn advance_from_results_is_a_no_op() {
        let mut wizard = wizard();
        answer_all(&mut wizard);
        for _ in 0..4 {
            wizard.advance().unwrap();
        }

        assert_eq!(wizard.advance(), Ok(WizardState::Results));
    }

    #[test]
    fn advance_computes_the_estimate_on_entering_results() {
        let mut wizard = wizard();
        answer_all(&mut wizard);
        for _ in 0..4 {
            wizard.advance().unwrap();
        }

        let result = wizard.result().unwrap();

        assert_eq!(result.panel_count, 17);
        assert_eq!(result.yearly_savings, dec!(16617.50));
    }

    // =========================================================================
    // retreat / reset tests
    // =========================================================================

    #[test]
    fn retreat_never_goes_below_step_one() {
        let mut wizard = wizard();

        assert_eq!(wizard.retreat(), WizardState::Question(1));
        assert_eq!(wizard.retreat(), WizardState::Question(1));
    }

    #[test]
    fn retreat_from_results_returns_to_last_question() {
        let mut wizard = wizard();
        answer_all(&mut wizard);
        for _ in 0..4 {
            wizard.advance().unwrap();
        }

        assert_eq!(wizard.retreat(), WizardState::Question(4));
        // The derived result is dropped; it will be recomputed.
        assert!(wizard.result().is_none());
    }

    #[test]
    fn changed_answer_changes_the_recomputed_result() {
        let mut wizard = wizard();
        answer_all(&mut wizard);
        for _ in 0..4 {
            wizard.advance().unwrap();
        }
        let first_savings = wizard.result().unwrap().yearly_savings;

        wizard.retreat();
        wizard.set_roof_direction(RoofDirection::North);
        wizard.advance().unwrap();

        let second_savings = wizard.result().unwrap().yearly_savings;
        assert!(second_savings < first_savings);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut wizard = wizard();
        answer_all(&mut wizard);
        for _ in 0..4 {
            wizard.advance().unwrap();
        }

        wizard.reset();

        assert_eq!(wizard.state(), WizardState::Question(1));
        assert_eq!(wizard.input(), &EstimateInput::empty());
        assert!(wizard.result().is_none());
    }

    // =========================================================================
    // progress tests
    // =========================================================================

    #[test]
    fn progress_tracks_the_question_sequence() {
        let mut wizard = wizard();

        assert_eq!(
            wizard.progress(),
            Progress {
                current: 1,
                total: 4,
                percent: 25
            }
        );

        wizard.set_roof_area(30.0);
        wizard.advance().unwrap();

        assert_eq!(
            wizard.progress(),
            Progress {
                current: 2,
                total: 4,
                percent: 50
            }
        );
    }

    #[test]
    fn progress_is_complete_at_results() {
        let mut wizard = wizard();
        answer_all(&mut wizard);
        for _ in 0..4 {
            wizard.advance().unwrap();
        }

        assert_eq!(wizard.progress().percent, 100);
    }
}
