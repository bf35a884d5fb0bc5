//! Step configuration for the wizard.
//!
//! The question sequence is data, not control flow: a wizard walks an
//! ordered list of descriptors, each naming the field it collects and
//! the prompt to show. Variants of the wizard differ only in the list
//! they are built with.

/// The input field a wizard step collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepField {
    RoofArea,
    RoofAngle,
    RoofDirection,
    MonthlyBill,
}

impl StepField {
    /// Human-readable field name, used in validation messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoofArea => "roof area",
            Self::RoofAngle => "roof angle",
            Self::RoofDirection => "roof direction",
            Self::MonthlyBill => "monthly bill",
        }
    }
}

/// One question screen: the field it fills and the text around it.
#[derive(Debug, Clone)]
pub struct StepDescriptor {
    pub field: StepField,
    pub prompt: &'static str,
    pub hint: &'static str,
}

impl StepDescriptor {
    pub const fn new(
        field: StepField,
        prompt: &'static str,
        hint: &'static str,
    ) -> Self {
        Self {
            field,
            prompt,
            hint,
        }
    }
}

/// The canonical four-question sequence.
pub fn default_steps() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new(
            StepField::RoofArea,
            "How large is your roof?",
            "Area in square metres, e.g. 30",
        ),
        StepDescriptor::new(
            StepField::RoofAngle,
            "What is your roof's tilt angle?",
            "Degrees from horizontal, 0-90",
        ),
        StepDescriptor::new(
            StepField::RoofDirection,
            "Which direction does your roof face?",
            "south, east, west, north or flat",
        ),
        StepDescriptor::new(
            StepField::MonthlyBill,
            "What is your monthly electricity bill?",
            "An amount per month, e.g. 900",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_sequence_covers_every_field_once() {
        let steps = default_steps();

        assert_eq!(steps.len(), 4);
        let fields: Vec<StepField> = steps.iter().map(|s| s.field).collect();
        assert_eq!(
            fields,
            vec![
                StepField::RoofArea,
                StepField::RoofAngle,
                StepField::RoofDirection,
                StepField::MonthlyBill,
            ]
        );
    }
}
