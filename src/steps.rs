//! Questionnaire step catalogue

use crate::answers::Field;

/// Static copy of an interstitial screen, as translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionCopy {
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub icon: &'static str,
}

impl TransitionCopy {
    pub fn title(&self) -> String {
        rust_i18n::t!(self.title_key).to_string()
    }

    pub fn description(&self) -> String {
        rust_i18n::t!(self.description_key).to_string()
    }
}

/// One entry of the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDescriptor {
    /// Edits a single answer
    Question { field: Field },
    /// Informational screen between groups of questions, binds no answer
    Transition(TransitionCopy),
}

impl StepDescriptor {
    /// Field edited by this step, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            StepDescriptor::Question { field } => Some(*field),
            StepDescriptor::Transition(_) => None,
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, StepDescriptor::Transition(_))
    }
}

const fn question(field: Field) -> StepDescriptor {
    StepDescriptor::Question { field }
}

/// The questionnaire in presentation order. Transition copy refers to the
/// questions right before it, so the order must not change.
pub const QUESTIONNAIRE: [StepDescriptor; 13] = [
    question(Field::Gender),
    question(Field::Age),
    question(Field::Height),
    question(Field::Weight),
    question(Field::Goals),
    question(Field::ActivityLevel),
    question(Field::Motivations),
    StepDescriptor::Transition(TransitionCopy {
        title_key: "transition_lifestyle_title",
        description_key: "transition_lifestyle_description",
        icon: "🌟",
    }),
    question(Field::DailyHabits),
    StepDescriptor::Transition(TransitionCopy {
        title_key: "transition_goals_title",
        description_key: "transition_goals_description",
        icon: "🎯",
    }),
    question(Field::FitnessGoals),
    StepDescriptor::Transition(TransitionCopy {
        title_key: "transition_drive_title",
        description_key: "transition_drive_description",
        icon: "🚀",
    }),
    question(Field::Aspirations),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questionnaire_order() {
        let fields: Vec<Option<Field>> = QUESTIONNAIRE.iter().map(|s| s.field()).collect();
        assert_eq!(
            fields,
            vec![
                Some(Field::Gender),
                Some(Field::Age),
                Some(Field::Height),
                Some(Field::Weight),
                Some(Field::Goals),
                Some(Field::ActivityLevel),
                Some(Field::Motivations),
                None,
                Some(Field::DailyHabits),
                None,
                Some(Field::FitnessGoals),
                None,
                Some(Field::Aspirations),
            ]
        );
    }

    #[test]
    fn test_each_field_edited_once() {
        let mut fields: Vec<Field> = QUESTIONNAIRE.iter().filter_map(|s| s.field()).collect();
        let count = fields.len();
        fields.sort();
        fields.dedup();
        assert_eq!(fields.len(), count);
    }

    #[test]
    fn test_transition_copy_is_translated() {
        let StepDescriptor::Transition(copy) = QUESTIONNAIRE[7] else {
            panic!("step 8 should be a transition");
        };
        assert_ne!(copy.title(), copy.title_key);
        assert!(!copy.description().is_empty());
    }
}
