//! Questionnaire form state
//!
//! [`FormStateStore`] owns the answers of one questionnaire session. Every
//! `set` produces a fresh [`AnswerSet`] snapshot; snapshots handed out earlier
//! stay valid and `undo` walks back through them.

use crate::answers::{AnswerSet, Field, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// How strictly pre-filled answers gate forward navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnswerPolicy {
    /// Fields that ship with a default (age, height, weight) and the
    /// grouped steps always count as answered
    #[default]
    Lenient,
    /// Defaults must be set at least once, grouped steps must be complete
    Strict,
}

#[derive(Debug, Clone)]
struct Revision {
    answers: Arc<AnswerSet>,
    confirmed: BTreeSet<Field>,
}

/// Owner of the answers for one questionnaire session
#[derive(Debug, Clone)]
pub struct FormStateStore {
    current: Revision,
    history: Vec<Revision>,
    policy: AnswerPolicy,
}

impl Default for FormStateStore {
    fn default() -> Self {
        Self::new(AnswerPolicy::default())
    }
}

impl FormStateStore {
    /// Create a store holding the default answers
    pub fn new(policy: AnswerPolicy) -> Self {
        Self {
            current: Revision {
                answers: Arc::new(AnswerSet::default()),
                confirmed: BTreeSet::new(),
            },
            history: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    /// Current answers
    pub fn answers(&self) -> &AnswerSet {
        &self.current.answers
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<AnswerSet> {
        Arc::clone(&self.current.answers)
    }

    /// Current value of `field`, or its default when unset
    pub fn get(&self, field: Field) -> FieldValue {
        self.current.answers.get(field)
    }

    /// Replace one answer. Values are not validated here; the input widget
    /// for each field only produces values within its own bounds.
    pub fn set(&mut self, value: FieldValue) {
        let field = value.field();
        let answers = Arc::new(self.current.answers.with(value));
        let mut confirmed = self.current.confirmed.clone();
        confirmed.insert(field);

        let previous = std::mem::replace(&mut self.current, Revision { answers, confirmed });
        self.history.push(previous);
        debug!(field = field.key(), revision = self.history.len(), "Answer updated");
    }

    /// Restore the previous snapshot. Returns `false` when there is none.
    ///
    /// Library API for embedders; the terminal front end has no undo key.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Number of snapshots that `undo` can restore
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether `field` has been set during this session
    pub fn is_confirmed(&self, field: Field) -> bool {
        self.current.confirmed.contains(&field)
    }

    /// Whether `field` counts as answered under the store's policy
    pub fn is_answered(&self, field: Field) -> bool {
        let answers = &self.current.answers;
        let strict = self.policy == AnswerPolicy::Strict;
        match field {
            Field::Gender => answers.gender.is_some(),
            Field::ActivityLevel => answers.activity_level.is_some(),
            Field::Goals => !answers.goals.is_empty(),
            Field::Motivations => !answers.motivations.is_empty(),
            Field::Age | Field::Height | Field::Weight => !strict || self.is_confirmed(field),
            Field::DailyHabits => !strict || answers.daily_habits.is_complete(),
            Field::FitnessGoals => !strict || answers.fitness_goals.is_complete(),
            Field::Aspirations => !strict || answers.aspirations.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Gender, Goal, HabitQuestion, WorkoutStyle};
    use crate::units::{Height, Weight};

    #[test]
    fn test_get_returns_defaults() {
        let store = FormStateStore::default();
        assert_eq!(store.get(Field::Age), FieldValue::Age(30));
        assert_eq!(store.get(Field::Height), FieldValue::Height(Height::cm(175)));
        assert_eq!(store.get(Field::Gender), FieldValue::Gender(None));
    }

    #[test]
    fn test_set_keeps_prior_snapshots() {
        let mut store = FormStateStore::default();
        let before = store.snapshot();
        store.set(FieldValue::Gender(Some(Gender::Female)));

        assert!(before.gender.is_none());
        assert_eq!(store.answers().gender, Some(Gender::Female));
        assert_eq!(store.history_len(), 1);
    }

    #[test]
    fn test_undo() {
        let mut store = FormStateStore::default();
        store.set(FieldValue::Age(41));
        store.set(FieldValue::Age(42));
        assert!(store.undo());
        assert_eq!(store.answers().age, 41);
        assert!(store.undo());
        assert_eq!(store.answers().age, 30);
        assert!(!store.is_confirmed(Field::Age));
        assert!(!store.undo());
    }

    #[test]
    fn test_lenient_answered_rules() {
        let mut store = FormStateStore::new(AnswerPolicy::Lenient);
        assert!(!store.is_answered(Field::Gender));
        assert!(!store.is_answered(Field::Goals));
        assert!(store.is_answered(Field::Age));
        assert!(store.is_answered(Field::Height));
        assert!(store.is_answered(Field::Weight));
        assert!(store.is_answered(Field::DailyHabits));
        assert!(store.is_answered(Field::FitnessGoals));
        assert!(store.is_answered(Field::Aspirations));

        store.set(FieldValue::Gender(Some(Gender::Male)));
        assert!(store.is_answered(Field::Gender));

        store.set(FieldValue::Goals([Goal::Maintain].into_iter().collect()));
        assert!(store.is_answered(Field::Goals));

        store.set(FieldValue::Goals(BTreeSet::new()));
        assert!(!store.is_answered(Field::Goals));
    }

    #[test]
    fn test_strict_requires_confirmation() {
        let mut store = FormStateStore::new(AnswerPolicy::Strict);
        assert!(!store.is_answered(Field::Height));
        assert!(!store.is_answered(Field::Age));

        // Setting the default value still counts as a deliberate answer
        store.set(FieldValue::Height(Height::cm(175)));
        assert!(store.is_answered(Field::Height));

        store.set(FieldValue::Weight(Weight::lb(180)));
        assert!(store.is_answered(Field::Weight));
    }

    #[test]
    fn test_strict_grouped_steps_need_completion() {
        let mut store = FormStateStore::new(AnswerPolicy::Strict);
        let mut habits = store.answers().daily_habits.clone();
        habits.select(HabitQuestion::Sleep, 1);
        store.set(FieldValue::DailyHabits(habits.clone()));
        assert!(!store.is_answered(Field::DailyHabits));

        for question in HabitQuestion::ALL {
            habits.select(question, 0);
        }
        store.set(FieldValue::DailyHabits(habits));
        assert!(store.is_answered(Field::DailyHabits));

        let mut fitness = store.answers().fitness_goals.clone();
        fitness.toggle_style(WorkoutStyle::Yoga);
        store.set(FieldValue::FitnessGoals(fitness.clone()));
        assert!(!store.is_answered(Field::FitnessGoals));
        fitness.current_program = Some(crate::answers::ProgramStatus::Own);
        store.set(FieldValue::FitnessGoals(fitness));
        assert!(store.is_answered(Field::FitnessGoals));
    }
}
