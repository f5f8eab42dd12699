//! Questionnaire step sequencing

use crate::steps::{QUESTIONNAIRE, StepDescriptor};
use crate::store::FormStateStore;
use tracing::debug;

/// Outcome of a forward action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given 1-indexed position
    Moved(usize),
    /// Current step is unanswered; nothing changed
    Blocked,
    /// Forward from the last step
    Complete,
}

/// Outcome of a backward action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved to the given 1-indexed position
    Moved(usize),
    /// Backward from the first step
    Exited,
}

/// Walks the fixed questionnaire, one step at a time
#[derive(Debug, Clone)]
pub struct StepSequencer {
    steps: &'static [StepDescriptor],
    /// 1-indexed
    position: usize,
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSequencer {
    /// Start at the first questionnaire step
    pub fn new() -> Self {
        Self {
            steps: &QUESTIONNAIRE,
            position: 1,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn current(&self) -> &StepDescriptor {
        &self.steps[self.position - 1]
    }

    /// `(position, total)`, 1-based
    pub fn progress(&self) -> (usize, usize) {
        (self.position, self.total())
    }

    pub fn is_last(&self) -> bool {
        self.position == self.total()
    }

    /// Fraction of the questionnaire reached, for the progress bar
    pub fn progress_ratio(&self) -> f64 {
        self.position as f64 / self.total() as f64
    }

    /// Whether the forward action is enabled. Transition steps always are.
    pub fn can_advance(&self, store: &FormStateStore) -> bool {
        match self.current() {
            StepDescriptor::Question { field } => store.is_answered(*field),
            StepDescriptor::Transition(_) => true,
        }
    }

    /// Move forward, unless the current step is unanswered
    pub fn next(&mut self, store: &FormStateStore) -> Advance {
        if !self.can_advance(store) {
            debug!(position = self.position, "Forward navigation blocked");
            return Advance::Blocked;
        }
        if self.position < self.total() {
            self.position += 1;
            Advance::Moved(self.position)
        } else {
            Advance::Complete
        }
    }

    /// Move backward
    pub fn back(&mut self) -> Retreat {
        if self.position > 1 {
            self.position -= 1;
            Retreat::Moved(self.position)
        } else {
            Retreat::Exited
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{
        ActivityLevel, Field, FieldValue, Gender, Goal, Motivation,
    };
    use crate::store::AnswerPolicy;

    fn answer_everything(store: &mut FormStateStore) {
        store.set(FieldValue::Gender(Some(Gender::Other)));
        store.set(FieldValue::Goals([Goal::LoseFat].into_iter().collect()));
        store.set(FieldValue::ActivityLevel(Some(ActivityLevel::Active)));
        store.set(FieldValue::Motivations([Motivation::Energy].into_iter().collect()));
    }

    fn sequencer_at(position: usize, store: &FormStateStore) -> StepSequencer {
        let mut sequencer = StepSequencer::new();
        while sequencer.position() < position {
            assert!(matches!(sequencer.next(store), Advance::Moved(_)));
        }
        sequencer
    }

    #[test]
    fn test_back_from_every_position() {
        let mut store = FormStateStore::default();
        answer_everything(&mut store);
        for n in 1..=QUESTIONNAIRE.len() {
            let mut sequencer = sequencer_at(n, &store);
            let expected = if n > 1 { Retreat::Moved(n - 1) } else { Retreat::Exited };
            assert_eq!(sequencer.back(), expected);
        }
    }

    #[test]
    fn test_next_from_every_position() {
        let mut store = FormStateStore::default();
        answer_everything(&mut store);
        for n in 1..=QUESTIONNAIRE.len() {
            let mut sequencer = sequencer_at(n, &store);
            let expected = if n < QUESTIONNAIRE.len() {
                Advance::Moved(n + 1)
            } else {
                Advance::Complete
            };
            assert_eq!(sequencer.next(&store), expected);
        }
    }

    #[test]
    fn test_next_blocked_when_unanswered() {
        let store = FormStateStore::default();
        let mut sequencer = StepSequencer::new();
        assert_eq!(sequencer.next(&store), Advance::Blocked);
        assert_eq!(sequencer.position(), 1);
    }

    #[test]
    fn test_six_steps_halt_at_first_unanswered() {
        let mut store = FormStateStore::default();
        store.set(FieldValue::Gender(Some(Gender::Male)));
        assert!(store.is_answered(Field::Gender));

        let mut sequencer = StepSequencer::new();
        for _ in 0..6 {
            sequencer.next(&store);
        }
        // Age, height and weight pass on their defaults, goals is empty
        assert_eq!(sequencer.position(), 5);

        store.set(FieldValue::Goals([Goal::BuildMuscle].into_iter().collect()));
        store.set(FieldValue::ActivityLevel(Some(ActivityLevel::Sedentary)));
        let mut sequencer = StepSequencer::new();
        for _ in 0..6 {
            sequencer.next(&store);
        }
        assert_eq!(sequencer.position(), 7);
        assert_eq!(sequencer.current().field(), Some(Field::Motivations));
    }

    #[test]
    fn test_transition_steps_always_advance() {
        let mut store = FormStateStore::new(AnswerPolicy::Strict);
        answer_everything(&mut store);
        store.set(FieldValue::Age(30));
        store.set(FieldValue::Height(crate::units::Height::cm(180)));
        store.set(FieldValue::Weight(crate::units::Weight::kg(80)));

        let mut sequencer = sequencer_at(8, &store);
        assert!(sequencer.current().is_transition());
        assert!(sequencer.can_advance(&store));
        assert_eq!(sequencer.next(&store), Advance::Moved(9));

        // Strict: daily habits are incomplete
        assert_eq!(sequencer.next(&store), Advance::Blocked);
    }

    #[test]
    fn test_progress() {
        let sequencer = StepSequencer::new();
        assert_eq!(sequencer.total(), 13);
        assert!(!sequencer.is_last());
        assert!((sequencer.progress_ratio() - 1.0 / 13.0).abs() < f64::EPSILON);
    }
}
