//! Questionnaire session
//!
//! Ties one [`FormStateStore`] to one [`StepSequencer`] and hands terminal
//! transitions to a [`Navigator`].

use crate::answers::{AnswerSet, FieldValue};
use crate::sequencer::{Advance, Retreat, StepSequencer};
use crate::steps::StepDescriptor;
use crate::store::{AnswerPolicy, FormStateStore};
use std::sync::Arc;
use tracing::info;

/// Receives the questionnaire's terminal transitions
pub trait Navigator {
    /// Forward from the last step (on to photo upload)
    fn advance(&mut self, answers: Arc<AnswerSet>);
    /// Backward from the first step (back to welcome)
    fn retreat(&mut self);
}

/// One run through the questionnaire
#[derive(Debug, Clone, Default)]
pub struct QuestionnaireSession {
    store: FormStateStore,
    sequencer: StepSequencer,
}

impl QuestionnaireSession {
    pub fn new(policy: AnswerPolicy) -> Self {
        Self {
            store: FormStateStore::new(policy),
            sequencer: StepSequencer::new(),
        }
    }

    pub fn store(&self) -> &FormStateStore {
        &self.store
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    pub fn current_step(&self) -> &StepDescriptor {
        self.sequencer.current()
    }

    /// Apply an edit from the current step's input widget
    pub fn update(&mut self, value: FieldValue) {
        self.store.set(value);
    }

    pub fn can_advance(&self) -> bool {
        self.sequencer.can_advance(&self.store)
    }

    /// Forward action; calls [`Navigator::advance`] on completion
    pub fn next(&mut self, navigator: &mut dyn Navigator) -> Advance {
        let outcome = self.sequencer.next(&self.store);
        if outcome == Advance::Complete {
            let answers = self.store.snapshot();
            info!(
                revisions = self.store.history_len(),
                goals = answers.goals.len(),
                motivations = answers.motivations.len(),
                habits_answered = answers.daily_habits.answered_count(),
                workout_styles = answers.fitness_goals.workout_styles.len(),
                "Questionnaire complete"
            );
            navigator.advance(answers);
        }
        outcome
    }

    /// Backward action; calls [`Navigator::retreat`] from the first step
    pub fn back(&mut self, navigator: &mut dyn Navigator) -> Retreat {
        let outcome = self.sequencer.back();
        if outcome == Retreat::Exited {
            info!("Questionnaire exited from the first step");
            navigator.retreat();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{ActivityLevel, Gender, Goal, Motivation};

    #[derive(Default)]
    struct Recorder {
        completed: Option<Arc<AnswerSet>>,
        retreated: bool,
    }

    impl Navigator for Recorder {
        fn advance(&mut self, answers: Arc<AnswerSet>) {
            self.completed = Some(answers);
        }

        fn retreat(&mut self) {
            self.retreated = true;
        }
    }

    #[test]
    fn test_back_from_first_step_retreats() {
        let mut session = QuestionnaireSession::default();
        let mut recorder = Recorder::default();
        assert_eq!(session.back(&mut recorder), Retreat::Exited);
        assert!(recorder.retreated);
        assert!(recorder.completed.is_none());
    }

    #[test]
    fn test_complete_hands_over_answers() {
        let mut session = QuestionnaireSession::new(AnswerPolicy::Lenient);
        let mut recorder = Recorder::default();

        session.update(FieldValue::Gender(Some(Gender::Female)));
        session.update(FieldValue::Goals([Goal::ImprovePosture].into_iter().collect()));
        session.update(FieldValue::ActivityLevel(Some(ActivityLevel::VeryActive)));
        session.update(FieldValue::Motivations([Motivation::Career].into_iter().collect()));

        let mut outcome = session.next(&mut recorder);
        while let Advance::Moved(_) = outcome {
            outcome = session.next(&mut recorder);
        }

        assert_eq!(outcome, Advance::Complete);
        let answers = recorder.completed.expect("navigator should receive answers");
        assert_eq!(answers.gender, Some(Gender::Female));
        assert!(!recorder.retreated);
    }

    #[test]
    fn test_blocked_does_not_navigate() {
        let mut session = QuestionnaireSession::default();
        let mut recorder = Recorder::default();
        assert!(!session.can_advance());
        assert_eq!(session.next(&mut recorder), Advance::Blocked);
        assert!(recorder.completed.is_none());
        assert_eq!(session.sequencer().position(), 1);
    }
}
