//! TUI application main module
//!
//! Owns the terminal and routes key events to the onboarding flow.

use crate::answers::Field;
use crate::config::Config;
use crate::error::Result;
use crate::flow::{MockAuthenticator, PathImageSource, Screen};
use crate::sequencer::{Advance, Retreat};
use crate::tui::event::{EventPoll, TuiEvent, disable_bracketed_paste, enable_bracketed_paste};
use crate::tui::state::question::{FitnessRow, apply, apply_other_style, fitness_rows, row_count};
use crate::tui::state::{AppState, Edit, InputState, Selectable};
use crate::tui::theme::config::LARGE_STEP;
use crate::tui::ui::render;
use ratatui::DefaultTerminal;
use rust_i18n::t;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Apply a text editing event to `input`. Returns `false` if the event is
/// not an editing key.
fn edit_input(input: &mut InputState, event: &TuiEvent) -> bool {
    match event {
        TuiEvent::Char(c) => input.insert_char(*c),
        TuiEvent::Paste(text) => input.insert_str(text),
        TuiEvent::Backspace => input.delete_before_cursor(),
        TuiEvent::Delete => input.delete_after_cursor(),
        TuiEvent::Left => input.move_cursor_left(),
        TuiEvent::Right => input.move_cursor_right(),
        TuiEvent::Home => input.move_cursor_to_start(),
        TuiEvent::End => input.move_cursor_to_end(),
        _ => return false,
    }
    true
}

/// TUI application
#[derive(Debug)]
pub struct TuiApp {
    /// Terminal
    pub terminal: DefaultTerminal,
    /// Event poller
    pub event_poll: EventPoll,
    /// Application state
    pub state: AppState,
    authenticator: MockAuthenticator,
}

impl TuiApp {
    /// Create new TUI application
    pub fn new(config: &Config) -> Result<Self> {
        let authenticator = MockAuthenticator::new()?;
        let terminal = ratatui::init();
        if let Err(e) = enable_bracketed_paste() {
            warn!(error = %e, "Bracketed paste unavailable");
        }

        Ok(Self {
            terminal,
            event_poll: EventPoll::default(),
            state: AppState::new(config),
            authenticator,
        })
    }

    /// Set log path
    pub fn set_log_path(&mut self, path: PathBuf) {
        self.state.log_path = Some(path);
    }

    /// Run application until the user confirms exit
    pub fn run(&mut self) -> std::io::Result<()> {
        let result = self.event_loop();
        let _ = disable_bracketed_paste();
        ratatui::restore();
        result
    }

    fn event_loop(&mut self) -> std::io::Result<()> {
        render(&mut self.terminal, &mut self.state)?;

        loop {
            let event = self.event_poll.next();
            let mut dirty = self.state.flow.tick();

            match event {
                TuiEvent::None => {}
                TuiEvent::Resize(_, _) => dirty = true,
                TuiEvent::CtrlC => {
                    // A second Ctrl+C while the prompt is up leaves at once
                    if self.state.confirm_exit {
                        self.state.should_exit = true;
                    }
                    self.state.confirm_exit = true;
                    dirty = true;
                }
                event => {
                    self.handle_event(event);
                    dirty = true;
                }
            }

            if self.state.should_exit {
                break;
            }
            // The analysis gauge animates while the delay runs
            if dirty || self.state.flow.is_busy() {
                render(&mut self.terminal, &mut self.state)?;
            }
        }

        Ok(())
    }

    /// Handle event
    fn handle_event(&mut self, event: TuiEvent) {
        if self.state.confirm_exit {
            self.handle_exit(event);
            return;
        }
        match self.state.flow.screen() {
            Screen::Login => self.handle_login(event),
            Screen::Welcome => self.handle_welcome(event),
            Screen::Questionnaire => self.handle_questionnaire(event),
            Screen::PhotoUpload => self.handle_photo(event),
            Screen::Analysis => self.handle_analysis(event),
            Screen::Results => self.handle_results(event),
        }
    }

    /// Handle sign-in form event
    fn handle_login(&mut self, event: TuiEvent) {
        if event == TuiEvent::Escape {
            self.state.confirm_exit = true;
            return;
        }
        // Form is frozen while signing in
        if self.state.flow.is_busy() {
            return;
        }

        let login = &mut self.state.login;
        match event {
            TuiEvent::Tab | TuiEvent::Down => login.focus_next(),
            TuiEvent::BackTab | TuiEvent::Up => login.focus_prev(),
            TuiEvent::Enter => {
                let credentials = login.credentials();
                match self.state.flow.submit_login(&self.authenticator, &credentials) {
                    Ok(()) => self.state.login.alert = None,
                    Err(_) => self.state.login.alert = Some(t!("login_failed").to_string()),
                }
            }
            event => {
                if let Some(input) = login.active_input_mut() {
                    if edit_input(input, &event) {
                        login.alert = None;
                    }
                }
            }
        }
    }

    /// Handle welcome screen event
    fn handle_welcome(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Enter => {
                self.state.flow.get_started();
                self.state.question.reset();
            }
            TuiEvent::Escape => self.state.confirm_exit = true,
            _ => {}
        }
    }

    /// Handle questionnaire event
    fn handle_questionnaire(&mut self, event: TuiEvent) {
        let Some(session) = self.state.flow.session() else {
            return;
        };
        let position = session.sequencer().position();
        let Some(field) = session.current_step().field() else {
            match event {
                TuiEvent::Enter => self.questionnaire_next(),
                TuiEvent::Escape => self.questionnaire_back(),
                _ => {}
            }
            return;
        };
        let answers = session.store().answers();
        let rows = row_count(field, answers);
        let styles = fitness_rows(&answers.fitness_goals);

        let question = &mut self.state.question;
        question.sync(position, rows);
        let row = question.cursor.selected_or_default();
        let on_other_row =
            field == Field::FitnessGoals && styles.get(row) == Some(&FitnessRow::OtherStyle);

        if on_other_row && edit_input(&mut question.other_input, &event) {
            self.commit_other_style();
            return;
        }

        let edit = match event {
            TuiEvent::Up => {
                question.cursor.prev();
                None
            }
            TuiEvent::Down | TuiEvent::Tab => {
                question.cursor.next();
                None
            }
            TuiEvent::Char(' ') => Some(Edit::Choose),
            TuiEvent::Left => Some(Edit::Step(-1)),
            TuiEvent::Right => Some(Edit::Step(1)),
            TuiEvent::PageDown => Some(Edit::Step(-LARGE_STEP)),
            TuiEvent::PageUp => Some(Edit::Step(LARGE_STEP)),
            TuiEvent::Char('u') | TuiEvent::Char('U') => Some(Edit::ToggleUnit),
            TuiEvent::Enter => {
                self.questionnaire_next();
                None
            }
            TuiEvent::Escape => {
                self.questionnaire_back();
                None
            }
            _ => None,
        };

        let Some(edit) = edit else {
            return;
        };
        let Some(session) = self.state.flow.session_mut() else {
            return;
        };
        if let Some(value) = apply(field, session.store().answers(), row, edit) {
            debug!(field = field.key(), ?edit, "Answer edited");
            session.update(value);
            self.state.question.notice = None;
        }
    }

    /// Store the free-text workout style typed so far
    fn commit_other_style(&mut self) {
        let text = self.state.question.other_input.value().to_string();
        if let Some(session) = self.state.flow.session_mut() {
            if let Some(value) = apply_other_style(session.store().answers(), &text) {
                session.update(value);
            }
        }
    }

    fn questionnaire_next(&mut self) {
        match self.state.flow.questionnaire_next() {
            Some(Advance::Blocked) => {
                self.state.question.notice = Some(t!("question_answer_required").to_string());
            }
            Some(Advance::Moved(_)) => self.enter_step(),
            Some(Advance::Complete) => self.state.photo.reset(),
            None => {}
        }
    }

    fn questionnaire_back(&mut self) {
        if let Some(Retreat::Moved(_)) = self.state.flow.questionnaire_back() {
            self.enter_step();
        }
    }

    /// Prepare per-step widgets after moving to another step
    fn enter_step(&mut self) {
        self.state.question.notice = None;
        let Some(session) = self.state.flow.session() else {
            return;
        };
        if session.current_step().field() == Some(Field::FitnessGoals) {
            let other = session
                .store()
                .answers()
                .fitness_goals
                .other_workout_style()
                .unwrap_or_default();
            self.state.question.other_input = InputState::with_value(other);
        }
    }

    /// Handle photo upload event
    fn handle_photo(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Enter => {
                let path = self.state.photo.path_input.value().to_string();
                if path.trim().is_empty() {
                    if !self.state.flow.continue_to_analysis() {
                        self.state.photo.alert = Some(t!("photo_required").to_string());
                    }
                    return;
                }
                let mut source = PathImageSource::new(&path);
                match self.state.flow.select_photo(&mut source) {
                    Ok(_) => self.state.photo.reset(),
                    Err(e) => self.state.photo.set_error(&e),
                }
            }
            TuiEvent::Delete if self.state.photo.path_input.is_empty() => {
                self.state.flow.remove_photo();
                self.state.photo.alert = None;
            }
            TuiEvent::Escape => {
                self.state.flow.photo_back();
                self.state.photo.reset();
                self.state.question.reset();
            }
            event => {
                edit_input(&mut self.state.photo.path_input, &event);
            }
        }
    }

    /// Handle analysis screen event
    fn handle_analysis(&mut self, event: TuiEvent) {
        if event == TuiEvent::Escape {
            self.state.flow.leave_analysis();
        }
    }

    /// Handle results screen event
    fn handle_results(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Escape => self.state.flow.results_back(),
            TuiEvent::Enter => self.state.confirm_exit = true,
            _ => {}
        }
    }

    /// Handle exit confirmation event
    fn handle_exit(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Char('y') | TuiEvent::Char('Y') | TuiEvent::Enter => {
                self.state.should_exit = true;
            }
            TuiEvent::Char('n') | TuiEvent::Char('N') | TuiEvent::Escape => {
                self.state.confirm_exit = false;
            }
            _ => {}
        }
    }
}
