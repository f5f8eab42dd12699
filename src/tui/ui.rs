//! UI渲染模块
//!
//! 按当前流程界面分发到各屏幕的渲染函数。

use crate::flow::Screen;
use crate::steps::StepDescriptor;
use crate::tui::screens::{analysis, exit, login, photo_upload, question, results, transition, welcome};
use crate::tui::state::{AppState, question::row_count};
use crate::tui::theme::theme;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

/// 设置全局背景色
fn set_background(area: Rect, buf: &mut Buffer) {
    let style = Style::new().bg(theme().bg);
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut(Position { x, y }) {
                cell.set_style(style);
            }
        }
    }
}

/// 渲染整个应用
pub fn render(terminal: &mut DefaultTerminal, state: &mut AppState) -> std::io::Result<()> {
    terminal.draw(|frame| draw(frame, frame.area(), state))?;
    Ok(())
}

/// 主渲染函数
fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    set_background(area, frame.buffer_mut());

    match state.flow.screen() {
        Screen::Login => login::draw(frame, area, state),
        Screen::Welcome => welcome::draw(frame, area),
        Screen::Questionnaire => draw_questionnaire(frame, area, state),
        Screen::PhotoUpload => photo_upload::draw(frame, area, state),
        Screen::Analysis => analysis::draw(frame, area, state),
        Screen::Results => results::draw(frame, area, state),
    }

    if state.confirm_exit {
        exit::draw(frame, area);
    }
}

/// 绘制当前问卷步骤
fn draw_questionnaire(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let Some(session) = state.flow.session() else {
        return;
    };
    let (position, total) = session.sequencer().progress();
    let step = *session.current_step();
    let rows = step
        .field()
        .map_or(0, |field| row_count(field, session.store().answers()));

    state.question.sync(position, rows);

    match step {
        StepDescriptor::Question { field } => question::draw(frame, area, state, field),
        StepDescriptor::Transition(copy) => transition::draw(frame, area, &copy, position, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::flow::{Credentials, ImageSource, MockAuthenticator, Permission};
    use crate::sequencer::Advance;
    use crate::tui::state::{Edit, question::apply};
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    struct Picked(PathBuf);

    impl ImageSource for Picked {
        fn request_permission(&mut self) -> Permission {
            Permission::Granted
        }

        fn pick_image(&mut self) -> Option<PathBuf> {
            Some(self.0.clone())
        }
    }

    fn instant_state() -> AppState {
        AppState::new(&Config {
            login_delay_ms: 0,
            analysis_delay_ms: 0,
            ..Config::default()
        })
    }

    fn render_text(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn wait_for_tick(state: &mut AppState) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while !state.flow.tick() {
            assert!(Instant::now() < deadline, "delayed transition never fired");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    /// Answer every row of the current step
    fn answer_current_step(state: &mut AppState) {
        let Some(session) = state.flow.session_mut() else {
            return;
        };
        let Some(field) = session.current_step().field() else {
            return;
        };
        let rows = row_count(field, session.store().answers());
        for row in 0..rows.max(1) {
            if let Some(value) = apply(field, session.store().answers(), row, Edit::Choose) {
                session.update(value);
            }
        }
    }

    #[test]
    fn test_login_screen() {
        let mut state = AppState::default();
        let text = render_text(&mut state);
        assert!(text.contains("Sign in to your account"));
        assert!(text.contains("Email"));
    }

    #[test]
    fn test_exit_prompt_overlays_screen() {
        let mut state = AppState::default();
        state.confirm_exit = true;
        assert!(render_text(&mut state).contains("Exit Physique? (y/n)"));
    }

    #[test]
    fn test_every_screen_renders() {
        let mut state = instant_state();
        let auth = MockAuthenticator::new().unwrap();
        let credentials = Credentials {
            email: "jane@example.com".to_string(),
            password: "secret".to_string(),
        };
        state.flow.submit_login(&auth, &credentials).unwrap();
        assert!(render_text(&mut state).contains("Signing in..."));
        wait_for_tick(&mut state);
        assert_eq!(state.flow.screen(), Screen::Welcome);
        assert!(render_text(&mut state).contains("best physique"));

        state.flow.get_started();
        assert!(render_text(&mut state).contains("What's your gender?"));

        let mut steps = 0;
        while state.flow.screen() == Screen::Questionnaire {
            render_text(&mut state);
            answer_current_step(&mut state);
            let outcome = state.flow.questionnaire_next();
            assert_ne!(outcome, Some(Advance::Blocked));
            steps += 1;
            assert!(steps < 50, "questionnaire never completed");
        }
        assert_eq!(state.flow.screen(), Screen::PhotoUpload);
        assert!(render_text(&mut state).contains("Take or Upload a Photo"));

        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("front.png");
        std::fs::write(&photo, b"png").unwrap();
        state.flow.select_photo(&mut Picked(photo)).unwrap();
        assert!(render_text(&mut state).contains("front.png"));

        assert!(state.flow.continue_to_analysis());
        render_text(&mut state);
        wait_for_tick(&mut state);
        assert_eq!(state.flow.screen(), Screen::Results);
        let text = render_text(&mut state);
        assert!(text.contains("75/100"));
        assert!(text.contains("Shoulder Alignment"));
    }

    #[test]
    fn test_transition_step_renders_copy() {
        let mut state = instant_state();
        let credentials = Credentials {
            email: "a@b.co".to_string(),
            password: "pw".to_string(),
        };
        state
            .flow
            .submit_login(&MockAuthenticator::new().unwrap(), &credentials)
            .unwrap();
        wait_for_tick(&mut state);
        state.flow.get_started();

        while state
            .flow
            .session()
            .is_some_and(|s| !s.current_step().is_transition())
        {
            answer_current_step(&mut state);
            state.flow.questionnaire_next();
        }
        assert!(render_text(&mut state).contains("Now let's talk lifestyle"));
    }
}
