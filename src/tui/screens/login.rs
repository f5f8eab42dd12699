//! 登录界面渲染

use crate::tui::components::{
    centered_rect, render_alert, render_hint, render_title_block, three_panel_layout,
};
use crate::tui::state::{AppState, InputState, LoginField};
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    widgets::{Block, BorderType, Paragraph},
};
use rust_i18n::t;

/// 渲染登录界面
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let [header, body, footer] = three_panel_layout(area);

    render_title_block(&t!("app_title"), frame, header);

    let form = centered_rect(body.width.min(60), 13, body);
    let [welcome, email_area, password_area, submit_area, alert_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(3),
    ])
    .areas(form);

    frame.render_widget(
        Paragraph::new(t!("login_subtitle"))
            .style(theme().hint())
            .alignment(Alignment::Center),
        welcome,
    );

    let login = &state.login;
    let busy = state.flow.is_busy();

    draw_input(
        frame,
        email_area,
        &t!("login_email"),
        &login.email,
        false,
        login.focus == LoginField::Email && !busy,
    );
    draw_input(
        frame,
        password_area,
        &t!("login_password"),
        &login.password,
        true,
        login.focus == LoginField::Password && !busy,
    );

    let (submit_text, submit_style) = if busy {
        (t!("login_signing_in"), theme().accent())
    } else if login.focus == LoginField::Submit {
        (t!("login_submit"), theme().selected())
    } else {
        (t!("login_submit"), theme().normal())
    };
    frame.render_widget(
        Paragraph::new(format!(" {} ", submit_text))
            .style(submit_style)
            .alignment(Alignment::Center),
        submit_area,
    );

    render_alert(login.alert.as_deref(), frame, alert_area);
    render_hint(&t!("login_hint"), frame, footer);
}

fn draw_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &InputState,
    masked: bool,
    focused: bool,
) {
    let text = if masked {
        input.masked()
    } else {
        input.value().to_string()
    };
    let border_style = if focused {
        theme().title()
    } else {
        theme().border()
    };
    let widget = Paragraph::new(text).style(theme().normal()).block(
        Block::bordered()
            .title(format!(" {} ", title))
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    frame.render_widget(widget, area);

    if focused {
        let offset = input.visual_cursor_position(masked) as u16;
        let x = (area.x + 1 + offset).min(area.x + area.width.saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}
