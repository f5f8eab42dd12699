//! 问卷问题渲染
//!
//! 按字段分派，每个字段一种输入部件。

use crate::answers::{
    ActivityLevel, AnswerSet, AspirationQuestion, Field, Gender, Goal, HabitQuestion,
    Motivation, ProgramStatus,
};
use crate::catalogue::EnumOption;
use crate::tui::components::{
    option_row, render_alert, render_hint, render_step_gauge, render_title_block,
};
use crate::tui::labels::{
    aspiration_options, aspiration_title, field_subtitle, field_title, habit_options,
    habit_title, option_label, option_labels,
};
use crate::tui::state::question::{fitness_rows, target_weight_unit};
use crate::tui::state::{AppState, FitnessRow, QuestionState};
use crate::tui::theme::{config::HIGHLIGHT_SYMBOL, theme};
use crate::units::{HeightUnit, WeightUnit};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, Paragraph},
};
use rust_i18n::t;
use std::borrow::Cow;
use std::collections::BTreeSet;

/// 渲染问卷问题
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, field: Field) {
    let AppState { flow, question, .. } = state;
    let Some(session) = flow.session() else {
        return;
    };
    let answers = session.store().answers();
    let sequencer = session.sequencer();

    let [header, gauge, subtitle, body, notice, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(area);

    render_title_block(&field_title(field), frame, header);
    render_step_gauge(sequencer.position(), sequencer.total(), frame, gauge);
    frame.render_widget(
        Paragraph::new(field_subtitle(field))
            .style(theme().hint())
            .alignment(Alignment::Center),
        subtitle,
    );

    match field {
        Field::Gender => draw_choices(
            frame,
            body,
            question,
            &option_labels::<Gender>(),
            |i| answers.gender.map(|g| g.to_index()) == Some(i),
            false,
        ),
        Field::ActivityLevel => draw_choices(
            frame,
            body,
            question,
            &option_labels::<ActivityLevel>(),
            |i| answers.activity_level.map(|a| a.to_index()) == Some(i),
            false,
        ),
        Field::Goals => draw_choices(
            frame,
            body,
            question,
            &option_labels::<Goal>(),
            |i| contains_index(&answers.goals, i),
            true,
        ),
        Field::Motivations => draw_choices(
            frame,
            body,
            question,
            &option_labels::<Motivation>(),
            |i| contains_index(&answers.motivations, i),
            true,
        ),
        Field::Age => draw_number(frame, body, answers.age.to_string(), None),
        Field::Height => draw_number(
            frame,
            body,
            answers.height.to_string(),
            Some(unit_switch(
                answers.height.unit == HeightUnit::Cm,
                "cm",
                &t!("unit_feet_inches"),
            )),
        ),
        Field::Weight => draw_number(
            frame,
            body,
            answers.weight.value.to_string(),
            Some(unit_switch(answers.weight.unit == WeightUnit::Kg, "kg", "lb")),
        ),
        Field::DailyHabits => {
            let rows: Vec<(String, Option<String>)> = HabitQuestion::ALL
                .iter()
                .map(|q| {
                    let labels = habit_options(*q);
                    let chosen = answers
                        .daily_habits
                        .selected_index(*q)
                        .and_then(|i| labels.get(i).cloned());
                    (habit_title(*q), chosen)
                })
                .collect();
            draw_group(frame, body, question, &rows);
        }
        Field::Aspirations => {
            let rows: Vec<(String, Option<String>)> = AspirationQuestion::ALL
                .iter()
                .map(|q| {
                    let labels = aspiration_options(*q);
                    let chosen = answers
                        .aspirations
                        .selected_index(*q)
                        .and_then(|i| labels.get(i).cloned());
                    (aspiration_title(*q), chosen)
                })
                .collect();
            draw_group(frame, body, question, &rows);
        }
        Field::FitnessGoals => draw_fitness(frame, body, question, answers),
    }

    render_alert(question.notice.as_deref(), frame, notice);
    let nav = if sequencer.is_last() {
        t!("hint_nav_finish")
    } else {
        t!("hint_nav_next")
    };
    render_hint(
        &format!("{} | {}", hint_for(field, question, answers), nav),
        frame,
        footer,
    );
}

fn contains_index<E: EnumOption + Ord>(set: &BTreeSet<E>, index: usize) -> bool {
    set.contains(&E::from_index(index))
}

fn hint_for(field: Field, question: &QuestionState, answers: &AnswerSet) -> Cow<'static, str> {
    match field {
        Field::Gender | Field::ActivityLevel => t!("hint_single_choice"),
        Field::Goals | Field::Motivations => t!("hint_multi_choice"),
        Field::Age => t!("hint_number"),
        Field::Height | Field::Weight => t!("hint_number_unit"),
        Field::DailyHabits | Field::Aspirations => t!("hint_group"),
        Field::FitnessGoals => {
            let rows = fitness_rows(&answers.fitness_goals);
            match rows.get(question.cursor.list_state.selected().unwrap_or(0)) {
                Some(FitnessRow::TargetWeight) => t!("hint_number_unit"),
                Some(FitnessRow::OtherStyle) => t!("hint_text_input"),
                _ => t!("hint_group"),
            }
        }
    }
}

fn bordered_list(items: Vec<ListItem<'static>>) -> List<'static> {
    List::new(items)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .highlight_style(theme().selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL)
}

fn draw_choices(
    frame: &mut Frame,
    area: Rect,
    question: &mut QuestionState,
    labels: &[String],
    is_chosen: impl Fn(usize) -> bool,
    multi: bool,
) {
    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let chosen = is_chosen(i);
            let style = if chosen {
                theme().chosen()
            } else {
                theme().normal()
            };
            ListItem::new(option_row(label, chosen, multi)).style(style)
        })
        .collect();

    frame.render_stateful_widget(
        bordered_list(items),
        area,
        &mut question.cursor.list_state,
    );
}

fn unit_switch(first_active: bool, first: &str, second: &str) -> Line<'static> {
    let (active, inactive) = (theme().selected(), theme().hint());
    Line::from(vec![
        Span::styled(
            format!(" {} ", first),
            if first_active { active } else { inactive },
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", second),
            if first_active { inactive } else { active },
        ),
    ])
    .centered()
}

fn draw_number(frame: &mut Frame, area: Rect, value: String, units: Option<Line<'static>>) {
    let [_, content, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("◀  ", theme().hint()),
            Span::styled(value, theme().title()),
            Span::styled("  ▶", theme().hint()),
        ])
        .centered(),
        Line::from(""),
    ];
    if let Some(units) = units {
        lines.push(units);
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}

fn value_row(title: &str, value: Option<String>) -> ListItem<'static> {
    let (text, style) = match value {
        Some(v) => (format!("◀ {} ▶", v), theme().chosen()),
        None => (format!("◀ {} ▶", t!("not_answered")), theme().hint()),
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{}: ", title), theme().normal()),
        Span::styled(text, style),
    ]))
}

fn draw_group(
    frame: &mut Frame,
    area: Rect,
    question: &mut QuestionState,
    rows: &[(String, Option<String>)],
) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|(title, chosen)| value_row(title, chosen.clone()))
        .collect();

    frame.render_stateful_widget(
        bordered_list(items),
        area,
        &mut question.cursor.list_state,
    );
}

fn draw_fitness(frame: &mut Frame, area: Rect, question: &mut QuestionState, answers: &AnswerSet) {
    let goals = &answers.fitness_goals;
    let unit = target_weight_unit(answers);

    let items: Vec<ListItem> = fitness_rows(goals)
        .into_iter()
        .map(|row| match row {
            FitnessRow::TargetWeight => {
                let target = goals.target_weight_or_default(unit);
                let item = value_row(&t!("fitness_target_weight"), Some(target.to_string()));
                if goals.target_weight.is_some() {
                    item
                } else {
                    item.style(theme().hint())
                }
            }
            FitnessRow::CurrentProgram => value_row(
                &t!("fitness_current_program"),
                goals.current_program.map(option_label::<ProgramStatus>),
            ),
            FitnessRow::Style(style) => {
                let chosen = goals.workout_styles.contains(&style);
                let row_style = if chosen {
                    theme().chosen()
                } else {
                    theme().normal()
                };
                ListItem::new(option_row(&option_label(style), chosen, true)).style(row_style)
            }
            FitnessRow::OtherStyle => {
                let typed = question.other_input.value();
                let shown = if typed.is_empty() {
                    goals.other_workout_style().unwrap_or_default().to_string()
                } else {
                    typed.to_string()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("    {}: ", t!("fitness_other_style")), theme().hint()),
                    Span::styled(format!("{}▏", shown), theme().accent()),
                ]))
            }
        })
        .collect();

    frame.render_stateful_widget(
        bordered_list(items),
        area,
        &mut question.cursor.list_state,
    );
}
