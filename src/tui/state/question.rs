//! 问卷步骤状态
//!
//! 按键到答案的映射都在这里，渲染与事件循环只负责调用。

use crate::answers::{
    ActivityLevel, AnswerSet, AspirationQuestion, Field, FieldValue, FitnessGoals, Gender, Goal,
    HabitQuestion, Motivation, ProgramStatus, WorkoutStyle, toggle,
};
use crate::catalogue::EnumOption;
use crate::tui::state::{InputState, SelectionState};
use crate::units::{WeightUnit, bounds};
use std::ops::RangeInclusive;

/// 作用于当前光标行的编辑
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// 选择 / 切换 / 确认当前值
    Choose,
    /// 数值增减或选项轮换
    Step(i64),
    /// 切换单位
    ToggleUnit,
}

/// 健身目标步骤的行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessRow {
    TargetWeight,
    CurrentProgram,
    Style(WorkoutStyle),
    /// 仅在选择“其他”时出现
    OtherStyle,
}

/// 健身目标步骤当前可见的行
pub fn fitness_rows(goals: &FitnessGoals) -> Vec<FitnessRow> {
    let mut rows = vec![FitnessRow::TargetWeight, FitnessRow::CurrentProgram];
    rows.extend(WorkoutStyle::variants().iter().map(|s| FitnessRow::Style(*s)));
    if goals.workout_styles.contains(&WorkoutStyle::Other) {
        rows.push(FitnessRow::OtherStyle);
    }
    rows
}

/// 步骤的光标行数，数值步骤为 0
pub fn row_count(field: Field, answers: &AnswerSet) -> usize {
    match field {
        Field::Gender => Gender::variants().len(),
        Field::Goals => Goal::variants().len(),
        Field::ActivityLevel => ActivityLevel::variants().len(),
        Field::Motivations => Motivation::variants().len(),
        Field::Age | Field::Height | Field::Weight => 0,
        Field::DailyHabits => HabitQuestion::ALL.len(),
        Field::FitnessGoals => fitness_rows(&answers.fitness_goals).len(),
        Field::Aspirations => AspirationQuestion::ALL.len(),
    }
}

/// 在范围内增减
fn step_within(value: u32, delta: i64, range: RangeInclusive<u32>) -> u32 {
    let next = i64::from(value) + delta;
    next.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32
}

/// 轮换选项索引；未作答时从两端开始
fn cycle(current: Option<usize>, delta: i64, count: usize) -> usize {
    match current {
        None if delta < 0 => count - 1,
        None => 0,
        Some(i) if delta < 0 => (i + count - 1) % count,
        Some(i) => (i + 1) % count,
    }
}

/// 计算一次编辑后的新答案；不产生变化时返回 `None`
pub fn apply(field: Field, answers: &AnswerSet, row: usize, edit: Edit) -> Option<FieldValue> {
    match (field, edit) {
        (Field::Gender, Edit::Choose) => Some(FieldValue::Gender(Some(Gender::from_index(row)))),
        (Field::ActivityLevel, Edit::Choose) => Some(FieldValue::ActivityLevel(Some(
            ActivityLevel::from_index(row),
        ))),
        (Field::Goals, Edit::Choose) => {
            let mut goals = answers.goals.clone();
            toggle(&mut goals, Goal::from_index(row));
            Some(FieldValue::Goals(goals))
        }
        (Field::Motivations, Edit::Choose) => {
            let mut motivations = answers.motivations.clone();
            toggle(&mut motivations, Motivation::from_index(row));
            Some(FieldValue::Motivations(motivations))
        }

        (Field::Age, Edit::Choose) => Some(FieldValue::Age(answers.age)),
        (Field::Age, Edit::Step(delta)) => {
            Some(FieldValue::Age(step_within(answers.age, delta, bounds::AGE)))
        }
        (Field::Height, Edit::Choose) => Some(FieldValue::Height(answers.height)),
        (Field::Height, Edit::Step(delta)) => {
            let mut height = answers.height;
            height.value = step_within(height.value, delta, height.bounds());
            Some(FieldValue::Height(height))
        }
        (Field::Height, Edit::ToggleUnit) => {
            let mut height = answers.height.toggled();
            height.value = step_within(height.value, 0, height.bounds());
            Some(FieldValue::Height(height))
        }
        (Field::Weight, Edit::Choose) => Some(FieldValue::Weight(answers.weight)),
        (Field::Weight, Edit::Step(delta)) => {
            let mut weight = answers.weight;
            weight.value = step_within(weight.value, delta, weight.bounds());
            Some(FieldValue::Weight(weight))
        }
        (Field::Weight, Edit::ToggleUnit) => {
            let mut weight = answers.weight.toggled();
            weight.value = step_within(weight.value, 0, weight.bounds());
            Some(FieldValue::Weight(weight))
        }

        (Field::DailyHabits, Edit::Choose | Edit::Step(_)) => {
            let question = *HabitQuestion::ALL.get(row)?;
            let delta = if let Edit::Step(d) = edit { d } else { 1 };
            let mut habits = answers.daily_habits.clone();
            let count = question.option_ids().len();
            habits.select(question, cycle(habits.selected_index(question), delta, count));
            Some(FieldValue::DailyHabits(habits))
        }
        (Field::Aspirations, Edit::Choose | Edit::Step(_)) => {
            let question = *AspirationQuestion::ALL.get(row)?;
            let delta = if let Edit::Step(d) = edit { d } else { 1 };
            let mut aspirations = answers.aspirations.clone();
            let count = question.option_ids().len();
            aspirations.select(question, cycle(aspirations.selected_index(question), delta, count));
            Some(FieldValue::Aspirations(aspirations))
        }
        (Field::FitnessGoals, edit) => apply_fitness(answers, row, edit),

        _ => None,
    }
}

/// 目标体重显示单位：已设置时沿用，否则跟随当前体重
pub fn target_weight_unit(answers: &AnswerSet) -> WeightUnit {
    answers
        .fitness_goals
        .target_weight
        .map(|w| w.unit)
        .unwrap_or(answers.weight.unit)
}

fn apply_fitness(answers: &AnswerSet, row: usize, edit: Edit) -> Option<FieldValue> {
    let mut goals = answers.fitness_goals.clone();
    let unit = target_weight_unit(answers);

    match (*fitness_rows(&goals).get(row)?, edit) {
        (FitnessRow::TargetWeight, Edit::Choose) => {
            goals.target_weight = Some(goals.target_weight_or_default(unit));
        }
        (FitnessRow::TargetWeight, Edit::Step(delta)) => {
            let mut target = goals.target_weight_or_default(unit);
            target.value = step_within(target.value, delta, target.bounds());
            goals.target_weight = Some(target);
        }
        (FitnessRow::TargetWeight, Edit::ToggleUnit) => {
            let other = match unit {
                WeightUnit::Kg => WeightUnit::Lb,
                WeightUnit::Lb => WeightUnit::Kg,
            };
            if goals.target_weight.is_some() {
                goals.convert_target_weight(other);
            } else {
                goals.target_weight = Some(goals.target_weight_or_default(other));
            }
            if let Some(target) = goals.target_weight.as_mut() {
                target.value = step_within(target.value, 0, target.bounds());
            }
        }
        (FitnessRow::CurrentProgram, Edit::Choose | Edit::Step(_)) => {
            let delta = if let Edit::Step(d) = edit { d } else { 1 };
            let current = goals.current_program.map(|p| p.to_index());
            let count = ProgramStatus::variants().len();
            goals.current_program = Some(ProgramStatus::from_index(cycle(current, delta, count)));
        }
        (FitnessRow::Style(style), Edit::Choose) => goals.toggle_style(style),
        _ => return None,
    }
    Some(FieldValue::FitnessGoals(goals))
}

/// 用输入框内容更新“其他”运动方式
pub fn apply_other_style(answers: &AnswerSet, text: &str) -> Option<FieldValue> {
    let mut goals = answers.fitness_goals.clone();
    goals.set_other_workout_style(text.trim()).ok()?;
    Some(FieldValue::FitnessGoals(goals))
}

/// 问卷界面状态
#[derive(Debug, Clone, Default)]
pub struct QuestionState {
    /// 当前步骤内的行光标
    pub cursor: SelectionState,
    /// “其他”运动方式输入
    pub other_input: InputState,
    /// 未作答提示
    pub notice: Option<String>,
    /// 光标所属的步骤位置
    position: usize,
}

impl QuestionState {
    /// 与当前步骤同步；换步骤时重置光标与提示
    pub fn sync(&mut self, position: usize, rows: usize) {
        if position != self.position {
            self.position = position;
            self.cursor = SelectionState::with_count(rows);
            self.notice = None;
        } else {
            self.cursor.set_count(rows);
        }
    }

    /// 新问卷开始时调用
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
