//! 本地化标签映射
//!
//! 将选项枚举与问题映射为稳定的翻译键，避免依赖 Debug 输出。

use crate::answers::{
    AdviceType, AspirationQuestion, Barrier, CalorieTracking, Commitment, Consumption,
    FastFoodFrequency, Field, HabitQuestion, MainMotivation, MealsPerDay, SleepHours,
    WaterIntake,
};
use crate::catalogue::EnumOption;
use rust_i18n::t;

/// 选项翻译键：`option_<目录>.<id>`
fn option_key(catalogue: &str, id: &str) -> String {
    format!("option_{}.{}", catalogue.replace(' ', "_"), id)
}

/// 单个选项标签
pub fn option_label<E: EnumOption>(option: E) -> String {
    let key = option_key(E::CATALOGUE, option.id());
    t!(key.as_str()).to_string()
}

/// 目录内全部选项标签
pub fn option_labels<E: EnumOption>() -> Vec<String> {
    E::variants().iter().map(|v| option_label(*v)).collect()
}

fn labels_for(catalogue: &str, ids: Vec<&'static str>) -> Vec<String> {
    ids.into_iter()
        .map(|id| {
            let key = option_key(catalogue, id);
            t!(key.as_str()).to_string()
        })
        .collect()
}

/// 日常习惯子问题标题
pub fn habit_title(question: HabitQuestion) -> String {
    match question {
        HabitQuestion::Sleep => t!("habit_sleep"),
        HabitQuestion::Water => t!("habit_water"),
        HabitQuestion::Meals => t!("habit_meals"),
        HabitQuestion::Alcohol => t!("habit_alcohol"),
        HabitQuestion::Smoking => t!("habit_smoking"),
        HabitQuestion::FastFood => t!("habit_fast_food"),
        HabitQuestion::Tracking => t!("habit_tracking"),
    }
    .to_string()
}

/// 日常习惯子问题选项
pub fn habit_options(question: HabitQuestion) -> Vec<String> {
    let catalogue = match question {
        HabitQuestion::Sleep => SleepHours::CATALOGUE,
        HabitQuestion::Water => WaterIntake::CATALOGUE,
        HabitQuestion::Meals => MealsPerDay::CATALOGUE,
        HabitQuestion::Alcohol | HabitQuestion::Smoking => Consumption::CATALOGUE,
        HabitQuestion::FastFood => FastFoodFrequency::CATALOGUE,
        HabitQuestion::Tracking => CalorieTracking::CATALOGUE,
    };
    labels_for(catalogue, question.option_ids())
}

/// 志向子问题标题
pub fn aspiration_title(question: AspirationQuestion) -> String {
    match question {
        AspirationQuestion::MainMotivation => t!("aspiration_main_motivation"),
        AspirationQuestion::Commitment => t!("aspiration_commitment"),
        AspirationQuestion::Barrier => t!("aspiration_barrier"),
        AspirationQuestion::AdviceType => t!("aspiration_advice_type"),
    }
    .to_string()
}

/// 志向子问题选项
pub fn aspiration_options(question: AspirationQuestion) -> Vec<String> {
    let catalogue = match question {
        AspirationQuestion::MainMotivation => MainMotivation::CATALOGUE,
        AspirationQuestion::Commitment => Commitment::CATALOGUE,
        AspirationQuestion::Barrier => Barrier::CATALOGUE,
        AspirationQuestion::AdviceType => AdviceType::CATALOGUE,
    };
    labels_for(catalogue, question.option_ids())
}

/// 问题标题
pub fn field_title(field: Field) -> String {
    let key = format!("question_{}_title", field.key());
    t!(key.as_str()).to_string()
}

/// 问题副标题
pub fn field_subtitle(field: Field) -> String {
    let key = format!("question_{}_subtitle", field.key());
    t!(key.as_str()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{ActivityLevel, Gender, Goal, Motivation, ProgramStatus, WorkoutStyle};

    fn assert_translated(labels: &[String]) {
        for label in labels {
            assert!(!label.contains("option_"), "missing translation: {}", label);
        }
    }

    #[test]
    fn test_single_catalogues_translated() {
        assert_translated(&option_labels::<Gender>());
        assert_translated(&option_labels::<Goal>());
        assert_translated(&option_labels::<ActivityLevel>());
        assert_translated(&option_labels::<Motivation>());
        assert_translated(&option_labels::<ProgramStatus>());
        assert_translated(&option_labels::<WorkoutStyle>());
    }

    #[test]
    fn test_grouped_questions_translated() {
        for question in HabitQuestion::ALL {
            assert!(!habit_title(question).starts_with("habit_"));
            let labels = habit_options(question);
            assert_eq!(labels.len(), question.option_ids().len());
            assert_translated(&labels);
        }
        for question in AspirationQuestion::ALL {
            assert!(!aspiration_title(question).starts_with("aspiration_"));
            assert_translated(&aspiration_options(question));
        }
    }

    #[test]
    fn test_field_titles_translated() {
        for field in [
            Field::Gender,
            Field::Age,
            Field::Height,
            Field::Weight,
            Field::Goals,
            Field::ActivityLevel,
            Field::Motivations,
            Field::DailyHabits,
            Field::FitnessGoals,
            Field::Aspirations,
        ] {
            assert!(!field_title(field).contains("question_"));
            assert!(!field_subtitle(field).contains("question_"));
        }
    }
}
