//! Questionnaire answers
//!
//! [`AnswerSet`] accumulates everything the questionnaire collects during one
//! session. Option-valued answers are typed enums from the fixed catalogues
//! below; unit-carrying answers are [`Height`] and [`Weight`].

use crate::catalogue::{EnumOption, option_catalogue};
use crate::error::{Error, Result};
use crate::units::{Height, Weight, WeightUnit, bounds};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

option_catalogue! {
    Gender, "gender" {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

option_catalogue! {
    /// Physique goals (multi-select)
    Goal, "goal" {
        LoseFat => "lose_fat",
        BuildMuscle => "build_muscle",
        Maintain => "maintain",
        ImprovePosture => "improve_posture",
        BoostConfidence => "boost_confidence",
    }
}

option_catalogue! {
    ActivityLevel, "activity level" {
        /// Little to no exercise, desk job
        Sedentary => "sedentary",
        /// Light exercise 1-3 days/week
        LightlyActive => "lightly_active",
        /// Moderate exercise 3-5 days/week
        Active => "active",
        /// Hard exercise 6-7 days/week
        VeryActive => "very_active",
    }
}

option_catalogue! {
    /// Reasons for wanting to change (multi-select)
    Motivation, "motivation" {
        Health => "health",
        Looks => "looks",
        Energy => "energy",
        Sports => "sports",
        Dating => "dating",
        Career => "career",
    }
}

option_catalogue! {
    SleepHours, "sleep" {
        LessThan5 => "less_than_5",
        FiveToSix => "5_to_6",
        SevenToEight => "7_to_8",
        NinePlus => "9_plus",
    }
}

option_catalogue! {
    WaterIntake, "water" {
        LessThan1 => "less_than_1",
        OneToTwo => "1_to_2",
        TwoToThree => "2_to_3",
        ThreePlus => "3_plus",
    }
}

option_catalogue! {
    MealsPerDay, "meals" {
        One => "1",
        Two => "2",
        Three => "3",
        FourPlus => "4_plus",
    }
}

option_catalogue! {
    /// Shared by the alcohol and smoking questions
    Consumption, "consumption" {
        Yes => "yes",
        Occasionally => "occasionally",
        No => "no",
    }
}

option_catalogue! {
    FastFoodFrequency, "fast food" {
        Daily => "daily",
        FewTimes => "few_times",
        Rarely => "rarely",
        Never => "never",
    }
}

option_catalogue! {
    CalorieTracking, "tracking" {
        Yes => "yes",
        Sometimes => "sometimes",
        No => "no",
    }
}

option_catalogue! {
    ProgramStatus, "current program" {
        Yes => "yes",
        No => "no",
        /// Makes their own routines
        Own => "own",
    }
}

option_catalogue! {
    WorkoutStyle, "workout style" {
        Weightlifting => "weightlifting",
        Calisthenics => "calisthenics",
        Cardio => "cardio",
        Hiit => "hiit",
        Yoga => "yoga",
        MartialArts => "martial_arts",
        Other => "other",
    }
}

option_catalogue! {
    MainMotivation, "main motivation" {
        Appearance => "appearance",
        Health => "health",
        Performance => "performance",
        Mental => "mental",
        Accountability => "accountability",
    }
}

option_catalogue! {
    Commitment, "commitment" {
        Exploring => "exploring",
        Somewhat => "somewhat",
        Fully => "fully",
    }
}

option_catalogue! {
    Barrier, "barrier" {
        Time => "time",
        Knowledge => "knowledge",
        Motivation => "motivation",
        Routine => "routine",
        Health => "health",
    }
}

option_catalogue! {
    AdviceType, "advice type" {
        Training => "training",
        Nutrition => "nutrition",
        Motivation => "motivation",
        Program => "program",
    }
}

/// Toggle membership of `option` in a multi-select answer
pub fn toggle<T: Ord>(set: &mut BTreeSet<T>, option: T) {
    if !set.remove(&option) {
        set.insert(option);
    }
}

/// Sub-questions of the daily habits step, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitQuestion {
    Sleep,
    Water,
    Meals,
    Alcohol,
    Smoking,
    FastFood,
    Tracking,
}

impl HabitQuestion {
    pub const ALL: [HabitQuestion; 7] = [
        HabitQuestion::Sleep,
        HabitQuestion::Water,
        HabitQuestion::Meals,
        HabitQuestion::Alcohol,
        HabitQuestion::Smoking,
        HabitQuestion::FastFood,
        HabitQuestion::Tracking,
    ];

    /// Option ids offered by this question
    pub fn option_ids(&self) -> Vec<&'static str> {
        match self {
            HabitQuestion::Sleep => ids::<SleepHours>(),
            HabitQuestion::Water => ids::<WaterIntake>(),
            HabitQuestion::Meals => ids::<MealsPerDay>(),
            HabitQuestion::Alcohol | HabitQuestion::Smoking => ids::<Consumption>(),
            HabitQuestion::FastFood => ids::<FastFoodFrequency>(),
            HabitQuestion::Tracking => ids::<CalorieTracking>(),
        }
    }
}

/// Sub-questions of the aspirations step, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspirationQuestion {
    MainMotivation,
    Commitment,
    Barrier,
    AdviceType,
}

impl AspirationQuestion {
    pub const ALL: [AspirationQuestion; 4] = [
        AspirationQuestion::MainMotivation,
        AspirationQuestion::Commitment,
        AspirationQuestion::Barrier,
        AspirationQuestion::AdviceType,
    ];

    pub fn option_ids(&self) -> Vec<&'static str> {
        match self {
            AspirationQuestion::MainMotivation => ids::<MainMotivation>(),
            AspirationQuestion::Commitment => ids::<Commitment>(),
            AspirationQuestion::Barrier => ids::<Barrier>(),
            AspirationQuestion::AdviceType => ids::<AdviceType>(),
        }
    }
}

fn ids<E: EnumOption>() -> Vec<&'static str> {
    E::variants().iter().map(|v| v.id()).collect()
}

fn index_of<E: EnumOption>(value: Option<E>) -> Option<usize> {
    value.map(|v| v.to_index())
}

/// Daily habit answers, each independent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHabits {
    pub sleep: Option<SleepHours>,
    pub water: Option<WaterIntake>,
    pub meals: Option<MealsPerDay>,
    pub alcohol: Option<Consumption>,
    pub smoking: Option<Consumption>,
    pub fast_food: Option<FastFoodFrequency>,
    pub tracking: Option<CalorieTracking>,
}

impl DailyHabits {
    /// Index of the selected option for `question`
    pub fn selected_index(&self, question: HabitQuestion) -> Option<usize> {
        match question {
            HabitQuestion::Sleep => index_of(self.sleep),
            HabitQuestion::Water => index_of(self.water),
            HabitQuestion::Meals => index_of(self.meals),
            HabitQuestion::Alcohol => index_of(self.alcohol),
            HabitQuestion::Smoking => index_of(self.smoking),
            HabitQuestion::FastFood => index_of(self.fast_food),
            HabitQuestion::Tracking => index_of(self.tracking),
        }
    }

    /// Answer `question` with the option at `index`
    pub fn select(&mut self, question: HabitQuestion, index: usize) {
        match question {
            HabitQuestion::Sleep => self.sleep = Some(SleepHours::from_index(index)),
            HabitQuestion::Water => self.water = Some(WaterIntake::from_index(index)),
            HabitQuestion::Meals => self.meals = Some(MealsPerDay::from_index(index)),
            HabitQuestion::Alcohol => self.alcohol = Some(Consumption::from_index(index)),
            HabitQuestion::Smoking => self.smoking = Some(Consumption::from_index(index)),
            HabitQuestion::FastFood => {
                self.fast_food = Some(FastFoodFrequency::from_index(index))
            }
            HabitQuestion::Tracking => self.tracking = Some(CalorieTracking::from_index(index)),
        }
    }

    pub fn answered_count(&self) -> usize {
        HabitQuestion::ALL
            .iter()
            .filter(|q| self.selected_index(**q).is_some())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == HabitQuestion::ALL.len()
    }
}

/// Fitness goal answers
///
/// The free-text workout style is private so it can only exist while
/// [`WorkoutStyle::Other`] is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFitnessGoals")]
pub struct FitnessGoals {
    pub target_weight: Option<Weight>,
    pub current_program: Option<ProgramStatus>,
    pub workout_styles: BTreeSet<WorkoutStyle>,
    other_workout_style: Option<String>,
}

impl FitnessGoals {
    /// Select or deselect a workout style. Deselecting `Other` clears the
    /// custom label.
    pub fn toggle_style(&mut self, style: WorkoutStyle) {
        toggle(&mut self.workout_styles, style);
        if !self.workout_styles.contains(&WorkoutStyle::Other) {
            self.other_workout_style = None;
        }
    }

    pub fn other_workout_style(&self) -> Option<&str> {
        self.other_workout_style.as_deref()
    }

    /// Set the custom workout style label
    pub fn set_other_workout_style(&mut self, label: impl Into<String>) -> Result<()> {
        if !self.workout_styles.contains(&WorkoutStyle::Other) {
            return Err(Error::FreeTextNotAllowed);
        }
        let label = label.into();
        self.other_workout_style = if label.is_empty() { None } else { Some(label) };
        Ok(())
    }

    /// Target weight, or the suggested starting value in `unit`
    pub fn target_weight_or_default(&self, unit: WeightUnit) -> Weight {
        match self.target_weight {
            Some(weight) => weight.with_unit(unit),
            None => match unit {
                WeightUnit::Kg => Weight::kg(bounds::TARGET_WEIGHT_DEFAULT_KG),
                WeightUnit::Lb => Weight::lb(bounds::TARGET_WEIGHT_DEFAULT_LB),
            },
        }
    }

    /// Switch the target weight's display unit, converting if one is set
    pub fn convert_target_weight(&mut self, unit: WeightUnit) {
        if let Some(weight) = self.target_weight {
            self.target_weight = Some(weight.with_unit(unit));
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_program.is_some() && !self.workout_styles.is_empty()
    }
}

/// Unchecked wire form of [`FitnessGoals`]
#[derive(Deserialize)]
struct RawFitnessGoals {
    #[serde(default)]
    target_weight: Option<Weight>,
    #[serde(default)]
    current_program: Option<ProgramStatus>,
    #[serde(default)]
    workout_styles: BTreeSet<WorkoutStyle>,
    #[serde(default)]
    other_workout_style: Option<String>,
}

impl TryFrom<RawFitnessGoals> for FitnessGoals {
    type Error = Error;

    fn try_from(raw: RawFitnessGoals) -> Result<Self> {
        let mut goals = FitnessGoals {
            target_weight: raw.target_weight,
            current_program: raw.current_program,
            workout_styles: raw.workout_styles,
            other_workout_style: None,
        };
        if let Some(label) = raw.other_workout_style {
            goals.set_other_workout_style(label)?;
        }
        Ok(goals)
    }
}

/// Aspiration answers, each independent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aspirations {
    pub main_motivation: Option<MainMotivation>,
    pub commitment: Option<Commitment>,
    pub barrier: Option<Barrier>,
    pub advice_type: Option<AdviceType>,
}

impl Aspirations {
    pub fn selected_index(&self, question: AspirationQuestion) -> Option<usize> {
        match question {
            AspirationQuestion::MainMotivation => index_of(self.main_motivation),
            AspirationQuestion::Commitment => index_of(self.commitment),
            AspirationQuestion::Barrier => index_of(self.barrier),
            AspirationQuestion::AdviceType => index_of(self.advice_type),
        }
    }

    pub fn select(&mut self, question: AspirationQuestion, index: usize) {
        match question {
            AspirationQuestion::MainMotivation => {
                self.main_motivation = Some(MainMotivation::from_index(index))
            }
            AspirationQuestion::Commitment => self.commitment = Some(Commitment::from_index(index)),
            AspirationQuestion::Barrier => self.barrier = Some(Barrier::from_index(index)),
            AspirationQuestion::AdviceType => self.advice_type = Some(AdviceType::from_index(index)),
        }
    }

    pub fn is_complete(&self) -> bool {
        AspirationQuestion::ALL
            .iter()
            .all(|q| self.selected_index(*q).is_some())
    }
}

/// Identifies one answer in [`AnswerSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Gender,
    Age,
    Height,
    Weight,
    Goals,
    ActivityLevel,
    Motivations,
    DailyHabits,
    FitnessGoals,
    Aspirations,
}

impl Field {
    /// Stable key used in logs
    pub fn key(&self) -> &'static str {
        match self {
            Field::Gender => "gender",
            Field::Age => "age",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::Goals => "goals",
            Field::ActivityLevel => "activity_level",
            Field::Motivations => "motivations",
            Field::DailyHabits => "daily_habits",
            Field::FitnessGoals => "fitness_goals",
            Field::Aspirations => "aspirations",
        }
    }
}

/// The value of one answer, tagged by its field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Gender(Option<Gender>),
    Age(u32),
    Height(Height),
    Weight(Weight),
    Goals(BTreeSet<Goal>),
    ActivityLevel(Option<ActivityLevel>),
    Motivations(BTreeSet<Motivation>),
    DailyHabits(DailyHabits),
    FitnessGoals(FitnessGoals),
    Aspirations(Aspirations),
}

impl FieldValue {
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Gender(_) => Field::Gender,
            FieldValue::Age(_) => Field::Age,
            FieldValue::Height(_) => Field::Height,
            FieldValue::Weight(_) => Field::Weight,
            FieldValue::Goals(_) => Field::Goals,
            FieldValue::ActivityLevel(_) => Field::ActivityLevel,
            FieldValue::Motivations(_) => Field::Motivations,
            FieldValue::DailyHabits(_) => Field::DailyHabits,
            FieldValue::FitnessGoals(_) => Field::FitnessGoals,
            FieldValue::Aspirations(_) => Field::Aspirations,
        }
    }
}

/// Everything collected by one questionnaire session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub gender: Option<Gender>,
    pub age: u32,
    pub height: Height,
    pub weight: Weight,
    pub goals: BTreeSet<Goal>,
    pub activity_level: Option<ActivityLevel>,
    pub motivations: BTreeSet<Motivation>,
    pub daily_habits: DailyHabits,
    pub fitness_goals: FitnessGoals,
    pub aspirations: Aspirations,
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self {
            gender: None,
            age: 30,
            height: Height::default(),
            weight: Weight::default(),
            goals: BTreeSet::new(),
            activity_level: None,
            motivations: BTreeSet::new(),
            daily_habits: DailyHabits::default(),
            fitness_goals: FitnessGoals::default(),
            aspirations: Aspirations::default(),
        }
    }
}

impl AnswerSet {
    /// Current value of `field`
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Gender => FieldValue::Gender(self.gender),
            Field::Age => FieldValue::Age(self.age),
            Field::Height => FieldValue::Height(self.height),
            Field::Weight => FieldValue::Weight(self.weight),
            Field::Goals => FieldValue::Goals(self.goals.clone()),
            Field::ActivityLevel => FieldValue::ActivityLevel(self.activity_level),
            Field::Motivations => FieldValue::Motivations(self.motivations.clone()),
            Field::DailyHabits => FieldValue::DailyHabits(self.daily_habits.clone()),
            Field::FitnessGoals => FieldValue::FitnessGoals(self.fitness_goals.clone()),
            Field::Aspirations => FieldValue::Aspirations(self.aspirations.clone()),
        }
    }

    /// Copy of this set with one answer replaced
    pub fn with(&self, value: FieldValue) -> Self {
        let mut next = self.clone();
        match value {
            FieldValue::Gender(v) => next.gender = v,
            FieldValue::Age(v) => next.age = v,
            FieldValue::Height(v) => next.height = v,
            FieldValue::Weight(v) => next.weight = v,
            FieldValue::Goals(v) => next.goals = v,
            FieldValue::ActivityLevel(v) => next.activity_level = v,
            FieldValue::Motivations(v) => next.motivations = v,
            FieldValue::DailyHabits(v) => next.daily_habits = v,
            FieldValue::FitnessGoals(v) => next.fitness_goals = v,
            FieldValue::Aspirations(v) => next.aspirations = v,
        }
        next
    }
}
