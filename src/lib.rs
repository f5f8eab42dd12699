//! Physique Onboarding - guided intake for a physique analysis
//!
//! This library drives the onboarding flow of a physique analysis app:
//! - Mock sign-in with a simulated network delay
//! - A multi-step lifestyle questionnaire with per-step validation
//! - Metric / imperial unit conversion for height and weight
//! - Photo selection with image type checks
//! - A simulated analysis followed by a results report
//! - A Ratatui terminal front end

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en");

pub mod answers;
pub mod catalogue;
pub mod cli;
pub mod config;
pub mod delay;
pub mod error;
pub mod flow;
pub mod i18n;
pub mod report;
pub mod sequencer;
pub mod session;
pub mod steps;
pub mod store;
pub mod tui;
pub mod units;

pub use answers::{AnswerSet, Field, FieldValue};
pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use flow::{Authenticator, ImageSource, MockAuthenticator, OnboardingFlow, Screen};
pub use i18n::init_locale;
pub use session::{Navigator, QuestionnaireSession};
pub use sequencer::{Advance, Retreat, StepSequencer};
pub use store::{AnswerPolicy, FormStateStore};
pub use tui::TuiApp;
pub use units::{Height, HeightUnit, Weight, WeightUnit};
