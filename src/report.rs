//! Physique analysis report
//!
//! No analysis runs yet: every session gets the same report.

use rust_i18n::t;

/// One area flagged for improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Improvement {
    pub title_key: &'static str,
    pub description_key: &'static str,
}

impl Improvement {
    pub fn title(&self) -> String {
        t!(self.title_key).to_string()
    }

    pub fn description(&self) -> String {
        t!(self.description_key).to_string()
    }
}

/// Results screen content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Physique score out of 100
    pub score: u8,
    pub improvements: &'static [Improvement],
    pub next_step_keys: &'static [&'static str],
}

impl AnalysisReport {
    /// The report shown after every analysis
    pub fn fixed() -> Self {
        Self {
            score: 75,
            improvements: &[
                Improvement {
                    title_key: "improvement_shoulder_title",
                    description_key: "improvement_shoulder_description",
                },
                Improvement {
                    title_key: "improvement_posture_title",
                    description_key: "improvement_posture_description",
                },
            ],
            next_step_keys: &[
                "next_step_posture_session",
                "next_step_shoulder_program",
                "next_step_weekly_photos",
            ],
        }
    }

    /// Score as a 0.0-1.0 ratio for gauges
    pub fn score_ratio(&self) -> f64 {
        f64::from(self.score.min(100)) / 100.0
    }

    /// Overall assessment label for the score
    pub fn assessment(&self) -> String {
        match self.score {
            0..=49 => t!("assessment_needs_work").to_string(),
            50..=84 => t!("assessment_room_to_improve").to_string(),
            _ => t!("assessment_excellent").to_string(),
        }
    }
}
