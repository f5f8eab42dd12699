//! Height and weight unit conversion
//!
//! All conversions round to the nearest integer, so a round trip through the
//! other unit may land one step away from where it started. UI bounds live
//! here as constants but are enforced by the input widgets, never by the
//! conversion functions.

use crate::catalogue::option_catalogue;
use serde::{Deserialize, Serialize};

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;

/// Input bounds used by the questionnaire widgets
pub mod bounds {
    use std::ops::RangeInclusive;

    /// Age in years
    pub const AGE: RangeInclusive<u32> = 13..=100;
    /// Height in centimeters
    pub const HEIGHT_CM: RangeInclusive<u32> = 120..=220;
    /// Feet part of an imperial height
    pub const HEIGHT_FEET: RangeInclusive<u32> = 3..=8;
    /// Inches part of an imperial height
    pub const HEIGHT_INCHES: RangeInclusive<u32> = 0..=11;
    /// Weight in kilograms
    pub const WEIGHT_KG: RangeInclusive<u32> = 32..=181;
    /// Weight in pounds
    pub const WEIGHT_LB: RangeInclusive<u32> = 70..=400;
    /// Target weight shown before the user picks one (kg)
    pub const TARGET_WEIGHT_DEFAULT_KG: u32 = 68;
    /// Target weight shown before the user picks one (lb)
    pub const TARGET_WEIGHT_DEFAULT_LB: u32 = 150;
}

option_catalogue! {
    /// Height display unit
    HeightUnit, "height unit" {
        Cm => "cm",
        /// Stored as total inches, displayed as feet and inches
        In => "in",
    }
}

option_catalogue! {
    /// Weight display unit
    WeightUnit, "weight unit" {
        Kg => "kg",
        Lb => "lb",
    }
}

fn round(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Convert centimeters to (feet, inches)
pub fn cm_to_feet_inches(cm: u32) -> (u32, u32) {
    let inches = cm_to_inches(cm);
    (inches / 12, inches % 12)
}

/// Convert feet and inches to centimeters
pub fn feet_inches_to_cm(feet: u32, inches: u32) -> u32 {
    inches_to_cm(total_inches(feet, inches))
}

/// Feet and inches as total inches, saturating at `u32::MAX`
pub fn total_inches(feet: u32, inches: u32) -> u32 {
    feet.saturating_mul(12).saturating_add(inches)
}

/// Convert centimeters to total inches
pub fn cm_to_inches(cm: u32) -> u32 {
    round(f64::from(cm) / CM_PER_INCH)
}

/// Convert total inches to centimeters
pub fn inches_to_cm(inches: u32) -> u32 {
    round(f64::from(inches) * CM_PER_INCH)
}

/// Convert kilograms to pounds
pub fn kg_to_lb(kg: u32) -> u32 {
    round(f64::from(kg) * LB_PER_KG)
}

/// Convert pounds to kilograms
pub fn lb_to_kg(lb: u32) -> u32 {
    round(f64::from(lb) / LB_PER_KG)
}

/// A height with its display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height {
    /// Centimeters for [`HeightUnit::Cm`], total inches for [`HeightUnit::In`]
    pub value: u32,
    pub unit: HeightUnit,
}

impl Default for Height {
    fn default() -> Self {
        Self::cm(175)
    }
}

impl Height {
    pub fn cm(value: u32) -> Self {
        Self {
            value,
            unit: HeightUnit::Cm,
        }
    }

    pub fn feet_inches(feet: u32, inches: u32) -> Self {
        Self {
            value: total_inches(feet, inches),
            unit: HeightUnit::In,
        }
    }

    /// Same height expressed in `unit`
    pub fn with_unit(self, unit: HeightUnit) -> Self {
        if self.unit == unit {
            return self;
        }
        let value = match unit {
            HeightUnit::In => cm_to_inches(self.value),
            HeightUnit::Cm => inches_to_cm(self.value),
        };
        Self { value, unit }
    }

    /// Switch to the other unit
    pub fn toggled(self) -> Self {
        match self.unit {
            HeightUnit::Cm => self.with_unit(HeightUnit::In),
            HeightUnit::In => self.with_unit(HeightUnit::Cm),
        }
    }

    /// Split an imperial height into (feet, inches)
    pub fn as_feet_inches(&self) -> (u32, u32) {
        match self.unit {
            HeightUnit::In => (self.value / 12, self.value % 12),
            HeightUnit::Cm => cm_to_feet_inches(self.value),
        }
    }

    pub fn as_cm(&self) -> u32 {
        self.with_unit(HeightUnit::Cm).value
    }

    /// Input bounds for this height's unit, in total inches when imperial
    pub fn bounds(&self) -> std::ops::RangeInclusive<u32> {
        match self.unit {
            HeightUnit::Cm => bounds::HEIGHT_CM,
            HeightUnit::In => {
                let min = bounds::HEIGHT_FEET.start() * 12 + bounds::HEIGHT_INCHES.start();
                let max = bounds::HEIGHT_FEET.end() * 12 + bounds::HEIGHT_INCHES.end();
                min..=max
            }
        }
    }
}

impl std::fmt::Display for Height {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.unit {
            HeightUnit::Cm => write!(f, "{} cm", self.value),
            HeightUnit::In => {
                let (feet, inches) = self.as_feet_inches();
                write!(f, "{}' {}\"", feet, inches)
            }
        }
    }
}

/// A weight with its display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    pub value: u32,
    pub unit: WeightUnit,
}

impl Default for Weight {
    fn default() -> Self {
        Self::kg(70)
    }
}

impl Weight {
    pub fn kg(value: u32) -> Self {
        Self {
            value,
            unit: WeightUnit::Kg,
        }
    }

    pub fn lb(value: u32) -> Self {
        Self {
            value,
            unit: WeightUnit::Lb,
        }
    }

    /// Same weight expressed in `unit`
    pub fn with_unit(self, unit: WeightUnit) -> Self {
        if self.unit == unit {
            return self;
        }
        let value = match unit {
            WeightUnit::Lb => kg_to_lb(self.value),
            WeightUnit::Kg => lb_to_kg(self.value),
        };
        Self { value, unit }
    }

    /// Switch to the other unit
    pub fn toggled(self) -> Self {
        match self.unit {
            WeightUnit::Kg => self.with_unit(WeightUnit::Lb),
            WeightUnit::Lb => self.with_unit(WeightUnit::Kg),
        }
    }

    /// Input bounds for this weight's unit
    pub fn bounds(&self) -> std::ops::RangeInclusive<u32> {
        match self.unit {
            WeightUnit::Kg => bounds::WEIGHT_KG,
            WeightUnit::Lb => bounds::WEIGHT_LB,
        }
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_known_pair() {
        assert_eq!(kg_to_lb(70), 154);
        assert_eq!(lb_to_kg(154), 70);
    }

    #[test]
    fn test_cm_to_feet_inches() {
        // 175 / 2.54 = 68.9 -> 69 in
        assert_eq!(cm_to_feet_inches(175), (5, 9));
        assert_eq!(feet_inches_to_cm(5, 9), 175);
        assert_eq!(cm_to_feet_inches(183), (6, 0));
    }

    #[test]
    fn test_height_round_trip_within_one_cm() {
        for cm in bounds::HEIGHT_CM {
            let (feet, inches) = cm_to_feet_inches(cm);
            let back = feet_inches_to_cm(feet, inches);
            assert!(
                back.abs_diff(cm) <= 1,
                "{} cm -> {}'{}\" -> {} cm",
                cm,
                feet,
                inches,
                back
            );
        }
    }

    #[test]
    fn test_height_round_trip_is_not_always_exact() {
        let inexact = bounds::HEIGHT_CM
            .filter(|&cm| {
                let (feet, inches) = cm_to_feet_inches(cm);
                feet_inches_to_cm(feet, inches) != cm
            })
            .count();
        assert!(inexact > 0);
    }

    #[test]
    fn test_weight_toggle() {
        let weight = Weight::kg(70).toggled();
        assert_eq!(weight, Weight::lb(154));
        assert_eq!(weight.toggled(), Weight::kg(70));
        assert_eq!(weight.bounds(), bounds::WEIGHT_LB);
    }

    #[test]
    fn test_height_toggle() {
        let height = Height::default().toggled();
        assert_eq!(height, Height::feet_inches(5, 9));
        assert_eq!(height.as_feet_inches(), (5, 9));
        assert_eq!(height.toggled(), Height::cm(175));
        assert_eq!(height.as_cm(), 175);
    }

    #[test]
    fn test_huge_imperial_height_saturates() {
        assert_eq!(total_inches(400_000_000, 0), u32::MAX);
        assert_eq!(total_inches(5, 9), 69);
        assert_eq!(feet_inches_to_cm(400_000_000, 0), u32::MAX);
        assert_eq!(Height::feet_inches(u32::MAX, 11).value, u32::MAX);
        assert_eq!(kg_to_lb(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Height::feet_inches(5, 9).to_string(), "5' 9\"");
        assert_eq!(Weight::lb(154).to_string(), "154 lb");
    }
}
