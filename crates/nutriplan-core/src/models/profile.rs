// ABOUTME: User profile model with health condition and nutrition goal enums
// ABOUTME: Wire names parse leniently so unknown strings fall back to neutral defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::DEFAULT_HEIGHT_CM;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health condition that shapes meal filtering and guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthCondition {
    /// Diabetes (carb-restricted meals)
    Diabetes,
    /// High blood pressure (fat-restricted meals)
    HighBp,
    /// Heart issue
    HeartIssue,
    /// No reported condition
    None,
}

impl HealthCondition {
    /// Every condition, in encoding order
    pub const ALL: [Self; 4] = [Self::Diabetes, Self::HighBp, Self::HeartIssue, Self::None];

    /// Parse a wire name, treating anything unrecognized as [`HealthCondition::None`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "diabetes" => Self::Diabetes,
            "high-bp" => Self::HighBp,
            "heart-issue" => Self::HeartIssue,
            _ => Self::None,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::HighBp => "high-bp",
            Self::HeartIssue => "heart-issue",
            Self::None => "none",
        }
    }

    /// Ordinal encoding used as estimator input (0..=3)
    #[must_use]
    pub const fn encode(&self) -> u8 {
        match self {
            Self::Diabetes => 0,
            Self::HighBp => 1,
            Self::HeartIssue => 2,
            Self::None => 3,
        }
    }
}

impl From<String> for HealthCondition {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<HealthCondition> for String {
    fn from(value: HealthCondition) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutrition goal that drives calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NutritionGoal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    WeightGain,
    /// Training support
    Fitness,
    /// Balanced maintenance
    HealthyDiet,
}

impl NutritionGoal {
    /// Every goal, in encoding order
    pub const ALL: [Self; 4] = [
        Self::WeightLoss,
        Self::WeightGain,
        Self::Fitness,
        Self::HealthyDiet,
    ];

    /// Parse a wire name, treating anything unrecognized as [`NutritionGoal::HealthyDiet`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "weight-loss" => Self::WeightLoss,
            "weight-gain" => Self::WeightGain,
            "fitness" => Self::Fitness,
            _ => Self::HealthyDiet,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::WeightGain => "weight-gain",
            Self::Fitness => "fitness",
            Self::HealthyDiet => "healthy-diet",
        }
    }

    /// Ordinal encoding used as estimator input (0..=3)
    #[must_use]
    pub const fn encode(&self) -> u8 {
        match self {
            Self::WeightLoss => 0,
            Self::WeightGain => 1,
            Self::Fitness => 2,
            Self::HealthyDiet => 3,
        }
    }
}

impl From<String> for NutritionGoal {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<NutritionGoal> for String {
    fn from(value: NutritionGoal) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for NutritionGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated user attributes for one planning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name (at least two characters)
    pub name: String,
    /// Age in years (1-120)
    pub age: u32,
    /// Body weight in kilograms (1-500)
    pub weight_kg: f64,
    /// Height in centimeters, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Reported health condition
    pub health_condition: HealthCondition,
    /// Nutrition goal
    pub goal: NutritionGoal,
}

impl UserProfile {
    /// Height to use in formulas, falling back to `default_cm` when absent or unusable
    #[must_use]
    pub fn height_or(&self, default_cm: f64) -> f64 {
        match self.height_cm {
            Some(h) if h.is_finite() && h > 0.0 => h,
            _ => default_cm,
        }
    }

    /// Height to use in formulas with the standard 170 cm fallback
    #[must_use]
    pub fn effective_height_cm(&self) -> f64 {
        self.height_or(DEFAULT_HEIGHT_CM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(height_cm: Option<f64>) -> UserProfile {
        UserProfile {
            name: "Ana".into(),
            age: 30,
            weight_kg: 70.0,
            height_cm,
            health_condition: HealthCondition::None,
            goal: NutritionGoal::Fitness,
        }
    }

    #[test]
    fn test_unknown_wire_names_fall_back() {
        assert_eq!(HealthCondition::from_str_lossy("gout"), HealthCondition::None);
        assert_eq!(NutritionGoal::from_str_lossy("bulk"), NutritionGoal::HealthyDiet);
        assert_eq!(HealthCondition::from_str_lossy(" High-BP "), HealthCondition::HighBp);
    }

    #[test]
    fn test_wire_names_round_trip_through_serde() {
        for condition in HealthCondition::ALL {
            let json = serde_json::to_string(&condition).unwrap();
            assert_eq!(json, format!("\"{}\"", condition.as_str()));
        }
        let goal: NutritionGoal = serde_json::from_str("\"weight-gain\"").unwrap();
        assert_eq!(goal, NutritionGoal::WeightGain);
        let unknown: NutritionGoal = serde_json::from_str("\"keto\"").unwrap();
        assert_eq!(unknown, NutritionGoal::HealthyDiet);
    }

    #[test]
    fn test_encodings_are_ordinal() {
        assert_eq!(HealthCondition::Diabetes.encode(), 0);
        assert_eq!(HealthCondition::None.encode(), 3);
        assert_eq!(NutritionGoal::WeightLoss.encode(), 0);
        assert_eq!(NutritionGoal::HealthyDiet.encode(), 3);
    }

    #[test]
    fn test_height_defaults_when_unusable() {
        assert!((profile(None).effective_height_cm() - 170.0).abs() < f64::EPSILON);
        assert!((profile(Some(-4.0)).effective_height_cm() - 170.0).abs() < f64::EPSILON);
        assert!((profile(Some(f64::NAN)).effective_height_cm() - 170.0).abs() < f64::EPSILON);
        assert!((profile(Some(182.0)).effective_height_cm() - 182.0).abs() < f64::EPSILON);
    }
}
