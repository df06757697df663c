// ABOUTME: Nutrition plan output models: macro split, meal selection, and guidance
// ABOUTME: Plans are immutable values produced once per planning request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Share of daily calories assigned to each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    /// Protein share
    pub protein: f64,
    /// Carbohydrate share
    pub carbs: f64,
    /// Fat share
    pub fats: f64,
}

impl MacroRatios {
    /// Build a ratio triple
    #[must_use]
    pub const fn new(protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
        }
    }

    /// Sum of the three shares
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }

    /// Clamp negative shares to zero and rescale so the triple sums to 1.0
    ///
    /// Returns `None` when nothing positive remains or any share is not finite.
    #[must_use]
    pub fn renormalized(&self) -> Option<Self> {
        if !(self.protein.is_finite() && self.carbs.is_finite() && self.fats.is_finite()) {
            return None;
        }
        let clamped = Self::new(self.protein.max(0.0), self.carbs.max(0.0), self.fats.max(0.0));
        let total = clamped.sum();
        if total <= 0.0 {
            return None;
        }
        Some(Self::new(
            clamped.protein / total,
            clamped.carbs / total,
            clamped.fats / total,
        ))
    }
}

/// Macro ratios plus the gram amounts they produce for a calorie target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Ratios used
    pub ratios: MacroRatios,
    /// Protein grams
    pub protein_g: u32,
    /// Carbohydrate grams
    pub carbs_g: u32,
    /// Fat grams
    pub fats_g: u32,
}

/// A catalog meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealItem {
    /// Meal name
    pub name: Cow<'static, str>,
    /// Energy (kcal)
    pub calories: u32,
    /// Protein grams
    pub protein_g: u32,
    /// Carbohydrate grams
    pub carbs_g: u32,
    /// Fat grams
    pub fats_g: u32,
}

impl MealItem {
    /// Build a catalog entry from static data
    #[must_use]
    pub const fn new(
        name: &'static str,
        calories: u32,
        protein_g: u32,
        carbs_g: u32,
        fats_g: u32,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            calories,
            protein_g,
            carbs_g,
            fats_g,
        }
    }
}

/// Meal slots of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Snacks between meals
    Snacks,
}

impl MealTime {
    /// Every slot in serving order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

/// Meals chosen for a plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSelection {
    /// At most one breakfast
    pub breakfast: Vec<MealItem>,
    /// At most one lunch
    pub lunch: Vec<MealItem>,
    /// At most one dinner
    pub dinner: Vec<MealItem>,
    /// At most two snacks
    pub snacks: Vec<MealItem>,
}

impl MealSelection {
    /// Items chosen for one slot
    #[must_use]
    pub fn slot(&self, time: MealTime) -> &[MealItem] {
        match time {
            MealTime::Breakfast => &self.breakfast,
            MealTime::Lunch => &self.lunch,
            MealTime::Dinner => &self.dinner,
            MealTime::Snacks => &self.snacks,
        }
    }

    /// Mutable access to one slot
    pub fn slot_mut(&mut self, time: MealTime) -> &mut Vec<MealItem> {
        match time {
            MealTime::Breakfast => &mut self.breakfast,
            MealTime::Lunch => &mut self.lunch,
            MealTime::Dinner => &mut self.dinner,
            MealTime::Snacks => &mut self.snacks,
        }
    }

    /// Iterate every chosen item across all slots
    pub fn iter(&self) -> impl Iterator<Item = &MealItem> {
        MealTime::ALL.into_iter().flat_map(|time| self.slot(time))
    }
}

/// Guidance attached to a nutrition goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalGuidance {
    /// Suggested calorie range, e.g. "1800-2200"
    pub daily_calories: String,
    /// What the diet should emphasize
    pub focus: String,
    /// Practical tips
    pub tips: Vec<String>,
}

/// Guidance attached to a health condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionGuidance {
    /// What the diet should emphasize
    pub focus: String,
    /// Foods to avoid
    pub avoid: Vec<String>,
    /// Foods to include
    pub include: Vec<String>,
}

/// Goal and condition guidance for a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Guidance for the goal
    pub goal: GoalGuidance,
    /// Guidance for the health condition
    pub health: ConditionGuidance,
}

/// Complete daily nutrition plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Daily calorie target (kcal)
    pub daily_calories: u32,
    /// Macro ratios and grams
    pub macros: MacroSplit,
    /// Selected meals
    pub meals: MealSelection,
    /// Goal and condition guidance
    pub recommendations: Recommendations,
    /// Ordered health tips
    pub health_tips: Vec<String>,
}
