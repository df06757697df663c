// ABOUTME: Meal builder: nutrition facts for user-composed meals and daily calorie progress
// ABOUTME: Sub-nutrients are estimated from macro totals and compared to FDA daily values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::MealBuilderConfig;
use crate::intelligence::catalog::{find_ingredient, Ingredient};
use crate::intelligence::plan_generator::round_non_negative;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{MealTime, NutritionPlan};
use serde::Serialize;

/// Ingredients composed into one meal
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealComposition {
    ingredients: Vec<Ingredient>,
}

/// Macro totals of a composition
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fats_g: f64,
}

impl MacroTotals {
    fn add(mut self, ingredient: &Ingredient) -> Self {
        self.calories += ingredient.calories;
        self.protein_g += ingredient.protein_g;
        self.carbs_g += ingredient.carbs_g;
        self.fats_g += ingredient.fats_g;
        self
    }

    fn combine(mut self, other: Self) -> Self {
        self.calories += other.calories;
        self.protein_g += other.protein_g;
        self.carbs_g += other.carbs_g;
        self.fats_g += other.fats_g;
        self
    }
}

/// Share of total macro grams per macronutrient (percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroShares {
    /// Carbohydrate share
    pub carbs_percent: f64,
    /// Protein share
    pub protein_percent: f64,
    /// Fat share
    pub fat_percent: f64,
}

/// Percent of daily value, rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyValues {
    /// Carbohydrates
    pub carbs: u32,
    /// Total fat
    pub fat: u32,
    /// Saturated fat
    pub saturated_fat: u32,
    /// Fiber
    pub fiber: u32,
    /// Cholesterol
    pub cholesterol: u32,
    /// Sodium
    pub sodium: u32,
}

/// Nutrition label for a composed meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionFacts {
    /// Macro totals
    pub totals: MacroTotals,
    /// Estimated saturated fat grams
    pub saturated_fat_g: f64,
    /// Estimated fiber grams
    pub fiber_g: f64,
    /// Estimated sugar grams
    pub sugars_g: f64,
    /// Estimated cholesterol milligrams
    pub cholesterol_mg: f64,
    /// Estimated sodium milligrams
    pub sodium_mg: f64,
    /// Percent of daily values
    pub daily_values: DailyValues,
    /// Macro gram shares, absent when there are no macro grams
    pub macro_shares: Option<MacroShares>,
    /// Estimated serving weight in grams
    pub serving_weight_g: f64,
}

fn percent_of(amount: f64, daily_value: f64) -> u32 {
    round_non_negative(amount / daily_value * 100.0)
}

impl MealComposition {
    /// Empty composition
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ingredients: Vec::new(),
        }
    }

    /// Compose a meal from catalog ingredient names
    ///
    /// # Errors
    ///
    /// Returns a `ResourceNotFound` error naming the first unknown ingredient.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> AppResult<Self> {
        let mut composition = Self::new();
        for name in names {
            let name = name.as_ref();
            let ingredient = find_ingredient(name)
                .ok_or_else(|| AppError::not_found(format!("Ingredient '{name}'")))?;
            composition.add(*ingredient);
        }
        Ok(composition)
    }

    /// Add an ingredient
    pub fn add(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Remove the ingredient at `index`, if present
    pub fn remove(&mut self, index: usize) -> Option<Ingredient> {
        (index < self.ingredients.len()).then(|| self.ingredients.remove(index))
    }

    /// Remove every ingredient
    pub fn clear(&mut self) {
        self.ingredients.clear();
    }

    /// Ingredients in insertion order
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Whether nothing has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Sum of all ingredients
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.ingredients
            .iter()
            .fold(MacroTotals::default(), MacroTotals::add)
    }

    /// Build the nutrition label
    #[must_use]
    pub fn nutrition_facts(&self, config: &MealBuilderConfig) -> NutritionFacts {
        let totals = self.totals();
        let saturated_fat_g = totals.fats_g * config.saturated_fat_ratio;
        let fiber_g = totals.carbs_g * config.fiber_ratio;
        let cholesterol_mg = totals.protein_g * config.cholesterol_mg_per_protein_g;
        let sodium_mg = totals.calories * config.sodium_mg_per_kcal;

        let macro_grams = totals.carbs_g + totals.protein_g + totals.fats_g;
        let macro_shares = (macro_grams > 0.0).then(|| MacroShares {
            carbs_percent: totals.carbs_g / macro_grams * 100.0,
            protein_percent: totals.protein_g / macro_grams * 100.0,
            fat_percent: totals.fats_g / macro_grams * 100.0,
        });

        NutritionFacts {
            totals,
            saturated_fat_g,
            fiber_g,
            sugars_g: totals.carbs_g * config.sugar_ratio,
            cholesterol_mg,
            sodium_mg,
            daily_values: DailyValues {
                carbs: percent_of(totals.carbs_g, config.daily_carbs_g),
                fat: percent_of(totals.fats_g, config.daily_fat_g),
                saturated_fat: percent_of(saturated_fat_g, config.daily_saturated_fat_g),
                fiber: percent_of(fiber_g, config.daily_fiber_g),
                cholesterol: percent_of(cholesterol_mg, config.daily_cholesterol_mg),
                sodium: percent_of(sodium_mg, config.daily_sodium_mg),
            },
            macro_shares,
            serving_weight_g: totals.calories / config.serving_kcal_per_g,
        }
    }
}

/// How close the day's calories are to target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// At or below the approaching edge
    OnTrack,
    /// Above the approaching edge, at or below target
    Approaching,
    /// Above target
    Over,
}

/// Daily calories against a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieProgress {
    /// Calories eaten so far
    pub consumed: f64,
    /// Target calories
    pub target: u32,
    /// Uncapped percent of target
    pub percent: f64,
    /// Percent capped at 100 for display
    pub display_percent: f64,
    /// Band derived from the uncapped percent
    pub band: ProgressBand,
}

impl CalorieProgress {
    /// Measure consumed calories against a target
    ///
    /// A zero target reports 0% with nothing eaten and counts any intake as over.
    #[must_use]
    pub fn new(consumed: f64, target: u32, config: &MealBuilderConfig) -> Self {
        if target == 0 {
            let over = consumed > 0.0;
            return Self {
                consumed,
                target,
                percent: if over { 100.0 } else { 0.0 },
                display_percent: if over { 100.0 } else { 0.0 },
                band: if over {
                    ProgressBand::Over
                } else {
                    ProgressBand::OnTrack
                },
            };
        }

        let percent = consumed / f64::from(target) * 100.0;
        let band = if percent > config.over_percent {
            ProgressBand::Over
        } else if percent > config.approaching_percent {
            ProgressBand::Approaching
        } else {
            ProgressBand::OnTrack
        };

        Self {
            consumed,
            target,
            percent,
            display_percent: percent.min(100.0),
            band,
        }
    }
}

/// Per-meal summary on the daily board
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealSummary {
    /// Slot
    pub meal: MealTime,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein grams
    pub protein_g: f64,
}

/// Daily board summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    /// Breakfast, lunch and dinner summaries
    pub meals: Vec<MealSummary>,
    /// Sum over all meals
    pub totals: MacroTotals,
    /// Progress against the target
    pub progress: CalorieProgress,
}

/// Breakfast, lunch and dinner compositions for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyMealBoard {
    /// Breakfast composition
    pub breakfast: MealComposition,
    /// Lunch composition
    pub lunch: MealComposition,
    /// Dinner composition
    pub dinner: MealComposition,
}

impl DailyMealBoard {
    const SLOTS: [MealTime; 3] = [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner];

    /// Composition for a slot; snacks are not tracked on the board
    #[must_use]
    pub const fn slot(&self, meal: MealTime) -> Option<&MealComposition> {
        match meal {
            MealTime::Breakfast => Some(&self.breakfast),
            MealTime::Lunch => Some(&self.lunch),
            MealTime::Dinner => Some(&self.dinner),
            MealTime::Snacks => None,
        }
    }

    /// Mutable composition for a slot
    pub fn slot_mut(&mut self, meal: MealTime) -> Option<&mut MealComposition> {
        match meal {
            MealTime::Breakfast => Some(&mut self.breakfast),
            MealTime::Lunch => Some(&mut self.lunch),
            MealTime::Dinner => Some(&mut self.dinner),
            MealTime::Snacks => None,
        }
    }

    /// Summarize the day against the plan's calories, or the default target without a plan
    #[must_use]
    pub fn summary(&self, plan: Option<&NutritionPlan>, config: &MealBuilderConfig) -> DailySummary {
        let meals: Vec<MealSummary> = Self::SLOTS
            .into_iter()
            .filter_map(|meal| {
                self.slot(meal).map(|composition| {
                    let totals = composition.totals();
                    MealSummary {
                        meal,
                        calories: totals.calories,
                        protein_g: totals.protein_g,
                    }
                })
            })
            .collect();

        let totals = Self::SLOTS
            .into_iter()
            .filter_map(|meal| self.slot(meal))
            .map(MealComposition::totals)
            .fold(MacroTotals::default(), MacroTotals::combine);

        let target = plan.map_or(config.default_daily_target_kcal, |p| p.daily_calories);

        DailySummary {
            meals,
            totals,
            progress: CalorieProgress::new(totals.calories, target, config),
        }
    }
}
