// ABOUTME: Calorie target, macro ratio, and meal selection configuration
// ABOUTME: Holds the goal multipliers, per-goal macro splits, and condition meal filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Generation Configuration
//!
//! The calorie target uses a simplified Mifflin-St Jeor style estimate in which
//! a fixed reference height stands in for the user's height:
//! `bmr = 10 * weight + 6.25 * (reference_height - age) + 5`.
//! This differs from the metrics BMR on purpose; both are kept as-is.

use nutriplan_core::models::{MacroRatios, MealTime, NutritionGoal};
use serde::{Deserialize, Serialize};

/// Daily calorie target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieConfig {
    /// Reference height standing in for the user's height (170)
    pub reference_height_cm: f64,
    /// Weight coefficient (10.0)
    pub bmr_weight_coef: f64,
    /// Height coefficient (6.25)
    pub bmr_height_coef: f64,
    /// Additive constant (+5)
    pub bmr_constant: f64,
    /// Activity multiplier applied to the BMR (1.5)
    pub activity_multiplier: f64,
    /// Weight loss multiplier (0.8)
    pub weight_loss_multiplier: f64,
    /// Weight gain multiplier (1.2)
    pub weight_gain_multiplier: f64,
    /// Fitness multiplier (1.1)
    pub fitness_multiplier: f64,
    /// Healthy diet multiplier (1.0)
    pub healthy_diet_multiplier: f64,
    /// Scale applied to the estimator's calorie output (1.2)
    pub refinement_scale: f64,
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self {
            reference_height_cm: 170.0,
            bmr_weight_coef: 10.0,
            bmr_height_coef: 6.25,
            bmr_constant: 5.0,
            activity_multiplier: 1.5,
            weight_loss_multiplier: 0.8,
            weight_gain_multiplier: 1.2,
            fitness_multiplier: 1.1,
            healthy_diet_multiplier: 1.0,
            refinement_scale: 1.2,
        }
    }
}

impl CalorieConfig {
    /// Calorie multiplier for a goal
    #[must_use]
    pub const fn goal_multiplier(&self, goal: NutritionGoal) -> f64 {
        match goal {
            NutritionGoal::WeightLoss => self.weight_loss_multiplier,
            NutritionGoal::WeightGain => self.weight_gain_multiplier,
            NutritionGoal::Fitness => self.fitness_multiplier,
            NutritionGoal::HealthyDiet => self.healthy_diet_multiplier,
        }
    }
}

/// Default macro ratios per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroConfig {
    /// Weight loss: 35% protein, 35% carbs, 30% fats
    pub weight_loss: MacroRatios,
    /// Weight gain: 25% protein, 45% carbs, 30% fats
    pub weight_gain: MacroRatios,
    /// Fitness: 35% protein, 40% carbs, 25% fats
    pub fitness: MacroRatios,
    /// Healthy diet: 30% protein, 40% carbs, 30% fats
    pub healthy_diet: MacroRatios,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroRatios::new(0.35, 0.35, 0.30),
            weight_gain: MacroRatios::new(0.25, 0.45, 0.30),
            fitness: MacroRatios::new(0.35, 0.40, 0.25),
            healthy_diet: MacroRatios::new(0.30, 0.40, 0.30),
        }
    }
}

impl MacroConfig {
    /// Ratios for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: NutritionGoal) -> MacroRatios {
        match goal {
            NutritionGoal::WeightLoss => self.weight_loss,
            NutritionGoal::WeightGain => self.weight_gain,
            NutritionGoal::Fitness => self.fitness,
            NutritionGoal::HealthyDiet => self.healthy_diet,
        }
    }
}

/// Meal selection sizes and condition filters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSelectionConfig {
    /// Breakfast items per plan
    pub breakfast_count: usize,
    /// Lunch items per plan
    pub lunch_count: usize,
    /// Dinner items per plan
    pub dinner_count: usize,
    /// Snack items per plan
    pub snack_count: usize,
    /// Diabetes keeps meals with strictly fewer carb grams than this
    pub diabetes_max_carbs_g: u32,
    /// High blood pressure keeps meals with strictly fewer fat grams than this
    pub high_bp_max_fats_g: u32,
}

impl Default for MealSelectionConfig {
    fn default() -> Self {
        Self {
            breakfast_count: 1,
            lunch_count: 1,
            dinner_count: 1,
            snack_count: 2,
            diabetes_max_carbs_g: 40,
            high_bp_max_fats_g: 20,
        }
    }
}

impl MealSelectionConfig {
    /// Number of items to pick for a slot
    #[must_use]
    pub const fn count_for(&self, time: MealTime) -> usize {
        match time {
            MealTime::Breakfast => self.breakfast_count,
            MealTime::Lunch => self.lunch_count,
            MealTime::Dinner => self.dinner_count,
            MealTime::Snacks => self.snack_count,
        }
    }
}
