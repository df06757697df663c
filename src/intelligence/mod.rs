// ABOUTME: Nutrition intelligence: plan generation, health metrics, refinement, and meal building
// ABOUTME: Pure computation modules plus the static catalogs and guidance tables they read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The planning core. Nothing here performs I/O; the random source for meal
//! selection is injected by the caller.

/// Meal, ingredient, and recipe catalogs
pub mod catalog;
/// Goal and condition guidance tables
pub mod guidance;
/// BMI, BMR, TDEE, water goal, and health score
pub mod health_metrics;
/// Nutrition facts for composed meals and daily calorie progress
pub mod meal_builder;
/// Calorie target, macro split, and meal selection
pub mod plan_generator;
/// Water intake and weight log tracking
pub mod progress;
/// Optional regression estimator refining calorie and macro targets
pub mod refinement;

pub use catalog::{
    find_ingredient, ingredients, ingredients_in, meals_for, recipe_for, Ingredient,
    IngredientCategory, Recipe,
};
pub use health_metrics::{calculate_health_metrics, calculate_health_score};
pub use meal_builder::{
    CalorieProgress, DailyMealBoard, DailySummary, MealComposition, NutritionFacts, ProgressBand,
};
pub use plan_generator::{
    calculate_daily_calories, calculate_macros, generate_meal_plan, generate_plan,
    get_health_tips, get_recommendations,
};
pub use progress::{WaterProgress, WeightEntry, WeightLog};
pub use refinement::{Refinement, RefinementEstimator};
