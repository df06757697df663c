// ABOUTME: Plan generation: calorie target, macro split, meal selection, and guidance
// ABOUTME: Pure functions over a profile, an optional refinement, and planning config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Generator Module
//!
//! Turns a [`UserProfile`] into a [`NutritionPlan`]. Every function here is
//! total: given a validated profile it always returns a value.
//!
//! The calorie target uses the simplified estimate
//! `bmr = 10 * weight + 6.25 * (170 - age) + 5`, scaled by an activity
//! multiplier of 1.5 and a goal multiplier. A [`Refinement`] from the
//! estimator replaces the goal multiplier and the default macro ratios.

use crate::config::{CalorieConfig, MacroConfig, MealSelectionConfig, PlanningConfig};
use crate::intelligence::catalog::meals_for;
use crate::intelligence::guidance::{
    condition_focus, condition_guidance, goal_guidance, goal_tips,
};
use crate::intelligence::refinement::Refinement;
use nutriplan_core::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use nutriplan_core::models::{
    HealthCondition, MacroRatios, MacroSplit, MealItem, MealSelection, MealTime, NutritionPlan,
    Recommendations, UserProfile,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Round a kcal or gram amount to a non-negative integer
///
/// Negative and non-finite values saturate at 0.
#[must_use]
pub fn round_non_negative(value: f64) -> u32 {
    let rounded = value.round();
    if !rounded.is_finite() || rounded <= 0.0 {
        0
    } else if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Simplified BMR used for the calorie target
///
/// Uses the configured reference height in place of the user's height.
#[must_use]
pub fn planning_bmr(profile: &UserProfile, config: &CalorieConfig) -> f64 {
    let weight_component = config.bmr_weight_coef * profile.weight_kg;
    let height_component =
        config.bmr_height_coef * (config.reference_height_cm - f64::from(profile.age));
    weight_component + height_component + config.bmr_constant
}

/// Calculate the daily calorie target
///
/// Formula: `round(planning_bmr * activity_multiplier * multiplier)` where the
/// multiplier is `refinement[0] * refinement_scale` when a refinement carries at
/// least one output, and the goal multiplier otherwise.
#[must_use]
pub fn calculate_daily_calories(
    profile: &UserProfile,
    refinement: Option<&Refinement>,
    config: &CalorieConfig,
) -> u32 {
    let base_calories = planning_bmr(profile, config) * config.activity_multiplier;

    let multiplier = refinement
        .and_then(Refinement::calorie_multiplier)
        .map_or_else(
            || config.goal_multiplier(profile.goal),
            |raw| raw * config.refinement_scale,
        );

    round_non_negative(base_calories * multiplier)
}

/// Macro ratios for a profile, preferring a refinement's ratios when usable
///
/// Refined ratios are clamped at zero and renormalized to sum to 1.0; if
/// nothing positive remains the goal default is used.
#[must_use]
pub fn macro_ratios(
    profile: &UserProfile,
    refinement: Option<&Refinement>,
    config: &MacroConfig,
) -> MacroRatios {
    refinement
        .and_then(Refinement::macro_ratios)
        .and_then(|raw| raw.renormalized())
        .unwrap_or_else(|| config.for_goal(profile.goal))
}

/// Calculate the macro split for a profile
///
/// Grams: protein and carbs at 4 kcal/g, fats at 9 kcal/g, each rounded
/// independently.
#[must_use]
pub fn calculate_macros(
    profile: &UserProfile,
    refinement: Option<&Refinement>,
    calories: &CalorieConfig,
    macros: &MacroConfig,
) -> MacroSplit {
    let daily_calories = f64::from(calculate_daily_calories(profile, refinement, calories));
    let ratios = macro_ratios(profile, refinement, macros);

    MacroSplit {
        ratios,
        protein_g: round_non_negative(daily_calories * ratios.protein / PROTEIN_KCAL_PER_G),
        carbs_g: round_non_negative(daily_calories * ratios.carbs / CARBS_KCAL_PER_G),
        fats_g: round_non_negative(daily_calories * ratios.fats / FAT_KCAL_PER_G),
    }
}

/// Whether a catalog meal is allowed for a health condition
#[must_use]
pub const fn meal_allowed(
    meal: &MealItem,
    condition: HealthCondition,
    config: &MealSelectionConfig,
) -> bool {
    match condition {
        HealthCondition::Diabetes => meal.carbs_g < config.diabetes_max_carbs_g,
        HealthCondition::HighBp => meal.fats_g < config.high_bp_max_fats_g,
        HealthCondition::HeartIssue | HealthCondition::None => true,
    }
}

/// Pick meals for every slot
///
/// Each slot's catalog is filtered for the profile's condition, shuffled
/// uniformly, and truncated to the slot size. Short lists yield fewer items.
pub fn generate_meal_plan<R: Rng + ?Sized>(
    profile: &UserProfile,
    config: &MealSelectionConfig,
    rng: &mut R,
) -> MealSelection {
    let mut selection = MealSelection::default();

    for time in MealTime::ALL {
        let mut candidates: Vec<&MealItem> = meals_for(time)
            .iter()
            .filter(|meal| meal_allowed(meal, profile.health_condition, config))
            .collect();
        candidates.shuffle(rng);

        *selection.slot_mut(time) = candidates
            .into_iter()
            .take(config.count_for(time))
            .cloned()
            .collect();
    }

    selection
}

/// Goal and condition guidance for a profile
#[must_use]
pub fn get_recommendations(profile: &UserProfile) -> Recommendations {
    Recommendations {
        goal: goal_guidance(profile.goal),
        health: condition_guidance(profile.health_condition),
    }
}

/// Goal tips followed by the condition focus line
#[must_use]
pub fn get_health_tips(profile: &UserProfile) -> Vec<String> {
    goal_tips(profile.goal)
        .iter()
        .map(|tip| (*tip).to_owned())
        .chain(std::iter::once(format!(
            "Focus on: {}",
            condition_focus(profile.health_condition)
        )))
        .collect()
}

/// Assemble a complete plan
pub fn generate_plan<R: Rng + ?Sized>(
    profile: &UserProfile,
    refinement: Option<&Refinement>,
    config: &PlanningConfig,
    rng: &mut R,
) -> NutritionPlan {
    let daily_calories = calculate_daily_calories(profile, refinement, &config.calories);
    let macros = calculate_macros(profile, refinement, &config.calories, &config.macros);
    let meals = generate_meal_plan(profile, &config.meals, rng);

    debug!(
        goal = profile.goal.as_str(),
        condition = profile.health_condition.as_str(),
        refined = refinement.is_some(),
        daily_calories,
        "Generated nutrition plan"
    );

    NutritionPlan {
        daily_calories,
        macros,
        meals,
        recommendations: get_recommendations(profile),
        health_tips: get_health_tips(profile),
    }
}
