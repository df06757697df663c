// ABOUTME: Integration tests for calorie targets, macro splits, meal selection, and guidance
// ABOUTME: Covers the reference profile, condition filters, slot sizes, and refinement overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{profile, reference_profile};
use nutriplan::config::{CalorieConfig, MacroConfig, MealSelectionConfig, PlanningConfig};
use nutriplan::intelligence::plan_generator::{
    calculate_daily_calories, calculate_macros, generate_meal_plan, generate_plan,
    get_health_tips, get_recommendations, macro_ratios,
};
use nutriplan::intelligence::Refinement;
use nutriplan::models::{HealthCondition, MealTime, NutritionGoal, UserProfile};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn macro_kcal(profile: &UserProfile, refinement: Option<&Refinement>) -> (u32, u32) {
    let calories = CalorieConfig::default();
    let split = calculate_macros(profile, refinement, &calories, &MacroConfig::default());
    let target = calculate_daily_calories(profile, refinement, &calories);
    (
        target,
        split.protein_g * 4 + split.carbs_g * 4 + split.fats_g * 9,
    )
}

#[test]
fn test_reference_profile_calories_and_macros() {
    let profile = reference_profile();
    let calories = CalorieConfig::default();

    assert_eq!(calculate_daily_calories(&profile, None, &calories), 2607);

    let split = calculate_macros(&profile, None, &calories, &MacroConfig::default());
    assert_eq!(split.protein_g, 228);
    assert_eq!(split.carbs_g, 261);
    assert_eq!(split.fats_g, 72);
    assert!((split.ratios.protein - 0.35).abs() < 1e-12);
    assert!((split.ratios.carbs - 0.40).abs() < 1e-12);
    assert!((split.ratios.fats - 0.25).abs() < 1e-12);
}

#[test]
fn test_default_macro_ratios_per_goal() {
    let config = MacroConfig::default();
    for goal in NutritionGoal::ALL {
        let expected = match goal {
            NutritionGoal::WeightLoss => (0.35, 0.35, 0.30),
            NutritionGoal::WeightGain => (0.25, 0.45, 0.30),
            NutritionGoal::Fitness => (0.35, 0.40, 0.25),
            NutritionGoal::HealthyDiet => (0.30, 0.40, 0.30),
        };
        let ratios = macro_ratios(&profile(30, 70.0, HealthCondition::None, goal), None, &config);

        assert!((ratios.protein - expected.0).abs() < 1e-12, "{goal}");
        assert!((ratios.carbs - expected.1).abs() < 1e-12, "{goal}");
        assert!((ratios.fats - expected.2).abs() < 1e-12, "{goal}");
        assert!((ratios.sum() - 1.0).abs() < 1e-9, "{goal}");
    }
}

#[test]
fn test_every_goal_and_condition_has_guidance() {
    for goal in NutritionGoal::ALL {
        for condition in HealthCondition::ALL {
            let profile = profile(30, 70.0, condition, goal);
            let recommendations = get_recommendations(&profile);
            assert!(!recommendations.goal.daily_calories.is_empty());
            assert!(!recommendations.goal.focus.is_empty());
            assert!(!recommendations.goal.tips.is_empty());
            assert!(!recommendations.health.focus.is_empty());
            assert!(!recommendations.health.avoid.is_empty());
            assert!(!recommendations.health.include.is_empty());

            let tips = get_health_tips(&profile);
            assert!(tips.len() > 1, "{goal}/{condition}");
            assert_eq!(
                tips.last().unwrap(),
                &format!("Focus on: {}", recommendations.health.focus)
            );
        }
    }
}

#[test]
fn test_goal_multipliers_order_targets() {
    let calories = CalorieConfig::default();
    let target = |goal| {
        calculate_daily_calories(
            &profile(30, 70.0, HealthCondition::None, goal),
            None,
            &calories,
        )
    };

    // 2370 kcal before the goal multiplier
    assert_eq!(target(NutritionGoal::WeightLoss), 1896);
    assert_eq!(target(NutritionGoal::HealthyDiet), 2370);
    assert_eq!(target(NutritionGoal::Fitness), 2607);
    assert_eq!(target(NutritionGoal::WeightGain), 2844);
}

#[test]
fn test_height_does_not_affect_calorie_target() {
    let calories = CalorieConfig::default();
    let short = UserProfile {
        height_cm: Some(150.0),
        ..reference_profile()
    };
    let tall = UserProfile {
        height_cm: Some(195.0),
        ..reference_profile()
    };
    assert_eq!(
        calculate_daily_calories(&short, None, &calories),
        calculate_daily_calories(&tall, None, &calories)
    );
}

#[test]
fn test_calories_monotone_in_weight() {
    let calories = CalorieConfig::default();
    for goal in NutritionGoal::ALL {
        let mut previous = 0;
        for weight in (1..=500).step_by(7) {
            let current = calculate_daily_calories(
                &profile(45, f64::from(weight), HealthCondition::None, goal),
                None,
                &calories,
            );
            assert!(current >= previous, "{goal} at {weight} kg");
            previous = current;
        }
    }
}

#[test]
fn test_macro_energy_close_to_target() {
    for goal in NutritionGoal::ALL {
        for age in [1, 18, 30, 65, 120] {
            for weight in [1.0, 45.5, 70.0, 130.0, 500.0] {
                let (target, kcal) =
                    macro_kcal(&profile(age, weight, HealthCondition::None, goal), None);
                let diff = (f64::from(target) - f64::from(kcal)).abs();
                assert!(diff <= 8.5, "{goal} {age}y {weight}kg: {target} vs {kcal}");
            }
        }
    }
}

#[test]
fn test_diabetes_meals_stay_under_carb_limit() {
    let profile = profile(50, 80.0, HealthCondition::Diabetes, NutritionGoal::HealthyDiet);
    let config = MealSelectionConfig::default();

    for seed in 0..50 {
        let selection = generate_meal_plan(&profile, &config, &mut ChaCha8Rng::seed_from_u64(seed));
        assert!(selection.iter().all(|meal| meal.carbs_g < 40));
        let lunch = selection.slot(MealTime::Lunch);
        assert_eq!(lunch.len(), 1);
        assert_eq!(lunch[0].name, "Grilled chicken salad");
    }
}

#[test]
fn test_high_bp_meals_stay_under_fat_limit() {
    let profile = profile(60, 90.0, HealthCondition::HighBp, NutritionGoal::WeightLoss);
    let config = MealSelectionConfig::default();

    for seed in 0..50 {
        let selection = generate_meal_plan(&profile, &config, &mut ChaCha8Rng::seed_from_u64(seed));
        assert!(selection.iter().all(|meal| meal.fats_g < 20));
        assert!(selection
            .iter()
            .all(|meal| meal.name != "Scrambled eggs with vegetables"));
    }
}

#[test]
fn test_slot_sizes() {
    let config = MealSelectionConfig::default();
    for condition in HealthCondition::ALL {
        let profile = profile(30, 70.0, condition, NutritionGoal::Fitness);
        let selection = generate_meal_plan(&profile, &config, &mut rand::thread_rng());
        assert_eq!(selection.slot(MealTime::Breakfast).len(), 1);
        assert_eq!(selection.slot(MealTime::Lunch).len(), 1);
        assert_eq!(selection.slot(MealTime::Dinner).len(), 1);
        assert_eq!(selection.slot(MealTime::Snacks).len(), 2);

        let snacks = selection.slot(MealTime::Snacks);
        assert_ne!(snacks[0].name, snacks[1].name);
    }
}

#[test]
fn test_seeded_selection_is_reproducible() {
    let profile = reference_profile();
    let config = MealSelectionConfig::default();
    let first = generate_meal_plan(&profile, &config, &mut ChaCha8Rng::seed_from_u64(11));
    let second = generate_meal_plan(&profile, &config, &mut ChaCha8Rng::seed_from_u64(11));
    assert_eq!(first, second);
}

#[test]
fn test_recommendations_are_stable() {
    let profile = profile(30, 70.0, HealthCondition::HighBp, NutritionGoal::WeightLoss);
    let first = get_recommendations(&profile);
    assert_eq!(first, get_recommendations(&profile));
    assert_eq!(first.goal.daily_calories, "1200-1500");
    assert_eq!(
        first.health.focus,
        "Low sodium, potassium-rich foods, heart-healthy"
    );
    assert_eq!(first.health.include.len(), 5);
}

#[test]
fn test_health_tips_end_with_condition_focus() {
    let tips = get_health_tips(&reference_profile());
    assert_eq!(
        tips,
        vec![
            "Pre and post-workout meals",
            "Adequate protein",
            "Stay hydrated",
            "Balance macros",
            "Focus on: Balanced nutrition, variety, moderation",
        ]
    );
}

#[test]
fn test_unknown_strings_fall_back_to_defaults() {
    let condition = HealthCondition::from_str_lossy("gout");
    let goal = NutritionGoal::from_str_lossy("bulk");
    assert_eq!(condition, HealthCondition::None);
    assert_eq!(goal, NutritionGoal::HealthyDiet);

    let profile = profile(30, 70.0, condition, goal);
    let recommendations = get_recommendations(&profile);
    assert_eq!(recommendations.goal.daily_calories, "1800-2200");
    assert_eq!(
        recommendations.health.include,
        vec!["All food groups in moderation"]
    );
}

#[test]
fn test_refinement_overrides_multiplier_and_ratios() {
    let profile = reference_profile();
    let calories = CalorieConfig::default();
    let refinement = Refinement::new(vec![0.9, 0.3, 0.4, 0.3]);

    // 2370 * 0.9 * 1.2
    assert_eq!(
        calculate_daily_calories(&profile, Some(&refinement), &calories),
        2560
    );

    let split = calculate_macros(&profile, Some(&refinement), &calories, &MacroConfig::default());
    assert!((split.ratios.protein - 0.3).abs() < 1e-9);
    assert!((split.ratios.carbs - 0.4).abs() < 1e-9);
    assert!((split.ratios.fats - 0.3).abs() < 1e-9);
}

#[test]
fn test_negative_refined_ratio_is_renormalized() {
    let profile = reference_profile();
    let refinement = Refinement::new(vec![1.0, -0.2, 0.5, 0.5]);
    let split = calculate_macros(
        &profile,
        Some(&refinement),
        &CalorieConfig::default(),
        &MacroConfig::default(),
    );

    assert!(split.ratios.protein.abs() < 1e-12);
    assert!((split.ratios.carbs - 0.5).abs() < 1e-9);
    assert!((split.ratios.fats - 0.5).abs() < 1e-9);
    assert_eq!(split.protein_g, 0);
}

#[test]
fn test_short_refinement_keeps_default_ratios() {
    let profile = reference_profile();
    let refinement = Refinement::new(vec![1.0]);
    let split = calculate_macros(
        &profile,
        Some(&refinement),
        &CalorieConfig::default(),
        &MacroConfig::default(),
    );
    assert!((split.ratios.protein - 0.35).abs() < 1e-12);
}

#[test]
fn test_generate_plan_assembles_all_parts() {
    common::init_test_logging();
    let profile = reference_profile();
    let plan = generate_plan(
        &profile,
        None,
        &PlanningConfig::default(),
        &mut ChaCha8Rng::seed_from_u64(3),
    );

    assert_eq!(plan.daily_calories, 2607);
    assert_eq!(plan.macros.protein_g, 228);
    assert_eq!(plan.meals.iter().count(), 5);
    assert_eq!(plan.health_tips.len(), 5);
    assert_eq!(plan.recommendations, get_recommendations(&profile));
}
