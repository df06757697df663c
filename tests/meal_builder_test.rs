// ABOUTME: Integration tests for composed meal nutrition facts and daily calorie progress
// ABOUTME: Covers estimated sub-nutrients, daily value percentages, and progress bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutriplan::config::{MealBuilderConfig, PlanningConfig};
use nutriplan::errors::{ErrorCode, ErrorResponse};
use nutriplan::intelligence::{
    find_ingredient, ingredients, ingredients_in, recipe_for, CalorieProgress, DailyMealBoard,
    IngredientCategory, MealComposition, ProgressBand,
};
use nutriplan::models::MealTime;
use nutriplan::planner::NutritionPlanner;

fn compose(names: &[&str]) -> MealComposition {
    let mut composition = MealComposition::new();
    for name in names {
        composition.add(*find_ingredient(name).unwrap());
    }
    composition
}

#[test]
fn test_catalog_lookup() {
    assert_eq!(ingredients().len(), 29);
    assert_eq!(
        find_ingredient("salmon").map(|i| i.name),
        Some("Salmon (100g)")
    );
    assert_eq!(
        find_ingredient("Olive Oil (1 tbsp)").map(|i| i.category),
        Some(IngredientCategory::Fats)
    );
    assert!(find_ingredient("Dragon fruit").is_none());

    let total: usize = IngredientCategory::ALL
        .into_iter()
        .map(|category| ingredients_in(category).count())
        .sum();
    assert_eq!(total, 29);
}

#[test]
fn test_composition_from_names() {
    let composition = MealComposition::from_names(&["salmon", "Quinoa (100g cooked)"]).unwrap();
    assert_eq!(composition.ingredients().len(), 2);
    assert_eq!(composition.ingredients()[0].name, "Salmon (100g)");

    let error = MealComposition::from_names(&["salmon", "Dragon fruit"]).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.code.is_client_error());

    let response = serde_json::to_value(ErrorResponse::from(&error)).unwrap();
    assert_eq!(response["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(response["message"], "Ingredient 'Dragon fruit' not found");
}

#[test]
fn test_nutrition_facts_for_chicken_rice_broccoli() {
    let facts = compose(&["Chicken Breast", "Brown Rice", "Broccoli"])
        .nutrition_facts(&MealBuilderConfig::default());

    assert!((facts.totals.calories - 310.0).abs() < 1e-9);
    assert!((facts.totals.protein_g - 36.4).abs() < 1e-9);
    assert!((facts.totals.carbs_g - 30.0).abs() < 1e-9);
    assert!((facts.totals.fats_g - 4.9).abs() < 1e-9);

    assert!((facts.saturated_fat_g - 1.47).abs() < 1e-9);
    assert!((facts.fiber_g - 3.0).abs() < 1e-9);
    assert!((facts.sugars_g - 3.0).abs() < 1e-9);
    assert!((facts.cholesterol_mg - 182.0).abs() < 1e-9);
    assert!((facts.sodium_mg - 155.0).abs() < 1e-9);
    assert!((facts.serving_weight_g - 77.5).abs() < 1e-9);

    assert_eq!(facts.daily_values.carbs, 10);
    assert_eq!(facts.daily_values.fat, 8);
    assert_eq!(facts.daily_values.saturated_fat, 7);
    assert_eq!(facts.daily_values.fiber, 11);
    assert_eq!(facts.daily_values.cholesterol, 61);
    assert_eq!(facts.daily_values.sodium, 7);

    let shares = facts.macro_shares.unwrap();
    let total = shares.carbs_percent + shares.protein_percent + shares.fat_percent;
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_empty_composition_has_no_shares() {
    let composition = MealComposition::new();
    assert!(composition.is_empty());

    let facts = composition.nutrition_facts(&MealBuilderConfig::default());
    assert!(facts.macro_shares.is_none());
    assert_eq!(facts.daily_values.sodium, 0);
    assert!(facts.serving_weight_g.abs() < f64::EPSILON);
}

#[test]
fn test_olive_oil_has_no_carb_or_protein_share() {
    let facts = compose(&["Olive Oil"]).nutrition_facts(&MealBuilderConfig::default());
    let shares = facts.macro_shares.unwrap();
    assert!((shares.fat_percent - 100.0).abs() < 1e-9);
    assert!(shares.carbs_percent.abs() < f64::EPSILON);
}

#[test]
fn test_remove_and_clear() {
    let mut composition = compose(&["Tofu", "Quinoa", "Spinach"]);
    assert!(composition.remove(5).is_none());

    let removed = composition.remove(1).unwrap();
    assert_eq!(removed.name, "Quinoa (100g cooked)");
    let names: Vec<&str> = composition.ingredients().iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Tofu (100g)", "Spinach (100g)"]);

    composition.clear();
    assert!(composition.is_empty());
}

#[test]
fn test_progress_bands() {
    let config = MealBuilderConfig::default();

    let on_track = CalorieProgress::new(1800.0, 2000, &config);
    assert_eq!(on_track.band, ProgressBand::OnTrack);
    assert!((on_track.percent - 90.0).abs() < 1e-9);

    let approaching = CalorieProgress::new(1900.0, 2000, &config);
    assert_eq!(approaching.band, ProgressBand::Approaching);

    let exact = CalorieProgress::new(2000.0, 2000, &config);
    assert_eq!(exact.band, ProgressBand::Approaching);

    let over = CalorieProgress::new(2100.0, 2000, &config);
    assert_eq!(over.band, ProgressBand::Over);
    assert!((over.percent - 105.0).abs() < 1e-9);
    assert!((over.display_percent - 100.0).abs() < 1e-9);
}

#[test]
fn test_zero_target_progress() {
    let config = MealBuilderConfig::default();

    let idle = CalorieProgress::new(0.0, 0, &config);
    assert_eq!(idle.band, ProgressBand::OnTrack);
    assert!(idle.percent.abs() < f64::EPSILON);

    let eaten = CalorieProgress::new(150.0, 0, &config);
    assert_eq!(eaten.band, ProgressBand::Over);
    assert!((eaten.percent - 100.0).abs() < f64::EPSILON);
    assert!(serde_json::to_value(eaten).unwrap()["percent"].is_number());
}

#[test]
fn test_daily_board_summary() {
    let config = PlanningConfig::default();
    let mut board = DailyMealBoard::default();
    assert!(board.slot_mut(MealTime::Snacks).is_none());

    board
        .slot_mut(MealTime::Breakfast)
        .unwrap()
        .add(*find_ingredient("Oats").unwrap());
    board
        .slot_mut(MealTime::Dinner)
        .unwrap()
        .add(*find_ingredient("Salmon").unwrap());

    let summary = board.summary(None, &config.meal_builder);
    assert_eq!(summary.meals.len(), 3);
    assert!((summary.totals.calories - 402.0).abs() < 1e-9);
    assert_eq!(summary.progress.target, 2000);
    assert!(summary.meals[1].calories.abs() < f64::EPSILON);

    let report = NutritionPlanner::default().plan(&common::reference_profile());
    let with_plan = board.summary(Some(&report.plan), &config.meal_builder);
    assert_eq!(with_plan.progress.target, 2607);
    assert_eq!(with_plan.progress.band, ProgressBand::OnTrack);
}

#[test]
fn test_recipes() {
    let salad = recipe_for("Grilled chicken salad");
    assert_eq!(salad.ingredients.len(), 5);
    assert_eq!(salad.instructions[0], "Grill chicken breast until cooked");

    let generic = recipe_for("Mixed nuts");
    assert_eq!(generic.name, "Mixed nuts");
    assert_eq!(
        generic.ingredients,
        vec!["Fresh ingredients", "Herbs and spices", "Healthy oils"]
    );
    assert_eq!(generic.instructions.len(), 4);
}
