// ABOUTME: Integration tests for planning configuration defaults, validation, and env overrides
// ABOUTME: Env tests run serially because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::config::{ConfigError, PlanningConfig};
use nutriplan::errors::{AppError, ErrorCode};
use nutriplan::models::MacroRatios;
use serial_test::serial;
use std::env;

#[test]
fn test_default_config_validation() {
    assert!(PlanningConfig::default().validate().is_ok());
}

#[test]
fn test_invalid_macro_ratios_sum() {
    let mut config = PlanningConfig::default();
    config.macros.fitness = MacroRatios::new(0.5, 0.5, 0.5);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_unordered_bmi_edges() {
    let mut config = PlanningConfig::default();
    config.metrics.bmi_normal_below = 35.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_non_finite_values_rejected() {
    let mut config = PlanningConfig::default();
    config.calories.activity_multiplier = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = PlanningConfig::default();
    config.metrics.glass_ml = f64::INFINITY;
    assert!(config.validate().is_err());

    let mut config = PlanningConfig::default();
    config.scoring.calorie_band_tdee_factor = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = PlanningConfig::default();
    config.macros.weight_gain = MacroRatios::new(f64::NAN, 0.5, 0.5);
    assert!(config.validate().is_err());

    let mut config = PlanningConfig::default();
    config.estimator.sample_max_age = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = PlanningConfig::default();
    config.metrics.bmi_overweight_below = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn test_meal_slot_sizes_are_capped() {
    let mut config = PlanningConfig::default();
    config.meals.breakfast_count = 3;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = PlanningConfig::default();
    config.meals.snack_count = 3;
    assert!(config.validate().is_err());

    let mut config = PlanningConfig::default();
    config.meals.lunch_count = 0;
    config.meals.snack_count = 1;
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_error_maps_to_app_error() {
    let parse: AppError = ConfigError::Parse("Invalid NUTRIPLAN_GLASS_ML".into()).into();
    assert_eq!(parse.code, ErrorCode::ConfigError);

    let invalid: AppError = ConfigError::InvalidRange("bmi").into();
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_environment_variable_override() {
    env::set_var("NUTRIPLAN_WATER_ML_PER_KG", "40");
    env::set_var("NUTRIPLAN_ESTIMATOR_ENABLED", "true");
    env::set_var("NUTRIPLAN_ESTIMATOR_SEED", "9");

    let config = PlanningConfig::load().unwrap();

    assert!((config.metrics.water_ml_per_kg - 40.0).abs() < f64::EPSILON);
    assert!(config.estimator.enabled);
    assert_eq!(config.estimator.seed, 9);

    env::remove_var("NUTRIPLAN_WATER_ML_PER_KG");
    env::remove_var("NUTRIPLAN_ESTIMATOR_ENABLED");
    env::remove_var("NUTRIPLAN_ESTIMATOR_SEED");
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    env::set_var("NUTRIPLAN_GLASS_ML", "a lot");
    let result = PlanningConfig::load();
    env::remove_var("NUTRIPLAN_GLASS_ML");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_nan_override_is_rejected() {
    env::set_var("NUTRIPLAN_CALORIE_ACTIVITY_MULTIPLIER", "NaN");
    let calories = PlanningConfig::load();
    env::remove_var("NUTRIPLAN_CALORIE_ACTIVITY_MULTIPLIER");
    assert!(matches!(calories, Err(ConfigError::ValueOutOfRange(_))));

    env::set_var("NUTRIPLAN_GLASS_ML", "NaN");
    let water = PlanningConfig::load();
    env::remove_var("NUTRIPLAN_GLASS_ML");
    assert!(matches!(water, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    env::set_var("NUTRIPLAN_GLASS_ML", "0");
    let result = PlanningConfig::load();
    env::remove_var("NUTRIPLAN_GLASS_ML");

    assert!(result.is_err());
    assert!(!matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    let config = PlanningConfig::load().unwrap();
    let defaults = PlanningConfig::default();
    assert!(
        (config.calories.reference_height_cm - defaults.calories.reference_height_cm).abs()
            < f64::EPSILON
    );
    assert!(!config.estimator.enabled);
}
