// ABOUTME: Planning configuration container with defaults, validation, and env overrides
// ABOUTME: Loads once into a process-wide singleton and falls back to defaults on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planning Configuration Module
//!
//! Every numeric constant used by the planning engine lives here, grouped by
//! domain:
//! - `calories` - calorie target, default macro ratios, meal selection filters
//! - `metrics` - BMI/BMR/TDEE/water coefficients and health score bonuses
//! - `estimator` - refinement estimator shape and training schedule
//! - `meal_builder` - nutrition label estimates, daily values, progress bands
//!
//! Defaults reproduce the reference behavior exactly. `NUTRIPLAN_*`
//! environment variables override selected values.

/// Calorie target, macro ratio, and meal selection settings
pub mod calories;
/// Configuration errors
pub mod error;
/// Refinement estimator hyperparameters
pub mod estimator;
/// Meal builder nutrition label settings
pub mod meal_builder;
/// Health metric and score settings
pub mod metrics;

pub use calories::{CalorieConfig, MacroConfig, MealSelectionConfig};
pub use error::ConfigError;
pub use estimator::EstimatorConfig;
pub use meal_builder::MealBuilderConfig;
pub use metrics::{MetricsConfig, ScoringConfig};

use nutriplan_core::constants::limits::{MAX_MAIN_MEAL_ITEMS, MAX_SNACK_ITEMS};
use nutriplan_core::models::{MacroRatios, NutritionGoal};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNING_CONFIG: OnceLock<PlanningConfig> = OnceLock::new();

/// Tolerance allowed when checking that shares sum to 1.0
const RATIO_SUM_TOLERANCE: f64 = 0.01;

/// Finite and strictly positive
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Finite and strictly increasing
fn is_ascending(values: &[f64]) -> bool {
    values.iter().all(|value| value.is_finite())
        && values.windows(2).all(|pair| pair[0] < pair[1])
}

/// Main planning configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Calorie target settings
    pub calories: CalorieConfig,
    /// Default macro ratios per goal
    pub macros: MacroConfig,
    /// Meal selection sizes and condition filters
    pub meals: MealSelectionConfig,
    /// Health metric coefficients
    pub metrics: MetricsConfig,
    /// Health score bonuses and bands
    pub scoring: ScoringConfig,
    /// Refinement estimator settings
    pub estimator: EstimatorConfig,
    /// Meal builder settings
    pub meal_builder: MealBuilderConfig,
}

impl PlanningConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planning config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_calories()?;
        self.validate_metrics()?;
        self.validate_scoring()?;
        self.validate_estimator()?;
        self.validate_meal_builder()
    }

    fn validate_calories(&self) -> Result<(), ConfigError> {
        let calories = &self.calories;
        if !is_positive(calories.reference_height_cm) {
            return Err(ConfigError::ValueOutOfRange(
                "reference_height_cm must be positive",
            ));
        }
        if !(is_positive(calories.activity_multiplier) && is_positive(calories.refinement_scale)) {
            return Err(ConfigError::ValueOutOfRange(
                "activity_multiplier and refinement_scale must be positive",
            ));
        }
        if NutritionGoal::ALL
            .iter()
            .any(|goal| !is_positive(calories.goal_multiplier(*goal)))
        {
            return Err(ConfigError::ValueOutOfRange(
                "goal multipliers must be positive",
            ));
        }

        for goal in NutritionGoal::ALL {
            Self::validate_ratios(self.macros.for_goal(goal))?;
        }
        self.validate_meal_selection()
    }

    fn validate_meal_selection(&self) -> Result<(), ConfigError> {
        let meals = &self.meals;
        if meals.breakfast_count > MAX_MAIN_MEAL_ITEMS
            || meals.lunch_count > MAX_MAIN_MEAL_ITEMS
            || meals.dinner_count > MAX_MAIN_MEAL_ITEMS
            || meals.snack_count > MAX_SNACK_ITEMS
        {
            return Err(ConfigError::ValueOutOfRange(
                "meal slot sizes must not exceed one main meal and two snacks",
            ));
        }
        Ok(())
    }

    fn validate_ratios(ratios: MacroRatios) -> Result<(), ConfigError> {
        let parts = [ratios.protein, ratios.carbs, ratios.fats];
        if parts.iter().any(|part| !(part.is_finite() && *part >= 0.0)) {
            return Err(ConfigError::ValueOutOfRange(
                "macro ratios must be non-negative",
            ));
        }
        if (ratios.sum() - 1.0).abs() > RATIO_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("macro ratios must sum to 1.0"));
        }
        Ok(())
    }

    fn validate_metrics(&self) -> Result<(), ConfigError> {
        let metrics = &self.metrics;
        if !is_positive(metrics.default_height_cm) {
            return Err(ConfigError::ValueOutOfRange(
                "default_height_cm must be positive",
            ));
        }
        if !(is_positive(metrics.glass_ml) && is_positive(metrics.water_ml_per_kg)) {
            return Err(ConfigError::ValueOutOfRange(
                "glass_ml and water_ml_per_kg must be positive",
            ));
        }
        if !is_positive(metrics.tdee_activity_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "tdee_activity_factor must be positive",
            ));
        }
        if !is_ascending(&[
            metrics.bmi_underweight_below,
            metrics.bmi_normal_below,
            metrics.bmi_overweight_below,
        ]) {
            return Err(ConfigError::InvalidRange(
                "BMI band edges must be in ascending order",
            ));
        }
        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        if scoring.young_age_below >= scoring.adult_age_below
            || scoring.adult_age_below >= scoring.senior_age_below
        {
            return Err(ConfigError::InvalidRange(
                "score age bands must be in ascending order",
            ));
        }
        if scoring.fair_min >= scoring.good_min || scoring.good_min >= scoring.excellent_min {
            return Err(ConfigError::InvalidRange(
                "fair_min < good_min < excellent_min is required",
            ));
        }
        if scoring.base_score > scoring.max_score {
            return Err(ConfigError::InvalidRange("base_score must not exceed max_score"));
        }
        if !(is_positive(scoring.calorie_band_bmr_factor)
            && is_positive(scoring.calorie_band_tdee_factor))
        {
            return Err(ConfigError::ValueOutOfRange(
                "calorie band factors must be positive",
            ));
        }
        Ok(())
    }

    fn validate_estimator(&self) -> Result<(), ConfigError> {
        let estimator = &self.estimator;
        if estimator.training_samples == 0
            || estimator.epochs == 0
            || estimator.batch_size == 0
            || estimator.hidden_units == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "estimator sample count, epochs, batch size and hidden units must be positive",
            ));
        }
        if !is_positive(estimator.learning_rate) {
            return Err(ConfigError::ValueOutOfRange(
                "estimator learning_rate must be positive",
            ));
        }
        if !(is_ascending(&[estimator.sample_min_age, estimator.sample_max_age])
            && is_ascending(&[estimator.sample_min_weight_kg, estimator.sample_max_weight_kg]))
        {
            return Err(ConfigError::InvalidRange(
                "estimator sample minimums must be < maximums",
            ));
        }
        if !(is_positive(estimator.age_scale) && is_positive(estimator.weight_scale)) {
            return Err(ConfigError::ValueOutOfRange(
                "estimator input scales must be positive",
            ));
        }
        Ok(())
    }

    fn validate_meal_builder(&self) -> Result<(), ConfigError> {
        let builder = &self.meal_builder;
        let daily_values = [
            builder.daily_carbs_g,
            builder.daily_fat_g,
            builder.daily_saturated_fat_g,
            builder.daily_fiber_g,
            builder.daily_cholesterol_mg,
            builder.daily_sodium_mg,
            builder.serving_kcal_per_g,
        ];
        if !daily_values.iter().copied().all(is_positive) {
            return Err(ConfigError::ValueOutOfRange(
                "daily values and serving density must be positive",
            ));
        }
        if !is_ascending(&[builder.approaching_percent, builder.over_percent]) {
            return Err(ConfigError::InvalidRange(
                "approaching_percent must be < over_percent",
            ));
        }
        Ok(())
    }

    /// Helper to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRIPLAN_REFERENCE_HEIGHT_CM",
            &mut self.calories.reference_height_cm,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_CALORIE_ACTIVITY_MULTIPLIER",
            &mut self.calories.activity_multiplier,
        )?;

        Self::apply_env_var(
            "NUTRIPLAN_DEFAULT_HEIGHT_CM",
            &mut self.metrics.default_height_cm,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_TDEE_ACTIVITY_FACTOR",
            &mut self.metrics.tdee_activity_factor,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_WATER_ML_PER_KG",
            &mut self.metrics.water_ml_per_kg,
        )?;
        Self::apply_env_var("NUTRIPLAN_GLASS_ML", &mut self.metrics.glass_ml)?;

        Self::apply_env_var(
            "NUTRIPLAN_DIABETES_MAX_CARBS_G",
            &mut self.meals.diabetes_max_carbs_g,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_HIGH_BP_MAX_FATS_G",
            &mut self.meals.high_bp_max_fats_g,
        )?;

        Self::apply_env_var("NUTRIPLAN_ESTIMATOR_ENABLED", &mut self.estimator.enabled)?;
        Self::apply_env_var("NUTRIPLAN_ESTIMATOR_SEED", &mut self.estimator.seed)?;
        Self::apply_env_var("NUTRIPLAN_ESTIMATOR_EPOCHS", &mut self.estimator.epochs)?;
        Self::apply_env_var(
            "NUTRIPLAN_ESTIMATOR_LEARNING_RATE",
            &mut self.estimator.learning_rate,
        )?;

        Ok(self)
    }
}
