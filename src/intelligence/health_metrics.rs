// ABOUTME: Health metrics (BMI, BMR, TDEE, water goal) and composite health score
// ABOUTME: BMR here is full Mifflin-St Jeor with the user's height, unlike the planning estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{MetricsConfig, ScoringConfig};
use nutriplan_core::models::{
    BmiCategory, HealthCondition, HealthMetrics, HealthScore, HealthStatus, NutritionPlan,
    UserProfile,
};

/// Body mass index: weight / height(m)^2
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI band for a BMI value
#[must_use]
pub fn classify_bmi(bmi: f64, config: &MetricsConfig) -> BmiCategory {
    if bmi < config.bmi_underweight_below {
        BmiCategory::Underweight
    } else if bmi < config.bmi_normal_below {
        BmiCategory::Normal
    } else if bmi < config.bmi_overweight_below {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Mifflin-St Jeor BMR: `10 * weight + 6.25 * height - 5 * age + 5`
#[must_use]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, config: &MetricsConfig) -> f64 {
    let weight_component = config.bmr_weight_coef * weight_kg;
    let height_component = config.bmr_height_coef * height_cm;
    let age_component = config.bmr_age_coef * f64::from(age);
    weight_component + height_component - age_component + config.bmr_constant
}

/// Daily water goal in whole glasses, rounded up
#[must_use]
pub fn calculate_water_goal(weight_kg: f64, config: &MetricsConfig) -> u32 {
    let glasses = (weight_kg * config.water_ml_per_kg / config.glass_ml).ceil();
    if glasses.is_finite() && glasses > 0.0 {
        glasses.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// Derive health metrics from a profile
///
/// Height falls back to the configured default when absent or unusable.
#[must_use]
pub fn calculate_health_metrics(profile: &UserProfile, config: &MetricsConfig) -> HealthMetrics {
    let height_cm = profile.height_or(config.default_height_cm);
    let bmi = calculate_bmi(profile.weight_kg, height_cm);
    let bmr = calculate_bmr(profile.weight_kg, height_cm, profile.age, config);

    HealthMetrics {
        bmi,
        bmi_category: classify_bmi(bmi, config),
        bmr,
        tdee: bmr * config.tdee_activity_factor,
        water_goal: calculate_water_goal(profile.weight_kg, config),
    }
}

/// Status band for a score
#[must_use]
pub const fn classify_score(score: u8, config: &ScoringConfig) -> HealthStatus {
    if score >= config.excellent_min {
        HealthStatus::Excellent
    } else if score >= config.good_min {
        HealthStatus::Good
    } else if score >= config.fair_min {
        HealthStatus::Fair
    } else {
        HealthStatus::NeedsImprovement
    }
}

const fn age_bonus(age: u32, config: &ScoringConfig) -> u8 {
    if age < config.young_age_below {
        config.young_age_bonus
    } else if age < config.adult_age_below {
        config.adult_age_bonus
    } else if age < config.senior_age_below {
        config.senior_age_bonus
    } else {
        0
    }
}

const fn bmi_bonus(category: BmiCategory, config: &ScoringConfig) -> u8 {
    match category {
        BmiCategory::Normal => config.bmi_normal_bonus,
        BmiCategory::Underweight | BmiCategory::Overweight => config.bmi_near_normal_bonus,
        BmiCategory::Obese => config.bmi_obese_bonus,
    }
}

/// Composite health score for a profile and its plan
///
/// Starts from the base score and adds age, BMI, calorie-band and condition
/// bonuses, capped at the maximum score. The calorie band is
/// `[0.9 * bmr, 1.1 * tdee]` with BMR and TDEE from [`calculate_health_metrics`].
#[must_use]
pub fn calculate_health_score(
    profile: &UserProfile,
    plan: &NutritionPlan,
    metrics_config: &MetricsConfig,
    config: &ScoringConfig,
) -> HealthScore {
    let metrics = calculate_health_metrics(profile, metrics_config);

    let calories = f64::from(plan.daily_calories);
    let in_calorie_band = calories >= metrics.bmr * config.calorie_band_bmr_factor
        && calories <= metrics.tdee * config.calorie_band_tdee_factor;

    let condition_bonus = match profile.health_condition {
        HealthCondition::None => config.no_condition_bonus,
        HealthCondition::Diabetes | HealthCondition::HighBp | HealthCondition::HeartIssue => {
            config.condition_bonus
        }
    };

    let score = config
        .base_score
        .saturating_add(age_bonus(profile.age, config))
        .saturating_add(bmi_bonus(metrics.bmi_category, config))
        .saturating_add(if in_calorie_band {
            config.calorie_band_bonus
        } else {
            0
        })
        .saturating_add(condition_bonus)
        .min(config.max_score);

    HealthScore {
        score,
        status: classify_score(score, config),
    }
}
