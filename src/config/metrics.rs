// ABOUTME: Health metrics and health score configuration
// ABOUTME: BMR/TDEE coefficients, BMI bands, water goal, and score bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health Metrics Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - BMI bands: WHO Technical Report Series 894 (2000)

use serde::{Deserialize, Serialize};

/// Health metrics calculation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Height used when the profile has none (170)
    pub default_height_cm: f64,
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub bmr_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub bmr_height_coef: f64,
    /// Mifflin-St Jeor age coefficient, subtracted (5.0)
    pub bmr_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub bmr_constant: f64,
    /// Moderately active TDEE factor (1.55)
    pub tdee_activity_factor: f64,
    /// Water per kilogram of body weight (35 ml)
    pub water_ml_per_kg: f64,
    /// Volume of one glass (250 ml)
    pub glass_ml: f64,
    /// Underweight below this BMI (18.5)
    pub bmi_underweight_below: f64,
    /// Normal below this BMI (25.0)
    pub bmi_normal_below: f64,
    /// Overweight below this BMI (30.0)
    pub bmi_overweight_below: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            default_height_cm: 170.0,
            bmr_weight_coef: 10.0,
            bmr_height_coef: 6.25,
            bmr_age_coef: 5.0,
            bmr_constant: 5.0,
            tdee_activity_factor: 1.55,
            water_ml_per_kg: 35.0,
            glass_ml: 250.0,
            bmi_underweight_below: 18.5,
            bmi_normal_below: 25.0,
            bmi_overweight_below: 30.0,
        }
    }
}

/// Composite health score settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Starting score (50)
    pub base_score: u8,
    /// Age below which the young bonus applies (30)
    pub young_age_below: u32,
    /// Bonus for the youngest band (15)
    pub young_age_bonus: u8,
    /// Age below which the adult bonus applies (50)
    pub adult_age_below: u32,
    /// Bonus for the adult band (10)
    pub adult_age_bonus: u8,
    /// Age below which the senior bonus applies (70)
    pub senior_age_below: u32,
    /// Bonus for the senior band (5)
    pub senior_age_bonus: u8,
    /// Bonus for a normal BMI (20)
    pub bmi_normal_bonus: u8,
    /// Bonus for underweight or overweight (10)
    pub bmi_near_normal_bonus: u8,
    /// Bonus for obese (5)
    pub bmi_obese_bonus: u8,
    /// Lower edge of the calorie band as a multiple of BMR (0.9)
    pub calorie_band_bmr_factor: f64,
    /// Upper edge of the calorie band as a multiple of TDEE (1.1)
    pub calorie_band_tdee_factor: f64,
    /// Bonus when plan calories sit inside the band (15)
    pub calorie_band_bonus: u8,
    /// Bonus when no condition is reported (10)
    pub no_condition_bonus: u8,
    /// Bonus when a condition is reported (5)
    pub condition_bonus: u8,
    /// Score cap (100)
    pub max_score: u8,
    /// Minimum score for Excellent (80)
    pub excellent_min: u8,
    /// Minimum score for Good (60)
    pub good_min: u8,
    /// Minimum score for Fair (40)
    pub fair_min: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            young_age_below: 30,
            young_age_bonus: 15,
            adult_age_below: 50,
            adult_age_bonus: 10,
            senior_age_below: 70,
            senior_age_bonus: 5,
            bmi_normal_bonus: 20,
            bmi_near_normal_bonus: 10,
            bmi_obese_bonus: 5,
            calorie_band_bmr_factor: 0.9,
            calorie_band_tdee_factor: 1.1,
            calorie_band_bonus: 15,
            no_condition_bonus: 10,
            condition_bonus: 5,
            max_score: 100,
            excellent_min: 80,
            good_min: 60,
            fair_min: 40,
        }
    }
}
