// ABOUTME: Meal builder configuration: nutrition label estimates and daily values
// ABOUTME: Also sets the default calorie target and the progress band edges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Builder Configuration
//!
//! Daily values follow the FDA reference amounts for a 2000 kcal diet
//! (21 CFR 101.9). Sub-nutrients without catalog data are estimated from
//! macro totals.

use serde::{Deserialize, Serialize};

/// Meal builder settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealBuilderConfig {
    /// Saturated fat as a share of total fat (0.3)
    pub saturated_fat_ratio: f64,
    /// Fiber as a share of carbohydrates (0.1)
    pub fiber_ratio: f64,
    /// Sugars as a share of carbohydrates (0.1)
    pub sugar_ratio: f64,
    /// Cholesterol milligrams per gram of protein (5)
    pub cholesterol_mg_per_protein_g: f64,
    /// Sodium milligrams per kcal (0.5)
    pub sodium_mg_per_kcal: f64,
    /// Serving weight estimate: kcal per gram (4)
    pub serving_kcal_per_g: f64,
    /// Daily value for carbohydrates (300 g)
    pub daily_carbs_g: f64,
    /// Daily value for fat (65 g)
    pub daily_fat_g: f64,
    /// Daily value for saturated fat (20 g)
    pub daily_saturated_fat_g: f64,
    /// Daily value for fiber (28 g)
    pub daily_fiber_g: f64,
    /// Daily value for cholesterol (300 mg)
    pub daily_cholesterol_mg: f64,
    /// Daily value for sodium (2300 mg)
    pub daily_sodium_mg: f64,
    /// Calorie target used when no plan is available (2000)
    pub default_daily_target_kcal: u32,
    /// Progress above this percent is "approaching" (90)
    pub approaching_percent: f64,
    /// Progress above this percent is "over" (100)
    pub over_percent: f64,
}

impl Default for MealBuilderConfig {
    fn default() -> Self {
        Self {
            saturated_fat_ratio: 0.3,
            fiber_ratio: 0.1,
            sugar_ratio: 0.1,
            cholesterol_mg_per_protein_g: 5.0,
            sodium_mg_per_kcal: 0.5,
            serving_kcal_per_g: 4.0,
            daily_carbs_g: 300.0,
            daily_fat_g: 65.0,
            daily_saturated_fat_g: 20.0,
            daily_fiber_g: 28.0,
            daily_cholesterol_mg: 300.0,
            daily_sodium_mg: 2300.0,
            default_daily_target_kcal: 2000,
            approaching_percent: 90.0,
            over_percent: 100.0,
        }
    }
}
