// ABOUTME: Nutrition constants shared by the planning engine and its edges
// ABOUTME: Energy densities, profile input limits, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Fixed values that are part of the nutrition domain itself rather than
//! tunable policy. Tunable thresholds live in the planning configuration.

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein energy density
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate energy density
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat energy density
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Accepted ranges for profile input
pub mod limits {
    /// Minimum trimmed length of a profile name
    pub const MIN_NAME_LENGTH: usize = 2;
    /// Minimum age in years
    pub const MIN_AGE: u32 = 1;
    /// Maximum age in years
    pub const MAX_AGE: u32 = 120;
    /// Minimum body weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 1.0;
    /// Maximum body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Height used whenever a profile has none or an unusable one
    pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
    /// Number of entries kept in a weight log
    pub const WEIGHT_LOG_CAPACITY: usize = 30;
    /// Most items a plan may hold for breakfast, lunch or dinner
    pub const MAX_MAIN_MEAL_ITEMS: usize = 1;
    /// Most snack items a plan may hold
    pub const MAX_SNACK_ITEMS: usize = 2;
}

/// Service identity used in structured logs
pub mod service {
    /// Service name
    pub const SERVICE_NAME: &str = "nutriplan";
    /// Service version from Cargo.toml
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}
