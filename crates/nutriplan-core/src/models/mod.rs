// ABOUTME: Data models for profiles, nutrition plans, and health metrics
// ABOUTME: Re-exports every model type so callers can import from one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models are plain serializable data. They carry no behavior beyond
//! parsing, encoding, and simple derived accessors.

/// Health metric and score models
pub mod metrics;
/// Nutrition plan output models
pub mod plan;
/// User profile input models
pub mod profile;

pub use metrics::{BmiCategory, HealthMetrics, HealthScore, HealthStatus};
pub use plan::{
    ConditionGuidance, GoalGuidance, MacroRatios, MacroSplit, MealItem, MealSelection, MealTime,
    NutritionPlan, Recommendations,
};
pub use profile::{HealthCondition, NutritionGoal, UserProfile};
