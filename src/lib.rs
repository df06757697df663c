// ABOUTME: Main library entry point for the NutriPlan nutrition planning engine
// ABOUTME: Derives nutrition plans, health metrics, and health scores from user profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriPlan`
//!
//! A nutrition-plan derivation engine. Given a user's age, weight, optional
//! height, health condition and goal, it computes a calorie target, macro
//! split, meal selection and guidance, plus BMI/BMR/TDEE metrics and a
//! composite health score.
//!
//! ## Architecture
//!
//! - **Intelligence**: pure planning functions, catalogs, and the optional
//!   refinement estimator
//! - **Config**: every tunable constant, with env overrides
//! - **Planner**: runs one request end to end
//! - **Validation**: raw form input into a `UserProfile`
//! - **Database**: plan persistence interface and an in-memory implementation
//! - **Analytics**: dashboard statistics over stored plans
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::models::{HealthCondition, NutritionGoal, UserProfile};
//! use nutriplan::planner::NutritionPlanner;
//!
//! let profile = UserProfile {
//!     name: "Ana".into(),
//!     age: 30,
//!     weight_kg: 70.0,
//!     height_cm: Some(170.0),
//!     health_condition: HealthCondition::None,
//!     goal: NutritionGoal::Fitness,
//! };
//! let report = NutritionPlanner::default().plan(&profile);
//! println!("{} kcal/day", report.plan.daily_calories);
//! ```

/// Dashboard statistics and plan search
pub mod analytics;

/// Planning configuration with defaults, validation, and env overrides
pub mod config;

/// Plan persistence interface
pub mod database;

/// Plan generation, metrics, refinement, and meal building
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// End-to-end planning pipeline
pub mod planner;

/// Profile form validation
pub mod validation;

// Re-export core crate modules so callers need a single dependency
pub use nutriplan_core::{constants, errors, models};
