// ABOUTME: Core types and constants for the NutriPlan nutrition planning engine
// ABOUTME: Foundation crate with error handling, domain models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriPlan` Core
//!
//! Foundation crate providing shared types and constants for the `NutriPlan`
//! planning engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrition constants (energy densities, reference values)
//! - **models**: User profile, nutrition plan, and health metric data types

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `NutritionPlan`, `HealthMetrics`, etc.)
pub mod models;
