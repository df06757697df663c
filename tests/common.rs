// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides quiet logging setup and profile builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutriplan`

use nutriplan::models::{HealthCondition, NutritionGoal, UserProfile};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Profile with the given attributes and the default height
pub fn profile(
    age: u32,
    weight_kg: f64,
    health_condition: HealthCondition,
    goal: NutritionGoal,
) -> UserProfile {
    UserProfile {
        name: "Test User".to_owned(),
        age,
        weight_kg,
        height_cm: None,
        health_condition,
        goal,
    }
}

/// 30 year old, 70 kg, 170 cm, no condition, fitness goal
pub fn reference_profile() -> UserProfile {
    UserProfile {
        height_cm: Some(170.0),
        ..profile(30, 70.0, HealthCondition::None, NutritionGoal::Fitness)
    }
}

/// Named profile for repository and analytics tests
pub fn named_profile(name: &str, goal: NutritionGoal) -> UserProfile {
    UserProfile {
        name: name.to_owned(),
        ..profile(40, 75.0, HealthCondition::None, goal)
    }
}
