// ABOUTME: Refinement estimator configuration: network shape, training schedule, and seed
// ABOUTME: The estimator is disabled by default and trains once when a planner is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Refinement estimator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Train and apply the estimator when building a planner
    pub enabled: bool,
    /// Seed for synthetic sample generation and weight initialization
    pub seed: u64,
    /// Number of synthetic training samples (200)
    pub training_samples: usize,
    /// Passes over the training set (50)
    pub epochs: usize,
    /// Mini-batch size (32)
    pub batch_size: usize,
    /// Gradient descent step size
    pub learning_rate: f64,
    /// Width of the hidden ReLU layer (16)
    pub hidden_units: usize,
    /// Youngest synthetic age (inclusive)
    pub sample_min_age: f64,
    /// Oldest synthetic age (exclusive)
    pub sample_max_age: f64,
    /// Lightest synthetic weight (inclusive)
    pub sample_min_weight_kg: f64,
    /// Heaviest synthetic weight (exclusive)
    pub sample_max_weight_kg: f64,
    /// Divisor normalizing age inputs (100)
    pub age_scale: f64,
    /// Divisor normalizing weight inputs (150)
    pub weight_scale: f64,
    /// Meal frequency training label (0.8)
    pub meal_frequency_label: f64,
    /// Snack frequency training label (0.6)
    pub snack_frequency_label: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            seed: 42,
            training_samples: 200,
            epochs: 50,
            batch_size: 32,
            learning_rate: 0.5,
            hidden_units: 16,
            sample_min_age: 20.0,
            sample_max_age: 80.0,
            sample_min_weight_kg: 50.0,
            sample_max_weight_kg: 100.0,
            age_scale: 100.0,
            weight_scale: 150.0,
            meal_frequency_label: 0.8,
            snack_frequency_label: 0.6,
        }
    }
}
