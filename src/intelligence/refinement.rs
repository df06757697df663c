// ABOUTME: Optional refinement estimator: a small regression network trained on synthetic profiles
// ABOUTME: Predicts calorie multiplier and macro ratio adjustments from normalized user attributes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Refinement Estimator
//!
//! A 4 -> hidden (`ReLU`) -> 8 (sigmoid) network trained once by mini-batch
//! gradient descent on mean squared error. Training data are synthetic
//! profiles labelled by the same goal tables the plan generator uses, so a
//! well-trained estimator smooths the native rules rather than replacing them.
//!
//! Inputs: `[age / 100, weight / 150, condition / 3, goal / 3]`
//!
//! Outputs: `[calorie multiplier / 1.2, protein, carbs, fats, meal frequency,
//! snack frequency, condition / 3, goal / 3]`
//!
//! Training is seeded, so one configuration always yields the same network.
//! Inference is pure and the trained estimator is shared immutably.

use crate::config::{EstimatorConfig, PlanningConfig};
use nutriplan_core::models::{HealthCondition, MacroRatios, NutritionGoal, UserProfile};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of network inputs
pub const INPUT_SIZE: usize = 4;
/// Number of network outputs
pub const OUTPUT_SIZE: usize = 8;

/// Largest ordinal of the condition and goal encodings
const ENCODING_MAX: f64 = 3.0;

/// Estimator outputs for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refinement {
    outputs: Vec<f64>,
}

impl Refinement {
    /// Wrap raw outputs
    #[must_use]
    pub const fn new(outputs: Vec<f64>) -> Self {
        Self { outputs }
    }

    /// Raw outputs in order
    #[must_use]
    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    /// Unscaled calorie multiplier (first output), when present
    #[must_use]
    pub fn calorie_multiplier(&self) -> Option<f64> {
        self.outputs.first().copied()
    }

    /// Raw macro ratios (outputs 1..=3), when at least four outputs exist
    #[must_use]
    pub fn macro_ratios(&self) -> Option<MacroRatios> {
        match self.outputs.as_slice() {
            [_, protein, carbs, fats, ..] => Some(MacroRatios::new(*protein, *carbs, *fats)),
            _ => None,
        }
    }
}

/// One labelled synthetic profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSample {
    /// Normalized inputs
    pub inputs: [f64; INPUT_SIZE],
    /// Target outputs
    pub targets: [f64; OUTPUT_SIZE],
}

/// Normalize profile attributes into network inputs
#[must_use]
pub fn encode_inputs(
    age: f64,
    weight_kg: f64,
    condition: HealthCondition,
    goal: NutritionGoal,
    config: &EstimatorConfig,
) -> [f64; INPUT_SIZE] {
    [
        age / config.age_scale,
        weight_kg / config.weight_scale,
        f64::from(condition.encode()) / ENCODING_MAX,
        f64::from(goal.encode()) / ENCODING_MAX,
    ]
}

/// Target outputs for a condition and goal, taken from the native goal tables
#[must_use]
pub fn training_targets(
    condition: HealthCondition,
    goal: NutritionGoal,
    config: &PlanningConfig,
) -> [f64; OUTPUT_SIZE] {
    let ratios = config.macros.for_goal(goal);
    [
        config.calories.goal_multiplier(goal) / config.calories.refinement_scale,
        ratios.protein,
        ratios.carbs,
        ratios.fats,
        config.estimator.meal_frequency_label,
        config.estimator.snack_frequency_label,
        f64::from(condition.encode()) / ENCODING_MAX,
        f64::from(goal.encode()) / ENCODING_MAX,
    ]
}

/// Generate labelled synthetic profiles
///
/// Ages and weights are uniform over the configured half-open ranges;
/// condition and goal are uniform over their variants.
pub fn synthetic_samples<R: Rng + ?Sized>(
    config: &PlanningConfig,
    rng: &mut R,
) -> Vec<TrainingSample> {
    let estimator = &config.estimator;
    (0..estimator.training_samples)
        .map(|_| {
            let age = rng.gen_range(estimator.sample_min_age..estimator.sample_max_age);
            let weight =
                rng.gen_range(estimator.sample_min_weight_kg..estimator.sample_max_weight_kg);
            let condition = HealthCondition::ALL[rng.gen_range(0..HealthCondition::ALL.len())];
            let goal = NutritionGoal::ALL[rng.gen_range(0..NutritionGoal::ALL.len())];
            TrainingSample {
                inputs: encode_inputs(age, weight, condition, goal, estimator),
                targets: training_targets(condition, goal, config),
            }
        })
        .collect()
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Fully connected layer: `weights[output][input]`
#[derive(Debug, Clone)]
struct DenseLayer {
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
}

impl DenseLayer {
    /// Glorot-uniform weights and zero biases
    fn random<R: Rng + ?Sized>(inputs: usize, outputs: usize, rng: &mut R) -> Self {
        let limit = (6.0 / (inputs + outputs) as f64).sqrt();
        let weights = (0..outputs)
            .map(|_| (0..inputs).map(|_| rng.gen_range(-limit..limit)).collect())
            .collect();
        Self {
            weights,
            biases: vec![0.0; outputs],
        }
    }

    fn zeros_like(other: &Self) -> Self {
        Self {
            weights: other
                .weights
                .iter()
                .map(|row| vec![0.0; row.len()])
                .collect(),
            biases: vec![0.0; other.biases.len()],
        }
    }

    /// Pre-activation output
    fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| {
                row.iter()
                    .zip(input)
                    .fold(*bias, |acc, (weight, x)| weight.mul_add(*x, acc))
            })
            .collect()
    }

    /// Add the outer product `delta x input` to this gradient
    fn accumulate(&mut self, delta: &[f64], input: &[f64]) {
        for ((row, bias), d) in self.weights.iter_mut().zip(&mut self.biases).zip(delta) {
            for (weight, x) in row.iter_mut().zip(input) {
                *weight = d.mul_add(*x, *weight);
            }
            *bias += d;
        }
    }

    /// Step against a gradient
    fn descend(&mut self, gradient: &Self, step: f64) {
        for (row, grad_row) in self.weights.iter_mut().zip(&gradient.weights) {
            for (weight, grad) in row.iter_mut().zip(grad_row) {
                *weight = (-step).mul_add(*grad, *weight);
            }
        }
        for (bias, grad) in self.biases.iter_mut().zip(&gradient.biases) {
            *bias = (-step).mul_add(*grad, *bias);
        }
    }
}

/// Trained regression network
#[derive(Debug, Clone)]
pub struct RefinementEstimator {
    hidden: DenseLayer,
    output: DenseLayer,
    config: EstimatorConfig,
}

impl RefinementEstimator {
    /// Randomly initialized, untrained network
    pub fn untrained<R: Rng + ?Sized>(config: &EstimatorConfig, rng: &mut R) -> Self {
        Self {
            hidden: DenseLayer::random(INPUT_SIZE, config.hidden_units, rng),
            output: DenseLayer::random(config.hidden_units, OUTPUT_SIZE, rng),
            config: config.clone(),
        }
    }

    /// Generate synthetic samples and train a network, deterministically per seed
    #[must_use]
    pub fn train(config: &PlanningConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.estimator.seed);
        let samples = synthetic_samples(config, &mut rng);
        let mut estimator = Self::untrained(&config.estimator, &mut rng);
        estimator.fit(&samples, &mut rng);

        info!(
            samples = samples.len(),
            epochs = config.estimator.epochs,
            seed = config.estimator.seed,
            loss = estimator.mean_squared_error(&samples),
            "Refinement estimator trained"
        );
        estimator
    }

    /// Run mini-batch gradient descent over `samples` for the configured epochs
    pub fn fit<R: Rng + ?Sized>(&mut self, samples: &[TrainingSample], rng: &mut R) {
        if samples.is_empty() {
            return;
        }
        let batch_size = self.config.batch_size.max(1);
        let mut order: Vec<usize> = (0..samples.len()).collect();

        for _ in 0..self.config.epochs {
            order.shuffle(rng);
            for batch in order.chunks(batch_size) {
                self.step(samples, batch);
            }
        }
    }

    fn step(&mut self, samples: &[TrainingSample], batch: &[usize]) {
        let mut hidden_grad = DenseLayer::zeros_like(&self.hidden);
        let mut output_grad = DenseLayer::zeros_like(&self.output);

        for sample in batch.iter().filter_map(|index| samples.get(*index)) {
            let hidden_pre = self.hidden.forward(&sample.inputs);
            let hidden_act: Vec<f64> = hidden_pre.iter().map(|z| z.max(0.0)).collect();
            let outputs: Vec<f64> = self
                .output
                .forward(&hidden_act)
                .into_iter()
                .map(sigmoid)
                .collect();

            // d(MSE)/dz through the sigmoid
            let output_delta: Vec<f64> = outputs
                .iter()
                .zip(&sample.targets)
                .map(|(y, t)| 2.0 * (y - t) / OUTPUT_SIZE as f64 * y * (1.0 - y))
                .collect();

            let hidden_delta: Vec<f64> = hidden_pre
                .iter()
                .enumerate()
                .map(|(j, z)| {
                    if *z <= 0.0 {
                        return 0.0;
                    }
                    self.output
                        .weights
                        .iter()
                        .zip(&output_delta)
                        .map(|(row, delta)| row.get(j).copied().unwrap_or(0.0) * delta)
                        .sum()
                })
                .collect();

            output_grad.accumulate(&output_delta, &hidden_act);
            hidden_grad.accumulate(&hidden_delta, &sample.inputs);
        }

        let step = self.config.learning_rate / batch.len().max(1) as f64;
        self.output.descend(&output_grad, step);
        self.hidden.descend(&hidden_grad, step);
    }

    fn forward(&self, inputs: &[f64]) -> Vec<f64> {
        let hidden: Vec<f64> = self
            .hidden
            .forward(inputs)
            .into_iter()
            .map(|z| z.max(0.0))
            .collect();
        self.output
            .forward(&hidden)
            .into_iter()
            .map(sigmoid)
            .collect()
    }

    /// Mean squared error over samples (0 for an empty set)
    #[must_use]
    pub fn mean_squared_error(&self, samples: &[TrainingSample]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let total: f64 = samples
            .iter()
            .map(|sample| {
                self.forward(&sample.inputs)
                    .iter()
                    .zip(&sample.targets)
                    .map(|(y, t)| (y - t).powi(2))
                    .sum::<f64>()
                    / OUTPUT_SIZE as f64
            })
            .sum();
        total / samples.len() as f64
    }

    /// Predict a refinement for a profile
    #[must_use]
    pub fn predict(&self, profile: &UserProfile) -> Refinement {
        let inputs = encode_inputs(
            f64::from(profile.age),
            profile.weight_kg,
            profile.health_condition,
            profile.goal,
            &self.config,
        );
        Refinement::new(self.forward(&inputs))
    }
}
