// ABOUTME: Application-state layer running one planning request end to end
// ABOUTME: Owns the planning config and the optional trained refinement estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PlanningConfig;
use crate::intelligence::health_metrics::{calculate_health_metrics, calculate_health_score};
use crate::intelligence::plan_generator::generate_plan;
use crate::intelligence::refinement::{Refinement, RefinementEstimator};
use crate::logging::AppLogger;
use nutriplan_core::models::{HealthMetrics, HealthScore, NutritionPlan, UserProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Combined result of one planning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Generated plan
    pub plan: NutritionPlan,
    /// Derived health metrics
    pub metrics: HealthMetrics,
    /// Composite health score
    pub score: HealthScore,
}

/// Planning pipeline with its configuration and optional estimator
///
/// The estimator, when enabled, is trained once at construction and then
/// only read, so a planner can be shared across threads.
#[derive(Debug, Clone)]
pub struct NutritionPlanner {
    config: PlanningConfig,
    estimator: Option<RefinementEstimator>,
}

impl NutritionPlanner {
    /// Build a planner, training the estimator if the config enables it
    #[must_use]
    pub fn new(config: PlanningConfig) -> Self {
        let estimator = config
            .estimator
            .enabled
            .then(|| RefinementEstimator::train(&config));
        Self { config, estimator }
    }

    /// Build a planner from the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(PlanningConfig::global().clone())
    }

    /// Build a planner with an explicit estimator (or none)
    #[must_use]
    pub const fn with_estimator(
        config: PlanningConfig,
        estimator: Option<RefinementEstimator>,
    ) -> Self {
        Self { config, estimator }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// Whether plans are refined by the estimator
    #[must_use]
    pub const fn is_refined(&self) -> bool {
        self.estimator.is_some()
    }

    /// Estimator prediction for a profile, if an estimator is present
    #[must_use]
    pub fn refinement_for(&self, profile: &UserProfile) -> Option<Refinement> {
        self.estimator
            .as_ref()
            .map(|estimator| estimator.predict(profile))
    }

    /// Health metrics for a profile
    #[must_use]
    pub fn metrics(&self, profile: &UserProfile) -> HealthMetrics {
        calculate_health_metrics(profile, &self.config.metrics)
    }

    /// Run the pipeline with a thread-local random source
    #[must_use]
    pub fn plan(&self, profile: &UserProfile) -> PlanReport {
        self.plan_with_rng(profile, &mut rand::thread_rng())
    }

    /// Run the pipeline with a caller-supplied random source
    pub fn plan_with_rng<R: Rng + ?Sized>(&self, profile: &UserProfile, rng: &mut R) -> PlanReport {
        let refinement = self.refinement_for(profile);
        let plan = generate_plan(profile, refinement.as_ref(), &self.config, rng);
        let metrics = self.metrics(profile);
        let score = calculate_health_score(
            profile,
            &plan,
            &self.config.metrics,
            &self.config.scoring,
        );

        AppLogger::log_plan_generated(
            profile.goal.as_str(),
            profile.health_condition.as_str(),
            plan.daily_calories,
            refinement.is_some(),
        );

        PlanReport {
            plan,
            metrics,
            score,
        }
    }
}

impl Default for NutritionPlanner {
    fn default() -> Self {
        Self::new(PlanningConfig::default())
    }
}
