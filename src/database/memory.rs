// ABOUTME: In-memory PlanRepository backed by a tokio RwLock
// ABOUTME: Assigns UUIDs and UTC timestamps; contents live for the process lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{PlanRepository, SavedPlan, StoredPlan};
use crate::logging::AppLogger;
use async_trait::async_trait;
use chrono::Utc;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{NutritionPlan, UserProfile};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local plan storage
#[derive(Debug, Default)]
pub struct InMemoryPlanRepository {
    plans: RwLock<Vec<StoredPlan>>,
}

impl InMemoryPlanRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored plans
    pub async fn len(&self) -> usize {
        self.plans.read().await.len()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.plans.read().await.is_empty()
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn save_plan(
        &self,
        profile: &UserProfile,
        plan: &NutritionPlan,
        owner: Option<&str>,
    ) -> AppResult<SavedPlan> {
        let stored = StoredPlan {
            id: Uuid::new_v4(),
            owner: owner
                .filter(|o| !o.trim().is_empty())
                .unwrap_or(profile.name.as_str())
                .to_owned(),
            profile: profile.clone(),
            plan: plan.clone(),
            created_at: Utc::now(),
        };
        let saved = SavedPlan {
            id: stored.id,
            created_at: stored.created_at,
        };

        self.plans.write().await.push(stored);
        AppLogger::log_repository_operation("save_plan", true, 1);
        Ok(saved)
    }

    async fn get_plans_for_user(&self, identifier: &str) -> AppResult<Vec<StoredPlan>> {
        let plans: Vec<StoredPlan> = self
            .plans
            .read()
            .await
            .iter()
            .rev()
            .filter(|plan| plan.matches(identifier))
            .cloned()
            .collect();
        AppLogger::log_repository_operation("get_plans_for_user", true, plans.len());
        Ok(plans)
    }

    async fn get_plan_by_id(&self, id: Uuid) -> AppResult<Option<StoredPlan>> {
        let plan = self
            .plans
            .read()
            .await
            .iter()
            .find(|plan| plan.id == id)
            .cloned();
        AppLogger::log_repository_operation("get_plan_by_id", true, usize::from(plan.is_some()));
        Ok(plan)
    }

    async fn list_plans(&self) -> AppResult<Vec<StoredPlan>> {
        let plans: Vec<StoredPlan> = self.plans.read().await.iter().rev().cloned().collect();
        AppLogger::log_repository_operation("list_plans", true, plans.len());
        Ok(plans)
    }
}
