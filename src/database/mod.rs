// ABOUTME: Plan persistence interface used by application layers to store generated plans
// ABOUTME: The planning core never calls it; an in-memory implementation ships for tests and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Storage
//!
//! A stored plan belongs to an owner identifier (an email, or the profile
//! name when no owner is given). Lookups by identifier match either.

/// In-memory repository implementation
pub mod memory;

pub use memory::InMemoryPlanRepository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{NutritionPlan, UserProfile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A plan saved together with the profile that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Owner identifier (email, or profile name when none was given)
    pub owner: String,
    /// Profile the plan was generated for
    pub profile: UserProfile,
    /// Generated plan
    pub plan: NutritionPlan,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl StoredPlan {
    /// Whether `identifier` names this plan's owner or profile
    #[must_use]
    pub fn matches(&self, identifier: &str) -> bool {
        self.owner == identifier || self.profile.name == identifier
    }
}

/// Receipt for a saved plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlan {
    /// Identifier assigned to the plan
    pub id: Uuid,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Plan persistence collaborator
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Store a plan; the owner defaults to the profile name
    async fn save_plan(
        &self,
        profile: &UserProfile,
        plan: &NutritionPlan,
        owner: Option<&str>,
    ) -> AppResult<SavedPlan>;

    /// Plans whose owner or profile name equals `identifier`, newest first
    async fn get_plans_for_user(&self, identifier: &str) -> AppResult<Vec<StoredPlan>>;

    /// One plan by identifier
    async fn get_plan_by_id(&self, id: Uuid) -> AppResult<Option<StoredPlan>>;

    /// Every plan, newest first
    async fn list_plans(&self) -> AppResult<Vec<StoredPlan>>;
}
