// ABOUTME: Dashboard analytics over stored plans: summary statistics and search filtering
// ABOUTME: Pure functions over plan slices; callers fetch plans from a PlanRepository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::StoredPlan;
use crate::intelligence::plan_generator::round_non_negative;
use chrono::NaiveDate;
use nutriplan_core::models::NutritionGoal;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Summary of a set of stored plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanStatistics {
    /// Distinct profile names
    pub total_users: usize,
    /// Number of plans
    pub total_plans: usize,
    /// Mean daily calories, rounded (0 without plans)
    pub average_calories: u32,
    /// Plans created on `today`
    pub plans_today: usize,
    /// Most frequent goal; ties go to the goal seen first
    pub most_common_goal: Option<NutritionGoal>,
}

impl PlanStatistics {
    /// Compute statistics, counting plans created on `today` (UTC)
    #[must_use]
    pub fn from_plans(plans: &[StoredPlan], today: NaiveDate) -> Self {
        let total_users = plans
            .iter()
            .map(|stored| stored.profile.name.as_str())
            .collect::<HashSet<_>>()
            .len();

        let average_calories = if plans.is_empty() {
            0
        } else {
            let total: f64 = plans
                .iter()
                .map(|stored| f64::from(stored.plan.daily_calories))
                .sum();
            round_non_negative(total / plans.len() as f64)
        };

        let plans_today = plans
            .iter()
            .filter(|stored| stored.created_at.date_naive() == today)
            .count();

        Self {
            total_users,
            total_plans: plans.len(),
            average_calories,
            plans_today,
            most_common_goal: most_common_goal(plans),
        }
    }
}

fn most_common_goal(plans: &[StoredPlan]) -> Option<NutritionGoal> {
    let mut counts: HashMap<NutritionGoal, usize> = HashMap::new();
    let mut first_seen: Vec<NutritionGoal> = Vec::new();

    for stored in plans {
        let count = counts.entry(stored.profile.goal).or_insert(0);
        if *count == 0 {
            first_seen.push(stored.profile.goal);
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .fold(None, |best: Option<(NutritionGoal, usize)>, goal| {
            let count = counts.get(&goal).copied().unwrap_or(0);
            match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((goal, count)),
            }
        })
        .map(|(goal, _)| goal)
}

/// Plans matching a case-insensitive search over name, goal and condition,
/// optionally restricted to one goal
///
/// An empty search matches everything.
#[must_use]
pub fn filter_plans<'a>(
    plans: &'a [StoredPlan],
    search: &str,
    goal: Option<NutritionGoal>,
) -> Vec<&'a StoredPlan> {
    let needle = search.trim().to_lowercase();

    plans
        .iter()
        .filter(|stored| {
            needle.is_empty()
                || stored.profile.name.to_lowercase().contains(&needle)
                || stored.profile.goal.as_str().contains(&needle)
                || stored.profile.health_condition.as_str().contains(&needle)
        })
        .filter(|stored| goal.is_none() || goal == Some(stored.profile.goal))
        .collect()
}
