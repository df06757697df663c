// ABOUTME: Integration tests for dashboard statistics and plan search
// ABOUTME: Builds stored plans with fixed timestamps to check counts and filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::named_profile;
use nutriplan::analytics::{filter_plans, PlanStatistics};
use nutriplan::database::StoredPlan;
use nutriplan::models::{HealthCondition, NutritionGoal, UserProfile};
use nutriplan::planner::NutritionPlanner;
use uuid::Uuid;

fn stored(profile: UserProfile, calories: u32, day: u32) -> StoredPlan {
    let mut plan = NutritionPlanner::default().plan(&profile).plan;
    plan.daily_calories = calories;
    StoredPlan {
        id: Uuid::new_v4(),
        owner: profile.name.clone(),
        profile,
        plan,
        created_at: Utc.with_ymd_and_hms(2025, 3, day, 9, 30, 0).unwrap(),
    }
}

fn sample_plans() -> Vec<StoredPlan> {
    let mut diabetic = named_profile("Cy", NutritionGoal::WeightLoss);
    diabetic.health_condition = HealthCondition::Diabetes;

    vec![
        stored(named_profile("Ana", NutritionGoal::Fitness), 2600, 1),
        stored(named_profile("Bo", NutritionGoal::WeightLoss), 1900, 2),
        stored(named_profile("Ana", NutritionGoal::Fitness), 2500, 2),
        stored(diabetic, 1801, 2),
    ]
}

#[test]
fn test_statistics() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    let stats = PlanStatistics::from_plans(&sample_plans(), today);

    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.total_plans, 4);
    // (2600 + 1900 + 2500 + 1801) / 4 = 2200.25
    assert_eq!(stats.average_calories, 2200);
    assert_eq!(stats.plans_today, 3);
    // Fitness and weight loss tie at two; fitness was seen first
    assert_eq!(stats.most_common_goal, Some(NutritionGoal::Fitness));
}

#[test]
fn test_statistics_without_plans() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    let stats = PlanStatistics::from_plans(&[], today);
    assert_eq!(stats.total_plans, 0);
    assert_eq!(stats.average_calories, 0);
    assert_eq!(stats.most_common_goal, None);
}

#[test]
fn test_filter_by_search_text() {
    let plans = sample_plans();

    assert_eq!(filter_plans(&plans, "", None).len(), 4);
    assert_eq!(filter_plans(&plans, "ana", None).len(), 2);
    assert_eq!(filter_plans(&plans, "DIABETES", None).len(), 1);
    assert_eq!(filter_plans(&plans, "weight-loss", None).len(), 2);
    assert!(filter_plans(&plans, "zumba", None).is_empty());
}

#[test]
fn test_filter_by_goal() {
    let plans = sample_plans();

    let loss = filter_plans(&plans, "", Some(NutritionGoal::WeightLoss));
    let names: Vec<&str> = loss.iter().map(|p| p.profile.name.as_str()).collect();
    assert_eq!(names, vec!["Bo", "Cy"]);

    assert!(filter_plans(&plans, "ana", Some(NutritionGoal::WeightLoss)).is_empty());
}
