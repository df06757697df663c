// ABOUTME: Static guidance tables keyed by nutrition goal and health condition
// ABOUTME: Every enum value has exactly one entry, resolved by exhaustive match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::{ConditionGuidance, GoalGuidance, HealthCondition, NutritionGoal};

struct GoalEntry {
    daily_calories: &'static str,
    focus: &'static str,
    tips: &'static [&'static str],
}

struct ConditionEntry {
    focus: &'static str,
    avoid: &'static [&'static str],
    include: &'static [&'static str],
}

const fn goal_entry(goal: NutritionGoal) -> GoalEntry {
    match goal {
        NutritionGoal::WeightLoss => GoalEntry {
            daily_calories: "1200-1500",
            focus: "Calorie deficit, high protein, low processed foods",
            tips: &[
                "Eat protein with every meal",
                "Stay hydrated",
                "Include fiber-rich foods",
                "Limit sugar intake",
            ],
        },
        NutritionGoal::WeightGain => GoalEntry {
            daily_calories: "2500-3000",
            focus: "Calorie surplus, balanced macros, nutrient-dense foods",
            tips: &[
                "Eat frequent meals",
                "Include healthy fats",
                "Post-workout nutrition",
                "Stay consistent",
            ],
        },
        NutritionGoal::Fitness => GoalEntry {
            daily_calories: "2000-2500",
            focus: "Optimal protein intake, complex carbs, recovery nutrition",
            tips: &[
                "Pre and post-workout meals",
                "Adequate protein",
                "Stay hydrated",
                "Balance macros",
            ],
        },
        NutritionGoal::HealthyDiet => GoalEntry {
            daily_calories: "1800-2200",
            focus: "Balanced nutrition, whole foods, variety",
            tips: &[
                "Eat colorful vegetables",
                "Include whole grains",
                "Moderate portions",
                "Regular meal times",
            ],
        },
    }
}

const fn condition_entry(condition: HealthCondition) -> ConditionEntry {
    match condition {
        HealthCondition::Diabetes => ConditionEntry {
            focus: "Low glycemic index foods, controlled carbs, regular meals",
            avoid: &["High sugar foods", "Refined carbs", "Sugary drinks"],
            include: &[
                "Whole grains",
                "Lean proteins",
                "Non-starchy vegetables",
                "Healthy fats",
            ],
        },
        HealthCondition::HighBp => ConditionEntry {
            focus: "Low sodium, potassium-rich foods, heart-healthy",
            avoid: &["High sodium foods", "Processed foods", "Excessive alcohol"],
            include: &[
                "Leafy greens",
                "Berries",
                "Oatmeal",
                "Fatty fish",
                "Bananas",
            ],
        },
        HealthCondition::HeartIssue => ConditionEntry {
            focus: "Heart-healthy fats, fiber, antioxidants",
            avoid: &["Trans fats", "Saturated fats", "High sodium"],
            include: &[
                "Omega-3 rich foods",
                "Whole grains",
                "Fruits and vegetables",
                "Nuts and seeds",
            ],
        },
        HealthCondition::None => ConditionEntry {
            focus: "Balanced nutrition, variety, moderation",
            avoid: &["Excessive processed foods"],
            include: &["All food groups in moderation"],
        },
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_owned()).collect()
}

/// Guidance for a goal
#[must_use]
pub fn goal_guidance(goal: NutritionGoal) -> GoalGuidance {
    let entry = goal_entry(goal);
    GoalGuidance {
        daily_calories: entry.daily_calories.to_owned(),
        focus: entry.focus.to_owned(),
        tips: owned(entry.tips),
    }
}

/// Guidance for a health condition
#[must_use]
pub fn condition_guidance(condition: HealthCondition) -> ConditionGuidance {
    let entry = condition_entry(condition);
    ConditionGuidance {
        focus: entry.focus.to_owned(),
        avoid: owned(entry.avoid),
        include: owned(entry.include),
    }
}

/// Focus line for a health condition without allocating the full guidance
#[must_use]
pub const fn condition_focus(condition: HealthCondition) -> &'static str {
    condition_entry(condition).focus
}

/// Tips for a goal without allocating the full guidance
#[must_use]
pub const fn goal_tips(goal: NutritionGoal) -> &'static [&'static str] {
    goal_entry(goal).tips
}
