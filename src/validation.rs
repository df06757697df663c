// ABOUTME: Validation of raw profile form input into a UserProfile
// ABOUTME: Collects every failing field into one InvalidInput error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::AppLogger;
use nutriplan_core::constants::limits::{
    MAX_AGE, MAX_WEIGHT_KG, MIN_AGE, MIN_NAME_LENGTH, MIN_WEIGHT_KG,
};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{HealthCondition, NutritionGoal, UserProfile};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// One failing form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name
    pub field: &'static str,
    /// Message shown to the user
    pub message: &'static str,
}

/// Raw profile form values, as submitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: Option<i64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Health condition wire name
    pub health_condition: Option<String>,
    /// Goal wire name
    pub goal: Option<String>,
}

fn is_blank(value: Option<&String>) -> bool {
    !value.is_some_and(|v| !v.trim().is_empty())
}

impl ProfileForm {
    /// Check every field and report all failures together
    #[must_use]
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < MIN_NAME_LENGTH {
            errors.push(FieldError {
                field: "name",
                message: "Please enter a valid name (at least 2 characters)",
            });
        }

        let age_ok = self
            .age
            .is_some_and(|age| (i64::from(MIN_AGE)..=i64::from(MAX_AGE)).contains(&age));
        if !age_ok {
            errors.push(FieldError {
                field: "age",
                message: "Please enter a valid age (1-120 years)",
            });
        }

        let weight_ok = self
            .weight_kg
            .is_some_and(|weight| (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight));
        if !weight_ok {
            errors.push(FieldError {
                field: "weight_kg",
                message: "Please enter a valid weight (1-500 kg)",
            });
        }

        if is_blank(self.health_condition.as_ref()) {
            errors.push(FieldError {
                field: "health_condition",
                message: "Please select a health condition",
            });
        }

        if is_blank(self.goal.as_ref()) {
            errors.push(FieldError {
                field: "goal",
                message: "Please select your goal",
            });
        }

        errors
    }

    /// Validate the form into a profile
    ///
    /// Unusable heights are dropped so formulas fall back to the default.
    /// Unknown condition and goal names normalize to `none` and `healthy-diet`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` with `details.errors` listing every failing field
    pub fn validate(&self) -> AppResult<UserProfile> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            let summary = errors
                .iter()
                .map(|error| error.message)
                .collect::<Vec<_>>()
                .join("; ");
            AppLogger::log_validation_failure(errors.len(), &summary);
            return Err(AppError::invalid_input(format!(
                "Please fix the following errors: {summary}"
            ))
            .with_details(json!({ "errors": errors })));
        }

        let (Some(age), Some(weight_kg)) = (self.age, self.weight_kg) else {
            return Err(AppError::internal("validated form lost age or weight"));
        };
        let age = u32::try_from(age)
            .map_err(|e| AppError::internal("validated age does not fit u32").with_source(e))?;

        Ok(UserProfile {
            name: self.name.trim().to_owned(),
            age,
            weight_kg,
            height_cm: self.height_cm.filter(|h| h.is_finite() && *h > 0.0),
            health_condition: HealthCondition::from_str_lossy(
                self.health_condition.as_deref().unwrap_or_default(),
            ),
            goal: NutritionGoal::from_str_lossy(self.goal.as_deref().unwrap_or_default()),
        })
    }
}
