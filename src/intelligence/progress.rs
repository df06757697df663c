// ABOUTME: Progress tracking math for daily water intake and a bounded weight log
// ABOUTME: The weight log keeps one entry per date and drops the oldest past capacity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use nutriplan_core::constants::limits::{MAX_WEIGHT_KG, MIN_WEIGHT_KG, WEIGHT_LOG_CAPACITY};
use nutriplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Glasses of water drunk today against the daily goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterProgress {
    /// Glasses consumed
    pub consumed: u32,
    /// Goal in glasses
    pub goal: u32,
}

impl WaterProgress {
    /// Start a day with nothing consumed
    #[must_use]
    pub const fn new(goal: u32) -> Self {
        Self { consumed: 0, goal }
    }

    /// Record the number of glasses consumed so far today
    pub fn set_consumed(&mut self, glasses: u32) {
        self.consumed = glasses;
    }

    /// Percent of goal, capped at 100
    ///
    /// A zero goal reads as complete once anything is consumed.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.goal == 0 {
            return if self.consumed > 0 { 100.0 } else { 0.0 };
        }
        (f64::from(self.consumed) / f64::from(self.goal) * 100.0).min(100.0)
    }

    /// Whether the goal has been reached
    #[must_use]
    pub const fn goal_met(&self) -> bool {
        self.consumed >= self.goal
    }
}

/// One logged weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Day of the measurement
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight_kg: f64,
}

/// Bounded weight history, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightLog {
    entries: VecDeque<WeightEntry>,
}

impl WeightLog {
    /// Empty log
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Log a weight for a date
    ///
    /// Replaces the entry for the same date if one exists; otherwise appends
    /// and drops the oldest entry beyond capacity.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the weight is outside 1-500 kg
    pub fn log(&mut self, date: NaiveDate, weight_kg: f64) -> AppResult<()> {
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
            return Err(AppError::out_of_range(format!(
                "Weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg"
            )));
        }

        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.date == date) {
            entry.weight_kg = weight_kg;
            return Ok(());
        }

        self.entries.push_back(WeightEntry { date, weight_kg });
        while self.entries.len() > WEIGHT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        Ok(())
    }

    /// Entries oldest first
    pub fn entries(&self) -> impl Iterator<Item = &WeightEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&WeightEntry> {
        self.entries.back()
    }

    /// Change from the first to the last entry (kg)
    #[must_use]
    pub fn change_kg(&self) -> Option<f64> {
        match (self.entries.front(), self.entries.back()) {
            (Some(first), Some(last)) if self.entries.len() > 1 => {
                Some(last.weight_kg - first.weight_kg)
            }
            _ => None,
        }
    }
}
