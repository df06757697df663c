// ABOUTME: Integration tests for water intake progress and the bounded weight log
// ABOUTME: Covers percent capping, same-day replacement, capacity, and range errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate};
use nutriplan::errors::ErrorCode;
use nutriplan::intelligence::{WaterProgress, WeightLog};

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(offset)
}

#[test]
fn test_water_progress_caps_at_goal() {
    let mut water = WaterProgress::new(10);
    assert!(water.percent().abs() < f64::EPSILON);
    assert!(!water.goal_met());

    water.set_consumed(4);
    assert!((water.percent() - 40.0).abs() < 1e-9);

    water.set_consumed(12);
    assert!((water.percent() - 100.0).abs() < 1e-9);
    assert!(water.goal_met());
}

#[test]
fn test_water_progress_zero_goal() {
    let mut water = WaterProgress::new(0);
    assert!(water.percent().abs() < f64::EPSILON);
    water.set_consumed(1);
    assert!((water.percent() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_weight_log_replaces_same_day() {
    let mut log = WeightLog::new();
    log.log(day(0), 80.0).unwrap();
    log.log(day(1), 79.5).unwrap();
    log.log(day(1), 79.0).unwrap();

    assert_eq!(log.len(), 2);
    assert!((log.latest().unwrap().weight_kg - 79.0).abs() < f64::EPSILON);
    assert!((log.change_kg().unwrap() + 1.0).abs() < 1e-9);
}

#[test]
fn test_weight_log_drops_oldest_past_capacity() {
    let mut log = WeightLog::new();
    for offset in 0..35 {
        log.log(day(offset), 70.0 + offset as f64 * 0.1).unwrap();
    }

    assert_eq!(log.len(), 30);
    assert_eq!(log.entries().next().unwrap().date, day(5));
    assert_eq!(log.latest().unwrap().date, day(34));
}

#[test]
fn test_weight_log_rejects_out_of_range() {
    let mut log = WeightLog::new();
    let error = log.log(day(0), 0.5).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(log.log(day(0), 501.0).is_err());
    assert!(log.is_empty());
    assert!(log.change_kg().is_none());
}
