// ABOUTME: Tests for calorie exceedance classification
// ABOUTME: Covers band assignment, unset targets, and configurable thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macro_recovery_core::models::{ExceedanceLevel, MacroSnapshot, MacroTotals};
use macro_recovery_intelligence::classify;
use macro_recovery_intelligence::config::ExceedanceThresholds;

fn snapshot(consumed: f64, target: f64) -> MacroSnapshot {
    MacroSnapshot::new(
        MacroTotals::calories_only(consumed),
        MacroTotals::calories_only(target),
    )
    .unwrap()
}

#[test]
fn test_moderate_exceedance_at_thirty_percent() {
    let descriptor = classify(&snapshot(2600.0, 2000.0), &ExceedanceThresholds::default());

    assert!(descriptor.has_exceedance);
    assert_eq!(descriptor.level, ExceedanceLevel::Moderate);
    assert!((descriptor.excess_calories - 600.0).abs() < f64::EPSILON);
    assert!((descriptor.excess_percentage - 30.0).abs() < 1e-9);
}

#[test]
fn test_under_target_is_none() {
    let descriptor = classify(&snapshot(1800.0, 2000.0), &ExceedanceThresholds::default());

    assert!(!descriptor.has_exceedance);
    assert_eq!(descriptor.level, ExceedanceLevel::None);
    assert!(descriptor.excess_calories.abs() < f64::EPSILON);
    assert!(descriptor.excess_percentage.abs() < f64::EPSILON);
}

#[test]
fn test_exactly_on_target_is_none() {
    let descriptor = classify(&snapshot(2000.0, 2000.0), &ExceedanceThresholds::default());
    assert_eq!(descriptor.level, ExceedanceLevel::None);
    assert!(!descriptor.has_exceedance);
}

#[test]
fn test_minor_and_large_bands() {
    let thresholds = ExceedanceThresholds::default();

    let minor = classify(&snapshot(2100.0, 2000.0), &thresholds);
    assert_eq!(minor.level, ExceedanceLevel::Minor);

    let large = classify(&snapshot(3000.0, 2000.0), &thresholds);
    assert_eq!(large.level, ExceedanceLevel::Large);
    assert!((large.excess_percentage - 50.0).abs() < 1e-9);
}

#[test]
fn test_unset_target_never_exceeds() {
    let descriptor = classify(&snapshot(1500.0, 0.0), &ExceedanceThresholds::default());

    assert!(!descriptor.has_exceedance);
    assert_eq!(descriptor.level, ExceedanceLevel::None);
    assert!(descriptor.excess_calories.abs() < f64::EPSILON);
    assert!(descriptor.excess_percentage.abs() < f64::EPSILON);
    assert!(descriptor.excess_percentage.is_finite());
}

#[test]
fn test_custom_thresholds_shift_bands() {
    let thresholds = ExceedanceThresholds {
        moderate_percent: 10.0,
        large_percent: 20.0,
    };
    let descriptor = classify(&snapshot(2300.0, 2000.0), &thresholds);
    assert_eq!(descriptor.level, ExceedanceLevel::Large);
}

#[test]
fn test_classification_is_deterministic() {
    let thresholds = ExceedanceThresholds::default();
    let snap = snapshot(2450.0, 2000.0);
    assert_eq!(classify(&snap, &thresholds), classify(&snap, &thresholds));
}

#[test]
fn test_descriptor_serializes_camel_case() {
    let descriptor = classify(&snapshot(2600.0, 2000.0), &ExceedanceThresholds::default());
    let json = serde_json::to_value(descriptor).unwrap();

    assert_eq!(json["hasExceedance"], true);
    assert_eq!(json["level"], "moderate");
    assert!(json.get("excessCalories").is_some());
    assert!(json.get("excessPercentage").is_some());
}
