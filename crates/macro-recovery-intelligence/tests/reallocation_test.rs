// ABOUTME: Tests for same-day reallocation across remaining meal slots
// ABOUTME: Covers weighted whole-kcal splits, empty slot sets, clamping, and emergency guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macro_recovery_core::models::{MacroRatio, MacroSnapshot, MacroTotals, MealSlot, MealType};
use macro_recovery_intelligence::config::{MealWeights, ReallocationConfig};
use macro_recovery_intelligence::reallocation::emergency_guidance;
use macro_recovery_intelligence::{plan_remaining_day, reallocate, remaining_slots};

fn snapshot(consumed: MacroTotals, target: MacroTotals) -> MacroSnapshot {
    MacroSnapshot::new(consumed, target).unwrap()
}

fn total_calories(allocations: &[macro_recovery_core::models::MacroAllocation]) -> f64 {
    allocations.iter().map(|a| a.calories).sum()
}

#[test]
fn test_lunch_and_dinner_split_remaining_budget() {
    let snap = snapshot(
        MacroTotals::new(1200.0, 60.0, 150.0, 40.0),
        MacroTotals::new(2000.0, 150.0, 250.0, 70.0),
    );
    let slots = remaining_slots(&[MealType::Breakfast, MealType::Snack]);

    let allocations = reallocate(&snap, &slots, &ReallocationConfig::default());

    assert_eq!(allocations.len(), 2);
    assert_eq!(allocations[0].meal_type, MealType::Lunch);
    assert_eq!(allocations[1].meal_type, MealType::Dinner);
    assert!((total_calories(&allocations) - 800.0).abs() < f64::EPSILON);
    assert!((allocations[0].calories - 400.0).abs() < f64::EPSILON);
    assert!((allocations[0].protein_g - 45.0).abs() < f64::EPSILON);
    assert!((allocations[0].carbs_g - 50.0).abs() < f64::EPSILON);
    assert!((allocations[0].fat_g - 15.0).abs() < f64::EPSILON);
}

#[test]
fn test_no_remaining_slots_yields_empty() {
    let snap = snapshot(
        MacroTotals::calories_only(1000.0),
        MacroTotals::calories_only(2000.0),
    );
    let slots = remaining_slots(&MealType::ALL);

    assert!(reallocate(&snap, &slots, &ReallocationConfig::default()).is_empty());
}

#[test]
fn test_over_target_allocates_zero() {
    let snap = snapshot(
        MacroTotals::new(2500.0, 200.0, 300.0, 90.0),
        MacroTotals::new(2000.0, 150.0, 250.0, 70.0),
    );
    let slots = remaining_slots(&[MealType::Breakfast]);

    let allocations = reallocate(&snap, &slots, &ReallocationConfig::default());

    assert_eq!(allocations.len(), 3);
    for allocation in &allocations {
        assert!(allocation.calories.abs() < f64::EPSILON);
        assert!(allocation.protein_g.abs() < f64::EPSILON);
        assert!(allocation.carbs_g >= 0.0);
        assert!(allocation.fat_g >= 0.0);
    }
}

#[test]
fn test_odd_budget_sums_exactly() {
    let snap = snapshot(
        MacroTotals::calories_only(999.0),
        MacroTotals::calories_only(2000.0),
    );
    let slots = remaining_slots(&[MealType::Breakfast]);

    let allocations = reallocate(&snap, &slots, &ReallocationConfig::default());

    assert!((total_calories(&allocations) - 1001.0).abs() < f64::EPSILON);
    for allocation in &allocations {
        assert!((allocation.calories - allocation.calories.round()).abs() < f64::EPSILON);
    }
}

#[test]
fn test_standard_weights_favor_main_meals() {
    let config = ReallocationConfig {
        meal_weights: MealWeights::standard(),
        ..ReallocationConfig::default()
    };
    let snap = snapshot(
        MacroTotals::calories_only(0.0),
        MacroTotals::calories_only(2000.0),
    );
    let slots = remaining_slots(&[]);

    let allocations = reallocate(&snap, &slots, &config);
    let calories: Vec<f64> = allocations.iter().map(|a| a.calories).collect();

    assert_eq!(calories, vec![500.0, 700.0, 700.0, 100.0]);
}

#[test]
fn test_slot_order_is_preserved() {
    let snap = snapshot(
        MacroTotals::calories_only(0.0),
        MacroTotals::calories_only(900.0),
    );
    let slots = vec![
        MealSlot {
            meal_type: MealType::Dinner,
            remaining: true,
        },
        MealSlot {
            meal_type: MealType::Breakfast,
            remaining: false,
        },
        MealSlot {
            meal_type: MealType::Lunch,
            remaining: true,
        },
    ];

    let allocations = reallocate(&snap, &slots, &ReallocationConfig::default());

    assert_eq!(allocations[0].meal_type, MealType::Dinner);
    assert_eq!(allocations[1].meal_type, MealType::Lunch);
}

#[test]
fn test_emergency_guidance_below_threshold() {
    let snap = snapshot(
        MacroTotals::new(1700.0, 80.0, 200.0, 60.0),
        MacroTotals::new(2000.0, 150.0, 250.0, 70.0),
    );

    let guidance = emergency_guidance(&snap, &ReallocationConfig::default()).unwrap();

    assert!((guidance.remaining_calories - 300.0).abs() < f64::EPSILON);
    assert!((guidance.target_ratio.protein_min - 50.0).abs() < f64::EPSILON);
    assert!((guidance.target_ratio.protein_max - 60.0).abs() < f64::EPSILON);

    // Remaining grams: 70 g protein, 50 g carbs, 10 g fat
    let current = guidance.current_ratio.unwrap();
    let expected_protein = 280.0 / (280.0 + 200.0 + 90.0) * 100.0;
    assert!((current.protein_percent - expected_protein).abs() < 1e-9);

    // Suggested grams spend roughly the remaining calories
    let suggested_kcal = guidance.suggested.protein_g * 4.0
        + guidance.suggested.carbs_g * 4.0
        + guidance.suggested.fat_g * 9.0;
    assert!((suggested_kcal - 300.0).abs() < 2.0);
    assert!(guidance.suggested.protein_g > guidance.suggested.carbs_g);

    // Suggestion lands inside the high-protein bands, current intake does not
    let suggested_ratio = MacroRatio::from_grams(
        guidance.suggested.protein_g,
        guidance.suggested.carbs_g,
        guidance.suggested.fat_g,
    )
    .unwrap();
    assert!(guidance.target_ratio.contains(&suggested_ratio));
    assert!(!guidance.target_ratio.contains(&current));
}

#[test]
fn test_no_emergency_with_ample_budget() {
    let snap = snapshot(
        MacroTotals::calories_only(1000.0),
        MacroTotals::calories_only(2000.0),
    );
    assert!(emergency_guidance(&snap, &ReallocationConfig::default()).is_none());
}

#[test]
fn test_no_emergency_without_target() {
    let snap = snapshot(
        MacroTotals::calories_only(1000.0),
        MacroTotals::calories_only(0.0),
    );
    assert!(emergency_guidance(&snap, &ReallocationConfig::default()).is_none());
}

#[test]
fn test_plan_remaining_day_combines_allocation_and_guidance() {
    let snap = snapshot(
        MacroTotals::new(1650.0, 100.0, 200.0, 50.0),
        MacroTotals::new(2000.0, 150.0, 250.0, 70.0),
    );
    let slots = remaining_slots(&[MealType::Breakfast, MealType::Lunch]);

    let day = plan_remaining_day(&snap, &slots, &ReallocationConfig::default());

    assert_eq!(day.allocations.len(), 2);
    assert!((total_calories(&day.allocations) - 350.0).abs() < f64::EPSILON);
    assert!(day.emergency.is_some());
}
