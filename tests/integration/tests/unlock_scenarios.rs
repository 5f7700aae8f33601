//! Unlock schedule scenarios across the public API

use model_tokenomics::*;

fn series(allocations: &[TokenAllocation], total_supply: f64, horizon: u32) -> Vec<MonthlyUnlock> {
    compute_unlock_series(allocations, total_supply, horizon).unwrap()
}

#[test]
fn test_linear_from_zero() {
    let allocations = vec![TokenAllocation::new("Team", 20.0, VestingSchedule::linear(0, 10))];
    let s = series(&allocations, 1000.0, 24);

    assert_eq!(s[4].month, 5);
    assert_eq!(s[4].get("Team"), Some(100.0));
    for point in &s[9..] {
        assert_eq!(point.get("Team"), Some(200.0));
    }
}

#[test]
fn test_cliff_unlock() {
    let allocations = vec![TokenAllocation::new("Advisors", 25.0, VestingSchedule::cliff(3))];
    let s = series(&allocations, 1000.0, 24);

    assert_eq!(s[1].get("Advisors"), Some(0.0));
    for point in &s[2..] {
        assert_eq!(point.get("Advisors"), Some(250.0));
    }
}

#[test]
fn test_full_allocation_reaches_supply() {
    let allocations = vec![
        TokenAllocation::new("Team", 40.0, VestingSchedule::linear(0, 12)),
        TokenAllocation::new("Community", 60.0, VestingSchedule::linear(0, 12)),
    ];
    let s = series(&allocations, 1_000_000.0, 24);

    assert_eq!(s[11].total, 1_000_000.0);
    assert_eq!(s[23].total, 1_000_000.0);
}

#[test]
fn test_degenerate_duration_behaves_like_cliff() {
    let linear = TokenAllocation::new("A", 10.0, VestingSchedule::linear(6, 4));
    let step = TokenAllocation::new("A", 10.0, VestingSchedule::cliff(6));

    for month in 1..=24 {
        assert_eq!(
            unlocked_at(&linear, 5_000.0, month),
            unlocked_at(&step, 5_000.0, month),
            "month {}",
            month
        );
    }
    assert_eq!(unlocked_at(&linear, 5_000.0, 5), 0.0);
    assert_eq!(unlocked_at(&linear, 5_000.0, 6), 500.0);
}

#[test]
fn test_zero_cliff_unlocks_in_first_month() {
    let allocation = TokenAllocation::new("Ecosystem", 50.0, VestingSchedule::linear(0, 12));
    let first = unlocked_at(&allocation, 1_200.0, 1);
    assert!((first - 600.0 / 12.0).abs() < 1e-9);
}

#[test]
fn test_unimplemented_types_follow_linear() {
    for vesting_type in [VestingType::Exponential, VestingType::Custom] {
        let schedule = VestingSchedule { vesting_type, ..VestingSchedule::linear(2, 10) };
        let odd = TokenAllocation::new("X", 30.0, schedule);
        let linear = TokenAllocation::new("X", 30.0, VestingSchedule::linear(2, 10));
        for month in 1..=12 {
            assert_eq!(unlocked_at(&odd, 100.0, month), unlocked_at(&linear, 100.0, month));
        }
    }
}

#[test]
fn test_template_schedule_and_table_agree() {
    let data = template("defi").unwrap();
    let s = series(&data.allocations, data.total_supply, TABLE_HORIZON_MONTHS);
    let table = UnlockTable::build(&data.allocations, data.total_supply, TABLE_HORIZON_MONTHS).unwrap();

    assert_eq!(table.months, (1..=12).collect::<Vec<u32>>());
    for (i, point) in s.iter().enumerate() {
        assert!((table.totals[i] - point.total).abs() < 1e-6);
    }

    let increments = monthly_increments(&s);
    let summed: f64 = increments.iter().map(|m| m.total).sum();
    assert!((summed - s[11].total).abs() < 1e-6);
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let team = TokenAllocation::new("Team", 20.0, VestingSchedule::linear(0, 12));

    assert_eq!(
        compute_unlock_series(&[team.clone()], 1000.0, 0),
        Err(ValidationError::InvalidHorizon(0))
    );
    assert_eq!(
        compute_unlock_series(&[team.clone(), team.clone()], 1000.0, 12),
        Err(ValidationError::DuplicateCategory("Team".to_string()))
    );
    assert!(matches!(
        compute_unlock_series(&[team], -1.0, 12),
        Err(ValidationError::NegativeSupply(_))
    ));
}

#[test]
fn test_series_json_shape() {
    let allocations = vec![TokenAllocation::new("Team", 20.0, VestingSchedule::linear(0, 10))];
    let s = series(&allocations, 1000.0, 2);
    let json = serde_json::to_value(&s).unwrap();

    assert_eq!(json[0]["month"], 1);
    assert_eq!(json[0]["categories"][0]["category"], "Team");
    assert_eq!(json[1]["total"], 40.0);
}
