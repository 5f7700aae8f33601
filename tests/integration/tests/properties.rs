//! Property tests for the unlock scheduler and valuation engine

use model_tokenomics::*;
use proptest::prelude::*;

fn valuation_input(
    total_supply: f64,
    token_price: f64,
    tge: f64,
    dex_liquidity: f64,
    market_condition: MarketCondition,
) -> ValuationInput {
    ValuationInput {
        fundraising_amount: 250_000.0,
        token_price,
        total_supply,
        tge_circulating_supply: tge,
        dex_liquidity,
        market_condition,
        ..ValuationInput::default()
    }
}

fn any_condition() -> impl Strategy<Value = MarketCondition> {
    prop_oneof![
        Just(MarketCondition::Bull),
        Just(MarketCondition::Bear),
        Just(MarketCondition::Neutral),
    ]
}

proptest! {
    #[test]
    fn prop_linear_is_monotonic_and_completes(
        percentage in 0.0f64..=100.0,
        total_supply in 1.0f64..1e12,
        cliff in 0u32..24,
        extra in 1u32..36,
    ) {
        let allocation = TokenAllocation::new("A", percentage, VestingSchedule::linear(cliff, cliff + extra));
        let tokens = allocation_tokens(&allocation, total_supply);

        let mut previous = 0.0;
        for month in 1..=(2 * cliff + extra + 2) {
            let unlocked = unlocked_at(&allocation, total_supply, month);
            prop_assert!(unlocked >= previous);
            prop_assert!(unlocked <= tokens);
            if month >= 2 * cliff + extra {
                prop_assert_eq!(unlocked, tokens);
            }
            previous = unlocked;
        }
    }

    #[test]
    fn prop_cliff_is_all_or_nothing(
        percentage in 0.0f64..=100.0,
        total_supply in 0.0f64..1e12,
        cliff in 0u32..48,
        month in 1u32..60,
    ) {
        let allocation = TokenAllocation::new("A", percentage, VestingSchedule::cliff(cliff));
        let unlocked = unlocked_at(&allocation, total_supply, month);
        if month < cliff {
            prop_assert_eq!(unlocked, 0.0);
        } else {
            prop_assert_eq!(unlocked, allocation_tokens(&allocation, total_supply));
        }
    }

    #[test]
    fn prop_degenerate_duration_is_a_cliff(
        cliff in 1u32..36,
        shortfall in 0u32..36,
        month in 1u32..48,
    ) {
        let duration = cliff.saturating_sub(shortfall);
        let linear = TokenAllocation::new("A", 10.0, VestingSchedule::linear(cliff, duration));
        let step = TokenAllocation::new("A", 10.0, VestingSchedule::cliff(cliff));
        prop_assert_eq!(unlocked_at(&linear, 1e6, month), unlocked_at(&step, 1e6, month));
    }

    #[test]
    fn prop_totals_conserve_allocations(
        schedules in prop::collection::vec((0.0f64..=25.0, 0u32..12, 0u32..24, any::<bool>()), 1..5),
        total_supply in 1.0f64..1e9,
    ) {
        let allocations: Vec<TokenAllocation> = schedules
            .iter()
            .enumerate()
            .map(|(i, (percentage, cliff, duration, is_cliff))| {
                let vesting = if *is_cliff {
                    VestingSchedule::cliff(*cliff)
                } else {
                    VestingSchedule::linear(*cliff, *duration)
                };
                TokenAllocation::new(format!("Category {}", i), *percentage, vesting)
            })
            .collect();

        let horizon = allocations
            .iter()
            .map(|a| a.vesting.cliff + a.vesting.duration)
            .max()
            .unwrap_or(1)
            .max(1);
        let series = compute_unlock_series(&allocations, total_supply, horizon).unwrap();

        for point in &series {
            let summed: f64 = point.categories.iter().map(|c| c.unlocked).sum();
            prop_assert!((point.total - summed).abs() <= 1e-9 * total_supply);
        }

        let last = &series[series.len() - 1];
        let expected = total_supply * allocation_total(&allocations) / 100.0;
        prop_assert!((last.total - expected).abs() <= 1e-9 * total_supply);
    }

    #[test]
    fn prop_ranges_are_ordered(
        total_supply in 1.0f64..1e12,
        token_price in 1e-6f64..100.0,
        tge in 0.0f64..=100.0,
        dex_liquidity in 0.0f64..1e9,
        condition in any_condition(),
    ) {
        let out = generate_valuation(&valuation_input(total_supply, token_price, tge, dex_liquidity, condition)).unwrap();
        prop_assert!(out.fdv_range.min <= out.fdv_range.max);
        prop_assert!(out.initial_market_cap_range.min <= out.initial_market_cap_range.max);
    }

    #[test]
    fn prop_multiplier_moves_fdv_only(
        total_supply in 1.0f64..1e12,
        token_price in 1e-6f64..100.0,
        tge in 0.0f64..=100.0,
    ) {
        let run = |condition| {
            generate_valuation(&valuation_input(total_supply, token_price, tge, 1_000.0, condition)).unwrap()
        };
        let bull = run(MarketCondition::Bull);
        let bear = run(MarketCondition::Bear);
        let neutral = run(MarketCondition::Neutral);

        prop_assert!((bull.fdv_range.min / bear.fdv_range.min - 1.5).abs() < 1e-12);
        prop_assert!((bull.fdv_range.max / bear.fdv_range.max - 1.5).abs() < 1e-12);
        prop_assert_eq!(bull.initial_market_cap_range, neutral.initial_market_cap_range);
        prop_assert_eq!(bear.initial_market_cap_range, neutral.initial_market_cap_range);
    }

    #[test]
    fn prop_analyze_all_is_concatenation(
        tge in 0.0f64..=100.0,
        dex_liquidity in 0.0f64..1e7,
        condition in any_condition(),
    ) {
        let input = valuation_input(1e7, 0.5, tge, dex_liquidity, condition);

        let mut expected = analyze_token_allocation(&input);
        expected.extend(analyze_supply_dynamics(&input));
        expected.extend(analyze_market(&input));
        expected.extend(analyze_stress_test(&input));

        prop_assert_eq!(analyze_all(&input).unwrap(), expected);
    }
}
