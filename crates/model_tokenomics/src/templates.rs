//! Starter tokenomics configurations

use crate::state::*;

pub const TEMPLATE_NAMES: [&str; 2] = ["dao", "defi"];

/// Template by name, if one exists
pub fn template(name: &str) -> Option<TokenomicsData> {
    match name.to_ascii_lowercase().as_str() {
        "dao" => Some(dao()),
        "defi" => Some(defi()),
        _ => None,
    }
}

fn dao() -> TokenomicsData {
    TokenomicsData {
        total_supply: 1_000_000_000.0,
        allocations: vec![
            TokenAllocation::new("Community Treasury", 40.0, VestingSchedule::linear(12, 48)),
            TokenAllocation::new("Team", 15.0, VestingSchedule::linear(12, 36)),
            TokenAllocation::new("Early Contributors", 10.0, VestingSchedule::linear(6, 24)),
            TokenAllocation::new("Public Sale", 25.0, VestingSchedule::cliff(0)),
            TokenAllocation::new("Ecosystem Growth", 10.0, VestingSchedule::linear(3, 36)),
        ],
        market_condition: MarketScenario::Neutral,
    }
}

fn defi() -> TokenomicsData {
    TokenomicsData {
        total_supply: 2_000_000_000.0,
        allocations: vec![
            TokenAllocation::new("Protocol Treasury", 35.0, VestingSchedule::linear(3, 48)),
            TokenAllocation::new("Team", 20.0, VestingSchedule::linear(12, 36)),
            TokenAllocation::new("Liquidity Mining", 15.0, VestingSchedule::linear(0, 24)),
            TokenAllocation::new("Public Sale", 20.0, VestingSchedule::cliff(0)),
            TokenAllocation::new("Marketing", 10.0, VestingSchedule::linear(1, 24)),
        ],
        market_condition: MarketScenario::Neutral,
    }
}
