//! Heuristic risk analyzers over fundraising parameters
//!
//! Four independent analyzers, each evaluating every rule it owns (no
//! short-circuit). `analyze_all` concatenates them in display order:
//! token allocation, supply dynamics, market, stress test.
//!
//! The analyzers expect a validated input. Ratios against the market
//! valuation go through `div_or_zero`, so an unvalidated zero valuation yields
//! zero ratios instead of NaN.

use std::collections::BTreeMap;

use crate::error::ModelResult;
use crate::math::*;
use crate::state::*;
use crate::valuation::{market_valuation, validate_input};

pub const MAX_TGE_INSIDER_PCT: f64 = 40.0;
pub const MIN_PUBLIC_ALLOCATION_PCT: f64 = 10.0;
pub const MAX_PRIVATE_SALE_PCT: f64 = 40.0;
pub const MIN_CIRCULATING_PCT: f64 = 50.0;
pub const MIN_LIQUIDITY_RATIO_PCT: f64 = 5.0;
pub const MIN_MCAP_LIQUIDITY_PCT: f64 = 10.0;
pub const MAX_TGE_UNLOCK_PCT: f64 = 10.0;
pub const MAX_BEAR_TGE_UNLOCK_PCT: f64 = 5.0;
pub const MIN_SHOCK_ABSORPTION_PCT: f64 = 2.0;

/// Share of DEX liquidity assumed lost in a liquidity shock
pub const LIQUIDITY_SHOCK_FACTOR: f64 = 0.5;

fn finding(
    risk_type: RiskType,
    category: RiskCategory,
    message: &str,
    suggestion: &str,
    current_value: f64,
    threshold: f64,
    metric: &str,
) -> RiskAnalysis {
    RiskAnalysis {
        risk_type,
        category,
        message: message.to_string(),
        suggestion: suggestion.to_string(),
        details: Some(RiskDetails {
            current_value,
            threshold,
            metric: metric.to_string(),
        }),
    }
}

/// Insider concentration, public share and private sale size
pub fn analyze_token_allocation(input: &ValuationInput) -> Vec<RiskAnalysis> {
    let mut risks = Vec::new();
    let tge = input.tge_circulating_supply;

    if tge > MAX_TGE_INSIDER_PCT {
        risks.push(finding(
            RiskType::Error,
            RiskCategory::TokenAllocation,
            "Excessive insider concentration",
            "Keep the supply unlocked for insiders at TGE at or below 40%",
            tge,
            MAX_TGE_INSIDER_PCT,
            "tge_circulating_supply_pct",
        ));
    }

    let public_share = 100.0 - tge;
    if public_share < MIN_PUBLIC_ALLOCATION_PCT {
        risks.push(finding(
            RiskType::Error,
            RiskCategory::TokenAllocation,
            "Insufficient public allocation",
            "Reserve at least 10% of supply for public distribution",
            public_share,
            MIN_PUBLIC_ALLOCATION_PCT,
            "public_allocation_pct",
        ));
    }

    let valuation = market_valuation(input);
    if input.fundraising_method == FundraisingMethod::PrivateSale
        && input.fundraising_amount > valuation * (MAX_PRIVATE_SALE_PCT / 100.0)
    {
        risks.push(finding(
            RiskType::Warning,
            RiskCategory::TokenAllocation,
            "High private sale allocation",
            "Cap the private sale below 40% of fully diluted value or add public rounds",
            div_or_zero(input.fundraising_amount, valuation) * 100.0,
            MAX_PRIVATE_SALE_PCT,
            "private_sale_pct_of_fdv",
        ));
    }

    risks
}

/// Circulating supply and liquidity depth
pub fn analyze_supply_dynamics(input: &ValuationInput) -> Vec<RiskAnalysis> {
    let mut risks = Vec::new();
    let tge = input.tge_circulating_supply;
    let valuation = market_valuation(input);

    if tge < MIN_CIRCULATING_PCT {
        risks.push(finding(
            RiskType::Warning,
            RiskCategory::SupplyDynamics,
            "Low circulating supply",
            "A thin float amplifies price swings; plan gradual unlocks to deepen it",
            tge,
            MIN_CIRCULATING_PCT,
            "tge_circulating_supply_pct",
        ));
    }

    let liquidity_ratio = div_or_zero(input.dex_liquidity, valuation) * 100.0;
    if liquidity_ratio < MIN_LIQUIDITY_RATIO_PCT {
        risks.push(finding(
            RiskType::Error,
            RiskCategory::SupplyDynamics,
            "Insufficient DEX liquidity ratio",
            "Provide DEX liquidity worth at least 5% of fully diluted value",
            liquidity_ratio,
            MIN_LIQUIDITY_RATIO_PCT,
            "dex_liquidity_pct_of_fdv",
        ));
    }

    // No initial market cap means no ratio to judge
    let initial_market_cap = valuation * (tge / 100.0);
    if initial_market_cap > 0.0 {
        let mcap_to_liquidity = input.dex_liquidity / initial_market_cap;
        if mcap_to_liquidity < MIN_MCAP_LIQUIDITY_PCT / 100.0 {
            risks.push(finding(
                RiskType::Warning,
                RiskCategory::SupplyDynamics,
                "Low market cap to liquidity ratio",
                "Back at least 10% of the initial market cap with DEX liquidity",
                mcap_to_liquidity * 100.0,
                MIN_MCAP_LIQUIDITY_PCT,
                "dex_liquidity_pct_of_initial_mcap",
            ));
        }
    }

    risks
}

/// TGE unlock size against market conditions
pub fn analyze_market(input: &ValuationInput) -> Vec<RiskAnalysis> {
    let mut risks = Vec::new();
    let tge = input.tge_circulating_supply;

    if tge > MAX_TGE_UNLOCK_PCT {
        risks.push(finding(
            RiskType::Warning,
            RiskCategory::Market,
            "High TGE unlock percentage",
            "Unlock 10% or less at TGE to limit early sell pressure",
            tge,
            MAX_TGE_UNLOCK_PCT,
            "tge_circulating_supply_pct",
        ));
    }

    if input.market_condition == MarketCondition::Bear && tge > MAX_BEAR_TGE_UNLOCK_PCT {
        risks.push(finding(
            RiskType::Error,
            RiskCategory::Market,
            "High unlock during bear market",
            "In a bear market keep the TGE unlock at or below 5%",
            tge,
            MAX_BEAR_TGE_UNLOCK_PCT,
            "tge_circulating_supply_pct",
        ));
    }

    risks
}

/// Liquidity shock resilience
pub fn analyze_stress_test(input: &ValuationInput) -> Vec<RiskAnalysis> {
    let mut risks = Vec::new();

    let shock_impact = input.dex_liquidity * LIQUIDITY_SHOCK_FACTOR;
    let absorption = div_or_zero(shock_impact, market_valuation(input));
    if absorption < MIN_SHOCK_ABSORPTION_PCT / 100.0 {
        risks.push(finding(
            RiskType::Warning,
            RiskCategory::StressTest,
            "High vulnerability to liquidity shocks",
            "Deepen liquidity so a 50% drawdown still covers 2% of fully diluted value",
            absorption * 100.0,
            MIN_SHOCK_ABSORPTION_PCT,
            "post_shock_liquidity_pct_of_fdv",
        ));
    }

    risks
}

/// Validate and run every analyzer in display order
pub fn analyze_all(input: &ValuationInput) -> ModelResult<Vec<RiskAnalysis>> {
    validate_input(input)?;

    let mut risks = analyze_token_allocation(input);
    risks.extend(analyze_supply_dynamics(input));
    risks.extend(analyze_market(input));
    risks.extend(analyze_stress_test(input));
    Ok(risks)
}

/// Findings grouped under their analyzer, preserving order within each group
pub fn group_by_category(risks: &[RiskAnalysis]) -> BTreeMap<RiskCategory, Vec<RiskAnalysis>> {
    let mut groups: BTreeMap<RiskCategory, Vec<RiskAnalysis>> = BTreeMap::new();
    for risk in risks {
        groups.entry(risk.category).or_default().push(risk.clone());
    }
    groups
}
