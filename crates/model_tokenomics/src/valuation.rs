//! Valuation range estimate from fundraising parameters
//!
//! 1. Blend the token price across funding rounds, weighted by amount raised
//! 2. Base valuation = total supply * blended price
//! 3. FDV range = base * [0.8, 1.2] * market multiplier
//! 4. Initial market cap range = base * TGE share * [0.8, 1.2]
//! 5. Attach comparables and run the risk analyzers
//!
//! The market multiplier is applied to the FDV range only. The initial market
//! cap range is the same under every market condition.

use crate::comparables::{ComparablesProvider, PlaceholderComparables};
use crate::error::{ModelResult, ValidationError};
use crate::math::*;
use crate::risk::analyze_all;
use crate::state::*;

/// Lower bound of a valuation range relative to its base
pub const RANGE_LOW: f64 = 0.8;

/// Upper bound of a valuation range relative to its base
pub const RANGE_HIGH: f64 = 1.2;

/// Total supply at the quoted (not blended) token price; the risk rules
/// measure liquidity and raise size against this figure
pub fn market_valuation(input: &ValuationInput) -> f64 {
    input.total_supply * input.token_price
}

/// Reject inputs that would turn ratios into NaN or infinity
pub fn validate_input(input: &ValuationInput) -> ModelResult<()> {
    ensure_non_negative("fundraising amount", input.fundraising_amount)?;
    ensure_non_negative("token price", input.token_price)?;
    ensure_non_negative("DEX liquidity", input.dex_liquidity)?;

    ensure_finite("total supply", input.total_supply)?;
    if input.total_supply < 0.0 {
        return Err(ValidationError::NegativeSupply(input.total_supply));
    }

    ensure_finite("TGE circulating supply", input.tge_circulating_supply)?;
    if !(0.0..=100.0).contains(&input.tge_circulating_supply) {
        return Err(ValidationError::TgePercentageOutOfRange(input.tge_circulating_supply));
    }

    for (field, value) in [
        ("initial staking", input.initial_staking),
        ("team tokens", input.team_tokens),
        ("marketing budget", input.marketing_budget),
    ] {
        if let Some(value) = value {
            ensure_non_negative(field, value)?;
        }
    }

    for round in &input.funding_rounds {
        ensure_non_negative("funding round amount", round.amount)?;
        if let Some(price) = round.token_price {
            ensure_finite("funding round token price", price)?;
        }
    }

    // Finite inputs can still overflow once multiplied together
    ensure_finite("market valuation", market_valuation(input))?;
    ensure_finite(
        "FDV upper bound",
        base_valuation(input) * RANGE_HIGH * input.market_condition.multiplier(),
    )?;

    if market_valuation(input) == 0.0 {
        return Err(ValidationError::ZeroMarketValuation {
            total_supply: input.total_supply,
            token_price: input.token_price,
        });
    }

    Ok(())
}

/// Amount-weighted average price across funding rounds.
///
/// Rounds without a positive price count at the input price. With no rounds,
/// or nothing raised, the input price is returned unchanged.
pub fn blended_token_price(input: &ValuationInput) -> f64 {
    let raised: f64 = input.funding_rounds.iter().map(|r| r.amount).sum();
    if input.funding_rounds.is_empty() || raised == 0.0 {
        return input.token_price;
    }

    let weighted: f64 = input
        .funding_rounds
        .iter()
        .map(|r| {
            let price = r
                .token_price
                .filter(|p| *p > 0.0)
                .unwrap_or(input.token_price);
            price * r.amount
        })
        .sum();

    weighted / raised
}

/// Total supply at the blended price
pub fn base_valuation(input: &ValuationInput) -> f64 {
    input.total_supply * blended_token_price(input)
}

/// Valuation with the placeholder comparables
pub fn generate_valuation(input: &ValuationInput) -> ModelResult<ValuationOutput> {
    generate_valuation_with(input, &PlaceholderComparables)
}

/// Valuation with comparables, confidence and sentiment from `provider`
pub fn generate_valuation_with<P>(input: &ValuationInput, provider: &P) -> ModelResult<ValuationOutput>
where
    P: ComparablesProvider + ?Sized,
{
    let risks = analyze_all(input)?;

    let base = base_valuation(input);
    let multiplier = input.market_condition.multiplier();
    let tge_share = input.tge_circulating_supply / 100.0;

    Ok(ValuationOutput {
        fdv_range: Range::around(base, RANGE_LOW, RANGE_HIGH).scaled(multiplier),
        initial_market_cap_range: Range::around(base * tge_share, RANGE_LOW, RANGE_HIGH),
        confidence_score: provider.confidence_score(),
        market_sentiment: provider.market_sentiment(),
        comparables: provider.comparables(base),
        risks,
    })
}
