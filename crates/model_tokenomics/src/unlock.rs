//! Month-by-month token unlock schedule
//!
//! Values are cumulative: month `m` holds everything unlocked by the end of
//! month `m`, not what became unlocked during it. Months are 1-based.
//!
//! Per allocation, with `tokens = percentage / 100 * total_supply`:
//! - before the cliff nothing is unlocked
//! - step curves unlock `tokens` at the cliff
//! - linear curves ramp from the cliff to `duration`; when `duration <= cliff`
//!   the ramp is empty and everything unlocks at the cliff

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ModelResult, ValidationError};
use crate::math::*;
use crate::state::*;

/// Horizon used by the unlock chart
pub const DEFAULT_HORIZON_MONTHS: u32 = 24;

/// Horizon used by the unlock table
pub const TABLE_HORIZON_MONTHS: u32 = 12;

/// Unlocked amount of one category at one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryUnlock {
    pub category: String,
    pub unlocked: f64,
}

/// One point of the unlock series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyUnlock {
    pub month: u32,
    /// In allocation order
    pub categories: Vec<CategoryUnlock>,
    /// Sum of `categories`
    pub total: f64,
}

impl MonthlyUnlock {
    /// Unlocked amount for `category`, if present
    pub fn get(&self, category: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.unlocked)
    }
}

/// Total tokens assigned to an allocation, independent of vesting
pub fn allocation_tokens(allocation: &TokenAllocation, total_supply: f64) -> f64 {
    percent_of(allocation.percentage, total_supply)
}

/// Cumulative tokens of `allocation` unlocked at `month`
pub fn unlocked_at(allocation: &TokenAllocation, total_supply: f64, month: u32) -> f64 {
    let tokens = allocation_tokens(allocation, total_supply);
    let vesting = &allocation.vesting;

    if month < vesting.cliff {
        return 0.0;
    }

    match vesting.vesting_type.curve() {
        VestingCurve::Step => tokens,
        VestingCurve::Linear => {
            let vesting_months = i64::from(vesting.duration) - i64::from(vesting.cliff);
            if vesting_months <= 0 {
                return tokens;
            }
            let months_vested = (i64::from(month) - i64::from(vesting.cliff)).max(0);
            let progress = clamp_unit(months_vested as f64 / vesting_months as f64);
            tokens * progress
        }
    }
}

/// First month at which `allocation` is fully unlocked
pub fn full_unlock_month(allocation: &TokenAllocation) -> u32 {
    let vesting = &allocation.vesting;
    let month = match vesting.vesting_type.curve() {
        VestingCurve::Linear if vesting.duration > vesting.cliff => vesting.duration,
        _ => vesting.cliff,
    };
    month.max(1)
}

/// Reject inputs the scheduler cannot give a meaningful answer for
pub fn validate_allocations(allocations: &[TokenAllocation], total_supply: f64) -> ModelResult<()> {
    ensure_finite("total supply", total_supply)?;
    if total_supply < 0.0 {
        return Err(ValidationError::NegativeSupply(total_supply));
    }

    let mut seen = HashSet::with_capacity(allocations.len());
    for allocation in allocations {
        ensure_finite("allocation percentage", allocation.percentage)?;
        if !(0.0..=100.0).contains(&allocation.percentage) {
            return Err(ValidationError::PercentageOutOfRange {
                category: allocation.category.clone(),
                percentage: allocation.percentage,
            });
        }
        if !seen.insert(allocation.category.as_str()) {
            return Err(ValidationError::DuplicateCategory(allocation.category.clone()));
        }
    }

    Ok(())
}

/// Compute the cumulative unlock series for months `1..=horizon_months`
pub fn compute_unlock_series(
    allocations: &[TokenAllocation],
    total_supply: f64,
    horizon_months: u32,
) -> ModelResult<Vec<MonthlyUnlock>> {
    if horizon_months == 0 {
        return Err(ValidationError::InvalidHorizon(horizon_months));
    }
    validate_allocations(allocations, total_supply)?;

    let series = (1..=horizon_months)
        .map(|month| {
            let categories: Vec<CategoryUnlock> = allocations
                .iter()
                .map(|allocation| CategoryUnlock {
                    category: allocation.category.clone(),
                    unlocked: unlocked_at(allocation, total_supply, month),
                })
                .collect();
            let total = categories.iter().map(|c| c.unlocked).sum();
            MonthlyUnlock {
                month,
                categories,
                total,
            }
        })
        .collect();

    Ok(series)
}

/// Tokens newly unlocked during each month, derived from a cumulative series
pub fn monthly_increments(series: &[MonthlyUnlock]) -> Vec<MonthlyUnlock> {
    let mut previous: Option<&MonthlyUnlock> = None;
    let mut out = Vec::with_capacity(series.len());

    for point in series {
        let categories: Vec<CategoryUnlock> = point
            .categories
            .iter()
            .map(|c| {
                let before = previous.and_then(|p| p.get(&c.category)).unwrap_or(0.0);
                CategoryUnlock {
                    category: c.category.clone(),
                    unlocked: c.unlocked - before,
                }
            })
            .collect();
        let total = categories.iter().map(|c| c.unlocked).sum();
        out.push(MonthlyUnlock {
            month: point.month,
            categories,
            total,
        });
        previous = Some(point);
    }

    out
}

/// One category row of the unlock table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockRow {
    pub category: String,
    pub total_allocation: f64,
    /// One value per month column
    pub values: Vec<f64>,
}

/// Series transposed into category rows by month columns, with a totals row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockTable {
    pub months: Vec<u32>,
    pub rows: Vec<UnlockRow>,
    /// Matches each month's `MonthlyUnlock::total`
    pub totals: Vec<f64>,
}

impl UnlockTable {
    /// Compute the series and transpose it
    pub fn build(
        allocations: &[TokenAllocation],
        total_supply: f64,
        horizon_months: u32,
    ) -> ModelResult<Self> {
        let series = compute_unlock_series(allocations, total_supply, horizon_months)?;

        let rows = allocations
            .iter()
            .enumerate()
            .map(|(i, allocation)| UnlockRow {
                category: allocation.category.clone(),
                total_allocation: allocation_tokens(allocation, total_supply),
                values: series
                    .iter()
                    .map(|point| point.categories.get(i).map_or(0.0, |c| c.unlocked))
                    .collect(),
            })
            .collect();

        Ok(Self {
            months: series.iter().map(|p| p.month).collect(),
            rows,
            totals: series.iter().map(|p| p.total).collect(),
        })
    }
}
