//! Allocation totals and per-category token amounts

use serde::{Deserialize, Serialize};

use crate::error::{ModelResult, ValidationError};
use crate::math::*;
use crate::state::*;
use crate::unlock::{allocation_tokens, validate_allocations};

/// One slice of the distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub category: String,
    pub percentage: f64,
    pub tokens: f64,
}

/// Sum of allocation percentages
pub fn allocation_total(allocations: &[TokenAllocation]) -> f64 {
    allocations.iter().map(|a| a.percentage).sum()
}

/// Require the allocations to cover exactly 100% of supply
pub fn ensure_complete(allocations: &[TokenAllocation]) -> ModelResult<()> {
    let total = allocation_total(allocations);
    if (total - 100.0).abs() > EPSILON {
        return Err(ValidationError::AllocationTotal { total });
    }
    Ok(())
}

/// Whether removing `index` leaves at most 100% allocated
pub fn can_remove(allocations: &[TokenAllocation], index: usize) -> bool {
    if index >= allocations.len() {
        return false;
    }
    let remaining: f64 = allocations
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, a)| a.percentage)
        .sum();
    remaining <= 100.0
}

/// Token amount per allocation, in allocation order
pub fn distribution(data: &TokenomicsData) -> ModelResult<Vec<DistributionSlice>> {
    validate_allocations(&data.allocations, data.total_supply)?;

    Ok(data
        .allocations
        .iter()
        .map(|a| DistributionSlice {
            category: a.category.clone(),
            percentage: a.percentage,
            tokens: allocation_tokens(a, data.total_supply),
        })
        .collect())
}
