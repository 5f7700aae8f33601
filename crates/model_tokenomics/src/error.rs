//! Validation errors for engine inputs

use thiserror::Error;

/// The single error kind raised by the engines.
///
/// Every variant describes a malformed call; there is no I/O and no partial
/// failure, so callers either fix the input or surface the message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("total supply cannot be negative (got {0})")]
    NegativeSupply(f64),

    #[error("allocation '{category}' has percentage {percentage}, expected 0..=100")]
    PercentageOutOfRange { category: String, percentage: f64 },

    #[error("duplicate allocation category '{0}'")]
    DuplicateCategory(String),

    #[error("horizon must be at least one month (got {0})")]
    InvalidHorizon(u32),

    #[error("market valuation is zero: total supply {total_supply} x token price {token_price}")]
    ZeroMarketValuation { total_supply: f64, token_price: f64 },

    #[error("TGE circulating supply {0}% is outside 0..=100")]
    TgePercentageOutOfRange(f64),

    #[error("{field} cannot be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("allocations sum to {total}%, expected 100%")]
    AllocationTotal { total: f64 },
}

/// Result type for engine operations
pub type ModelResult<T> = Result<T, ValidationError>;
