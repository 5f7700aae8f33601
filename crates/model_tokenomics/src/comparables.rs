//! Reference data attached to a valuation
//!
//! The shipped provider returns fixed placeholder figures scaled off the base
//! valuation. A market-data backed provider can replace it through
//! `generate_valuation_with` without touching the range math.

use crate::state::{Comparable, MarketSentiment};

pub const CONFIDENCE_SCORE: f64 = 0.85;
pub const SENTIMENT_SCORE: f64 = 0.75;
pub const SENTIMENT_DESCRIPTION: &str =
    "Positive market sentiment with moderate volatility expected";

/// Source of comparables, confidence and sentiment for a valuation
pub trait ComparablesProvider {
    fn comparables(&self, base_valuation: f64) -> Vec<Comparable>;

    fn confidence_score(&self) -> f64;

    fn market_sentiment(&self) -> MarketSentiment;
}

/// Static placeholder figures
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderComparables;

impl ComparablesProvider for PlaceholderComparables {
    fn comparables(&self, base_valuation: f64) -> Vec<Comparable> {
        vec![
            Comparable {
                name: "Similar Project A".to_string(),
                fdv: base_valuation * 1.1,
                mcap: base_valuation * 0.3,
                performance: 25.0,
            },
            Comparable {
                name: "Similar Project B".to_string(),
                fdv: base_valuation * 0.9,
                mcap: base_valuation * 0.25,
                performance: 15.0,
            },
        ]
    }

    fn confidence_score(&self) -> f64 {
        CONFIDENCE_SCORE
    }

    fn market_sentiment(&self) -> MarketSentiment {
        MarketSentiment {
            score: SENTIMENT_SCORE,
            description: SENTIMENT_DESCRIPTION.to_string(),
        }
    }
}
