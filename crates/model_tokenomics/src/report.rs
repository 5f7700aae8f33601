//! Shareable valuation report
//!
//! Bundles a valuation with the founder questionnaire and fixed
//! recommendation groups. The timestamp comes from the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::format::readable_key;
use crate::state::ValuationOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    pub valuation: ValuationOutput,
    pub questionnaire: Vec<QuestionAnswer>,
    pub recommendations: Vec<Recommendation>,
    /// RFC 3339 / ISO 8601
    pub timestamp: String,
}

/// Questionnaire keys in the order they are asked
pub const QUESTION_KEYS: [&str; 10] = [
    "launchingToken",
    "projectGoal",
    "fundraisingMethod",
    "vcConnections",
    "capitalNeeded",
    "launchpadListing",
    "dexLiquidity",
    "stakingRewards",
    "legalSupport",
    "aiOptimization",
];

pub fn default_recommendations() -> Vec<Recommendation> {
    let group = |category: &str, suggestions: &[&str]| Recommendation {
        category: category.to_string(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        group(
            "Tokenomics",
            &[
                "Implement gradual token unlocks",
                "Consider increasing lock-up period",
            ],
        ),
        group(
            "Liquidity",
            &[
                "Allocate more tokens to liquidity mining",
                "Implement longer liquidity lock periods",
            ],
        ),
    ]
}

/// Assemble a report.
///
/// Known questionnaire keys come first in asking order, any extra keys follow
/// alphabetically. Keys are rendered as readable labels.
pub fn generate_report(
    valuation: ValuationOutput,
    answers: &BTreeMap<String, String>,
    timestamp: impl Into<String>,
) -> ValuationReport {
    let known = QUESTION_KEYS
        .iter()
        .filter_map(|key| answers.get_key_value(*key));
    let extra = answers
        .iter()
        .filter(|(key, _)| !QUESTION_KEYS.contains(&key.as_str()));

    let questionnaire = known
        .chain(extra)
        .map(|(key, answer)| QuestionAnswer {
            question: readable_key(key),
            answer: answer.clone(),
        })
        .collect();

    ValuationReport {
        valuation,
        questionnaire,
        recommendations: default_recommendations(),
        timestamp: timestamp.into(),
    }
}
