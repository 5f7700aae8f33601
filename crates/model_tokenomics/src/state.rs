//! Plain-data model shared by the unlock and valuation engines
//!
//! Every type here is serializable and free of references, so renderers and
//! exporters can capture engine output without special-casing.

use serde::{Deserialize, Serialize};

// ============================================================================
// Vesting
// ============================================================================

/// Declared vesting schedule kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VestingType {
    Linear,
    Cliff,
    Exponential,
    Custom,
}

/// Unlock curve actually applied by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VestingCurve {
    /// Clamped linear ramp from the cliff to the duration
    Linear,
    /// Nothing before the cliff, everything from the cliff on
    Step,
}

impl VestingType {
    /// Curve used for this type.
    ///
    /// `Exponential` and `Custom` have no curve of their own yet and vest
    /// linearly, exactly like `Linear`.
    pub fn curve(self) -> VestingCurve {
        match self {
            VestingType::Cliff => VestingCurve::Step,
            VestingType::Linear => VestingCurve::Linear,
            VestingType::Exponential => VestingCurve::Linear,
            VestingType::Custom => VestingCurve::Linear,
        }
    }
}

/// Vesting terms for one allocation, in months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VestingSchedule {
    /// Months before anything unlocks
    pub cliff: u32,
    /// Months from time zero until fully unlocked (linear types)
    pub duration: u32,
    #[serde(rename = "type")]
    pub vesting_type: VestingType,
    /// Reserved; not read by the scheduler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_percentage: Option<f64>,
}

impl VestingSchedule {
    pub fn linear(cliff: u32, duration: u32) -> Self {
        Self {
            cliff,
            duration,
            vesting_type: VestingType::Linear,
            unlock_percentage: None,
        }
    }

    pub fn cliff(cliff: u32) -> Self {
        Self {
            cliff,
            duration: 0,
            vesting_type: VestingType::Cliff,
            unlock_percentage: None,
        }
    }
}

impl Default for VestingSchedule {
    fn default() -> Self {
        Self::linear(0, 12)
    }
}

/// A named stakeholder share of the total supply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAllocation {
    pub category: String,
    /// Share of total supply, nominally 0..=100
    pub percentage: f64,
    pub vesting: VestingSchedule,
}

impl TokenAllocation {
    pub fn new(category: impl Into<String>, percentage: f64, vesting: VestingSchedule) -> Self {
        Self {
            category: category.into(),
            percentage,
            vesting,
        }
    }
}

impl Default for TokenAllocation {
    fn default() -> Self {
        Self::new("New Team", 0.0, VestingSchedule::default())
    }
}

/// Simulated market backdrop attached to a tokenomics configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarketScenario {
    Bull,
    Bear,
    #[default]
    Neutral,
    /// Liquidity shock
    Shock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenomicsData {
    pub total_supply: f64,
    pub allocations: Vec<TokenAllocation>,
    #[serde(default)]
    pub market_condition: MarketScenario,
}

// ============================================================================
// Valuation inputs
// ============================================================================

/// Market condition used by the valuation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MarketCondition {
    #[serde(alias = "bull")]
    Bull,
    #[serde(alias = "bear")]
    Bear,
    #[default]
    #[serde(alias = "neutral")]
    Neutral,
}

impl MarketCondition {
    /// FDV multiplier for this condition
    pub fn multiplier(self) -> f64 {
        match self {
            MarketCondition::Bull => 1.2,
            MarketCondition::Bear => 0.8,
            MarketCondition::Neutral => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FundraisingMethod {
    #[serde(rename = "Pre-Seed")]
    PreSeed,
    Seed,
    #[serde(rename = "Private Sale")]
    PrivateSale,
    #[default]
    #[serde(rename = "IDO")]
    Ido,
    #[serde(rename = "Fair Launch")]
    FairLaunch,
    Launchpad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProjectCategory {
    #[default]
    DeFi,
    GameFi,
    #[serde(rename = "NFT")]
    Nft,
    Infrastructure,
    #[serde(rename = "DAO")]
    Dao,
}

/// A historical or planned raise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRound {
    pub name: String,
    /// Amount raised in USD
    pub amount: f64,
    /// Round price; `None` or non-positive means "use the input price"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_price: Option<f64>,
    #[serde(default)]
    pub fundraising_method: FundraisingMethod,
    /// Dilution in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dilution: Option<f64>,
    /// ISO date string as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationInput {
    pub fundraising_amount: f64,
    pub token_price: f64,
    #[serde(default)]
    pub fundraising_method: FundraisingMethod,
    pub total_supply: f64,
    /// Percent of supply circulating at TGE
    pub tge_circulating_supply: f64,
    pub dex_liquidity: f64,
    /// Months
    #[serde(default)]
    pub lockup_duration: u32,
    #[serde(default)]
    pub project_category: ProjectCategory,
    #[serde(default)]
    pub market_condition: MarketCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_staking: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_tokens: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_budget: Option<f64>,
    #[serde(default)]
    pub funding_rounds: Vec<FundingRound>,
}

impl Default for ValuationInput {
    fn default() -> Self {
        Self {
            fundraising_amount: 0.0,
            token_price: 0.0,
            fundraising_method: FundraisingMethod::Ido,
            total_supply: 0.0,
            tge_circulating_supply: 0.0,
            dex_liquidity: 0.0,
            lockup_duration: 0,
            project_category: ProjectCategory::DeFi,
            market_condition: MarketCondition::Neutral,
            initial_staking: None,
            team_tokens: None,
            marketing_budget: None,
            funding_rounds: Vec::new(),
        }
    }
}

// ============================================================================
// Valuation outputs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskType {
    Warning,
    Error,
}

/// Analyzer that produced a finding, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    TokenAllocation,
    SupplyDynamics,
    Market,
    StressTest,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::TokenAllocation,
        RiskCategory::SupplyDynamics,
        RiskCategory::Market,
        RiskCategory::StressTest,
    ];

    /// Subheading used by the results renderer
    pub fn title(self) -> &'static str {
        match self {
            RiskCategory::TokenAllocation => "Token Allocation",
            RiskCategory::SupplyDynamics => "Supply Dynamics",
            RiskCategory::Market => "Market",
            RiskCategory::StressTest => "Stress Test",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDetails {
    pub current_value: f64,
    pub threshold: f64,
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    #[serde(rename = "type")]
    pub risk_type: RiskType,
    pub category: RiskCategory,
    pub message: String,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<RiskDetails>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// `base * low ..= base * high`
    pub fn around(base: f64, low: f64, high: f64) -> Self {
        Self {
            min: base * low,
            max: base * high,
        }
    }

    /// Both bounds multiplied by `factor`
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSentiment {
    pub score: f64,
    pub description: String,
}

/// A reference project used for comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparable {
    pub name: String,
    pub fdv: f64,
    pub mcap: f64,
    /// Percent
    pub performance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationOutput {
    pub fdv_range: Range,
    pub initial_market_cap_range: Range,
    pub confidence_score: f64,
    pub market_sentiment: MarketSentiment,
    pub comparables: Vec<Comparable>,
    pub risks: Vec<RiskAnalysis>,
}
