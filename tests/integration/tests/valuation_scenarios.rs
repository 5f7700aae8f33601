//! Valuation and risk analyzer scenarios across the public API

use std::collections::BTreeMap;

use model_tokenomics::*;

fn input() -> ValuationInput {
    ValuationInput {
        fundraising_amount: 100_000.0,
        token_price: 1.0,
        total_supply: 1_000_000.0,
        tge_circulating_supply: 20.0,
        dex_liquidity: 100_000.0,
        market_condition: MarketCondition::Neutral,
        ..ValuationInput::default()
    }
}

#[test]
fn test_neutral_fdv_range() {
    let out = generate_valuation(&input()).unwrap();
    assert_eq!(out.fdv_range, Range { min: 800_000.0, max: 1_200_000.0 });
}

#[test]
fn test_insider_concentration_details() {
    let risks = analyze_token_allocation(&ValuationInput { tge_circulating_supply: 45.0, ..input() });
    let insider = risks
        .iter()
        .find(|r| r.message == "Excessive insider concentration")
        .unwrap();

    assert_eq!(insider.risk_type, RiskType::Error);
    assert_eq!(insider.category, RiskCategory::TokenAllocation);
    let details = insider.details.as_ref().unwrap();
    assert_eq!(details.current_value, 45.0);
    assert_eq!(details.threshold, 40.0);
}

#[test]
fn test_no_liquidity_is_flagged() {
    let risks = analyze_supply_dynamics(&ValuationInput {
        dex_liquidity: 0.0,
        total_supply: 1000.0,
        token_price: 1.0,
        ..input()
    });
    let liquidity = risks
        .iter()
        .find(|r| r.message == "Insufficient DEX liquidity ratio")
        .unwrap();

    assert_eq!(liquidity.risk_type, RiskType::Error);
    assert_eq!(liquidity.details.as_ref().unwrap().current_value, 0.0);
}

#[test]
fn test_analyzers_concatenate_in_order() {
    let stressed = ValuationInput {
        tge_circulating_supply: 45.0,
        dex_liquidity: 1_000.0,
        market_condition: MarketCondition::Bear,
        ..input()
    };

    let mut expected = analyze_token_allocation(&stressed);
    expected.extend(analyze_supply_dynamics(&stressed));
    expected.extend(analyze_market(&stressed));
    expected.extend(analyze_stress_test(&stressed));

    let all = analyze_all(&stressed).unwrap();
    assert_eq!(all, expected);

    let categories: Vec<RiskCategory> = all.iter().map(|r| r.category).collect();
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);
    assert!(categories.contains(&RiskCategory::StressTest));
}

#[test]
fn test_invalid_input_yields_no_findings() {
    assert!(analyze_all(&ValuationInput { token_price: 0.0, ..input() }).is_err());
    assert!(generate_valuation(&ValuationInput { tge_circulating_supply: -1.0, ..input() }).is_err());
}

#[test]
fn test_output_json_shape() {
    let out = generate_valuation(&ValuationInput { tge_circulating_supply: 45.0, ..input() }).unwrap();
    let json = serde_json::to_value(&out).unwrap();

    assert_eq!(json["fdvRange"]["min"], 800_000.0);
    assert!(json["initialMarketCapRange"]["max"].is_number());
    assert_eq!(json["confidenceScore"], 0.85);
    assert_eq!(json["comparables"][0]["name"], "Similar Project A");
    assert_eq!(json["risks"][0]["type"], "error");
    assert_eq!(json["risks"][0]["category"], "token_allocation");
    assert_eq!(json["risks"][0]["details"]["currentValue"], 45.0);
}

#[test]
fn test_report_over_valuation() {
    let valuation = generate_valuation(&input()).unwrap();
    let mut answers = BTreeMap::new();
    answers.insert("tokenUtility".to_string(), "Governance".to_string());
    answers.insert("projectGoal".to_string(), "DAO tooling".to_string());

    let report = generate_report(valuation.clone(), &answers, "2024-01-01T00:00:00Z");
    assert_eq!(report.valuation, valuation);
    assert_eq!(report.questionnaire.len(), 2);
    assert_eq!(report.questionnaire[0].answer, "DAO tooling");
    assert_eq!(report.recommendations.len(), 2);
    assert_eq!(report.timestamp, "2024-01-01T00:00:00Z");
}
