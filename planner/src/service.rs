//! Runs both engines over a project

use model_tokenomics::{
    allocation_total, compute_unlock_series, distribution, generate_report, DistributionSlice,
    MonthlyUnlock, UnlockTable, ValuationInput, ValuationOutput, ValuationReport,
};

use crate::config::Config;
use crate::error::PlannerResult;
use crate::project::Project;

/// Results of one evaluation pass
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub series: Vec<MonthlyUnlock>,
    pub table: UnlockTable,
    pub distribution: Vec<DistributionSlice>,
    pub allocation_total: f64,
    pub valuation: Option<ValuationOutput>,
    pub report: Option<ValuationReport>,
}

/// Valuation on the blocking pool
pub async fn generate_valuation(input: ValuationInput) -> PlannerResult<ValuationOutput> {
    let output = tokio::task::spawn_blocking(move || model_tokenomics::generate_valuation(&input)).await??;
    Ok(output)
}

/// Evaluate the unlock schedule and, when inputs are present, the valuation
pub async fn evaluate_project(project: &Project, config: &Config) -> PlannerResult<Evaluation> {
    let tokenomics = &project.tokenomics;

    let series = compute_unlock_series(&tokenomics.allocations, tokenomics.total_supply, config.horizon_months)?;
    let table = UnlockTable::build(
        &tokenomics.allocations,
        tokenomics.total_supply,
        config.table_horizon_months,
    )?;
    let slices = distribution(tokenomics)?;
    let total = allocation_total(&tokenomics.allocations);

    log::debug!(
        "Computed {} months for {} allocations ({}% allocated)",
        series.len(),
        tokenomics.allocations.len(),
        total
    );

    let (valuation, report) = match &project.valuation {
        Some(input) => {
            let valuation = generate_valuation(input.clone()).await?;
            let report = generate_report(valuation.clone(), &project.answers, chrono::Utc::now().to_rfc3339());
            (Some(valuation), Some(report))
        }
        None => {
            log::debug!("No valuation inputs, skipping valuation");
            (None, None)
        }
    };

    Ok(Evaluation {
        series,
        table,
        distribution: slices,
        allocation_total: total,
        valuation,
        report,
    })
}
