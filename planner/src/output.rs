//! Console summary and JSON exports

use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use model_tokenomics::{format_token_amount, group_by_category, RiskCategory, RiskType};

use crate::error::{PlannerError, PlannerResult};
use crate::service::Evaluation;

/// Files written by `write_outputs`, relative to the output directory
pub const UNLOCKS_FILE: &str = "unlocks.json";
pub const TABLE_FILE: &str = "unlock_table.json";
pub const VALUATION_FILE: &str = "valuation.json";
pub const REPORT_FILE: &str = "report.json";

fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> PlannerResult<PathBuf> {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, json).map_err(|source| PlannerError::OutputWrite {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}

/// Write the series, table and (if present) valuation and report
pub fn write_outputs(evaluation: &Evaluation, output_dir: &str) -> PlannerResult<Vec<PathBuf>> {
    let dir = PathBuf::from(shellexpand::tilde(output_dir).as_ref());
    std::fs::create_dir_all(&dir).map_err(|source| PlannerError::OutputWrite {
        path: output_dir.to_string(),
        source,
    })?;

    let mut written = vec![
        write_json(&dir, UNLOCKS_FILE, &evaluation.series)?,
        write_json(&dir, TABLE_FILE, &evaluation.table)?,
    ];
    if let Some(valuation) = &evaluation.valuation {
        written.push(write_json(&dir, VALUATION_FILE, valuation)?);
    }
    if let Some(report) = &evaluation.report {
        written.push(write_json(&dir, REPORT_FILE, report)?);
    }

    Ok(written)
}

/// Plain-text summary of an evaluation
pub fn render_summary(evaluation: &Evaluation) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Allocation ({:.2}% allocated)", evaluation.allocation_total);
    for slice in &evaluation.distribution {
        let _ = writeln!(
            out,
            "  {:<24} {:>6.2}%  {:>10}",
            slice.category,
            slice.percentage,
            format_token_amount(slice.tokens)
        );
    }

    let _ = writeln!(out, "\nUnlocked (cumulative)");
    let table = &evaluation.table;
    let _ = write!(out, "  {:<24}", "Month");
    for month in &table.months {
        let _ = write!(out, " {:>9}", month);
    }
    let _ = writeln!(out);
    for row in &table.rows {
        let _ = write!(out, "  {:<24}", row.category);
        for value in &row.values {
            let _ = write!(out, " {:>9}", format_token_amount(*value));
        }
        let _ = writeln!(out);
    }
    let _ = write!(out, "  {:<24}", "Total");
    for total in &table.totals {
        let _ = write!(out, " {:>9}", format_token_amount(*total));
    }
    let _ = writeln!(out);

    if let Some(valuation) = &evaluation.valuation {
        let _ = writeln!(out, "\nValuation");
        let _ = writeln!(
            out,
            "  FDV:                ${:.0} - ${:.0}",
            valuation.fdv_range.min, valuation.fdv_range.max
        );
        let _ = writeln!(
            out,
            "  Initial market cap: ${:.0} - ${:.0}",
            valuation.initial_market_cap_range.min, valuation.initial_market_cap_range.max
        );
        let _ = writeln!(out, "  Confidence:         {:.0}%", valuation.confidence_score * 100.0);

        let groups = group_by_category(&valuation.risks);
        for category in RiskCategory::ALL {
            let Some(risks) = groups.get(&category) else {
                continue;
            };
            let _ = writeln!(out, "\n{}", category.title());
            for risk in risks {
                let tag = match risk.risk_type {
                    RiskType::Error => "ERROR",
                    RiskType::Warning => "WARN ",
                };
                let _ = writeln!(out, "  [{}] {}: {}", tag, risk.message, risk.suggestion);
            }
        }
    }

    out
}
