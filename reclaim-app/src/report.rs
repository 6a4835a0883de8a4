//! Console summary and small report files for a completed estimate.

use anyhow::Result;
use reclaim_schemas::{input::InputState, phase::ClosurePhase, results::Results};
use serde::Serialize;
use std::fs;

/// The headline figures of a run, written alongside the full results.
#[derive(Debug, Serialize)]
struct RunSummary {
    direct_works_cost: f64,
    indirect_costs: f64,
    total_nominal_cost: f64,
    total_discounted_cost: f64,
    peak_cashflow_year: i32,
    peak_cashflow_cost: f64,
    total_duration_years: u32,
    monitoring_cost_share_percent: f64,
    risk_score: f64,
    risk_uplift_percent: f64,
}

#[derive(Debug, Serialize)]
struct PhaseBreakdownRecord {
    phase: String,
    total_cost: f64,
    percent_of_total: f64,
}

/// Writes the headline figures to a YAML summary file.
pub fn write_summary_yaml(path: &str, results: &Results) -> Result<()> {
    let summary = RunSummary {
        direct_works_cost: results.direct_works_cost,
        indirect_costs: results.indirect_costs,
        total_nominal_cost: results.total_nominal_cost,
        total_discounted_cost: results.total_discounted_cost,
        peak_cashflow_year: results.peak_cashflow_year,
        peak_cashflow_cost: results.peak_cashflow_cost,
        total_duration_years: results.total_duration_years,
        monitoring_cost_share_percent: results.monitoring_cost_share_percent,
        risk_score: results.derived_quantities.risk_score,
        risk_uplift_percent: results.derived_quantities.risk_uplift_percent,
    };
    fs::write(path, serde_yaml::to_string(&summary)?)?;
    Ok(())
}

/// Writes the phase breakdown table to a CSV file.
pub fn write_phase_breakdown_csv(path: &str, results: &Results) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in &results.phase_breakdown {
        writer.serialize(PhaseBreakdownRecord {
            phase: row.phase.display_name().to_string(),
            total_cost: row.total_cost,
            percent_of_total: row.percent_of_total,
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn print_summary_report(input: &InputState, results: &Results) {
    let derived = &results.derived_quantities;

    println!("\n\n--- [Closure Cost Summary] ---");
    println!("========================================");
    println!("Derived Quantities:");
    println!(
        "  - Disturbed area:           {:>12.0} m2",
        derived.disturbed_area_m2
    );
    println!(
        "  - Total earthworks volume:  {:>12.0} m3",
        derived.total_earthworks_volume_m3
    );
    println!(
        "  - Topsoil volume:           {:>12.0} m3",
        derived.topsoil_volume_m3
    );
    println!(
        "  - Water to treat:           {:>12.0} ML",
        derived.total_water_treatment_ml
    );
    println!(
        "  - Composite risk score:     {:>12.1} / 100",
        derived.risk_score
    );
    println!(
        "  - Risk uplift:              {:>12.2} %",
        derived.risk_uplift_percent
    );

    println!("\nCost Summary:");
    println!(
        "  - Direct works:             ${:>15.2}",
        results.direct_works_cost
    );
    println!(
        "  - Indirect costs:           ${:>15.2}",
        results.indirect_costs
    );
    println!("  --------------------------------------");
    println!(
        "  - Total (nominal):          ${:>15.2}",
        results.total_nominal_cost
    );
    println!(
        "  - NPV (discounted):         ${:>15.2}",
        results.total_discounted_cost
    );
    println!(
        "  - Peak cashflow:            ${:>15.2} in {}",
        results.peak_cashflow_cost, results.peak_cashflow_year
    );
    println!(
        "  - Monitoring share:         {:>16.1} %",
        results.monitoring_cost_share_percent
    );

    println!("\nSchedule ({} years total):", results.total_duration_years);
    for phase in ClosurePhase::ALL {
        let start = input.financial.closure_start_year
            + results.schedule.start_year(phase) as i32;
        let duration = input.phase_durations.duration(phase);
        println!(
            "  - {:<32} starts {} for {:>2} yr",
            phase.display_name(),
            start,
            duration
        );
    }

    println!("\nCost by Phase:");
    for row in &results.phase_breakdown {
        println!(
            "  - {:<32} ${:>14.2} ({:>5.1}%)",
            row.phase.display_name(),
            row.total_cost,
            row.percent_of_total
        );
    }

    println!("\nCost by Category:");
    for row in &results.category_breakdown {
        println!(
            "  - {:<32} ${:>14.2} ({:>5.1}%)",
            row.category.display_name(),
            row.total_cost,
            row.percent_of_total
        );
    }

    let variation = results
        .sensitivity
        .first()
        .map_or(10.0, |row| row.variation_percent);
    println!("\nSensitivity (+/-{:.0}% swings, by cost impact):", variation);
    for row in &results.sensitivity {
        println!(
            "  - {:<28} total ${:>14.2} .. ${:>14.2} | NPV swing ${:>14.2}",
            format!("{} [{}]", row.driver, row.unit),
            row.low_total_cost,
            row.high_total_cost,
            row.npv_delta
        );
    }

    println!("========================================");
}
