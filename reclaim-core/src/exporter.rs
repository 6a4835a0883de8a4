//! CSV export of engine outputs for spreadsheets and downstream tooling.

use reclaim_schemas::results::{AnnualCashflow, LineItemCost};
use csv::Writer;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CashflowRecord {
    year: i32,
    year_index: u32,
    nominal_cost: f64,
    escalated_cost: f64,
    discounted_cost: f64,
    cumulative_nominal: f64,
    cumulative_discounted: f64,
    phase_costs_json: String,
}

#[derive(Debug, Serialize)]
struct LineItemRecord {
    phase: String,
    category: String,
    description: String,
    quantity: f64,
    unit: String,
    unit_rate: f64,
    subtotal: f64,
}

/// Writes the annual cashflow table to a CSV file. The per-phase cost map
/// is embedded as a JSON column so the flat table stays one row per year.
pub fn write_cashflow_csv(path: &str, cashflows: &[AnnualCashflow]) -> Result<(), anyhow::Error> {
    let mut writer = Writer::from_path(path)?;
    for cashflow in cashflows {
        let phase_costs_json = serde_json::to_string(&cashflow.phase_costs)?;
        writer.serialize(CashflowRecord {
            year: cashflow.year,
            year_index: cashflow.year_index,
            nominal_cost: cashflow.nominal_cost,
            escalated_cost: cashflow.escalated_cost,
            discounted_cost: cashflow.discounted_cost,
            cumulative_nominal: cashflow.cumulative_nominal,
            cumulative_discounted: cashflow.cumulative_discounted,
            phase_costs_json,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the itemized cost register to a CSV file.
pub fn write_line_items_csv(path: &str, line_items: &[LineItemCost]) -> Result<(), anyhow::Error> {
    let mut writer = Writer::from_path(path)?;
    for item in line_items {
        writer.serialize(LineItemRecord {
            phase: item.phase.display_name().to_string(),
            category: item.category.display_name().to_string(),
            description: item.description.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            unit_rate: item.unit_rate,
            subtotal: item.subtotal,
        })?;
    }
    writer.flush()?;
    Ok(())
}
