use crate::analysis;
use crate::estimation::cashflow::annual_cashflows;
use crate::estimation::costs::{direct_works, indirect_costs};
use crate::estimation::quantities::derive_quantities;
use crate::estimation::schedule::build_schedule;
use reclaim_schemas::{input::InputState, phase::CostCategory, results::Results};

/// The engine's sole entry point: one fully-validated input in, one
/// complete [`Results`] aggregate out.
///
/// The computation is pure and synchronous. Re-invoking with an unchanged
/// input reproduces a structurally identical `Results`; nothing persists
/// between calls.
pub fn estimate(input: &InputState) -> Results {
    let mut results = evaluate(input);
    results.sensitivity =
        analysis::sensitivity_analysis(input, analysis::DEFAULT_VARIATION_PERCENT);
    results
}

/// Runs the pipeline without the sensitivity pass. Sensitivity analysis
/// re-enters here for each perturbed input, which is why it lives outside
/// this function.
pub(crate) fn evaluate(input: &InputState) -> Results {
    let derived_quantities = derive_quantities(input);

    let mut line_items = direct_works(input, &derived_quantities);
    let direct_works_cost: f64 = line_items.iter().map(|item| item.subtotal).sum();

    let indirect_items = indirect_costs(
        direct_works_cost,
        &input.indirect_rates,
        derived_quantities.risk_uplift_percent,
    );
    let indirect_costs_total: f64 = indirect_items.iter().map(|item| item.subtotal).sum();
    line_items.extend(indirect_items);

    let total_nominal_cost = direct_works_cost + indirect_costs_total;

    let schedule = build_schedule(&input.phase_durations);
    let cashflows = annual_cashflows(
        &line_items,
        &schedule,
        &input.phase_durations,
        &input.financial,
    );

    let total_discounted_cost: f64 = cashflows.iter().map(|cf| cf.discounted_cost).sum();

    let mut peak_cashflow_year = input.financial.closure_start_year;
    let mut peak_cashflow_cost = 0.0;
    for cf in &cashflows {
        if cf.nominal_cost > peak_cashflow_cost {
            peak_cashflow_year = cf.year;
            peak_cashflow_cost = cf.nominal_cost;
        }
    }

    let phase_breakdown = analysis::phase_breakdown(&line_items);
    let category_breakdown = analysis::category_breakdown(&line_items);

    let monitoring_cost: f64 = line_items
        .iter()
        .filter(|item| item.category == CostCategory::Monitoring)
        .map(|item| item.subtotal)
        .sum();
    let monitoring_cost_share_percent = if total_nominal_cost > 0.0 {
        monitoring_cost / total_nominal_cost * 100.0
    } else {
        0.0
    };

    Results {
        derived_quantities,
        line_items,
        direct_works_cost,
        indirect_costs: indirect_costs_total,
        total_nominal_cost,
        total_discounted_cost,
        peak_cashflow_year,
        peak_cashflow_cost,
        cashflows,
        phase_breakdown,
        category_breakdown,
        sensitivity: Vec::new(),
        monitoring_cost_share_percent,
        total_duration_years: schedule.total_duration_years,
        schedule,
    }
}
