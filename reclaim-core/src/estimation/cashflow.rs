use reclaim_schemas::{
    input::{FinancialParams, PhaseDurations},
    phase::ClosurePhase,
    results::{AnnualCashflow, LineItemCost, PhaseSchedule},
};
use std::collections::BTreeMap;

/// Allocates every line item across the programme years and applies
/// escalation and discounting.
///
/// Each item is spread evenly over its phase's configured duration starting
/// at the phase's scheduled start year; a zero-duration phase receives the
/// full amount in its start year. Years are clipped to the `[0, D]` horizon
/// so no money leaves the cashflow. Escalation and discounting are
/// independent per-year multipliers applied in that order; the discount mode
/// flag carries no numeric effect.
pub fn annual_cashflows(
    line_items: &[LineItemCost],
    schedule: &PhaseSchedule,
    durations: &PhaseDurations,
    financial: &FinancialParams,
) -> Vec<AnnualCashflow> {
    let horizon = schedule.total_duration_years as usize;

    let mut phase_buckets: Vec<BTreeMap<ClosurePhase, f64>> = (0..=horizon)
        .map(|_| ClosurePhase::ALL.iter().map(|phase| (*phase, 0.0)).collect())
        .collect();

    for item in line_items {
        let start = schedule.start_year(item.phase) as usize;
        let phase_years = durations.duration(item.phase);
        if phase_years > 0 {
            let annual_amount = item.subtotal / f64::from(phase_years);
            for offset in 0..phase_years as usize {
                let year = (start + offset).min(horizon);
                *phase_buckets[year].entry(item.phase).or_insert(0.0) += annual_amount;
            }
        } else {
            let year = start.min(horizon);
            *phase_buckets[year].entry(item.phase).or_insert(0.0) += item.subtotal;
        }
    }

    let escalation = 1.0 + financial.escalation_rate_percent / 100.0;
    let discount = 1.0 + financial.discount_rate_percent / 100.0;

    let mut cashflows = Vec::with_capacity(horizon + 1);
    let mut cumulative_nominal = 0.0;
    let mut cumulative_discounted = 0.0;

    for (year_index, phase_costs) in phase_buckets.into_iter().enumerate() {
        let nominal_cost: f64 = phase_costs.values().sum();
        let escalated_cost = nominal_cost * escalation.powi(year_index as i32);
        let discounted_cost = escalated_cost / discount.powi(year_index as i32);

        cumulative_nominal += nominal_cost;
        cumulative_discounted += discounted_cost;

        cashflows.push(AnnualCashflow {
            year_index: year_index as u32,
            year: financial.closure_start_year + year_index as i32,
            nominal_cost,
            escalated_cost,
            discounted_cost,
            cumulative_nominal,
            cumulative_discounted,
            phase_costs,
        });
    }

    cashflows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::schedule::build_schedule;
    use crate::estimation::test_fixtures::default_input;
    use reclaim_schemas::phase::CostCategory;

    fn item(subtotal: f64, phase: ClosurePhase) -> LineItemCost {
        LineItemCost {
            category: CostCategory::Earthworks,
            description: "test".to_string(),
            quantity: 1.0,
            unit: "lump sum".to_string(),
            unit_rate: subtotal,
            subtotal,
            phase,
        }
    }

    #[test]
    fn nominal_cashflow_conserves_the_line_item_total() {
        let input = default_input();
        let schedule = build_schedule(&input.phase_durations);
        let items = vec![
            item(900_000.0, ClosurePhase::EarthworksLandform),
            item(250_000.0, ClosurePhase::PlanningApprovals),
            item(60_000.0, ClosurePhase::MonitoringMaintenance),
        ];
        let cashflows =
            annual_cashflows(&items, &schedule, &input.phase_durations, &input.financial);

        let nominal_sum: f64 = cashflows.iter().map(|cf| cf.nominal_cost).sum();
        assert!((nominal_sum - 1_210_000.0).abs() < 1e-6);
        assert!(
            (cashflows.last().unwrap().cumulative_nominal - nominal_sum).abs() < 1e-6
        );
    }

    #[test]
    fn item_spreads_evenly_across_its_phase_years() {
        let input = default_input();
        let schedule = build_schedule(&input.phase_durations);
        let phase_years = input.phase_durations.earthworks_landform;
        let start = schedule.start_year(ClosurePhase::EarthworksLandform);

        let items = vec![item(300_000.0, ClosurePhase::EarthworksLandform)];
        let cashflows =
            annual_cashflows(&items, &schedule, &input.phase_durations, &input.financial);

        let annual = 300_000.0 / f64::from(phase_years);
        for offset in 0..phase_years {
            let cf = &cashflows[(start + offset) as usize];
            assert!((cf.nominal_cost - annual).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_duration_phase_dumps_into_its_start_year() {
        let mut input = default_input();
        input.phase_durations.relinquishment_post_closure = 0;
        let schedule = build_schedule(&input.phase_durations);
        let start = schedule.start_year(ClosurePhase::RelinquishmentPostClosure);

        let items = vec![item(75_000.0, ClosurePhase::RelinquishmentPostClosure)];
        let cashflows =
            annual_cashflows(&items, &schedule, &input.phase_durations, &input.financial);

        assert!((cashflows[start as usize].nominal_cost - 75_000.0).abs() < 1e-6);
        let nominal_sum: f64 = cashflows.iter().map(|cf| cf.nominal_cost).sum();
        assert!((nominal_sum - 75_000.0).abs() < 1e-6);
    }

    #[test]
    fn escalation_then_discounting_are_independent_multipliers() {
        let mut input = default_input();
        input.financial.escalation_rate_percent = 3.0;
        input.financial.discount_rate_percent = 7.0;
        let schedule = build_schedule(&input.phase_durations);

        let items = vec![item(100_000.0, ClosurePhase::EarthworksLandform)];
        let cashflows =
            annual_cashflows(&items, &schedule, &input.phase_durations, &input.financial);

        for cf in &cashflows {
            let year = cf.year_index as i32;
            let expected_escalated = cf.nominal_cost * 1.03f64.powi(year);
            let expected_discounted = expected_escalated / 1.07f64.powi(year);
            assert!((cf.escalated_cost - expected_escalated).abs() < 1e-6);
            assert!((cf.discounted_cost - expected_discounted).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_rates_leave_nominal_unchanged() {
        let mut input = default_input();
        input.financial.escalation_rate_percent = 0.0;
        input.financial.discount_rate_percent = 0.0;
        let schedule = build_schedule(&input.phase_durations);

        let items = vec![item(500_000.0, ClosurePhase::TailingsWrdRehabilitation)];
        let cashflows =
            annual_cashflows(&items, &schedule, &input.phase_durations, &input.financial);

        for cf in &cashflows {
            assert_eq!(cf.nominal_cost, cf.escalated_cost);
            assert_eq!(cf.escalated_cost, cf.discounted_cost);
        }
    }

    #[test]
    fn absolute_years_start_at_the_closure_start_year() {
        let mut input = default_input();
        input.financial.closure_start_year = 2031;
        let schedule = build_schedule(&input.phase_durations);
        let cashflows =
            annual_cashflows(&[], &schedule, &input.phase_durations, &input.financial);

        assert_eq!(cashflows.first().unwrap().year, 2031);
        assert_eq!(
            cashflows.last().unwrap().year,
            2031 + schedule.total_duration_years as i32
        );
        assert_eq!(cashflows.len(), schedule.total_duration_years as usize + 1);
    }
}
