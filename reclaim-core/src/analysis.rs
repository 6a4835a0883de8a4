//! Post-processing passes over a completed estimate: phase and category
//! breakdowns, and one-at-a-time sensitivity analysis.

use crate::estimation::engine;
use reclaim_schemas::{
    input::InputState,
    phase::{ClosurePhase, CostCategory},
    results::{CategoryBreakdown, LineItemCost, PhaseBreakdown, SensitivityResult},
};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Default one-at-a-time perturbation applied to each sensitivity driver.
pub const DEFAULT_VARIATION_PERCENT: f64 = 10.0;

/// Rolls all line items (direct and indirect) into per-phase totals. Every
/// phase appears, including zero-cost ones; percentages are 0 when the grand
/// total is 0 rather than NaN.
pub fn phase_breakdown(line_items: &[LineItemCost]) -> Vec<PhaseBreakdown> {
    let grand_total: f64 = line_items.iter().map(|item| item.subtotal).sum();

    ClosurePhase::ALL
        .iter()
        .map(|phase| {
            let total_cost: f64 = line_items
                .iter()
                .filter(|item| item.phase == *phase)
                .map(|item| item.subtotal)
                .sum();
            let percent_of_total = if grand_total > 0.0 {
                total_cost / grand_total * 100.0
            } else {
                0.0
            };
            PhaseBreakdown {
                phase: *phase,
                total_cost,
                percent_of_total,
            }
        })
        .collect()
}

/// Rolls all line items into per-category totals. Unlike the phase
/// breakdown, zero-value categories are omitted and rows are sorted by
/// descending cost; the asymmetry is intentional and mirrors how the two
/// tables are presented.
pub fn category_breakdown(line_items: &[LineItemCost]) -> Vec<CategoryBreakdown> {
    let grand_total: f64 = line_items.iter().map(|item| item.subtotal).sum();

    let mut totals: BTreeMap<CostCategory, f64> = BTreeMap::new();
    for item in line_items {
        *totals.entry(item.category).or_insert(0.0) += item.subtotal;
    }

    let mut rows: Vec<CategoryBreakdown> = totals
        .into_iter()
        .filter(|(_, total_cost)| *total_cost > 0.0)
        .map(|(category, total_cost)| CategoryBreakdown {
            category,
            total_cost,
            percent_of_total: if grand_total > 0.0 {
                total_cost / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_cost
            .partial_cmp(&a.total_cost)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

/// One perturbable input parameter, addressed through getter/setter function
/// pointers so the driver list stays data rather than control flow.
pub struct SensitivityDriver {
    pub name: &'static str,
    pub unit: &'static str,
    pub get: fn(&InputState) -> f64,
    pub set: fn(&mut InputState, f64),
}

/// The fixed set of drivers wired into sensitivity analysis. Only these
/// eight of the many input parameters participate; widening the list is a
/// product decision, not an engine one.
pub fn sensitivity_drivers() -> Vec<SensitivityDriver> {
    vec![
        SensitivityDriver {
            name: "Disturbed area",
            unit: "ha",
            get: |s| s.quantities.disturbed_area_ha,
            set: |s, v| s.quantities.disturbed_area_ha = v,
        },
        SensitivityDriver {
            name: "Earthworks rate",
            unit: "$/m3",
            get: |s| s.unit_rates.earthworks_per_m3,
            set: |s, v| s.unit_rates.earthworks_per_m3 = v,
        },
        SensitivityDriver {
            name: "TSF area",
            unit: "ha",
            get: |s| s.quantities.tsf_area_ha,
            set: |s, v| s.quantities.tsf_area_ha = v,
        },
        SensitivityDriver {
            name: "TSF cover thickness",
            unit: "m",
            get: |s| s.quantities.tsf_cover_thickness_m,
            set: |s, v| s.quantities.tsf_cover_thickness_m = v,
        },
        SensitivityDriver {
            name: "Water treatment duration",
            unit: "years",
            get: |s| s.quantities.water_treatment_duration_years,
            set: |s, v| s.quantities.water_treatment_duration_years = v,
        },
        SensitivityDriver {
            name: "Contingency",
            unit: "%",
            get: |s| s.indirect_rates.contingency_percent,
            set: |s, v| s.indirect_rates.contingency_percent = v,
        },
        SensitivityDriver {
            name: "Discount rate",
            unit: "%",
            get: |s| s.financial.discount_rate_percent,
            set: |s, v| s.financial.discount_rate_percent = v,
        },
        SensitivityDriver {
            name: "Revegetation rate",
            unit: "$/ha",
            get: |s| s.unit_rates.revegetation_per_ha,
            set: |s, v| s.unit_rates.revegetation_per_ha = v,
        },
    ]
}

/// Perturbs each driver by +/- `variation_percent`, re-runs the full
/// pipeline at both ends, and records total-cost and NPV swings. Drivers
/// whose base value is exactly 0 are skipped: a percentage perturbation of
/// zero is both meaningless and a division hazard downstream. Results are
/// sorted by descending absolute total-cost delta.
pub fn sensitivity_analysis(
    input: &InputState,
    variation_percent: f64,
) -> Vec<SensitivityResult> {
    let mut results = Vec::new();

    for driver in sensitivity_drivers() {
        let base_value = (driver.get)(input);
        if base_value == 0.0 {
            continue;
        }

        let mut low_input = input.clone();
        (driver.set)(&mut low_input, base_value * (1.0 - variation_percent / 100.0));
        let mut high_input = input.clone();
        (driver.set)(&mut high_input, base_value * (1.0 + variation_percent / 100.0));

        let low = engine::evaluate(&low_input);
        let high = engine::evaluate(&high_input);

        results.push(SensitivityResult {
            driver: driver.name.to_string(),
            unit: driver.unit.to_string(),
            base_value,
            variation_percent,
            low_total_cost: low.total_nominal_cost,
            high_total_cost: high.total_nominal_cost,
            low_npv: low.total_discounted_cost,
            high_npv: high.total_discounted_cost,
            total_cost_delta: high.total_nominal_cost - low.total_nominal_cost,
            npv_delta: high.total_discounted_cost - low.total_discounted_cost,
        });
    }

    results.sort_by(|a, b| {
        b.total_cost_delta
            .abs()
            .partial_cmp(&a.total_cost_delta.abs())
            .unwrap_or(Ordering::Equal)
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::test_fixtures::default_input;

    #[test]
    fn phase_breakdown_covers_all_phases_and_sums_to_100() {
        let input = default_input();
        let results = engine::evaluate(&input);
        let breakdown = phase_breakdown(&results.line_items);

        assert_eq!(breakdown.len(), ClosurePhase::ALL.len());
        let percent_sum: f64 = breakdown.iter().map(|row| row.percent_of_total).sum();
        assert!((percent_sum - 100.0).abs() < 0.01);
    }

    #[test]
    fn phase_breakdown_of_nothing_is_all_zero() {
        let breakdown = phase_breakdown(&[]);
        assert_eq!(breakdown.len(), ClosurePhase::ALL.len());
        for row in breakdown {
            assert_eq!(row.total_cost, 0.0);
            assert_eq!(row.percent_of_total, 0.0);
        }
    }

    #[test]
    fn category_breakdown_omits_zero_rows_and_sorts_descending() {
        let input = default_input();
        let results = engine::evaluate(&input);
        let breakdown = category_breakdown(&results.line_items);

        assert!(breakdown.iter().all(|row| row.total_cost > 0.0));
        for pair in breakdown.windows(2) {
            assert!(pair[0].total_cost >= pair[1].total_cost);
        }
        let percent_sum: f64 = breakdown.iter().map(|row| row.percent_of_total).sum();
        assert!((percent_sum - 100.0).abs() < 0.01);
    }

    #[test]
    fn zero_base_drivers_are_skipped() {
        let mut input = default_input();
        input.quantities.water_treatment_duration_years = 0.0;
        let results = sensitivity_analysis(&input, DEFAULT_VARIATION_PERCENT);

        assert!(results
            .iter()
            .all(|row| row.driver != "Water treatment duration"));
        assert_eq!(results.len(), sensitivity_drivers().len() - 1);
    }

    #[test]
    fn low_never_exceeds_high_and_results_sort_by_cost_swing() {
        let input = default_input();
        let results = sensitivity_analysis(&input, DEFAULT_VARIATION_PERCENT);

        assert!(!results.is_empty());
        for row in &results {
            assert!(row.low_total_cost <= row.high_total_cost, "{}", row.driver);
        }
        for pair in results.windows(2) {
            assert!(pair[0].total_cost_delta.abs() >= pair[1].total_cost_delta.abs());
        }
    }

    #[test]
    fn discount_rate_moves_npv_but_not_nominal_cost() {
        let input = default_input();
        let results = sensitivity_analysis(&input, DEFAULT_VARIATION_PERCENT);
        let discount = results
            .iter()
            .find(|row| row.driver == "Discount rate")
            .expect("discount rate driver present");

        assert!((discount.total_cost_delta).abs() < 1e-6);
        // A higher discount rate lowers NPV, so the high end sits below the low end.
        assert!(discount.high_npv < discount.low_npv);
    }
}
