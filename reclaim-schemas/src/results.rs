use crate::phase::{ClosurePhase, CostCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Physical and risk quantities derived from the raw inputs, computed once
/// per estimation run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedQuantities {
    pub disturbed_area_m2: f64,
    pub tsf_area_m2: f64,
    pub wrd_area_m2: f64,
    pub tsf_capping_volume_m3: f64,
    pub wrd_earthworks_volume_m3: f64,
    pub total_earthworks_volume_m3: f64,
    pub topsoil_volume_m3: f64,
    pub total_water_treatment_ml: f64,
    /// Composite weighted risk score, 0-100, rounded to one decimal.
    pub risk_score: f64,
    /// Contingency uplift derived from the risk score, 0-50 [%].
    pub risk_uplift_percent: f64,
}

/// One itemized cost line. `subtotal` is always `quantity * unit_rate`;
/// lump sums carry a quantity of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemCost {
    pub category: CostCategory,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_rate: f64,
    pub subtotal: f64,
    pub phase: ClosurePhase,
}

/// Start year offsets (relative to the closure start year) for every phase,
/// plus the overall programme length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSchedule {
    pub start_years: BTreeMap<ClosurePhase, u32>,
    pub total_duration_years: u32,
}

impl PhaseSchedule {
    /// Start year offset of the given phase. The map is built total over the
    /// phase enumeration, so the fallback is never reached in practice.
    pub fn start_year(&self, phase: ClosurePhase) -> u32 {
        self.start_years.get(&phase).copied().unwrap_or(0)
    }
}

/// Costs falling in one project year, with escalation and discounting
/// applied and running cumulative totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualCashflow {
    /// Year offset from the start of the programme (0-based).
    pub year_index: u32,
    /// Absolute calendar year.
    pub year: i32,
    pub nominal_cost: f64,
    pub escalated_cost: f64,
    pub discounted_cost: f64,
    pub cumulative_nominal: f64,
    pub cumulative_discounted: f64,
    /// Nominal cost contribution per phase; every phase is present, phases
    /// with no spend that year carry 0.
    pub phase_costs: BTreeMap<ClosurePhase, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseBreakdown {
    pub phase: ClosurePhase,
    pub total_cost: f64,
    pub percent_of_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: CostCategory,
    pub total_cost: f64,
    pub percent_of_total: f64,
}

/// Outcome of perturbing a single input driver by +/- the variation
/// percentage and re-running the whole pipeline at both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityResult {
    pub driver: String,
    pub unit: String,
    pub base_value: f64,
    pub variation_percent: f64,
    pub low_total_cost: f64,
    pub high_total_cost: f64,
    pub low_npv: f64,
    pub high_npv: f64,
    pub total_cost_delta: f64,
    pub npv_delta: f64,
}

/// The root output aggregate of one estimation run. Plain serializable data
/// with no behavior, produced atomically by the engine's entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub derived_quantities: DerivedQuantities,
    pub line_items: Vec<LineItemCost>,
    pub direct_works_cost: f64,
    pub indirect_costs: f64,
    pub total_nominal_cost: f64,
    /// Net present value of the programme: the sum of all discounted
    /// annual cashflows.
    pub total_discounted_cost: f64,
    pub peak_cashflow_year: i32,
    pub peak_cashflow_cost: f64,
    pub cashflows: Vec<AnnualCashflow>,
    pub phase_breakdown: Vec<PhaseBreakdown>,
    pub category_breakdown: Vec<CategoryBreakdown>,
    pub sensitivity: Vec<SensitivityResult>,
    pub monitoring_cost_share_percent: f64,
    pub total_duration_years: u32,
    pub schedule: PhaseSchedule,
}
