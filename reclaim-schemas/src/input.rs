use crate::phase::ClosurePhase;
use serde::{Deserialize, Serialize};

/// How intensively the site is monitored after rehabilitation works finish.
/// Selects one of three annual monitoring rates from [`UnitRates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringIntensity {
    Low,
    Medium,
    High,
}

/// Physical site dimensions, counts and flags that drive the cost model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantities {
    /// Total disturbed footprint requiring rehabilitation [ha].
    pub disturbed_area_ha: f64,
    /// Topsoil replacement depth over the disturbed footprint [m].
    pub topsoil_thickness_m: f64,
    /// Tailings storage facility footprint [ha].
    pub tsf_area_ha: f64,
    /// Engineered cover thickness over the TSF [m].
    pub tsf_cover_thickness_m: f64,
    /// Waste rock dump footprint [ha].
    pub wrd_footprint_ha: f64,
    /// Average cut depth for WRD reshaping [m].
    pub wrd_reshaping_depth_m: f64,
    /// Survey-measured total earthworks volume [m3]. When present this
    /// overrides the parametric TSF + WRD volume estimate; it is the escape
    /// hatch for sites with actual survey data.
    pub total_earthworks_volume_m3: Option<f64>,
    /// Number of buildings and fixed structures to demolish.
    pub number_of_buildings: u32,
    /// Haul and access roads to rip and rehabilitate [km].
    pub road_length_km: f64,
    /// Water treatment plant throughput [ML/day].
    pub water_treatment_flow_ml_per_day: f64,
    /// Years of active water treatment.
    pub water_treatment_duration_years: f64,
    /// Whether a hazardous materials removal campaign is required.
    pub hazardous_materials_present: bool,
    /// Footprint of the hazardous materials campaign [ha].
    pub hazardous_materials_area_ha: f64,
    /// Whether a community and heritage programme is funded.
    pub community_heritage_program: bool,
    pub monitoring_intensity: MonitoringIntensity,
}

/// Cost-per-unit constants and dimensionless adjustment factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRates {
    pub mobilisation_lump_sum: f64,
    pub demolition_per_building: f64,
    pub earthworks_per_m3: f64,
    pub topsoil_per_m3: f64,
    /// Base capping rate [$/m2] before thickness scaling.
    pub capping_base_per_m2: f64,
    /// Multiplier applied per metre of cover/reshaping depth.
    pub capping_thickness_factor: f64,
    /// Swell factor applied to in-situ WRD reshaping volumes.
    pub bulking_factor: f64,
    /// One-off water treatment plant cost before intensity scaling.
    pub water_capex_base: f64,
    pub water_opex_per_ml: f64,
    /// Treatment complexity multiplier applied to both capex and opex.
    pub water_intensity_factor: f64,
    pub revegetation_per_ha: f64,
    /// Ecosystem complexity multiplier on the revegetation rate.
    pub revegetation_complexity_factor: f64,
    pub erosion_controls_per_ha: f64,
    pub road_rehabilitation_per_km: f64,
    pub hazardous_materials_per_ha: f64,
    pub community_heritage_lump_sum: f64,
    pub monitoring_low_per_year: f64,
    pub monitoring_medium_per_year: f64,
    pub monitoring_high_per_year: f64,
}

impl UnitRates {
    /// The annual monitoring rate for the given intensity level.
    pub fn monitoring_rate_per_year(&self, intensity: MonitoringIntensity) -> f64 {
        match intensity {
            MonitoringIntensity::Low => self.monitoring_low_per_year,
            MonitoringIntensity::Medium => self.monitoring_medium_per_year,
            MonitoringIntensity::High => self.monitoring_high_per_year,
        }
    }
}

/// Percentage rates for the indirect cost waterfall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndirectRates {
    pub site_establishment_percent: f64,
    pub contractor_margin_percent: f64,
    pub contingency_percent: f64,
    pub owners_cost_percent: f64,
}

/// Five independent risk scores, each on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub contamination: f64,
    pub geotechnical: f64,
    pub water_quality: f64,
    pub regulatory: f64,
    pub logistics: f64,
}

/// Whether the discount rate is interpreted as real or nominal.
///
/// Accepted as input but currently has no numeric effect: the configured
/// discount rate is applied as-is in both modes. Flagged for product
/// clarification rather than silently corrected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountMode {
    Real,
    Nominal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialParams {
    /// Calendar year in which the closure programme starts.
    pub closure_start_year: i32,
    /// Flat annual cost escalation [%].
    pub escalation_rate_percent: f64,
    /// Annual discount rate [%].
    pub discount_rate_percent: f64,
    pub discount_mode: DiscountMode,
}

/// Configured duration, in whole years, of each closure phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseDurations {
    pub planning_approvals: u32,
    pub decommissioning_demolition: u32,
    pub earthworks_landform: u32,
    pub tailings_wrd_rehabilitation: u32,
    pub water_management: u32,
    pub revegetation_ecosystem: u32,
    pub monitoring_maintenance: u32,
    pub relinquishment_post_closure: u32,
}

impl PhaseDurations {
    /// Duration of the given phase. Total over the closed phase enumeration.
    pub fn duration(&self, phase: ClosurePhase) -> u32 {
        match phase {
            ClosurePhase::PlanningApprovals => self.planning_approvals,
            ClosurePhase::DecommissioningDemolition => self.decommissioning_demolition,
            ClosurePhase::EarthworksLandform => self.earthworks_landform,
            ClosurePhase::TailingsWrdRehabilitation => self.tailings_wrd_rehabilitation,
            ClosurePhase::WaterManagement => self.water_management,
            ClosurePhase::RevegetationEcosystem => self.revegetation_ecosystem,
            ClosurePhase::MonitoringMaintenance => self.monitoring_maintenance,
            ClosurePhase::RelinquishmentPostClosure => self.relinquishment_post_closure,
        }
    }
}

/// The complete, externally validated input to one estimation run.
///
/// The engine assumes every numeric field is finite and within its domain
/// bounds; range checking is the responsibility of the caller's validation
/// layer and is never repeated inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub quantities: Quantities,
    pub unit_rates: UnitRates,
    pub indirect_rates: IndirectRates,
    pub risk_factors: RiskFactors,
    pub financial: FinancialParams,
    pub phase_durations: PhaseDurations,
}
