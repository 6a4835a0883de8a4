//! Shared unit-test fixture: a mid-sized gold mine closure scenario.

use reclaim_schemas::input::{
    DiscountMode, FinancialParams, IndirectRates, InputState, MonitoringIntensity,
    PhaseDurations, Quantities, RiskFactors, UnitRates,
};

pub(crate) fn default_input() -> InputState {
    InputState {
        quantities: Quantities {
            disturbed_area_ha: 500.0,
            topsoil_thickness_m: 0.15,
            tsf_area_ha: 100.0,
            tsf_cover_thickness_m: 0.5,
            wrd_footprint_ha: 200.0,
            wrd_reshaping_depth_m: 0.4,
            total_earthworks_volume_m3: None,
            number_of_buildings: 15,
            road_length_km: 25.0,
            water_treatment_flow_ml_per_day: 1.5,
            water_treatment_duration_years: 10.0,
            hazardous_materials_present: true,
            hazardous_materials_area_ha: 2.5,
            community_heritage_program: true,
            monitoring_intensity: MonitoringIntensity::Medium,
        },
        unit_rates: UnitRates {
            mobilisation_lump_sum: 500_000.0,
            demolition_per_building: 45_000.0,
            earthworks_per_m3: 6.5,
            topsoil_per_m3: 9.0,
            capping_base_per_m2: 12.0,
            capping_thickness_factor: 1.4,
            bulking_factor: 1.25,
            water_capex_base: 4_000_000.0,
            water_opex_per_ml: 650.0,
            water_intensity_factor: 1.2,
            revegetation_per_ha: 4_500.0,
            revegetation_complexity_factor: 1.3,
            erosion_controls_per_ha: 850.0,
            road_rehabilitation_per_km: 30_000.0,
            hazardous_materials_per_ha: 120_000.0,
            community_heritage_lump_sum: 250_000.0,
            monitoring_low_per_year: 80_000.0,
            monitoring_medium_per_year: 180_000.0,
            monitoring_high_per_year: 320_000.0,
        },
        indirect_rates: IndirectRates {
            site_establishment_percent: 5.0,
            contractor_margin_percent: 8.0,
            contingency_percent: 12.0,
            owners_cost_percent: 6.0,
        },
        risk_factors: RiskFactors {
            contamination: 45.0,
            geotechnical: 35.0,
            water_quality: 50.0,
            regulatory: 40.0,
            logistics: 30.0,
        },
        financial: FinancialParams {
            closure_start_year: 2030,
            escalation_rate_percent: 3.0,
            discount_rate_percent: 7.0,
            discount_mode: DiscountMode::Nominal,
        },
        phase_durations: PhaseDurations {
            planning_approvals: 2,
            decommissioning_demolition: 2,
            earthworks_landform: 3,
            tailings_wrd_rehabilitation: 4,
            water_management: 10,
            revegetation_ecosystem: 2,
            monitoring_maintenance: 10,
            relinquishment_post_closure: 1,
        },
    }
}
