use reclaim_schemas::{
    input::{IndirectRates, InputState},
    phase::{ClosurePhase, CostCategory},
    results::{DerivedQuantities, LineItemCost},
};

fn line_item(
    category: CostCategory,
    description: &str,
    quantity: f64,
    unit: &str,
    unit_rate: f64,
    phase: ClosurePhase,
) -> LineItemCost {
    LineItemCost {
        category,
        description: description.to_string(),
        quantity,
        unit: unit.to_string(),
        unit_rate,
        subtotal: quantity * unit_rate,
        phase,
    }
}

fn lump_sum(
    category: CostCategory,
    description: &str,
    amount: f64,
    phase: ClosurePhase,
) -> LineItemCost {
    line_item(category, description, 1.0, "lump sum", amount, phase)
}

/// Builds the itemized direct works register. Each candidate line carries an
/// inclusion condition; a line is emitted only when its driving quantity is
/// positive (or its flag enabled), so the register length varies with the
/// input. Declarative on purpose: the table below is the single place that
/// decides which items exist under which inputs.
pub fn direct_works(input: &InputState, derived: &DerivedQuantities) -> Vec<LineItemCost> {
    let quantities = &input.quantities;
    let rates = &input.unit_rates;

    let tsf_capping_rate = rates.capping_base_per_m2
        * (quantities.tsf_cover_thickness_m * rates.capping_thickness_factor);
    // WRD capping is intentionally costed at half the intensity of TSF
    // capping rather than derived from first principles.
    let wrd_capping_rate = rates.capping_base_per_m2
        * (quantities.wrd_reshaping_depth_m * rates.capping_thickness_factor * 0.5);

    let water_active = quantities.water_treatment_duration_years > 0.0
        && quantities.water_treatment_flow_ml_per_day > 0.0;

    let monitoring_years = f64::from(input.phase_durations.monitoring_maintenance);

    let candidates = vec![
        (
            true,
            lump_sum(
                CostCategory::Mobilisation,
                "Contractor mobilisation and demobilisation",
                rates.mobilisation_lump_sum,
                ClosurePhase::DecommissioningDemolition,
            ),
        ),
        (
            quantities.number_of_buildings > 0,
            line_item(
                CostCategory::Demolition,
                "Demolition of buildings and fixed structures",
                f64::from(quantities.number_of_buildings),
                "buildings",
                rates.demolition_per_building,
                ClosurePhase::DecommissioningDemolition,
            ),
        ),
        (
            derived.total_earthworks_volume_m3 > 0.0,
            line_item(
                CostCategory::Earthworks,
                "Bulk earthworks and landform reshaping",
                derived.total_earthworks_volume_m3,
                "m3",
                rates.earthworks_per_m3,
                ClosurePhase::EarthworksLandform,
            ),
        ),
        (
            derived.topsoil_volume_m3 > 0.0,
            line_item(
                CostCategory::Earthworks,
                "Topsoil recovery and placement",
                derived.topsoil_volume_m3,
                "m3",
                rates.topsoil_per_m3,
                ClosurePhase::EarthworksLandform,
            ),
        ),
        (
            quantities.tsf_area_ha > 0.0,
            line_item(
                CostCategory::TsfClosure,
                "TSF capping and cover construction",
                derived.tsf_area_m2,
                "m2",
                tsf_capping_rate,
                ClosurePhase::TailingsWrdRehabilitation,
            ),
        ),
        (
            quantities.wrd_footprint_ha > 0.0,
            line_item(
                CostCategory::WrdRehabilitation,
                "WRD reshaping and cover construction",
                derived.wrd_area_m2,
                "m2",
                wrd_capping_rate,
                ClosurePhase::TailingsWrdRehabilitation,
            ),
        ),
        (
            water_active,
            lump_sum(
                CostCategory::WaterTreatmentCapex,
                "Water treatment plant construction",
                rates.water_capex_base * rates.water_intensity_factor,
                ClosurePhase::WaterManagement,
            ),
        ),
        (
            water_active,
            line_item(
                CostCategory::WaterTreatmentOpex,
                "Water treatment plant operation",
                derived.total_water_treatment_ml,
                "ML",
                rates.water_opex_per_ml * rates.water_intensity_factor,
                ClosurePhase::WaterManagement,
            ),
        ),
        (
            quantities.disturbed_area_ha > 0.0,
            line_item(
                CostCategory::Revegetation,
                "Revegetation and ecosystem establishment",
                quantities.disturbed_area_ha,
                "ha",
                rates.revegetation_per_ha * rates.revegetation_complexity_factor,
                ClosurePhase::RevegetationEcosystem,
            ),
        ),
        (
            quantities.disturbed_area_ha > 0.0,
            line_item(
                CostCategory::ErosionControls,
                "Erosion and sediment controls",
                quantities.disturbed_area_ha,
                "ha",
                rates.erosion_controls_per_ha,
                ClosurePhase::EarthworksLandform,
            ),
        ),
        (
            quantities.road_length_km > 0.0,
            line_item(
                CostCategory::RoadRehabilitation,
                "Road ripping and rehabilitation",
                quantities.road_length_km,
                "km",
                rates.road_rehabilitation_per_km,
                ClosurePhase::EarthworksLandform,
            ),
        ),
        (
            quantities.hazardous_materials_present && quantities.hazardous_materials_area_ha > 0.0,
            line_item(
                CostCategory::HazardousMaterials,
                "Hazardous materials removal and disposal",
                quantities.hazardous_materials_area_ha,
                "ha",
                rates.hazardous_materials_per_ha,
                ClosurePhase::DecommissioningDemolition,
            ),
        ),
        (
            quantities.community_heritage_program,
            lump_sum(
                CostCategory::CommunityHeritage,
                "Community and heritage programme",
                rates.community_heritage_lump_sum,
                ClosurePhase::PlanningApprovals,
            ),
        ),
        (
            true,
            line_item(
                CostCategory::Monitoring,
                "Post-closure environmental monitoring",
                monitoring_years,
                "years",
                rates.monitoring_rate_per_year(quantities.monitoring_intensity),
                ClosurePhase::MonitoringMaintenance,
            ),
        ),
    ];

    candidates
        .into_iter()
        .filter(|(include, _)| *include)
        .map(|(_, item)| item)
        .collect()
}

/// Builds the five indirect cost lines as a waterfall: each successive
/// percentage applies to the running subtotal including all prior indirect
/// items, mirroring how markups stack commercially. Contingency and the risk
/// uplift deliberately share the same base subtotal instead of compounding
/// on each other. The order is fixed and must not be rearranged.
pub fn indirect_costs(
    direct_works_total: f64,
    rates: &IndirectRates,
    risk_uplift_percent: f64,
) -> Vec<LineItemCost> {
    let site_establishment = direct_works_total * rates.site_establishment_percent / 100.0;

    let margin_base = direct_works_total + site_establishment;
    let contractor_margin = margin_base * rates.contractor_margin_percent / 100.0;

    let contingency_base = margin_base + contractor_margin;
    let contingency = contingency_base * rates.contingency_percent / 100.0;
    let risk_uplift = contingency_base * risk_uplift_percent / 100.0;

    let owners_base = contingency_base + contingency + risk_uplift;
    let owners_costs = owners_base * rates.owners_cost_percent / 100.0;

    vec![
        lump_sum(
            CostCategory::SiteEstablishment,
            &format!(
                "Site establishment and temporary facilities ({:.1}% of direct works)",
                rates.site_establishment_percent
            ),
            site_establishment,
            ClosurePhase::DecommissioningDemolition,
        ),
        lump_sum(
            CostCategory::ContractorMargin,
            &format!(
                "Contractor overhead and margin ({:.1}%)",
                rates.contractor_margin_percent
            ),
            contractor_margin,
            ClosurePhase::EarthworksLandform,
        ),
        lump_sum(
            CostCategory::Contingency,
            &format!("Estimating contingency ({:.1}%)", rates.contingency_percent),
            contingency,
            ClosurePhase::EarthworksLandform,
        ),
        lump_sum(
            CostCategory::RiskUplift,
            &format!("Risk-based uplift ({:.1}%)", risk_uplift_percent),
            risk_uplift,
            ClosurePhase::EarthworksLandform,
        ),
        lump_sum(
            CostCategory::OwnersCosts,
            &format!("Owner's costs ({:.1}%)", rates.owners_cost_percent),
            owners_costs,
            ClosurePhase::PlanningApprovals,
        ),
    ]
}
