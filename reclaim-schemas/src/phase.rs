use serde::{Deserialize, Serialize};

/// The eight phases of a mine closure programme, in canonical execution order.
///
/// The order of the variants carries meaning: default sequencing starts at
/// `PlanningApprovals` and ends at `RelinquishmentPostClosure`, with the
/// earthworks, tailings/WRD and water management tracks deliberately
/// overlapping (see the scheduler in `reclaim-core`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ClosurePhase {
    PlanningApprovals,
    DecommissioningDemolition,
    EarthworksLandform,
    TailingsWrdRehabilitation,
    WaterManagement,
    RevegetationEcosystem,
    MonitoringMaintenance,
    RelinquishmentPostClosure,
}

impl ClosurePhase {
    /// All phases in canonical order.
    pub const ALL: [ClosurePhase; 8] = [
        ClosurePhase::PlanningApprovals,
        ClosurePhase::DecommissioningDemolition,
        ClosurePhase::EarthworksLandform,
        ClosurePhase::TailingsWrdRehabilitation,
        ClosurePhase::WaterManagement,
        ClosurePhase::RevegetationEcosystem,
        ClosurePhase::MonitoringMaintenance,
        ClosurePhase::RelinquishmentPostClosure,
    ];

    /// A human-readable label for reports and charts.
    pub fn display_name(&self) -> &'static str {
        match self {
            ClosurePhase::PlanningApprovals => "Planning & Approvals",
            ClosurePhase::DecommissioningDemolition => "Decommissioning & Demolition",
            ClosurePhase::EarthworksLandform => "Earthworks & Landform",
            ClosurePhase::TailingsWrdRehabilitation => "Tailings & WRD Rehabilitation",
            ClosurePhase::WaterManagement => "Water Management",
            ClosurePhase::RevegetationEcosystem => "Revegetation & Ecosystem",
            ClosurePhase::MonitoringMaintenance => "Monitoring & Maintenance",
            ClosurePhase::RelinquishmentPostClosure => "Relinquishment & Post-Closure",
        }
    }
}

/// Presentation grouping for cost line items. Categories never influence how
/// a cost is calculated or scheduled; they only drive breakdown tables and
/// charts. General earthworks and topsoil placement share the `Earthworks`
/// category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Mobilisation,
    Demolition,
    Earthworks,
    TsfClosure,
    WrdRehabilitation,
    WaterTreatmentCapex,
    WaterTreatmentOpex,
    Revegetation,
    ErosionControls,
    RoadRehabilitation,
    HazardousMaterials,
    CommunityHeritage,
    Monitoring,
    SiteEstablishment,
    ContractorMargin,
    Contingency,
    RiskUplift,
    OwnersCosts,
}

impl CostCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            CostCategory::Mobilisation => "Mobilisation",
            CostCategory::Demolition => "Demolition",
            CostCategory::Earthworks => "Earthworks",
            CostCategory::TsfClosure => "TSF Closure",
            CostCategory::WrdRehabilitation => "WRD Rehabilitation",
            CostCategory::WaterTreatmentCapex => "Water Treatment (Capex)",
            CostCategory::WaterTreatmentOpex => "Water Treatment (Opex)",
            CostCategory::Revegetation => "Revegetation",
            CostCategory::ErosionControls => "Erosion Controls",
            CostCategory::RoadRehabilitation => "Road Rehabilitation",
            CostCategory::HazardousMaterials => "Hazardous Materials",
            CostCategory::CommunityHeritage => "Community & Heritage",
            CostCategory::Monitoring => "Monitoring",
            CostCategory::SiteEstablishment => "Site Establishment",
            CostCategory::ContractorMargin => "Contractor Margin",
            CostCategory::Contingency => "Contingency",
            CostCategory::RiskUplift => "Risk Uplift",
            CostCategory::OwnersCosts => "Owner's Costs",
        }
    }
}
