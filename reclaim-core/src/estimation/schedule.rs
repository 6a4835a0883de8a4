use reclaim_schemas::{
    input::PhaseDurations,
    phase::ClosurePhase,
    results::PhaseSchedule,
};
use std::collections::BTreeMap;

/// Computes each phase's start year offset and the total programme duration.
///
/// The sequencing model is deliberately not a simple chain:
/// - planning runs first, then decommissioning;
/// - earthworks, tailings/WRD rehabilitation and water management all start
///   together once decommissioning finishes and run in parallel;
/// - revegetation waits for the longer of earthworks and tailings/WRD;
/// - monitoring follows revegetation;
/// - relinquishment waits for the longer of the water management and
///   monitoring tracks, reconciled with a `max()` at the end because water
///   management started earlier and may outlast everything else.
///
/// Total duration is therefore
/// `planning + decomm + max(earthworks, tsf_wrd) + reveg + max(water, monitoring) + relinquishment`.
pub fn build_schedule(durations: &PhaseDurations) -> PhaseSchedule {
    let planning = durations.planning_approvals;
    let decommissioning = durations.decommissioning_demolition;
    let earthworks = durations.earthworks_landform;
    let tsf_wrd = durations.tailings_wrd_rehabilitation;
    let water = durations.water_management;
    let revegetation = durations.revegetation_ecosystem;
    let monitoring = durations.monitoring_maintenance;
    let relinquishment = durations.relinquishment_post_closure;

    let decommissioning_start = planning;
    let works_start = decommissioning_start + decommissioning;
    let revegetation_start = works_start + earthworks.max(tsf_wrd);
    let monitoring_start = revegetation_start + revegetation;
    let relinquishment_start = monitoring_start + water.max(monitoring);
    let total_duration_years = relinquishment_start + relinquishment;

    let mut start_years = BTreeMap::new();
    start_years.insert(ClosurePhase::PlanningApprovals, 0);
    start_years.insert(ClosurePhase::DecommissioningDemolition, decommissioning_start);
    start_years.insert(ClosurePhase::EarthworksLandform, works_start);
    start_years.insert(ClosurePhase::TailingsWrdRehabilitation, works_start);
    start_years.insert(ClosurePhase::WaterManagement, works_start);
    start_years.insert(ClosurePhase::RevegetationEcosystem, revegetation_start);
    start_years.insert(ClosurePhase::MonitoringMaintenance, monitoring_start);
    start_years.insert(ClosurePhase::RelinquishmentPostClosure, relinquishment_start);

    PhaseSchedule {
        start_years,
        total_duration_years,
    }
}
