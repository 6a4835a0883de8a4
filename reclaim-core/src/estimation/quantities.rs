use crate::conversion::ha_to_m2;
use crate::risk::{composite_risk_score, risk_score_to_uplift};
use reclaim_schemas::{input::InputState, results::DerivedQuantities};

const DAYS_PER_YEAR: f64 = 365.0;

/// Converts the raw inputs into the physical and risk quantities that drive
/// the cost model. Pure; computed once per estimation run.
pub fn derive_quantities(input: &InputState) -> DerivedQuantities {
    let quantities = &input.quantities;
    let rates = &input.unit_rates;

    let disturbed_area_m2 = ha_to_m2(quantities.disturbed_area_ha);
    let tsf_area_m2 = ha_to_m2(quantities.tsf_area_ha);
    let wrd_area_m2 = ha_to_m2(quantities.wrd_footprint_ha);

    let tsf_capping_volume_m3 = tsf_area_m2 * quantities.tsf_cover_thickness_m;
    let wrd_earthworks_volume_m3 =
        wrd_area_m2 * quantities.wrd_reshaping_depth_m * rates.bulking_factor;

    // A survey-measured override, when present, replaces the parametric
    // TSF + WRD estimate wholesale; sites with real survey data bypass the
    // parametric model entirely.
    let total_earthworks_volume_m3 = quantities
        .total_earthworks_volume_m3
        .unwrap_or(tsf_capping_volume_m3 + wrd_earthworks_volume_m3);

    let topsoil_volume_m3 = disturbed_area_m2 * quantities.topsoil_thickness_m;

    let total_water_treatment_ml = quantities.water_treatment_flow_ml_per_day
        * DAYS_PER_YEAR
        * quantities.water_treatment_duration_years;

    let risk_score = composite_risk_score(&input.risk_factors);
    let risk_uplift_percent = risk_score_to_uplift(risk_score);

    DerivedQuantities {
        disturbed_area_m2,
        tsf_area_m2,
        wrd_area_m2,
        tsf_capping_volume_m3,
        wrd_earthworks_volume_m3,
        total_earthworks_volume_m3,
        topsoil_volume_m3,
        total_water_treatment_ml,
        risk_score,
        risk_uplift_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::test_fixtures::default_input;

    #[test]
    fn areas_and_volumes_follow_the_parametric_model() {
        let input = default_input();
        let derived = derive_quantities(&input);

        assert_eq!(derived.tsf_area_m2, 1_000_000.0); // 100 ha
        assert_eq!(derived.wrd_area_m2, 2_000_000.0); // 200 ha
        assert!(
            (derived.tsf_capping_volume_m3
                - derived.tsf_area_m2 * input.quantities.tsf_cover_thickness_m)
                .abs()
                < 1e-6
        );
        let expected_wrd = derived.wrd_area_m2
            * input.quantities.wrd_reshaping_depth_m
            * input.unit_rates.bulking_factor;
        assert!((derived.wrd_earthworks_volume_m3 - expected_wrd).abs() < 1e-6);
        assert!(
            (derived.total_earthworks_volume_m3
                - (derived.tsf_capping_volume_m3 + derived.wrd_earthworks_volume_m3))
                .abs()
                < 1e-6
        );
    }

    #[test]
    fn survey_override_replaces_parametric_volume() {
        let mut input = default_input();
        input.quantities.total_earthworks_volume_m3 = Some(123_456.0);
        let derived = derive_quantities(&input);
        assert_eq!(derived.total_earthworks_volume_m3, 123_456.0);
        // The component volumes are still reported unchanged.
        assert!(derived.tsf_capping_volume_m3 > 0.0);
        assert!(derived.wrd_earthworks_volume_m3 > 0.0);
    }

    #[test]
    fn water_volume_is_flow_times_days_times_years() {
        let mut input = default_input();
        input.quantities.water_treatment_flow_ml_per_day = 2.0;
        input.quantities.water_treatment_duration_years = 10.0;
        let derived = derive_quantities(&input);
        assert_eq!(derived.total_water_treatment_ml, 2.0 * 365.0 * 10.0);
    }
}
