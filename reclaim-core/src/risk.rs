//! Composite site risk scoring and the contingency uplift it drives.

use reclaim_schemas::input::RiskFactors;

// Fixed weights, summing to 1.0.
const CONTAMINATION_WEIGHT: f64 = 0.25;
const GEOTECHNICAL_WEIGHT: f64 = 0.20;
const WATER_QUALITY_WEIGHT: f64 = 0.25;
const REGULATORY_WEIGHT: f64 = 0.15;
const LOGISTICS_WEIGHT: f64 = 0.15;

/// Piecewise-linear uplift segments as (score_lo, score_hi, uplift_lo, uplift_hi).
/// Segment ends meet exactly so the mapping is continuous and non-decreasing
/// over the whole 0-100 score domain.
const UPLIFT_SEGMENTS: [(f64, f64, f64, f64); 5] = [
    (0.0, 20.0, 0.0, 5.0),
    (20.0, 40.0, 5.0, 10.0),
    (40.0, 60.0, 10.0, 20.0),
    (60.0, 80.0, 20.0, 35.0),
    (80.0, 100.0, 35.0, 50.0),
];

/// Weighted composite of the five 0-100 risk factors, rounded to one decimal.
pub fn composite_risk_score(factors: &RiskFactors) -> f64 {
    let score = factors.contamination * CONTAMINATION_WEIGHT
        + factors.geotechnical * GEOTECHNICAL_WEIGHT
        + factors.water_quality * WATER_QUALITY_WEIGHT
        + factors.regulatory * REGULATORY_WEIGHT
        + factors.logistics * LOGISTICS_WEIGHT;
    (score * 10.0).round() / 10.0
}

/// Maps a 0-100 composite risk score to a contingency uplift percentage in
/// the 0-50 range by linear interpolation within the matching segment.
pub fn risk_score_to_uplift(score: f64) -> f64 {
    for (score_lo, score_hi, uplift_lo, uplift_hi) in UPLIFT_SEGMENTS {
        if score <= score_hi {
            let fraction = (score - score_lo) / (score_hi - score_lo);
            return uplift_lo + fraction * (uplift_hi - uplift_lo);
        }
    }
    50.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_factors(value: f64) -> RiskFactors {
        RiskFactors {
            contamination: value,
            geotechnical: value,
            water_quality: value,
            regulatory: value,
            logistics: value,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let total = CONTAMINATION_WEIGHT
            + GEOTECHNICAL_WEIGHT
            + WATER_QUALITY_WEIGHT
            + REGULATORY_WEIGHT
            + LOGISTICS_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn uniform_factors_score_as_themselves() {
        assert_eq!(composite_risk_score(&uniform_factors(0.0)), 0.0);
        assert_eq!(composite_risk_score(&uniform_factors(50.0)), 50.0);
        assert_eq!(composite_risk_score(&uniform_factors(100.0)), 100.0);
    }

    #[test]
    fn score_rounds_to_one_decimal() {
        let factors = RiskFactors {
            contamination: 33.0,
            geotechnical: 41.0,
            water_quality: 27.0,
            regulatory: 58.0,
            logistics: 12.0,
        };
        // 8.25 + 8.2 + 6.75 + 8.7 + 1.8 = 33.7
        assert_eq!(composite_risk_score(&factors), 33.7);
    }

    #[test]
    fn uplift_matches_segment_breakpoints_exactly() {
        assert_eq!(risk_score_to_uplift(0.0), 0.0);
        assert_eq!(risk_score_to_uplift(20.0), 5.0);
        assert_eq!(risk_score_to_uplift(40.0), 10.0);
        assert_eq!(risk_score_to_uplift(60.0), 20.0);
        assert_eq!(risk_score_to_uplift(80.0), 35.0);
        assert_eq!(risk_score_to_uplift(100.0), 50.0);
    }

    #[test]
    fn uplift_interpolates_within_segments() {
        assert!((risk_score_to_uplift(10.0) - 2.5).abs() < 1e-9);
        assert!((risk_score_to_uplift(50.0) - 15.0).abs() < 1e-9);
        assert!((risk_score_to_uplift(90.0) - 42.5).abs() < 1e-9);
    }

    #[test]
    fn uplift_is_monotone_over_the_score_domain() {
        let mut previous = risk_score_to_uplift(0.0);
        let mut score = 0.0;
        while score <= 100.0 {
            let uplift = risk_score_to_uplift(score);
            assert!(
                uplift >= previous,
                "uplift decreased at score {score}: {uplift} < {previous}"
            );
            previous = uplift;
            score += 0.25;
        }
    }
}
