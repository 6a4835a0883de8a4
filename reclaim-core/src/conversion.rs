//! Area and volume unit helpers shared across the estimation pipeline.

const M2_PER_HA: f64 = 10_000.0;

/// Hectares to square metres.
pub fn ha_to_m2(ha: f64) -> f64 {
    ha * M2_PER_HA
}

/// Square metres to hectares.
pub fn m2_to_ha(m2: f64) -> f64 {
    m2 / M2_PER_HA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hectare_conversion_round_trips() {
        for ha in [0.0, 0.37, 1.0, 250.0, 12_345.6] {
            assert!((m2_to_ha(ha_to_m2(ha)) - ha).abs() < 1e-9);
        }
    }

    #[test]
    fn one_hectare_is_ten_thousand_square_metres() {
        assert_eq!(ha_to_m2(1.0), 10_000.0);
        assert_eq!(m2_to_ha(10_000.0), 1.0);
    }
}
