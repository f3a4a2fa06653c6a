//! Mapping raw weather observations into scorer inputs.
//!
//! Condition codes follow the OpenWeatherMap ID ranges (2xx thunderstorm,
//! 3xx drizzle, 5xx rain, 6xx snow, 7xx atmosphere, 800 clear, 80x
//! clouds). Visibility-derived aerosol and AQI figures are coarse
//! plausibility estimates, not instrument-grade values.

use sandhya_score::{AtmosphericInput, CloudType};

/// Dominant cloud genus for a weather condition code plus its text
/// description. Unknown codes default to cumulus.
pub fn cloud_type_from_condition(condition_id: u32, description: &str) -> CloudType {
    match condition_id {
        200..=299 => CloudType::Cumulonimbus,
        300..=399 => CloudType::Nimbostratus,
        500..=599 => CloudType::Nimbostratus,
        600..=699 => CloudType::Stratus,
        700..=799 => CloudType::Stratus,
        800 => CloudType::Cirrus,
        801.. => {
            if description.contains("few") || description.contains("scattered") {
                CloudType::Cumulus
            } else if description.contains("broken") || description.contains("overcast") {
                CloudType::Stratus
            } else {
                CloudType::Cumulus
            }
        }
        _ => CloudType::Cumulus,
    }
}

/// Aerosol index on the 0-5 scale from horizontal visibility in meters.
/// Lower visibility reads as higher suspended-particle density.
pub fn aerosol_index_from_visibility(visibility_m: f64) -> f64 {
    if visibility_m >= 10_000.0 {
        0.5
    } else if visibility_m >= 5_000.0 {
        1.0
    } else if visibility_m >= 2_000.0 {
        2.0
    } else if visibility_m >= 1_000.0 {
        3.0
    } else if visibility_m >= 500.0 {
        4.0
    } else {
        5.0
    }
}

/// Rough AQI estimate from visibility and humidity.
///
/// Baseline 50 plus visibility penalties; high humidity reduces
/// visibility without pollution, so above 80% the estimate drops by 30
/// (never below the baseline). Clamped to [0, 300].
pub fn estimate_aqi_from_visibility(visibility_m: f64, humidity_pct: f64) -> f64 {
    let mut aqi: f64 = 50.0;

    if visibility_m < 1_000.0 {
        aqi += 150.0;
    } else if visibility_m < 2_000.0 {
        aqi += 100.0;
    } else if visibility_m < 5_000.0 {
        aqi += 50.0;
    } else if visibility_m < 10_000.0 {
        aqi += 25.0;
    }

    if humidity_pct > 80.0 {
        aqi = (aqi - 30.0).max(50.0);
    }

    aqi.clamp(0.0, 300.0)
}

/// The fields a weather API response supplies, already extracted from
/// its wire format by the fetch layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReading {
    /// Cloud fraction percentage, [0, 100].
    pub cloud_cover_pct: f64,
    /// Provider condition code (OpenWeatherMap ID ranges).
    pub condition_id: u32,
    /// Provider condition text, lowercase.
    pub condition_text: String,
    /// Relative humidity percentage, [0, 100].
    pub humidity_pct: f64,
    /// Horizontal visibility in meters.
    pub visibility_m: f64,
}

impl ApiReading {
    /// Assemble the scorer input this reading implies.
    pub fn to_input(&self) -> AtmosphericInput {
        AtmosphericInput {
            cloud_cover_pct: self.cloud_cover_pct,
            cloud_type: cloud_type_from_condition(self.condition_id, &self.condition_text),
            humidity_pct: self.humidity_pct,
            aerosol_index: aerosol_index_from_visibility(self.visibility_m),
            air_quality_index: estimate_aqi_from_visibility(self.visibility_m, self.humidity_pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_code_ranges() {
        assert_eq!(cloud_type_from_condition(211, "thunderstorm"), CloudType::Cumulonimbus);
        assert_eq!(cloud_type_from_condition(301, "drizzle"), CloudType::Nimbostratus);
        assert_eq!(cloud_type_from_condition(502, "heavy rain"), CloudType::Nimbostratus);
        assert_eq!(cloud_type_from_condition(601, "snow"), CloudType::Stratus);
        assert_eq!(cloud_type_from_condition(741, "fog"), CloudType::Stratus);
        assert_eq!(cloud_type_from_condition(800, "clear sky"), CloudType::Cirrus);
    }

    #[test]
    fn cloud_codes_split_on_description() {
        assert_eq!(cloud_type_from_condition(801, "few clouds"), CloudType::Cumulus);
        assert_eq!(cloud_type_from_condition(802, "scattered clouds"), CloudType::Cumulus);
        assert_eq!(cloud_type_from_condition(803, "broken clouds"), CloudType::Stratus);
        assert_eq!(cloud_type_from_condition(804, "overcast clouds"), CloudType::Stratus);
        assert_eq!(cloud_type_from_condition(804, "clouds"), CloudType::Cumulus);
    }

    #[test]
    fn unknown_codes_default_to_cumulus() {
        assert_eq!(cloud_type_from_condition(0, ""), CloudType::Cumulus);
        assert_eq!(cloud_type_from_condition(450, ""), CloudType::Cumulus);
    }

    #[test]
    fn aerosol_steps_with_visibility() {
        assert_eq!(aerosol_index_from_visibility(12_000.0), 0.5);
        assert_eq!(aerosol_index_from_visibility(10_000.0), 0.5);
        assert_eq!(aerosol_index_from_visibility(7_000.0), 1.0);
        assert_eq!(aerosol_index_from_visibility(3_000.0), 2.0);
        assert_eq!(aerosol_index_from_visibility(1_500.0), 3.0);
        assert_eq!(aerosol_index_from_visibility(700.0), 4.0);
        assert_eq!(aerosol_index_from_visibility(200.0), 5.0);
    }

    #[test]
    fn aqi_baseline_in_clear_air() {
        assert_eq!(estimate_aqi_from_visibility(15_000.0, 50.0), 50.0);
    }

    #[test]
    fn aqi_rises_as_visibility_drops() {
        assert_eq!(estimate_aqi_from_visibility(8_000.0, 50.0), 75.0);
        assert_eq!(estimate_aqi_from_visibility(3_000.0, 50.0), 100.0);
        assert_eq!(estimate_aqi_from_visibility(1_500.0, 50.0), 150.0);
        assert_eq!(estimate_aqi_from_visibility(800.0, 50.0), 200.0);
    }

    #[test]
    fn high_humidity_discounts_aqi_but_not_below_baseline() {
        assert_eq!(estimate_aqi_from_visibility(800.0, 90.0), 170.0);
        assert_eq!(estimate_aqi_from_visibility(15_000.0, 90.0), 50.0);
    }

    #[test]
    fn reading_assembles_scorer_input() {
        let reading = ApiReading {
            cloud_cover_pct: 40.0,
            condition_id: 800,
            condition_text: "clear sky".to_string(),
            humidity_pct: 55.0,
            visibility_m: 10_000.0,
        };
        let input = reading.to_input();
        assert_eq!(input.cloud_type, CloudType::Cirrus);
        assert_eq!(input.aerosol_index, 0.5);
        assert_eq!(input.air_quality_index, 50.0);
        assert_eq!(input.cloud_cover_pct, 40.0);
    }
}
