//! The scoring evaluation: five band deltas on a neutral baseline.

use sandhya_solar::{GeoCoordinate, next_event};
use sandhya_time::LocalMoment;

use crate::bands::{
    classify_aerosol, classify_air_quality, classify_cloud_cover, classify_cloud_type,
    classify_humidity,
};
use crate::types::{AtmosphericInput, Factors, PredictionResult};

/// Neutral starting probability before any factor is applied.
pub const BASE_PROBABILITY: f64 = 0.5;

fn classify_all(input: &AtmosphericInput) -> Factors {
    Factors {
        cloud_cover: classify_cloud_cover(input.cloud_cover_pct),
        cloud_type: classify_cloud_type(input.cloud_type),
        humidity: classify_humidity(input.humidity_pct),
        aerosol: classify_aerosol(input.aerosol_index),
        air_quality: classify_air_quality(input.air_quality_index),
    }
}

fn compose(input: &AtmosphericInput) -> (f64, Factors) {
    let factors = classify_all(input);
    let raw = BASE_PROBABILITY
        + factors.cloud_cover.score
        + factors.cloud_type.score
        + factors.humidity.score
        + factors.aerosol.score
        + factors.air_quality.score;
    (raw.clamp(0.0, 1.0), factors)
}

/// Score atmospheric conditions without a location; `sun_times` is absent.
///
/// Pure and total: identical inputs give bit-identical results, and no
/// input value can make it fail.
pub fn evaluate(input: &AtmosphericInput) -> PredictionResult {
    let (probability, factors) = compose(input);
    PredictionResult {
        probability,
        sun_times: None,
        factors,
    }
}

/// Score atmospheric conditions and attach the next sun event for the
/// given coordinate and local instant.
///
/// The probability and factors are identical to [`evaluate`]; only the
/// `sun_times` field differs. The UTC offset follows the POSIX sign
/// convention (minutes of UTC minus local, positive west).
pub fn evaluate_at(
    input: &AtmosphericInput,
    coordinate: GeoCoordinate,
    now: LocalMoment,
    tz_offset_min: i32,
) -> PredictionResult {
    let (probability, factors) = compose(input);
    PredictionResult {
        probability,
        sun_times: Some(next_event(coordinate, now, tz_offset_min)),
        factors,
    }
}
