//! Band classification per atmospheric dimension.
//!
//! Each dimension classifies into one of 2-3 mutually exclusive bands,
//! checked in a fixed order: the favorable range first (inclusive
//! boundaries), then the penalized extreme (strict comparisons), else
//! neutral. The threshold literals are deliberate and asymmetric; the
//! neutral gaps (e.g. aerosol in (2.5, 3.5]) are kept as-is rather than
//! smoothed.

use crate::types::{CloudType, FactorResult};

/// Ideal cloud-cover band, percent.
pub const CLOUD_COVER_IDEAL_MIN: f64 = 20.0;
pub const CLOUD_COVER_IDEAL_MAX: f64 = 50.0;
/// Below this the sky lacks a canvas; above the mirror bound it blocks light.
pub const CLOUD_COVER_CLEAR_BELOW: f64 = 10.0;
pub const CLOUD_COVER_OVERCAST_ABOVE: f64 = 70.0;

/// Favorable humidity band, percent.
pub const HUMIDITY_IDEAL_MIN: f64 = 30.0;
pub const HUMIDITY_IDEAL_MAX: f64 = 70.0;

/// Favorable aerosol band and the dimming threshold.
pub const AEROSOL_IDEAL_MIN: f64 = 0.5;
pub const AEROSOL_IDEAL_MAX: f64 = 2.5;
pub const AEROSOL_DIM_ABOVE: f64 = 3.5;

/// Favorable AQI band and the obscuring threshold.
pub const AQI_IDEAL_MIN: f64 = 50.0;
pub const AQI_IDEAL_MAX: f64 = 150.0;
pub const AQI_OBSCURE_ABOVE: f64 = 200.0;

/// Cloud cover: [20, 50] is the ideal canvas (+0.20); under 10 or over
/// 70 works against the display (-0.20); in between is neutral.
pub fn classify_cloud_cover(pct: f64) -> FactorResult {
    if pct >= CLOUD_COVER_IDEAL_MIN && pct <= CLOUD_COVER_IDEAL_MAX {
        FactorResult {
            score: 0.2,
            description: "Perfect cloud coverage for dramatic colors",
        }
    } else if pct < CLOUD_COVER_CLEAR_BELOW {
        FactorResult {
            score: -0.2,
            description: "Too clear - lacking cloud canvas",
        }
    } else if pct > CLOUD_COVER_OVERCAST_ABOVE {
        FactorResult {
            score: -0.2,
            description: "Too cloudy - blocking sunlight",
        }
    } else {
        FactorResult {
            score: 0.0,
            description: "Moderate cloud coverage",
        }
    }
}

/// Cloud genus: cirrus boosts (+0.15), stratus/nimbostratus block
/// (-0.15), cumulus and cumulonimbus are neutral.
pub fn classify_cloud_type(cloud_type: CloudType) -> FactorResult {
    match cloud_type {
        CloudType::Cirrus => FactorResult {
            score: 0.15,
            description: "Cirrus clouds create beautiful wispy patterns",
        },
        CloudType::Stratus | CloudType::Nimbostratus => FactorResult {
            score: -0.15,
            description: "Dense clouds may block the spectacle",
        },
        CloudType::Cumulus | CloudType::Cumulonimbus => FactorResult {
            score: 0.0,
            description: "Neutral cloud type for color display",
        },
    }
}

/// Humidity: [30, 70] scatters light well (+0.10); outside the band is
/// either too dry or too humid (-0.10). No neutral band.
pub fn classify_humidity(pct: f64) -> FactorResult {
    if pct >= HUMIDITY_IDEAL_MIN && pct <= HUMIDITY_IDEAL_MAX {
        FactorResult {
            score: 0.1,
            description: "Optimal humidity for light scattering",
        }
    } else if pct < HUMIDITY_IDEAL_MIN {
        FactorResult {
            score: -0.1,
            description: "Too dry - less atmospheric scattering",
        }
    } else {
        FactorResult {
            score: -0.1,
            description: "Too humid - may obscure colors",
        }
    }
}

/// Aerosols: [0.5, 2.5] adds vibrancy (+0.10); above 3.5 dims the
/// display (-0.10); the remainder (under 0.5 or in (2.5, 3.5]) is
/// clean but flat.
pub fn classify_aerosol(index: f64) -> FactorResult {
    if index >= AEROSOL_IDEAL_MIN && index <= AEROSOL_IDEAL_MAX {
        FactorResult {
            score: 0.1,
            description: "Perfect aerosol levels enhance color vibrancy",
        }
    } else if index > AEROSOL_DIM_ABOVE {
        FactorResult {
            score: -0.1,
            description: "Too many aerosols may dim the display",
        }
    } else {
        FactorResult {
            score: 0.0,
            description: "Low aerosol levels - clean but less dramatic",
        }
    }
}

/// AQI: [50, 150] enhances scattering (+0.10); above 200 obscures the
/// view (-0.10); the remainder is very clean, crisp but less colorful.
pub fn classify_air_quality(index: f64) -> FactorResult {
    if index >= AQI_IDEAL_MIN && index <= AQI_IDEAL_MAX {
        FactorResult {
            score: 0.1,
            description: "Moderate air quality enhances color scattering",
        }
    } else if index > AQI_OBSCURE_ABOVE {
        FactorResult {
            score: -0.1,
            description: "Poor air quality may obscure the view",
        }
    } else {
        FactorResult {
            score: 0.0,
            description: "Very clean air - crisp but less colorful",
        }
    }
}
