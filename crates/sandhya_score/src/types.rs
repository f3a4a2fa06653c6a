//! Value types for beauty scoring: inputs, per-factor results, and the
//! composed prediction.

use sandhya_solar::SunTimesResult;

/// The five cloud genera the scorer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudType {
    /// High, wispy ice clouds: the prime sunset canvas.
    Cirrus,
    /// Puffy fair-weather clouds.
    Cumulus,
    /// Featureless low layer cloud.
    Stratus,
    /// Thick rain-bearing layer cloud.
    Nimbostratus,
    /// Towering storm cloud.
    Cumulonimbus,
}

/// All cloud types in scoring order, for iteration and CLI listings.
pub const ALL_CLOUD_TYPES: [CloudType; 5] = [
    CloudType::Cirrus,
    CloudType::Cumulus,
    CloudType::Stratus,
    CloudType::Nimbostratus,
    CloudType::Cumulonimbus,
];

impl CloudType {
    /// Lowercase genus name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cirrus => "cirrus",
            Self::Cumulus => "cumulus",
            Self::Stratus => "stratus",
            Self::Nimbostratus => "nimbostratus",
            Self::Cumulonimbus => "cumulonimbus",
        }
    }

    /// Parse a lowercase genus name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cirrus" => Some(Self::Cirrus),
            "cumulus" => Some(Self::Cumulus),
            "stratus" => Some(Self::Stratus),
            "nimbostratus" => Some(Self::Nimbostratus),
            "cumulonimbus" => Some(Self::Cumulonimbus),
            _ => None,
        }
    }
}

/// Atmospheric conditions for one evaluation. Immutable; owned by the
/// caller. Values are assumed already range-valid by upstream mapping;
/// out-of-range numbers are fed through the same band comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericInput {
    /// Cloud cover percentage. Range: [0, 100].
    pub cloud_cover_pct: f64,
    /// Dominant cloud genus.
    pub cloud_type: CloudType,
    /// Relative humidity percentage. Range: [0, 100].
    pub humidity_pct: f64,
    /// Aerosol index. Range: [0, 5].
    pub aerosol_index: f64,
    /// Air Quality Index. Range: [0, 300+].
    pub air_quality_index: f64,
}

/// One dimension's contribution: the raw signed delta applied to the
/// probability, plus a display description. Scores stay unclamped even
/// when the summed probability clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorResult {
    pub score: f64,
    pub description: &'static str,
}

/// The five factor contributions, one per atmospheric dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factors {
    pub cloud_cover: FactorResult,
    pub cloud_type: FactorResult,
    pub humidity: FactorResult,
    pub aerosol: FactorResult,
    pub air_quality: FactorResult,
}

/// Output of a scoring evaluation. Value object; no mutation after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// Clamped beauty probability in [0, 1].
    pub probability: f64,
    /// Sun-event summary when a location was supplied; `None` otherwise.
    pub sun_times: Option<SunTimesResult>,
    pub factors: Factors,
}
