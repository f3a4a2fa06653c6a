//! Sunrise/sunset beauty scoring from atmospheric conditions.
//!
//! This crate provides:
//! - A closed [`CloudType`] enumeration and the [`AtmosphericInput`]
//!   value type carrying the five scored dimensions
//! - [`evaluate`] / [`evaluate_at`]: band classification of each
//!   dimension into a signed delta plus a description, summed onto a
//!   neutral 0.5 baseline and clamped to [0, 1]
//! - Qualitative outlook tiers for presentation (message, color,
//!   gradient) at fixed probability thresholds
//!
//! Scoring is pure and total: every finite input classifies into
//! exactly one band per dimension, and nothing here performs I/O.

pub mod bands;
pub mod evaluate;
pub mod outlook;
pub mod types;

pub use bands::{
    classify_aerosol, classify_air_quality, classify_cloud_cover, classify_cloud_type,
    classify_humidity,
};
pub use evaluate::{BASE_PROBABILITY, evaluate, evaluate_at};
pub use outlook::OutlookTier;
pub use types::{
    ALL_CLOUD_TYPES, AtmosphericInput, CloudType, FactorResult, Factors, PredictionResult,
};
