//! Collaborator-side condition mapping for the beauty scorer.
//!
//! This crate provides the pure computations a weather/geocode fetch
//! layer needs to turn raw observations into [`sandhya_score`] inputs:
//! - Weather-condition code and description mapping to a cloud genus
//! - Aerosol index and AQI estimation from visibility and humidity
//! - Deterministic seeded simulation of plausible conditions, for when
//!   every network path has failed
//! - Nearest-known-city approximation as the final reverse-geocode
//!   fallback
//!
//! No networking happens here; callers hand in whatever their HTTP
//! layer produced.

pub mod mapping;
pub mod places;
pub mod simulate;

pub use mapping::{
    ApiReading, aerosol_index_from_visibility, cloud_type_from_condition,
    estimate_aqi_from_visibility,
};
pub use places::{Place, approximate_place};
pub use simulate::simulated_conditions;
