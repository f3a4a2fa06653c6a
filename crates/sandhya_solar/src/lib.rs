//! Sunrise/sunset timing from a low-precision solar approximation.
//!
//! This crate provides:
//! - Solar declination and horizon hour-angle from day-of-year and latitude
//! - Sunrise/sunset wall-clock times for a coordinate and date
//! - Next-upcoming-event classification with display-ready time labels
//!
//! Accuracy is a few minutes at mid latitudes, which is sufficient for
//! golden-hour planning. Polar day/night is reported as an explicit
//! outcome, never as a non-finite time.

pub mod events;
pub mod position;
pub mod types;

pub use events::{next_event, sun_times_for};
pub use position::{
    HorizonCrossing, equation_of_time_min, hour_angle_rad, solar_declination_rad,
};
pub use types::{GeoCoordinate, SolarDay, SunEventKind, SunTimes, SunTimesResult};
