//! Civil calendar date/time primitives for sun-event timing.
//!
//! This crate provides:
//! - [`CivilDate`]: a proleptic Gregorian calendar date with leap-year
//!   rules, day-of-year numbering, and day stepping
//! - [`LocalMoment`]: a wall-clock instant as a date plus a fractional
//!   minute-of-day, normalizing offsets that cross midnight
//! - 12-hour AM/PM clock formatting for display fields
//!
//! All conversions are hand-derived from the Gregorian calendar rules;
//! no timezone database is consulted. Callers supply their own UTC
//! offset in minutes where one is needed.

pub mod civil;
pub mod error;
pub mod moment;

pub use civil::CivilDate;
pub use error::TimeError;
pub use moment::LocalMoment;
