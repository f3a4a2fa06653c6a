//! Low-precision solar position terms.
//!
//! Declination from a single-sine fit to the Earth's orbit, the horizon
//! hour-angle from spherical trigonometry, and a longitude-only
//! equation-of-time correction against the nearest standard meridian.
//! Sources: standard spherical astronomy (Meeus, USNO).

/// Solar declination in radians for a 1-based day of year.
///
/// `decl = 0.4095 * sin(0.016906 * (N - 80.086))`
///
/// Peaks near +-0.4095 rad (~23.46 deg) at the solstices and crosses
/// zero near the equinoxes (N ~ 80, i.e. late March).
pub fn solar_declination_rad(day_of_year: u32) -> f64 {
    0.4095 * (0.016906 * (day_of_year as f64 - 80.086)).sin()
}

/// Outcome of the horizon hour-angle computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonCrossing {
    /// Sun crosses the horizon at this hour angle (radians, positive).
    At(f64),
    /// `cos H > 1`: the sun stays below the horizon all day.
    NeverRises,
    /// `cos H < -1`: the sun stays above the horizon all day.
    NeverSets,
}

/// Hour angle of the sun at the horizon.
///
/// `cos H = -tan(lat) * tan(decl)`. When the right-hand side leaves
/// [-1, 1] there is no horizon crossing that day (polar night or
/// midnight sun), reported as an explicit variant rather than a NaN
/// from `acos`.
pub fn hour_angle_rad(latitude_rad: f64, declination_rad: f64) -> HorizonCrossing {
    let cos_h = -latitude_rad.tan() * declination_rad.tan();
    if cos_h > 1.0 {
        HorizonCrossing::NeverRises
    } else if cos_h < -1.0 {
        HorizonCrossing::NeverSets
    } else {
        HorizonCrossing::At(cos_h.acos())
    }
}

/// Equation-of-time correction in minutes.
///
/// Longitude-only approximation: offset of the site from the nearest
/// 15-degree standard meridian, at 4 minutes per degree.
///
/// `eot = 4 * (lon - 15 * round(lon / 15))`
pub fn equation_of_time_min(longitude_deg: f64) -> f64 {
    4.0 * (longitude_deg - 15.0 * (longitude_deg / 15.0).round())
}
