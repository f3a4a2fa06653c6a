//! Types for sun-event computation: coordinates, outcomes, and the
//! display-ready next-event summary.

use sandhya_time::LocalMoment;

/// Geographic coordinate on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoCoordinate {
    /// Create a new coordinate.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Sunrise/sunset outcome for one calendar day at one coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarDay {
    /// The sun crosses the horizon twice on this day.
    Crossings {
        sunrise: LocalMoment,
        sunset: LocalMoment,
    },
    /// Sun never reaches the horizon: polar night, continuous darkness.
    NeverRises,
    /// Sun never drops below the horizon: midnight sun, continuous daylight.
    NeverSets,
}

/// Which sun event comes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunEventKind {
    Sunrise,
    Sunset,
}

impl SunEventKind {
    /// Lowercase label used in display output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
        }
    }
}

/// Display-ready summary of today's sun events and the next one coming.
///
/// `sunrise`/`sunset` always describe the queried day; after sunset the
/// next event is the following day's sunrise, reported only through
/// `next_event_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
    pub next_event: SunEventKind,
    pub next_event_time: String,
}

/// Result of a next-event query, with polar day/night as explicit
/// outcomes instead of undefined timestamps.
#[derive(Debug, Clone, PartialEq)]
pub enum SunTimesResult {
    Times(SunTimes),
    /// Polar night on the relevant day: no sunrise to report.
    NeverRises,
    /// Midnight sun on the relevant day: no sunset to report.
    NeverSets,
}
