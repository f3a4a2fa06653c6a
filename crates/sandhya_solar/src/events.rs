//! Sunrise/sunset instants and next-event classification.
//!
//! Times are derived in minutes from the day's midnight UTC, then
//! shifted into the caller's wall clock by a supplied UTC offset.
//! The offset follows the POSIX sign convention: minutes of UTC minus
//! local, positive west of Greenwich (New York in summer = 240).

use sandhya_time::{CivilDate, LocalMoment};

use crate::position::{HorizonCrossing, equation_of_time_min, hour_angle_rad, solar_declination_rad};
use crate::types::{GeoCoordinate, SolarDay, SunEventKind, SunTimes, SunTimesResult};

/// Minutes from midnight UTC to solar noon on the Greenwich meridian.
const SOLAR_NOON_MIN: f64 = 720.0;

/// Minutes of rotation per degree of longitude.
const MIN_PER_DEG: f64 = 4.0;

/// Compute sunrise and sunset wall-clock instants for one calendar day.
///
/// Sunrise/sunset minutes from midnight UTC:
///
/// `720 - 4 * (lon +- H_deg) - eot`
///
/// (`+` for sunrise, `-` for sunset), then `- tz_offset_min` to reach
/// the local wall clock. Offsets that cross midnight roll the instant
/// into the adjacent calendar day.
///
/// Returns [`SolarDay::NeverRises`] / [`SolarDay::NeverSets`] when the
/// hour-angle argument leaves [-1, 1] (polar night / midnight sun).
pub fn sun_times_for(coord: GeoCoordinate, date: CivilDate, tz_offset_min: i32) -> SolarDay {
    let decl = solar_declination_rad(date.day_of_year());
    let hour_angle = match hour_angle_rad(coord.latitude_rad(), decl) {
        HorizonCrossing::At(h) => h,
        HorizonCrossing::NeverRises => return SolarDay::NeverRises,
        HorizonCrossing::NeverSets => return SolarDay::NeverSets,
    };
    let hour_angle_deg = hour_angle.to_degrees();
    let eot = equation_of_time_min(coord.longitude_deg);

    let sunrise_utc = SOLAR_NOON_MIN - MIN_PER_DEG * (coord.longitude_deg + hour_angle_deg) - eot;
    let sunset_utc = SOLAR_NOON_MIN - MIN_PER_DEG * (coord.longitude_deg - hour_angle_deg) - eot;

    let offset = tz_offset_min as f64;
    SolarDay::Crossings {
        sunrise: LocalMoment::from_day_offset(date, sunrise_utc - offset),
        sunset: LocalMoment::from_day_offset(date, sunset_utc - offset),
    }
}

/// Identify the next upcoming sun event relative to `now`.
///
/// Before today's sunrise the next event is that sunrise; before sunset,
/// that sunset. After sunset the next event is tomorrow's sunrise, while
/// the `sunrise`/`sunset` display fields still carry today's values.
/// Polar outcomes propagate, including when tomorrow's sunrise is needed
/// but tomorrow has none.
pub fn next_event(coord: GeoCoordinate, now: LocalMoment, tz_offset_min: i32) -> SunTimesResult {
    let (sunrise, sunset) = match sun_times_for(coord, now.date(), tz_offset_min) {
        SolarDay::Crossings { sunrise, sunset } => (sunrise, sunset),
        SolarDay::NeverRises => return SunTimesResult::NeverRises,
        SolarDay::NeverSets => return SunTimesResult::NeverSets,
    };

    if now < sunrise {
        return SunTimesResult::Times(SunTimes {
            sunrise: sunrise.format_clock(),
            sunset: sunset.format_clock(),
            next_event: SunEventKind::Sunrise,
            next_event_time: sunrise.format_clock(),
        });
    }
    if now < sunset {
        return SunTimesResult::Times(SunTimes {
            sunrise: sunrise.format_clock(),
            sunset: sunset.format_clock(),
            next_event: SunEventKind::Sunset,
            next_event_time: sunset.format_clock(),
        });
    }

    // After sunset: tomorrow's sunrise, today's times on display
    match sun_times_for(coord, now.date().next_day(), tz_offset_min) {
        SolarDay::Crossings {
            sunrise: tomorrow_sunrise,
            ..
        } => SunTimesResult::Times(SunTimes {
            sunrise: sunrise.format_clock(),
            sunset: sunset.format_clock(),
            next_event: SunEventKind::Sunrise,
            next_event_time: tomorrow_sunrise.format_clock(),
        }),
        SolarDay::NeverRises => SunTimesResult::NeverRises,
        SolarDay::NeverSets => SunTimesResult::NeverSets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_YORK: GeoCoordinate = GeoCoordinate {
        latitude_deg: 40.7,
        longitude_deg: -74.0,
    };
    /// Eastern Daylight Time, UTC-4.
    const EDT_OFFSET_MIN: i32 = 240;

    fn nyc_spring_day() -> CivilDate {
        CivilDate::new(2024, 4, 15)
    }

    #[test]
    fn sunrise_precedes_sunset() {
        match sun_times_for(NEW_YORK, nyc_spring_day(), EDT_OFFSET_MIN) {
            SolarDay::Crossings { sunrise, sunset } => {
                assert!(sunrise < sunset);
                assert_eq!(sunrise.date(), nyc_spring_day());
                assert_eq!(sunset.date(), nyc_spring_day());
            }
            other => panic!("expected crossings, got {other:?}"),
        }
    }

    #[test]
    fn nyc_spring_times_plausible() {
        let SolarDay::Crossings { sunrise, sunset } =
            sun_times_for(NEW_YORK, nyc_spring_day(), EDT_OFFSET_MIN)
        else {
            panic!("expected crossings");
        };
        // Approximation lands within ~15 min of the true 6:19 AM / 7:37 PM
        assert_eq!(sunrise.hour(), 6, "sunrise = {}", sunrise.format_clock());
        assert_eq!(sunset.hour(), 19, "sunset = {}", sunset.format_clock());
    }

    #[test]
    fn before_sunrise_next_is_sunrise() {
        let now = LocalMoment::at(nyc_spring_day(), 4, 0);
        let SunTimesResult::Times(times) = next_event(NEW_YORK, now, EDT_OFFSET_MIN) else {
            panic!("expected times");
        };
        assert_eq!(times.next_event, SunEventKind::Sunrise);
        assert_eq!(times.next_event_time, times.sunrise);
    }

    #[test]
    fn midday_next_is_sunset() {
        let now = LocalMoment::at(nyc_spring_day(), 12, 0);
        let SunTimesResult::Times(times) = next_event(NEW_YORK, now, EDT_OFFSET_MIN) else {
            panic!("expected times");
        };
        assert_eq!(times.next_event, SunEventKind::Sunset);
        assert_eq!(times.next_event_time, times.sunset);
    }

    #[test]
    fn after_sunset_next_is_tomorrows_sunrise() {
        let now = LocalMoment::at(nyc_spring_day(), 23, 0);
        let SunTimesResult::Times(times) = next_event(NEW_YORK, now, EDT_OFFSET_MIN) else {
            panic!("expected times");
        };
        assert_eq!(times.next_event, SunEventKind::Sunrise);

        // Display fields still carry today's values
        let SolarDay::Crossings { sunrise, sunset } =
            sun_times_for(NEW_YORK, nyc_spring_day(), EDT_OFFSET_MIN)
        else {
            panic!("expected crossings");
        };
        assert_eq!(times.sunrise, sunrise.format_clock());
        assert_eq!(times.sunset, sunset.format_clock());

        // Next-event time is tomorrow's sunrise
        let SolarDay::Crossings {
            sunrise: tomorrow, ..
        } = sun_times_for(NEW_YORK, nyc_spring_day().next_day(), EDT_OFFSET_MIN)
        else {
            panic!("expected crossings");
        };
        assert_eq!(times.next_event_time, tomorrow.format_clock());
    }

    #[test]
    fn polar_summer_reports_never_sets() {
        let svalbard = GeoCoordinate::new(89.0, 0.0);
        let june_solstice = CivilDate::new(2024, 6, 21);
        assert_eq!(
            sun_times_for(svalbard, june_solstice, 0),
            SolarDay::NeverSets
        );
        let now = LocalMoment::at(june_solstice, 12, 0);
        assert_eq!(next_event(svalbard, now, 0), SunTimesResult::NeverSets);
    }

    #[test]
    fn polar_winter_reports_never_rises() {
        let svalbard = GeoCoordinate::new(89.0, 0.0);
        let december = CivilDate::new(2024, 12, 21);
        assert_eq!(sun_times_for(svalbard, december, 0), SolarDay::NeverRises);
    }

    #[test]
    fn far_east_longitude_rolls_days() {
        // Date-line east: UTC minute offsets go far negative after the
        // timezone shift; the moment must still land on a valid clock
        let fiji = GeoCoordinate::new(-18.1, 178.4);
        match sun_times_for(fiji, CivilDate::new(2024, 4, 15), -720) {
            SolarDay::Crossings { sunrise, sunset } => {
                assert!(sunrise < sunset);
                assert!(sunrise.minute_of_day() >= 0.0);
                assert!(sunset.minute_of_day() < 1440.0);
            }
            other => panic!("expected crossings, got {other:?}"),
        }
    }
}
