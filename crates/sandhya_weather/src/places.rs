//! Nearest-known-city approximation, the final reverse-geocode fallback.
//!
//! When every geocoding provider is unreachable, a coordinate is matched
//! against a short table of major cities by Manhattan distance in
//! degrees; far from all of them, a coarse latitude-band region label is
//! returned instead.

use sandhya_solar::GeoCoordinate;

/// A resolved place name: city plus country (or region plus zone for
/// the coarse fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Place {
    pub city: &'static str,
    pub country: &'static str,
}

/// Maximum Manhattan distance in degrees to accept a city match.
const CITY_MATCH_MAX_DEG: f64 = 5.0;

const MAJOR_CITIES: [(f64, f64, Place); 10] = [
    (40.7, -74.0, Place { city: "New York", country: "USA" }),
    (51.5, -0.1, Place { city: "London", country: "UK" }),
    (35.7, 139.7, Place { city: "Tokyo", country: "Japan" }),
    (48.9, 2.3, Place { city: "Paris", country: "France" }),
    (-33.9, 151.2, Place { city: "Sydney", country: "Australia" }),
    (37.8, -122.4, Place { city: "San Francisco", country: "USA" }),
    (52.5, 13.4, Place { city: "Berlin", country: "Germany" }),
    (43.7, -79.4, Place { city: "Toronto", country: "Canada" }),
    (55.8, -4.3, Place { city: "Glasgow", country: "UK" }),
    (41.9, 12.5, Place { city: "Rome", country: "Italy" }),
];

/// Approximate a human-readable place for a coordinate.
pub fn approximate_place(coord: GeoCoordinate) -> Place {
    let mut closest = MAJOR_CITIES[0].2;
    let mut min_distance = f64::INFINITY;
    for (lat, lon, place) in MAJOR_CITIES {
        let distance =
            (coord.latitude_deg - lat).abs() + (coord.longitude_deg - lon).abs();
        if distance < min_distance {
            min_distance = distance;
            closest = place;
        }
    }
    if min_distance < CITY_MATCH_MAX_DEG {
        return closest;
    }

    // Too far from any known city: coarse latitude-band regions
    let lat = coord.latitude_deg;
    if lat > 60.0 {
        Place { city: "Northern Region", country: "Arctic" }
    } else if lat < -60.0 {
        Place { city: "Southern Region", country: "Antarctic" }
    } else if lat > 23.5 {
        Place { city: "Northern City", country: "Northern Hemisphere" }
    } else if lat < -23.5 {
        Place { city: "Southern City", country: "Southern Hemisphere" }
    } else {
        Place { city: "Tropical City", country: "Equatorial Region" }
    }
}
