//! End-to-end collaborator pipeline: raw API readings and the simulated
//! fallback both feed the scorer without further validation.

use sandhya_score::{CloudType, OutlookTier, evaluate};
use sandhya_solar::GeoCoordinate;
use sandhya_time::CivilDate;
use sandhya_weather::{ApiReading, approximate_place, simulated_conditions};

#[test]
fn clear_calm_evening_reading_scores_well() {
    // Clear sky, good visibility, moderate humidity: cirrus canvas with
    // clean air. Cover 35 (+0.2), cirrus (+0.15), humidity 50 (+0.1),
    // aerosol 0.5 (+0.1), AQI 50 (+0.1): clamps to 1.0.
    let reading = ApiReading {
        cloud_cover_pct: 35.0,
        condition_id: 800,
        condition_text: "clear sky".to_string(),
        humidity_pct: 50.0,
        visibility_m: 12_000.0,
    };
    let result = evaluate(&reading.to_input());
    assert_eq!(result.probability, 1.0);
    assert_eq!(
        OutlookTier::from_probability(result.probability),
        OutlookTier::Spectacular
    );
}

#[test]
fn stormy_reading_scores_poorly() {
    let reading = ApiReading {
        cloud_cover_pct: 95.0,
        condition_id: 211,
        condition_text: "thunderstorm".to_string(),
        humidity_pct: 92.0,
        visibility_m: 800.0,
    };
    let input = reading.to_input();
    assert_eq!(input.cloud_type, CloudType::Cumulonimbus);
    let result = evaluate(&input);
    // Heavy overcast (-0.2), humid (-0.1), aerosol 4 (-0.1), AQI 170
    // neutral, cumulonimbus neutral: 0.1
    assert!(result.probability < 0.2, "p = {}", result.probability);
    assert_eq!(
        OutlookTier::from_probability(result.probability),
        OutlookTier::Basic
    );
}

#[test]
fn simulation_slots_into_scoring_at_any_site() {
    for seed in [0, 1, 99] {
        let coord = GeoCoordinate::new(-33.9, 151.2);
        let input = simulated_conditions(coord, CivilDate::new(2024, 10, 5), seed);
        let result = evaluate(&input);
        assert!((0.0..=1.0).contains(&result.probability));
    }
}

#[test]
fn place_fallback_names_the_simulation_site() {
    let sydney = approximate_place(GeoCoordinate::new(-33.9, 151.2));
    assert_eq!(sydney.city, "Sydney");
    assert_eq!(sydney.country, "Australia");
}
