use crate::geo::consts::{EARTH_RADIUS_KM, MAX_SCORE};
use crate::geo::distance::haversine_km;
use crate::geo::errors::GeoError;
use crate::geo::format::format_distance;
use crate::geo::models::{GeoPoint, RawGeoPoint};
use crate::geo::score::score;
use crate::geo::{evaluate, evaluate_raw};

const LONDON: GeoPoint = GeoPoint {
    lat: 51.5074,
    lng: -0.1278,
};
const PARIS: GeoPoint = GeoPoint {
    lat: 48.8566,
    lng: 2.3522,
};
const SAMPLE_POINTS: [GeoPoint; 6] = [
    LONDON,
    PARIS,
    GeoPoint { lat: 0.0, lng: 0.0 },
    GeoPoint {
        lat: -33.8688,
        lng: 151.2093,
    },
    GeoPoint {
        lat: 89.9,
        lng: -179.9,
    },
    GeoPoint {
        lat: 35.6528,
        lng: 139.7,
    },
];

#[test]
fn test_distance_to_itself_is_zero() {
    for point in SAMPLE_POINTS {
        assert_eq!(haversine_km(point, point), 0.0);
    }
}

#[test]
fn test_distance_is_symmetric_and_non_negative() {
    for from in SAMPLE_POINTS {
        for to in SAMPLE_POINTS {
            let there = haversine_km(from, to);
            let back = haversine_km(to, from);
            assert!(there >= 0.0);
            assert!((there - back).abs() < 1e-6);
        }
    }
}

#[test]
fn test_london_to_paris() {
    let distance = haversine_km(LONDON, PARIS);

    assert!((distance - 343.5).abs() < 0.5, "got {distance}");
    assert_eq!(score(distance), 4914);
}

#[test]
fn test_antipodes() {
    let distance = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));

    assert!((distance - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    assert!((distance - 20015.0).abs() < 1.0);
    assert_eq!(score(distance), 0);
}

#[test]
fn test_out_of_range_coordinates_are_accepted() {
    let distance = haversine_km(GeoPoint::new(120.0, 400.0), GeoPoint::new(-95.0, -200.0));

    assert!(distance.is_finite());
    assert!(distance >= 0.0);
}

#[test]
fn test_perfect_guess_band() {
    for distance in [0.0, 0.25, 0.999, 1.0] {
        assert_eq!(score(distance), MAX_SCORE);
    }
    // Right past the band the linear formula takes over.
    assert_eq!(score(3.0), 4999);
}

#[test]
fn test_score_is_zero_from_max_distance_on() {
    for distance in [20_000.0, 20_000.1, 25_000.0, f64::INFINITY] {
        assert_eq!(score(distance), 0);
    }
}

#[test]
fn test_score_is_monotonic() {
    let mut previous = score(0.0);
    let mut distance = 0.0;
    while distance < 21_000.0 {
        let current = score(distance);
        assert!(current <= previous, "score went up at {distance} km");
        assert!(current <= MAX_SCORE);
        previous = current;
        distance += 7.3;
    }
}

#[test]
fn test_score_rounds_halves_up() {
    // 5000 * (1 - 1250 / 20000) = 4687.5
    assert_eq!(score(1250.0), 4688);
    // 5000 * (1 - 3750 / 20000) = 4062.5
    assert_eq!(score(3750.0), 4063);
}

#[test]
fn test_negative_distance_is_not_rejected() {
    assert_eq!(score(-5.0), MAX_SCORE);
}

#[test]
fn test_format_distance() {
    assert_eq!(format_distance(0.5), "500 m");
    assert_eq!(format_distance(0.0), "0 m");
    assert_eq!(format_distance(1.0), "1.0 km");
    assert_eq!(format_distance(343.47), "343.5 km");
    assert_eq!(format_distance(20015.086), "20015.1 km");
}

#[test]
fn test_format_distance_rounds_ties_up() {
    assert_eq!(format_distance(1.25), "1.3 km");
    assert_eq!(format_distance(0.0025), "3 m");
    assert_eq!(format_distance(0.0005), "1 m");
    assert_eq!(format_distance(0.9996), "1000 m");
}

#[test]
fn test_evaluate_same_point() {
    let result = evaluate(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.0));

    assert_eq!(result.distance_km, 0.0);
    assert_eq!(result.score, MAX_SCORE);
}

#[test]
fn test_evaluate_raw_rejects_missing_coordinates() {
    let complete = RawGeoPoint::from(LONDON);
    let no_lat = RawGeoPoint {
        lat: None,
        lng: Some(2.0),
    };
    let no_lng = RawGeoPoint {
        lat: Some(2.0),
        lng: None,
    };

    assert_eq!(
        evaluate_raw(no_lat, complete),
        Err(GeoError::MissingLatitude)
    );
    assert_eq!(
        evaluate_raw(complete, no_lng),
        Err(GeoError::MissingLongitude)
    );
}

#[test]
fn test_evaluate_raw_rejects_nan() {
    let nan = RawGeoPoint {
        lat: Some(1.0),
        lng: Some(f64::NAN),
    };

    let error = evaluate_raw(RawGeoPoint::from(PARIS), nan).unwrap_err();

    assert!(matches!(
        error,
        GeoError::NonFiniteCoordinate { field: "lng", .. }
    ));
}

#[test]
fn test_raw_point_from_json_with_missing_field() {
    let raw: RawGeoPoint = serde_json::from_str(r#"{"lat": 12.5}"#).unwrap();

    assert_eq!(GeoPoint::try_from(raw), Err(GeoError::MissingLongitude));
}

#[test]
fn test_raw_point_from_json_with_non_numeric_fields() {
    let raw: RawGeoPoint = serde_json::from_str(r#"{"lat": "51.5", "lng": null}"#).unwrap();

    assert_eq!(raw, RawGeoPoint::default());
    assert_eq!(GeoPoint::try_from(raw), Err(GeoError::MissingLatitude));
}
