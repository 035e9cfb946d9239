use crate::geo::consts::EARTH_RADIUS_KM;
use crate::geo::models::GeoPoint;

/// Great-circle distance between two points in kilometers.
///
/// Coordinates are taken as they are: nothing checks that latitudes stay within [-90, 90] or
/// longitudes within [-180, 180].
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = ((delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
