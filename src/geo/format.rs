use crate::geo::score::round_half_up;

pub fn format_distance(distance_km: f64) -> String {
    // Ties go up, like the score, rather than to even.
    if distance_km < 1.0 {
        format!("{:.0} m", round_half_up(distance_km * 1000.0))
    } else {
        format!("{:.1} km", round_half_up(distance_km * 10.0) / 10.0)
    }
}
