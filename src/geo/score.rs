use crate::geo::consts::{MAX_DISTANCE_KM, MAX_SCORE, PERFECT_GUESS_RADIUS_KM};

/// Points in `0..=MAX_SCORE` for a guess `distance_km` away from the truth.
pub fn score(distance_km: f64) -> u32 {
    if distance_km <= PERFECT_GUESS_RADIUS_KM {
        return MAX_SCORE;
    }
    let decayed = f64::from(MAX_SCORE) * (1.0 - distance_km / MAX_DISTANCE_KM);
    // `as` saturates, and NaN turns into zero.
    round_half_up(decayed).max(0.0) as u32
}

// Halves go towards positive infinity, so 4914.5 becomes 4915 and -0.5 becomes 0.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
