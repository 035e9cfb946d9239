pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MAX_SCORE: u32 = 5000;
/// Distance at which the linear decay reaches zero.
pub const MAX_DISTANCE_KM: f64 = 20_000.0;
/// Guesses at most this far from the target always get `MAX_SCORE`.
pub const PERFECT_GUESS_RADIUS_KM: f64 = 1.0;
