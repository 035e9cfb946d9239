use std::time::Duration;

/// The two screens a round cycles through. Viewing the panorama and placing the guess happen on
/// the same screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Guessing,
    Results,
}

impl Stage {
    pub fn route(&self) -> &'static str {
        match self {
            Stage::Guessing => "/minimaptest",
            Stage::Results => "/calculatedistance",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        match route.trim_end_matches('/') {
            "/minimaptest" => Some(Stage::Guessing),
            "/calculatedistance" => Some(Stage::Results),
            _ => None,
        }
    }

    /// How long the countdown runs before moving on to [`Stage::next`].
    pub fn duration(&self) -> Duration {
        match self {
            Stage::Guessing => Duration::from_secs(15),
            Stage::Results => Duration::from_secs(10),
        }
    }

    /// Pause between the panorama arriving and the countdown starting.
    pub fn reveal_delay(&self) -> Duration {
        match self {
            Stage::Guessing => Duration::from_secs(2),
            Stage::Results => Duration::ZERO,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Stage::Guessing => Stage::Results,
            Stage::Results => Stage::Guessing,
        }
    }
}

/// Seconds left on a countdown of `stage` after `elapsed`, as shown to the player. Only whole
/// elapsed seconds count, so a fresh countdown shows its full duration.
pub fn seconds_left(stage: Stage, elapsed: Duration) -> u64 {
    stage.duration().as_secs().saturating_sub(elapsed.as_secs())
}

/// Countdown progress of `stage` in percent.
pub fn progress_percent(stage: Stage, elapsed: Duration) -> f64 {
    let total = stage.duration().as_secs_f64();
    (elapsed.as_secs_f64() / total * 100.0).min(100.0)
}
