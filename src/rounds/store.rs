use crate::geo::models::{GeoPoint, RawGeoPoint};
use crate::rounds::errors::RoundError;
use std::collections::HashMap;

/// Fixed keys a round keeps its state under. The string forms are the browser storage keys the
/// frontend already uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoundKey {
    GuessedLocation,
    CorrectLocation,
    Marks,
}

impl RoundKey {
    pub const ALL: [RoundKey; 3] = [
        RoundKey::GuessedLocation,
        RoundKey::CorrectLocation,
        RoundKey::Marks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundKey::GuessedLocation => "guessedLocation",
            RoundKey::CorrectLocation => "mapCoordinatesBcknd",
            RoundKey::Marks => "marks",
        }
    }
}

/// String key-value storage scoped to a single round.
pub trait RoundStore {
    fn get(&self, key: RoundKey) -> Option<String>;

    fn set(&mut self, key: RoundKey, value: String);

    fn remove(&mut self, key: RoundKey);

    fn clear(&mut self) {
        for key in RoundKey::ALL {
            self.remove(key);
        }
    }

    fn save_point(&mut self, key: RoundKey, point: GeoPoint) -> Result<(), RoundError> {
        let value = serde_json::to_string(&point)?;
        self.set(key, value);
        Ok(())
    }

    /// `Ok(None)` when nothing is stored under `key`.
    fn load_point(&self, key: RoundKey) -> Result<Option<GeoPoint>, RoundError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let raw: RawGeoPoint = serde_json::from_str(&value)?;
        Ok(Some(GeoPoint::try_from(raw)?))
    }

    fn marks(&self) -> Option<u32> {
        self.get(RoundKey::Marks)
            .and_then(|value| value.parse().ok())
    }
}

#[derive(Clone, Debug, Default)]
pub struct HashMapRoundStore {
    entries: HashMap<RoundKey, String>,
}

impl RoundStore for HashMapRoundStore {
    fn get(&self, key: RoundKey) -> Option<String> {
        self.entries.get(&key).cloned()
    }

    fn set(&mut self, key: RoundKey, value: String) {
        self.entries.insert(key, value);
    }

    fn remove(&mut self, key: RoundKey) {
        self.entries.remove(&key);
    }
}
