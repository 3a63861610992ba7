use serde::{Deserialize, Serialize};

use crate::DecodeError;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub validation: ValidationSettings,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ValidationSettings {
    /// Number of unknown exercise IDs listed in a warning.
    pub max_reported_unknown_ids: usize,
    /// Share of the available work time below which a plan counts as too short.
    pub underfill_ratio: f64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            max_reported_unknown_ids: 5,
            underfill_ratio: 0.5,
        }
    }
}
