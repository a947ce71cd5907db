use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LogError;

/// The times of day a front end offers for a catch.
///
/// Records keep `timeOfDay` as free text so stored values survive
/// untouched; this enum only supplies the default and the canonical
/// spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LogError::InvalidTimeOfDay(s.to_string()))
    }
}

/// `timeOfDay` for a record or draft that never set one.
pub fn default_time_of_day() -> String {
    TimeOfDay::default().as_str().to_string()
}

/// One logged fish.
///
/// The serialized shape is the durable-storage contract: camelCase keys,
/// every field a string (numeric fields included), `image` omitted when absent.
/// Text fields are kept verbatim so a stored log re-saves unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchRecord {
    /// Trimmed, lowercase species name. Never empty once committed.
    pub name: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_time_of_day")]
    pub time_of_day: String,
    /// Self-contained image encoding (usually a `data:` URI), stored verbatim.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub image: Option<String>,
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

/// Trim and lowercase a species name the way it is stored.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}
