//! The in-progress form buffer and the field identifiers that address it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;
use crate::types::{default_time_of_day, normalize_name, CatchRecord};

/// A record being composed or edited. Any field may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub name: String,
    pub length: String,
    pub weight: String,
    pub location: String,
    pub time_of_day: String,
    pub image: Option<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            length: String::new(),
            weight: String::new(),
            location: String::new(),
            time_of_day: default_time_of_day(),
            image: None,
        }
    }
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field to its default (empty text, morning, no image).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Assign `value` to the field verbatim; an empty image clears it.
    pub fn set(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Name => self.name = value.to_string(),
            DraftField::Length => self.length = value.to_string(),
            DraftField::Weight => self.weight = value.to_string(),
            DraftField::Location => self.location = value.to_string(),
            DraftField::TimeOfDay => self.time_of_day = value.to_string(),
            DraftField::Image => {
                self.image = (!value.is_empty()).then(|| value.to_string());
            }
        }
    }

    /// Produce the committed record, or `None` when the name normalizes to
    /// empty.
    pub fn to_record(&self) -> Option<CatchRecord> {
        let name = normalize_name(&self.name);
        if name.is_empty() {
            return None;
        }
        Some(CatchRecord {
            name,
            length: self.length.clone(),
            weight: self.weight.clone(),
            location: self.location.clone(),
            time_of_day: self.time_of_day.clone(),
            image: self.image.clone(),
        })
    }
}

impl From<&CatchRecord> for Draft {
    fn from(record: &CatchRecord) -> Self {
        Self {
            name: record.name.clone(),
            length: record.length.clone(),
            weight: record.weight.clone(),
            location: record.location.clone(),
            time_of_day: record.time_of_day.clone(),
            image: record.image.clone(),
        }
    }
}

/// Identifiers accepted by draft field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Length,
    Weight,
    Location,
    TimeOfDay,
    Image,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Location => "location",
            Self::TimeOfDay => "timeOfDay",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "length" => Ok(Self::Length),
            "weight" => Ok(Self::Weight),
            "location" => Ok(Self::Location),
            "timeOfDay" => Ok(Self::TimeOfDay),
            "image" => Ok(Self::Image),
            other => Err(LogError::UnknownField(other.to_string())),
        }
    }
}
