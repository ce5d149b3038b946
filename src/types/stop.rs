use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::arrival::Arrivals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    Train,
    Bus,
}

impl StopType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopType::Train => "train",
            StopType::Bus => "bus",
        }
    }
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured stop, supplied fresh for every poll cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StopConfig {
    pub r#type: StopType,
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Milliseconds from now; arrivals sooner than this are dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_arrival_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_route: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_headers: Option<bool>,
}

impl StopConfig {
    pub fn minimum_arrival_delta(&self) -> Option<Duration> {
        self.minimum_arrival_time
            .map(|ms| Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX)))
    }
}

#[cfg(test)]
impl StopConfig {
    pub fn new(r#type: StopType, id: impl Into<String>) -> Self {
        Self {
            r#type,
            id: id.into(),
            name: None,
            minimum_arrival_time: None,
            show_route: None,
            show_headers: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_minimum_arrival_time(mut self, millis: u64) -> Self {
        self.minimum_arrival_time = Some(millis);
        self
    }
}

/// The stop configuration echoed back with its normalized arrivals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopResult {
    #[serde(flatten)]
    pub stop: StopConfig,
    pub arrivals: Arrivals,
}

impl StopResult {
    pub fn new(stop: StopConfig, arrivals: Arrivals) -> Self {
        Self { stop, arrivals }
    }

    pub fn empty(stop: StopConfig) -> Self {
        let arrivals = Arrivals::empty(stop.r#type);
        Self { stop, arrivals }
    }
}
