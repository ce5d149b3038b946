use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::stop::StopType;

/// Shared view used by the normalizer: how long until this vehicle arrives.
///
/// `None` means the provider gave no usable time (for example a delayed bus).
pub trait TimedArrival {
    fn time_until(&self, now: DateTime<Utc>) -> Option<Duration>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainArrival {
    pub direction: String,
    pub time: DateTime<Utc>,
    pub route_color: String,
}

impl TimedArrival for TrainArrival {
    fn time_until(&self, now: DateTime<Utc>) -> Option<Duration> {
        Some(self.time.signed_duration_since(now))
    }
}

/// A bus prediction. `arrival` is the provider's countdown string ("3", "DUE", "DLY").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusArrival {
    pub route: String,
    pub direction: String,
    pub arrival: String,
}

impl BusArrival {
    pub fn minutes_until(&self) -> Option<i64> {
        match self.arrival.trim() {
            "DUE" => Some(0),
            minutes => minutes.parse().ok(),
        }
    }
}

impl TimedArrival for BusArrival {
    fn time_until(&self, _now: DateTime<Utc>) -> Option<Duration> {
        self.minutes_until().and_then(Duration::try_minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arrivals {
    Train(Vec<TrainArrival>),
    Bus(Vec<BusArrival>),
}

impl Arrivals {
    pub fn empty(stop_type: StopType) -> Self {
        match stop_type {
            StopType::Train => Arrivals::Train(Vec::new()),
            StopType::Bus => Arrivals::Bus(Vec::new()),
        }
    }
}

#[cfg(test)]
impl Arrivals {
    pub fn len(&self) -> usize {
        match self {
            Arrivals::Train(a) => a.len(),
            Arrivals::Bus(a) => a.len(),
        }
    }
}

/// Outcome of a bus predictions request. The bus feed reports "no service"
/// as an error object inside a successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusPredictions {
    Arrivals(Vec<BusArrival>),
    NoService { message: String },
}
