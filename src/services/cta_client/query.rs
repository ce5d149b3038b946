//! Request parameters for the two CTA endpoints.
//!
//! The result-count parameter (`max` for trains, `top` for buses) is only sent
//! when the stop has no minimum arrival time. With a minimum set, the server
//! would cut the list before we filter it, so truncation happens client-side.

use urlencoding::encode;

use crate::types::stop::StopConfig;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    fn push(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    fn push_if(self, condition: bool, name: &'static str, value: impl Into<String>) -> Self {
        if condition {
            self.push(name, value)
        } else {
            self
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{}={}", name, encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub fn train_query(api_key: &str, stop: &StopConfig, max_results: usize) -> QueryParams {
    QueryParams::default()
        .push("key", api_key)
        .push("mapid", stop.id.as_str())
        .push("outputType", "json")
        .push_if(
            stop.minimum_arrival_time.is_none(),
            "max",
            max_results.to_string(),
        )
}

pub fn bus_query(api_key: &str, stop: &StopConfig, max_results: usize) -> QueryParams {
    QueryParams::default()
        .push("key", api_key)
        .push("stpid", stop.id.as_str())
        .push("format", "json")
        .push_if(
            stop.minimum_arrival_time.is_none(),
            "top",
            max_results.to_string(),
        )
}
