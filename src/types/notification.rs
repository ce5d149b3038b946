use serde::{Deserialize, Serialize};
use validator::Validate;

use super::stop::{StopConfig, StopResult};

/// Notification that asks for a fetch-and-normalize cycle.
pub const FETCH_NOTIFICATION: &str = "MMM-CTA-FETCH";
/// Notification carrying a cycle's results back to the display.
pub const DATA_NOTIFICATION: &str = "MMM-CTA-DATA";

/// Envelope exchanged with the display. Inbound payloads stay raw JSON until
/// the notification is known to be a fetch trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocketNotification<P = serde_json::Value> {
    pub notification: String,
    #[serde(default)]
    pub payload: P,
}

impl<P> SocketNotification<P> {
    pub fn is_fetch_trigger(&self) -> bool {
        self.notification == FETCH_NOTIFICATION
    }
}

impl SocketNotification<FetchResponse> {
    pub fn data(payload: FetchResponse) -> Self {
        Self {
            notification: DATA_NOTIFICATION.to_string(),
            payload,
        }
    }
}

/// Inbound trigger payload. Everything a cycle needs is passed in here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    #[serde(default)]
    pub train_api_key: Option<String>,
    #[serde(default)]
    pub bus_api_key: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub stops: Vec<StopConfig>,
    #[serde(default = "FetchRequest::default_max_results")]
    pub max_results_train: usize,
    #[serde(default = "FetchRequest::default_max_results")]
    pub max_results_bus: usize,
}

impl FetchRequest {
    pub fn default_max_results() -> usize {
        5
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FetchResponse {
    pub stops: Vec<StopResult>,
}
