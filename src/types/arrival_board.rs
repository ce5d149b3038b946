use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::{notification::FetchResponse, stop::StopResult};

/// What the display renders: the latest published stops, or a loading marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub loading: bool,
    pub stops: Vec<StopResult>,
}

/// Latest poll cycle result, shared between the poller and the HTTP routes.
#[derive(Clone, Default)]
pub struct ArrivalBoard {
    latest: Arc<RwLock<Option<FetchResponse>>>,
}

impl ArrivalBoard {
    pub async fn publish(&self, response: FetchResponse) {
        *self.latest.write().await = Some(response);
    }

    pub async fn view(&self) -> BoardView {
        match self.latest.read().await.as_ref() {
            Some(response) => BoardView {
                loading: false,
                stops: response.stops.clone(),
            },
            None => BoardView {
                loading: true,
                stops: Vec::new(),
            },
        }
    }
}
