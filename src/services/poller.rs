use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::info;

use crate::types::{arrival_board::ArrivalBoard, notification::FetchRequest};

use super::stop_arrivals::{fetch_stop_arrivals, ArrivalFeed};

/// Runs a fetch cycle every `interval`, starting immediately, and publishes
/// each result to `board`. `now` is read once per cycle.
pub fn spawn_poller<F: ArrivalFeed + 'static>(
    feed: Arc<F>,
    request: FetchRequest,
    interval: Duration,
    board: ArrivalBoard,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let response = fetch_stop_arrivals(&*feed, &request, Utc::now()).await;
            info!(stops = response.stops.len(), "Published arrivals");
            board.publish(response).await;
        }
    })
}
