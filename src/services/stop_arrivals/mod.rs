//! Per-stop fetch pipelines and their aggregation into one response.

pub mod normalize;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{error, info};

use crate::{
    services::cta_client::types::cta_service_error::CtaServiceError,
    types::{
        arrival::{Arrivals, BusPredictions, TrainArrival},
        notification::{FetchRequest, FetchResponse},
        stop::{StopConfig, StopResult, StopType},
    },
};

use self::normalize::normalize_arrivals;

/// Source of raw, un-normalized arrivals for a single stop.
#[async_trait]
pub trait ArrivalFeed: Send + Sync {
    async fn train_arrivals(
        &self,
        api_key: &str,
        stop: &StopConfig,
        max_results: usize,
    ) -> Result<Vec<TrainArrival>, CtaServiceError>;

    async fn bus_predictions(
        &self,
        api_key: &str,
        stop: &StopConfig,
        max_results: usize,
    ) -> Result<BusPredictions, CtaServiceError>;
}

/// Fetches every stop concurrently. Results come back in the order of
/// `request.stops`, whatever order the upstream calls finish in.
pub async fn fetch_stop_arrivals<F: ArrivalFeed + ?Sized>(
    feed: &F,
    request: &FetchRequest,
    now: DateTime<Utc>,
) -> FetchResponse {
    let stops = join_all(
        request
            .stops
            .iter()
            .map(|stop| fetch_stop(feed, request, stop, now)),
    )
    .await;

    FetchResponse { stops }
}

async fn fetch_stop<F: ArrivalFeed + ?Sized>(
    feed: &F,
    request: &FetchRequest,
    stop: &StopConfig,
    now: DateTime<Utc>,
) -> StopResult {
    match stop_arrivals(feed, request, stop, now).await {
        Ok(arrivals) => StopResult::new(stop.clone(), arrivals),
        Err(e) => {
            error!(stop_id = %stop.id, stop_type = %stop.r#type, "Failed to fetch arrivals: {}", e);
            StopResult::empty(stop.clone())
        }
    }
}

async fn stop_arrivals<F: ArrivalFeed + ?Sized>(
    feed: &F,
    request: &FetchRequest,
    stop: &StopConfig,
    now: DateTime<Utc>,
) -> Result<Arrivals, CtaServiceError> {
    let minimum = stop.minimum_arrival_delta();

    match stop.r#type {
        StopType::Train => {
            let api_key = request
                .train_api_key
                .as_deref()
                .ok_or(CtaServiceError::MissingApiKey(StopType::Train))?;
            let max_results = request.max_results_train;
            let arrivals = feed.train_arrivals(api_key, stop, max_results).await?;

            Ok(Arrivals::Train(normalize_arrivals(
                arrivals,
                minimum,
                max_results,
                now,
            )))
        }
        StopType::Bus => {
            let api_key = request
                .bus_api_key
                .as_deref()
                .ok_or(CtaServiceError::MissingApiKey(StopType::Bus))?;
            let max_results = request.max_results_bus;

            match feed.bus_predictions(api_key, stop, max_results).await? {
                BusPredictions::Arrivals(arrivals) => Ok(Arrivals::Bus(normalize_arrivals(
                    arrivals,
                    minimum,
                    max_results,
                    now,
                ))),
                BusPredictions::NoService { message } => {
                    info!(stop_id = %stop.id, "No bus service: {}", message);
                    Ok(Arrivals::Bus(Vec::new()))
                }
            }
        }
    }
}
