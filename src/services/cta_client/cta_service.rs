use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    services::stop_arrivals::ArrivalFeed,
    types::{
        arrival::{BusPredictions, TrainArrival},
        stop::StopConfig,
    },
};

use super::{
    query::{bus_query, train_query},
    types::{
        bus_predictions_response::BusPredictionsResponse, cta_service_error::CtaServiceError,
        train_arrivals_response::TrainArrivalsResponse,
    },
};

pub const DEFAULT_TRAIN_HOST: &str = "http://lapi.transitchicago.com";
pub const DEFAULT_BUS_HOST: &str = "http://www.ctabustracker.com";

#[derive(Debug, Clone)]
pub struct CtaServiceConfig {
    pub train_host: String,
    pub bus_host: String,
    pub timeout: Duration,
}

impl Default for CtaServiceConfig {
    fn default() -> Self {
        Self {
            train_host: DEFAULT_TRAIN_HOST.to_string(),
            bus_host: DEFAULT_BUS_HOST.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the Train Tracker and Bus Tracker APIs.
#[derive(Clone)]
pub struct CtaService {
    config: CtaServiceConfig,
    client: reqwest::Client,
}

impl CtaService {
    pub fn new(config: CtaServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CtaServiceError> {
        let resp = self
            .client
            .get(url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(CtaServiceError::Request)?;

        if !resp.status().is_success() {
            return Err(CtaServiceError::Status(resp.status()));
        }

        resp.json::<T>().await.map_err(CtaServiceError::Decode)
    }

    pub async fn get_train_arrivals(
        &self,
        api_key: &str,
        stop: &StopConfig,
        max_results: usize,
    ) -> Result<Vec<TrainArrival>, CtaServiceError> {
        let url = format!(
            "{}/api/1.0/ttarrivals.aspx?{}",
            self.config.train_host,
            train_query(api_key, stop, max_results).to_query_string()
        );
        debug!(stop_id = %stop.id, "Requesting train arrivals");

        self.get_json::<TrainArrivalsResponse>(&url)
            .await?
            .into_arrivals()
    }

    pub async fn get_bus_predictions(
        &self,
        api_key: &str,
        stop: &StopConfig,
        max_results: usize,
    ) -> Result<BusPredictions, CtaServiceError> {
        let url = format!(
            "{}/bustime/api/v2/getpredictions?{}",
            self.config.bus_host,
            bus_query(api_key, stop, max_results).to_query_string()
        );
        debug!(stop_id = %stop.id, "Requesting bus predictions");

        self.get_json::<BusPredictionsResponse>(&url)
            .await?
            .into_predictions()
    }
}

#[async_trait]
impl ArrivalFeed for CtaService {
    async fn train_arrivals(
        &self,
        api_key: &str,
        stop: &StopConfig,
        max_results: usize,
    ) -> Result<Vec<TrainArrival>, CtaServiceError> {
        self.get_train_arrivals(api_key, stop, max_results).await
    }

    async fn bus_predictions(
        &self,
        api_key: &str,
        stop: &StopConfig,
        max_results: usize,
    ) -> Result<BusPredictions, CtaServiceError> {
        self.get_bus_predictions(api_key, stop, max_results).await
    }
}
