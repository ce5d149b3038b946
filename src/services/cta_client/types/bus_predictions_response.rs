#![allow(non_snake_case)]
use serde::Deserialize;

use crate::types::arrival::{BusArrival, BusPredictions};

use super::cta_service_error::CtaServiceError;

/// Error messages Bus Tracker uses to say nothing is coming.
const NO_SERVICE_MESSAGES: [&str; 2] = ["No service scheduled", "No arrival times"];

#[derive(Deserialize)]
pub struct BusPrediction {
    // pub stpnm: String,
    pub rt: String,
    pub rtdir: String,
    // pub des: String,
    pub prdctdn: String,
}

#[derive(Deserialize)]
pub struct BustimeError {
    #[serde(default)]
    pub stpid: Option<String>,
    #[serde(default)]
    pub rt: Option<String>,
    pub msg: String,
}

impl BustimeError {
    fn is_no_service(&self) -> bool {
        self.stpid.is_some() && NO_SERVICE_MESSAGES.contains(&self.msg.as_str())
    }
}

#[derive(Deserialize)]
pub struct BustimeResponse {
    #[serde(default)]
    pub prd: Option<Vec<BusPrediction>>,
    #[serde(default)]
    pub error: Option<Vec<BustimeError>>,
}

#[derive(Deserialize)]
pub struct BusPredictionsResponse {
    #[serde(rename = "bustime-response")]
    pub bustime_response: BustimeResponse,
}

impl BusPredictionsResponse {
    pub fn into_predictions(self) -> Result<BusPredictions, CtaServiceError> {
        let BustimeResponse { prd, error } = self.bustime_response;

        if let Some(predictions) = prd {
            return Ok(BusPredictions::Arrivals(
                predictions
                    .into_iter()
                    .map(|p| BusArrival {
                        route: p.rt,
                        direction: p.rtdir,
                        arrival: p.prdctdn,
                    })
                    .collect(),
            ));
        }

        match error {
            Some(errors) if !errors.is_empty() && errors.iter().all(BustimeError::is_no_service) => {
                Ok(BusPredictions::NoService {
                    message: errors[0].msg.clone(),
                })
            }
            Some(errors) => Err(CtaServiceError::Api {
                code: errors
                    .first()
                    .and_then(|e| e.stpid.clone().or_else(|| e.rt.clone()))
                    .unwrap_or_default(),
                message: errors
                    .iter()
                    .map(|e| e.msg.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            }),
            None => Err(CtaServiceError::UnexpectedPayload(
                "bustime-response has neither predictions nor errors".to_string(),
            )),
        }
    }
}
