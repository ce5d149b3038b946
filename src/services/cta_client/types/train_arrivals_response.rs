#![allow(non_snake_case)]
use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::America::Chicago;
use serde::Deserialize;

use crate::types::arrival::TrainArrival;

use super::cta_service_error::CtaServiceError;

const ARRIVAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Deserialize)]
pub struct TrainEta {
    // pub staNm: String,
    pub rt: String,
    pub destNm: String,
    // pub prdt: String,
    pub arrT: String,
}

#[derive(Deserialize)]
pub struct Ctatt {
    // pub tmst: String,
    pub errCd: String,
    #[serde(default)]
    pub errNm: Option<String>,
    #[serde(default)]
    pub eta: Option<Vec<TrainEta>>,
}

#[derive(Deserialize)]
pub struct TrainArrivalsResponse {
    pub ctatt: Ctatt,
}

impl TrainArrivalsResponse {
    /// Arrivals in the order the feed lists them.
    pub fn into_arrivals(self) -> Result<Vec<TrainArrival>, CtaServiceError> {
        if self.ctatt.errCd != "0" {
            return Err(CtaServiceError::Api {
                code: self.ctatt.errCd,
                message: self.ctatt.errNm.unwrap_or_default(),
            });
        }

        self.ctatt
            .eta
            .unwrap_or_default()
            .into_iter()
            .map(|eta| {
                Ok(TrainArrival {
                    time: parse_arrival_time(&eta.arrT)?,
                    route_color: route_color(&eta.rt),
                    direction: eta.destNm,
                })
            })
            .collect()
    }
}

/// Train Tracker reports Chicago wall-clock time without an offset.
fn parse_arrival_time(raw: &str) -> Result<chrono::DateTime<Utc>, CtaServiceError> {
    NaiveDateTime::parse_from_str(raw, ARRIVAL_TIME_FORMAT)
        .ok()
        .and_then(|naive| Chicago.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| CtaServiceError::InvalidTime(raw.to_string()))
}

fn route_color(route: &str) -> String {
    match route {
        "Red" => "red",
        "Blue" => "blue",
        "Brn" => "brown",
        "G" => "green",
        "Org" => "orange",
        "P" | "Pexp" => "purple",
        "Pink" => "pink",
        "Y" => "yellow",
        other => return other.to_lowercase(),
    }
    .to_string()
}
