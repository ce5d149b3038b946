use crate::{
    services::stop_arrivals::fetch_stop_arrivals,
    types::{app_state::AppState, notification::FetchRequest},
    utils::{app_error::AppError, validated_json::ValidatedJson},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use chrono::Utc;

#[cfg_attr(test, debug_handler)]
pub async fn post_arrivals(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<FetchRequest>,
) -> Result<Response, AppError> {
    let response = fetch_stop_arrivals(&state.cta_service, &payload, Utc::now()).await;

    Ok((StatusCode::OK, Json(response)).into_response())
}
