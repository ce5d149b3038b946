use crate::{
    services::stop_arrivals::fetch_stop_arrivals,
    types::{
        app_state::AppState,
        notification::{FetchRequest, SocketNotification},
    },
    utils::app_error::AppError,
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
use tracing::{debug, warn};
use validator::Validate;

/// Entry point for the display's socket notifications. Only the fetch trigger
/// starts a cycle; anything else is acknowledged with no content.
#[cfg_attr(test, debug_handler)]
pub async fn post_socket_notification(
    State(state): State<AppState>,
    Json(notification): Json<SocketNotification>,
) -> Result<Response, AppError> {
    if !notification.is_fetch_trigger() {
        debug!(notification = %notification.notification, "Ignoring notification");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let request: FetchRequest = serde_json::from_value(notification.payload).map_err(|e| {
        warn!("Invalid fetch payload: {}", e);
        AppError::bad_request(format!("Invalid payload: {}", e).as_str())
    })?;
    request.validate()?;

    let response = fetch_stop_arrivals(&state.cta_service, &request, Utc::now()).await;

    Ok((StatusCode::OK, Json(SocketNotification::data(response))).into_response())
}
