use axum::{
    routing::{get, post},
    Router,
};

use crate::types::app_state::AppState;

mod get_arrivals;
mod post_arrivals;
mod post_socket_notification;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/socket-notification",
        post(post_socket_notification::post_socket_notification),
    )
    .route(
        "/arrivals",
        get(get_arrivals::get_arrivals).post(post_arrivals::post_arrivals),
    )
}
