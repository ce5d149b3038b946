use crate::{routes::apply_routes, types::app_state::AppState};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn gen_app(state: AppState) -> Router {
    let cors_middleware = CorsLayer::new();

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

async fn root() -> &'static str {
    "OK"
}

#[cfg(test)]
pub fn test_state(cta_host: &str) -> AppState {
    use crate::{
        services::cta_client::cta_service::test_support::service_for,
        types::arrival_board::ArrivalBoard,
    };

    AppState {
        cta_service: service_for(cta_host),
        board: ArrivalBoard::default(),
    }
}
