use crate::{types::app_state::AppState, utils::app_error::AppError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Latest poll result in the shape the display template consumes.
pub async fn get_arrivals(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok((StatusCode::OK, Json(state.board.view().await)).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{
        app::{gen_app, test_state},
        types::{
            arrival::{Arrivals, BusArrival},
            arrival_board::BoardView,
            notification::FetchResponse,
            stop::{StopConfig, StopResult, StopType},
        },
    };

    async fn fetch_board(app: axum::Router) -> BoardView {
        let response = app
            .oneshot(Request::builder().uri("/arrivals").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn loading_before_first_cycle() {
        let app = gen_app(test_state("http://localhost:1"));

        let board = fetch_board(app).await;

        assert!(board.loading);
        assert!(board.stops.is_empty());
    }

    #[tokio::test]
    async fn serves_published_stops() {
        let state = test_state("http://localhost:1");
        state
            .board
            .publish(FetchResponse {
                stops: vec![StopResult::new(
                    StopConfig::new(StopType::Bus, "1234").with_name("Mock Stop"),
                    Arrivals::Bus(vec![BusArrival {
                        route: "152".to_string(),
                        direction: "Westbound".to_string(),
                        arrival: "8".to_string(),
                    }]),
                )],
            })
            .await;

        let board = fetch_board(gen_app(state)).await;

        assert!(!board.loading);
        assert_eq!(board.stops[0].stop.name.as_deref(), Some("Mock Stop"));
        assert_eq!(board.stops[0].arrivals.len(), 1);
    }
}
