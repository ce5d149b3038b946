use crate::services::cta_client::cta_service::CtaService;

use super::arrival_board::ArrivalBoard;

#[derive(Clone)]
pub struct AppState {
    pub cta_service: CtaService,
    pub board: ArrivalBoard,
}
