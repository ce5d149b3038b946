pub mod app_state;
pub mod arrival;
pub mod arrival_board;
pub mod notification;
pub mod stop;
