pub mod bus_predictions_response;
pub mod cta_service_error;
pub mod train_arrivals_response;
