pub mod cta_client;
pub mod poller;
pub mod stop_arrivals;
