pub mod cta_service;
#[cfg(test)]
pub mod fixtures;
pub mod query;
pub mod types;
