use reqwest::StatusCode;

use crate::types::stop::StopType;

/// Failures scoped to a single stop's request.
#[derive(Debug, thiserror::Error)]
pub enum CtaServiceError {
    #[error("no {0} API key configured")]
    MissingApiKey(StopType),
    #[error("failed to send request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("upstream responded with status {0}")]
    Status(StatusCode),
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },
    #[error("invalid arrival time {0:?}")]
    InvalidTime(String),
    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CtaServiceError::MissingApiKey(StopType::Bus);
        assert_eq!(err.to_string(), "no bus API key configured");

        let err = CtaServiceError::Api {
            code: "101".into(),
            message: "Invalid API key".into(),
        };
        assert_eq!(err.to_string(), "API error 101: Invalid API key");

        let err = CtaServiceError::Status(StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("502"));
    }
}
