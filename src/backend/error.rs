use crate::explain::ExplainError;
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
    #[error("failed to build the explanation client: {0}")]
    Client(#[from] reqwest::Error),
}

pub fn status_for(error: &ExplainError) -> StatusCode {
    match error {
        ExplainError::Invalid(_) => StatusCode::BAD_REQUEST,
        ExplainError::Disabled => StatusCode::SERVICE_UNAVAILABLE,
        ExplainError::Network | ExplainError::Status(_) => StatusCode::BAD_GATEWAY,
        ExplainError::Upstream(_) | ExplainError::EmptyAnswer | ExplainError::Decode => {
            StatusCode::BAD_GATEWAY
        }
        ExplainError::TooLarge => StatusCode::BAD_GATEWAY,
    }
}

pub fn http_status_class(status: StatusCode) -> &'static str {
    if status.is_success() {
        return "2xx";
    }

    if status.is_client_error() {
        return "4xx";
    }

    if status.is_server_error() {
        return "5xx";
    }

    "unknown"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_mistakes_are_4xx_and_upstream_trouble_is_5xx() {
        assert_eq!(
            http_status_class(status_for(&ExplainError::Invalid("title is required"))),
            "4xx"
        );
        assert_eq!(status_for(&ExplainError::Disabled), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_for(&ExplainError::Status(429)), StatusCode::BAD_GATEWAY);
        assert_eq!(http_status_class(status_for(&ExplainError::TooLarge)), "5xx");
    }
}
