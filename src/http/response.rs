//! Response rendering for orchestration outcomes.
//!
//! Maps the gather taxonomy onto HTTP statuses: dependency faults are
//! server errors, denials are forbidden, a missed deadline is a gateway
//! timeout. The body is the single terminal error message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::orchestrator::GatherError;

impl IntoResponse for GatherError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatherError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatherError::AccessDenied => StatusCode::FORBIDDEN,
            GatherError::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::BackendError;

    #[test]
    fn statuses_follow_the_failure_class() {
        let backend: GatherError =
            BackendError::Unavailable("user service internal error".to_string()).into();

        assert_eq!(
            backend.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatherError::AccessDenied.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            GatherError::DeadlineExceeded.into_response().status(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }
}
