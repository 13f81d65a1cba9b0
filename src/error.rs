use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Request-level errors rendered as plain-text responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");

        (status, self.to_string()).into_response()
    }
}
