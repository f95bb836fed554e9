use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::email::TransportError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The mail transport refused a send. The raw error text becomes the
    /// response body, which is the contract callers of this API rely on.
    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("Failed to render email template: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Transport(e) => tracing::error!("Error sending email: {e}"),
            AppError::Template(e) => tracing::error!("Template render failed: {e}"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
