use crate::config::ConfigError;
use crate::quote::export::ExportError;
use crate::quote::{QuoteError, ScheduleError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("quote error: {0}")]
    Quote(#[from] QuoteError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

impl From<ScheduleError> for AppError {
    fn from(value: ScheduleError) -> Self {
        Self::Quote(QuoteError::Schedule(value))
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Quote(QuoteError::InvalidCategory(_))
            | AppError::Quote(QuoteError::InstallmentsOutOfRange { .. }) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Quote(QuoteError::Schedule(_))
            | AppError::Export(_)
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::Quote(QuoteError::InvalidCategory(tag)) => {
                format!("invalid property type '{tag}'")
            }
            AppError::Quote(err @ QuoteError::InstallmentsOutOfRange { .. }) => err.to_string(),
            other => {
                tracing::error!(error = %other, "quote request failed");
                "internal error while preparing the quote".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
