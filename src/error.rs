use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::services::providers::ProviderError;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Template render error: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Template error: {0}")]
    TemplateRegistration(#[from] handlebars::TemplateError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Request body rejected by an axum extractor, with the status it chose
    #[error("Request rejected: {1}")]
    Rejected(StatusCode, String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::ServiceUnavailable(msg) => AppError::ServiceUnavailable(msg),
            ProviderError::InvalidInput(msg) => AppError::InvalidInput(msg),
            ProviderError::MalformedRecord(msg) => AppError::Internal(msg),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected(status, _) => *status,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Template(_) | AppError::TemplateRegistration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        let body = Html(format!(
            "<!DOCTYPE html>\n<html><head><title>{status}</title></head>\
             <body><h1>{status}</h1><p>{}</p></body></html>\n",
            handlebars::html_escape(&message),
        ));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_errors_map_to_status() {
        let unavailable = AppError::from(ProviderError::ServiceUnavailable("down".into()));
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let invalid = AppError::from(ProviderError::InvalidInput("budget".into()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let malformed = AppError::from(ProviderError::MalformedRecord("bad url".into()));
        assert_eq!(malformed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_rejection_keeps_status() {
        let err = AppError::Rejected(StatusCode::PAYLOAD_TOO_LARGE, "too big".into());
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_response_is_html() {
        let response = AppError::InvalidInput("<script>".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers()[axum::http::header::CONTENT_TYPE]
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/html"));
    }
}
