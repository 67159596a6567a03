use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use grader_core::RequestError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Request(#[from] RequestError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Request(err) => match err {
                RequestError::SchemaError(_)
                | RequestError::JsonError(_)
                | RequestError::YamlError(_) => StatusCode::BAD_REQUEST,
                RequestError::IoError(_) | RequestError::SchemaUnavailable(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        tracing::warn!(status = %code, error = %self, "Request rejected");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (code, Json(body)).into_response()
    }
}
