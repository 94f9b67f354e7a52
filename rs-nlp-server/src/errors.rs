//! API errors mapped to HTTP status codes.
//!
//! Every [`ApiError`] produces a JSON body `{"error": "message"}`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use rs_nlp_core::error::{InvalidInputError, NlpError};
use rs_nlp_core::report::ErrorReport;
use thiserror::Error;

/// # Variants
/// - `BadRequest` → 400
/// - `BadGateway` → 502, the page to analyse could not be fetched
/// - `Internal` → 500
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("{0}")]
	BadRequest(String),
	#[error("{0}")]
	BadGateway(String),
	#[error("{0}")]
	Internal(String),
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			Self::BadRequest(_) => StatusCode::BAD_REQUEST,
			Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
			Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(ErrorReport { error: self.to_string() })
	}
}

impl From<NlpError> for ApiError {
	fn from(error: NlpError) -> Self {
		Self::BadRequest(error.to_string())
	}
}

impl From<InvalidInputError> for ApiError {
	fn from(error: InvalidInputError) -> Self {
		Self::BadRequest(format!("InvalidInputError: {error}"))
	}
}

impl From<reqwest::Error> for ApiError {
	fn from(error: reqwest::Error) -> Self {
		Self::BadGateway(format!("Failed to fetch page: {error}"))
	}
}
