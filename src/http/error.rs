use std::borrow::Cow;

use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;

use crate::client::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_repr::Serialize_repr)]
#[repr(u16)]
pub enum ApiErrorCode {
	/// The requested route does not exist.
	RouteNotFound = 404,
	/// The requested opportunity type does not exist.
	UnknownOpportunityType = 1000,
	/// Missing or malformed `language_code` query parameter.
	InvalidLanguage = 1001,
	/// The query string could not be parsed.
	InvalidQuery = 1002,
	/// The platform backend failed or answered with something unusable.
	UpstreamError = 2000,
}

impl ApiErrorCode {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::RouteNotFound => "ROUTE_NOT_FOUND",
			Self::UnknownOpportunityType => "UNKNOWN_OPPORTUNITY_TYPE",
			Self::InvalidLanguage => "INVALID_LANGUAGE",
			Self::InvalidQuery => "INVALID_QUERY",
			Self::UpstreamError => "UPSTREAM_ERROR",
		}
	}
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiError {
	#[serde(skip)]
	pub status_code: StatusCode,
	pub status: Cow<'static, str>,
	pub error_code: ApiErrorCode,
	pub error: Cow<'static, str>,
}

impl ApiError {
	pub fn new(status_code: StatusCode, error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		let error = error.into();
		tracing::debug!(code = error_code.as_str(), %error, "api error");

		Self {
			status_code,
			status: status_code.canonical_reason().unwrap_or("unknown").into(),
			error_code,
			error,
		}
	}

	pub fn bad_request(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, error_code, error)
	}

	pub fn not_found(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::NOT_FOUND, error_code, error)
	}

	pub fn bad_gateway(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::BAD_GATEWAY, error_code, error)
	}
}

impl From<ClientError> for ApiError {
	fn from(err: ClientError) -> Self {
		if err.is_caller_error() {
			return Self::bad_request(ApiErrorCode::InvalidLanguage, err.to_string());
		}

		tracing::error!(error = %err, "opportunities backend request failed");
		Self::bad_gateway(ApiErrorCode::UpstreamError, "failed to fetch opportunities")
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> axum::http::Response<axum::body::Body> {
		(self.status_code, Json(self)).into_response()
	}
}
