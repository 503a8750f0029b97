use reqwest::StatusCode;

use crate::opportunity::{OpportunityError, OpportunityType};
use crate::util::UrlError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid backend url {0:?}")]
    InvalidBaseUrl(String),
    #[error(transparent)]
    Url(#[from] UrlError),
    #[error("{0} opportunities require a language code")]
    MissingLanguage(OpportunityType),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend responded with {status}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Opportunity(#[from] OpportunityError),
}

impl ClientError {
    /// Errors caused by the caller rather than the backend.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::MissingLanguage(_) | Self::Url(_))
    }
}
