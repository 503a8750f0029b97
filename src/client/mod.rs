use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;

use crate::config::BackendConfig;
use crate::opportunity::{FetchedOpportunities, OpportunitiesPage, OpportunityType};
use crate::util::interpolate_url;

pub mod error;
pub mod feed;

pub use error::ClientError;
pub use feed::OpportunityFeed;

pub const URL_TEMPLATE: &str = "/opportunitiessummaryhandler/<opportunityType>";

/// Query string sent with every listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpportunityParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    pub cursor: String,
}

impl OpportunityParams {
    pub fn new(cursor: impl Into<String>) -> Self {
        Self {
            language_code: None,
            cursor: cursor.into(),
        }
    }

    pub fn with_language(language_code: impl Into<String>, cursor: impl Into<String>) -> Self {
        Self {
            language_code: Some(language_code.into()),
            cursor: cursor.into(),
        }
    }
}

/// Anything able to produce a page of opportunities.
#[async_trait]
pub trait OpportunitySource: Send + Sync {
    async fn fetch(
        &self,
        kind: OpportunityType,
        params: &OpportunityParams,
    ) -> Result<FetchedOpportunities, ClientError>;
}

#[derive(Debug, Clone)]
pub struct OpportunitiesClient {
    http: Client,
    base_url: Url,
}

impl OpportunitiesClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Self::with_http_client(http, &config.base_url)
    }

    /// `base_url` is the backend origin. Any path on it is replaced by the
    /// handler path.
    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn handler_url(&self, kind: OpportunityType) -> Result<Url, ClientError> {
        let params = HashMap::from([("opportunityType", kind.slug())]);
        let path = interpolate_url(URL_TEMPLATE, &params)?;

        self.base_url
            .join(&path)
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))
    }

    pub async fn fetch_skill_opportunities(&self, cursor: &str) -> Result<FetchedOpportunities, ClientError> {
        self.fetch_page(OpportunityType::Skill, &OpportunityParams::new(cursor))
            .await
    }

    pub async fn fetch_translation_opportunities(
        &self,
        language_code: &str,
        cursor: &str,
    ) -> Result<FetchedOpportunities, ClientError> {
        self.fetch_page(
            OpportunityType::Translation,
            &OpportunityParams::with_language(language_code, cursor),
        )
        .await
    }

    pub async fn fetch_voiceover_opportunities(
        &self,
        language_code: &str,
        cursor: &str,
    ) -> Result<FetchedOpportunities, ClientError> {
        self.fetch_page(
            OpportunityType::Voiceover,
            &OpportunityParams::with_language(language_code, cursor),
        )
        .await
    }

    #[tracing::instrument(skip_all, fields(kind = %kind, cursor = %params.cursor))]
    async fn fetch_page(
        &self,
        kind: OpportunityType,
        params: &OpportunityParams,
    ) -> Result<FetchedOpportunities, ClientError> {
        if kind.requires_language() && params.language_code.as_deref().map_or(true, str::is_empty) {
            return Err(ClientError::MissingLanguage(kind));
        }

        let url = self.handler_url(kind)?;
        let response = self.http.get(url).query(params).send().await.map_err(|e| {
            tracing::warn!(error = %e, "opportunities request failed");
            e
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "backend rejected opportunities request");
            return Err(ClientError::Status { status, body });
        }

        let page = serde_json::from_str::<OpportunitiesPage>(&body).map_err(|e| {
            tracing::error!(error = %e, "failed to parse opportunities page");
            e
        })?;

        let fetched = FetchedOpportunities::from_page(kind, page)?;

        tracing::debug!(
            count = fetched.opportunities.len(),
            more = fetched.more,
            "fetched opportunities"
        );

        Ok(fetched)
    }
}

#[async_trait]
impl OpportunitySource for OpportunitiesClient {
    async fn fetch(
        &self,
        kind: OpportunityType,
        params: &OpportunityParams,
    ) -> Result<FetchedOpportunities, ClientError> {
        self.fetch_page(kind, params).await
    }
}
