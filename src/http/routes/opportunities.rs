use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::client::OpportunityParams;
use crate::global::Global;
use crate::http::error::{ApiError, ApiErrorCode};
use crate::opportunity::{FetchedOpportunities, OpportunityType};

static LANGUAGE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2,3}(-[a-z0-9]{2,8})*$").expect("invalid language code regex"));

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route("/opportunities/:kind", get(get_opportunities))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(default)]
    cursor: String,
    language_code: Option<String>,
}

fn params_for(kind: OpportunityType, query: ListQuery) -> Result<OpportunityParams, ApiError> {
    if !kind.requires_language() {
        return Ok(OpportunityParams::new(query.cursor));
    }

    match query.language_code {
        Some(lang) if LANGUAGE_CODE.is_match(&lang) => Ok(OpportunityParams::with_language(lang, query.cursor)),
        Some(_) => Err(ApiError::bad_request(ApiErrorCode::InvalidLanguage, "invalid language code")),
        None => Err(ApiError::bad_request(
            ApiErrorCode::InvalidLanguage,
            format!("{kind} opportunities require a language_code"),
        )),
    }
}

/// GET /opportunities/:kind
///
/// Returns one page of opportunities of the given kind.
#[tracing::instrument(skip(global, query))]
async fn get_opportunities(
    State(global): State<Arc<Global>>,
    Path(kind): Path<String>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<FetchedOpportunities>, ApiError> {
    let kind = OpportunityType::from_slug(&kind)
        .ok_or_else(|| ApiError::not_found(ApiErrorCode::UnknownOpportunityType, "unknown opportunity type"))?;

    let Query(query) =
        query.map_err(|rejection| ApiError::bad_request(ApiErrorCode::InvalidQuery, rejection.body_text()))?;

    let params = params_for(kind, query)?;
    let page = global.source.fetch(kind, &params).await?;

    Ok(Json(page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(language_code: Option<&str>) -> ListQuery {
        ListQuery {
            cursor: "c".into(),
            language_code: language_code.map(str::to_string),
        }
    }

    #[test]
    fn test_language_code_pattern() {
        for ok in ["en", "hi", "pt-br", "zh-hans", "ast"] {
            assert!(LANGUAGE_CODE.is_match(ok), "{ok} should be accepted");
        }
        for bad in ["", "e", "EN", "en_US", "en-", "en/../x", "english"] {
            assert!(!LANGUAGE_CODE.is_match(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_skill_ignores_language() {
        let params = params_for(OpportunityType::Skill, query(Some("hi"))).unwrap();
        assert_eq!(params, OpportunityParams::new("c"));
    }

    #[test]
    fn test_translation_requires_language() {
        let err = params_for(OpportunityType::Translation, query(None)).unwrap_err();
        assert_eq!(err.error_code, ApiErrorCode::InvalidLanguage);

        let err = params_for(OpportunityType::Voiceover, query(Some("EN"))).unwrap_err();
        assert_eq!(err.error_code, ApiErrorCode::InvalidLanguage);

        let params = params_for(OpportunityType::Voiceover, query(Some("hi"))).unwrap();
        assert_eq!(params, OpportunityParams::with_language("hi", "c"));
    }
}
