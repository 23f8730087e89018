//! Claims handlers

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::{header, HeaderMap},
    Json,
};
use chrono::Local;
use tracing::{debug, info};

use domain_claims::Claim;

use crate::dto::claims::*;
use crate::{AppState, error::ApiError};

/// Validates and stores a new claim, echoing it back
///
/// The body is read as JSON unless another content type is declared.
pub async fn create_claim(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ClaimSavedResponse>, ApiError> {
    let body = body?;
    if !accepts_json(&headers) {
        return Err(ApiError::validation(
            "Request body must be JSON",
            "Content-Type must be application/json",
        ));
    }
    let claim: Claim = serde_json::from_slice(&body)?;

    state.store.append_claim(claim.clone()).await?;
    info!(claim_id = claim.claim_id, "Claim saved");

    Ok(Json(ClaimSavedResponse::saved(claim)))
}

/// Lists every stored claim
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<Claim>>, ApiError> {
    Ok(Json(state.store.list_claims().await?))
}

/// Lists stored claims matching HTS patterns, import date windows and importer
pub async fn search_claims(
    State(state): State<AppState>,
    params: Result<Query<SearchClaimsParams>, QueryRejection>,
) -> Result<Json<Vec<Claim>>, ApiError> {
    let Query(params) = params?;
    let query = params.into_query(Local::now().date_naive())?;

    let claims = state.store.list_claims().await?;
    let total = claims.len();
    let matched = query.apply(claims);
    debug!(total, matched = matched.len(), "Claim search");

    Ok(Json(matched))
}

/// True when the content type is absent or a JSON media type
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
