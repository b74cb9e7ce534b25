use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Extension, Json,
};
use gbpro_audit::{AuditReport, AuditRequest, ListingSearch};
use gbpro_core::Caller;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_audit_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub(super) async fn run_audit(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(caller): Extension<Caller>,
    payload: Result<Json<AuditRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AuditReport>>, ApiError> {
    let Json(request) = payload
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.body_text()))?;

    let report = state
        .auditor
        .run_audit(&caller, request)
        .await
        .map_err(|e| map_audit_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: report,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn search_listings(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<ListingSearch>>, ApiError> {
    let data = state
        .auditor
        .search_listings(&query.q)
        .await
        .map_err(|e| map_audit_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
