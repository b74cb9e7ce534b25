use axum::{extract::State, Extension, Json};
use gbpro_audit::ReportHistory;
use gbpro_core::Caller;

use crate::middleware::RequestId;

use super::{map_audit_error, ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn report_history(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<ApiResponse<ReportHistory>>, ApiError> {
    let data = state
        .auditor
        .report_history(&caller)
        .await
        .map_err(|e| map_audit_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
