// ============================================================================
// Placement API - Company Revision Handlers
// File: crates/placement-api/src/handlers/revision.rs
// ============================================================================
//! Staged company edits ("temp" records) and the approval endpoint.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use placement_core::domain::RevisionStatus;

use crate::dto::{CompanyResponse, RevisionRequest, RevisionResponse, StatusRequest};
use crate::error::{parse_id, ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /company/temp/update
pub async fn submit_revision(
    State(state): State<AppState>,
    payload: Result<Json<RevisionRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<RevisionResponse>> {
    let Json(payload) = payload?;
    let target = payload.target()?;
    let (attributes, created_by) = payload.into_parts();

    let revision = state
        .revisions
        .submit(target, attributes, &created_by)
        .await?;
    Ok(ApiResponse::success(revision.into()))
}

/// POST /company/temp/update/{id}
///
/// The path id wins over any `company_id` in the body.
pub async fn submit_revision_for_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    payload: Result<Json<RevisionRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<RevisionResponse>> {
    let company_id = parse_id(&company_id)?;
    let Json(payload) = payload?;
    let (attributes, created_by) = payload.into_parts();

    let revision = state
        .revisions
        .submit(Some(company_id), attributes, &created_by)
        .await?;
    Ok(ApiResponse::success(revision.into()))
}

/// GET /company/temp/list
pub async fn list_revisions(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<Vec<RevisionResponse>>> {
    let revisions = state.revisions.list().await?;
    Ok(ApiResponse::success(
        revisions.into_iter().map(Into::into).collect(),
    ))
}

/// GET /company/temp/{id}
pub async fn get_revision(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<RevisionResponse>> {
    let id = parse_id(&id)?;
    let revision = state.revisions.get(&id).await?;
    Ok(ApiResponse::success(revision.into()))
}

/// PUT /company/temp/status/{id}
///
/// Relabels only. `approved` here does not merge; use the approve endpoint.
pub async fn set_revision_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StatusRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<RevisionResponse>> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let status = RevisionStatus::parse(&payload.status)
        .ok_or_else(|| ApiError::BadRequest("status must not be blank".to_string()))?;

    let revision = state.revisions.set_status(&id, status).await?;
    Ok(ApiResponse::success(revision.into()))
}

/// PUT /company/temp/approve/{id}
pub async fn approve_revision(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<CompanyResponse>> {
    let id = parse_id(&id)?;
    let company = state.approvals.approve(&id).await?;
    Ok(ApiResponse::success(company.into()))
}
