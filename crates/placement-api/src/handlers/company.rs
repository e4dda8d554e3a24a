// ============================================================================
// Placement API - Company Handlers
// File: crates/placement-api/src/handlers/company.rs
// ============================================================================
//! Live company records: create, list, officer-scoped list, direct update,
//! delete.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::dto::{CompanyRequest, CompanyResponse};
use crate::error::{parse_id, ApiResult};
use crate::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// POST /company/create
pub async fn create_company(
    State(state): State<AppState>,
    payload: Result<Json<CompanyRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<CompanyResponse>> {
    let Json(payload) = payload?;
    let company = state.companies.create(payload.into()).await?;
    Ok(ApiResponse::success(company.into()))
}

/// GET /company/list
pub async fn list_companies(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<Vec<CompanyResponse>>> {
    let companies = state.companies.list().await?;
    Ok(ApiResponse::success(
        companies.into_iter().map(Into::into).collect(),
    ))
}

/// GET /company/list/{officer}
pub async fn list_companies_by_officer(
    State(state): State<AppState>,
    Path(officer): Path<String>,
) -> ApiResult<ApiResponse<Vec<CompanyResponse>>> {
    let companies = state.companies.list_by_officer(&officer).await?;
    Ok(ApiResponse::success(
        companies.into_iter().map(Into::into).collect(),
    ))
}

/// PUT /company/update/{id}
///
/// Direct overwrite, bypassing the revision queue.
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CompanyRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<CompanyResponse>> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let company = state.companies.update(&id, payload.into()).await?;
    Ok(ApiResponse::success(company.into()))
}

/// DELETE /company/delete/{id}
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    let id = parse_id(&id)?;
    state.companies.delete(&id).await?;
    Ok(ApiResponse::success(MessageResponse::new(
        "Company deleted successfully",
    )))
}
