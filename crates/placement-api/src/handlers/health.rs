use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

pub async fn company_health() -> ApiResponse<HealthResponse> {
    ApiResponse::success(HealthResponse {
        status: "running",
        message: "company service is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn user_health() -> ApiResponse<HealthResponse> {
    ApiResponse::success(HealthResponse {
        status: "running",
        message: "user service is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
