use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use placement_core::domain::NewEvent;

use crate::dto::{CreateEventRequest, EventResponse};
use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /event/create
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<EventResponse>> {
    let Json(payload) = payload?;
    let date = payload.parsed_date()?;

    let event = state
        .events
        .create(NewEvent {
            date,
            event_type: payload.event_type,
            title: payload.title,
            description: payload.description,
            created_by: payload.created_by,
        })
        .await?;
    Ok(ApiResponse::success(event.into()))
}

/// GET /event/list
pub async fn list_events(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<Vec<EventResponse>>> {
    let events = state.events.list().await?;
    Ok(ApiResponse::success(
        events.into_iter().map(Into::into).collect(),
    ))
}
