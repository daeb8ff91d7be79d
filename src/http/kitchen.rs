//! Kitchen service routes.

use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::error::{AppError, AppResult};
use super::state::KitchenState;
use super::{json_body, schedule_id};
use crate::domain::{Schedule, ScheduleStatus};
use crate::kitchen_actor::ScheduleQuery;
use crate::query::select;
use crate::validation::{parse_timestamp, revalidate_schedule, validate_schedule_payload};

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleListParams {
    #[serde(default, deserialize_with = "super::optional_flag")]
    pub progress: Option<bool>,
    pub limit: Option<usize>,
    pub since: Option<String>,
}

impl ScheduleListParams {
    fn into_query(self) -> AppResult<ScheduleQuery> {
        let since = self.since.as_deref().map(parse_timestamp).transpose()?;
        Ok(ScheduleQuery {
            progress: self.progress,
            since,
            limit: self.limit,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ScheduleList {
    pub schedules: Vec<Schedule>,
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: ScheduleStatus,
}

/// GET /kitchen/schedules
pub(crate) async fn list_schedules(
    State(state): State<KitchenState>,
    params: Result<Query<ScheduleListParams>, QueryRejection>,
) -> AppResult<Json<ScheduleList>> {
    let Query(params) = params.map_err(super::query_error)?;
    let query = params.into_query()?;

    let schedules = if state.revalidate_on_list {
        let stored = state.schedules.list_schedules(ScheduleQuery::default()).await?;
        debug!(count = stored.len(), "Revalidating stored schedules");
        for schedule in &stored {
            revalidate_schedule(schedule)
                .map_err(|e| AppError::internal(format!("stored schedule {} is invalid: {e}", schedule.id)))?;
        }
        select(&stored, &query)
    } else {
        state.schedules.list_schedules(query).await?
    };

    Ok(Json(ScheduleList { schedules }))
}

/// POST /kitchen/schedules
pub(crate) async fn create_schedule(
    State(state): State<KitchenState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Schedule>)> {
    let details = validate_schedule_payload(&json_body(body)?)?;
    let schedule = state.schedules.create_schedule(details).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// GET /kitchen/schedules/{schedule_id}
pub(crate) async fn get_schedule(
    State(state): State<KitchenState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Schedule>> {
    let schedule = state.schedules.get_schedule(schedule_id(id)?).await?;
    Ok(Json(schedule))
}

/// PUT /kitchen/schedules/{schedule_id}
pub(crate) async fn replace_schedule(
    State(state): State<KitchenState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Schedule>> {
    let id = schedule_id(id)?;
    let details = validate_schedule_payload(&json_body(body)?)?;
    let schedule = state.schedules.replace_schedule(id, details).await?;
    Ok(Json(schedule))
}

/// DELETE /kitchen/schedules/{schedule_id}
pub(crate) async fn delete_schedule(
    State(state): State<KitchenState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    state.schedules.delete_schedule(schedule_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /kitchen/schedules/{schedule_id}/cancel
pub(crate) async fn cancel_schedule(
    State(state): State<KitchenState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Schedule>> {
    let schedule = state.schedules.cancel_schedule(schedule_id(id)?).await?;
    Ok(Json(schedule))
}

/// POST /kitchen/schedules/{schedule_id}/progress
pub(crate) async fn start_schedule(
    State(state): State<KitchenState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Schedule>> {
    let schedule = state.schedules.start_schedule(schedule_id(id)?).await?;
    Ok(Json(schedule))
}

/// GET /kitchen/schedules/{schedule_id}/status
pub(crate) async fn get_schedule_status(
    State(state): State<KitchenState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<StatusBody>> {
    let status = state.schedules.schedule_status(schedule_id(id)?).await?;
    Ok(Json(StatusBody { status }))
}
