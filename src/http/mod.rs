//! HTTP boundary for the orders and kitchen services.
//!
//! Handlers validate input, call the resource clients and turn domain errors
//! into status codes. Every response body is JSON.
//!
//! Orders service:
//! - GET    /orders                        - List orders (`cancelled`, `limit`)
//! - POST   /orders                        - Place an order
//! - GET    /orders/{order_id}             - Fetch one order
//! - PUT    /orders/{order_id}             - Replace the line items
//! - DELETE /orders/{order_id}             - Remove an order
//! - POST   /orders/{order_id}/cancel      - Cancel
//! - POST   /orders/{order_id}/pay         - Pay (status becomes `progress`)
//!
//! Kitchen service:
//! - GET    /kitchen/schedules             - List schedules (`progress`, `since`, `limit`)
//! - POST   /kitchen/schedules             - Schedule an order
//! - GET    /kitchen/schedules/{id}        - Fetch one schedule
//! - PUT    /kitchen/schedules/{id}        - Replace the line items
//! - DELETE /kitchen/schedules/{id}        - Remove a schedule
//! - POST   /kitchen/schedules/{id}/cancel - Cancel
//! - POST   /kitchen/schedules/{id}/progress - Start preparing
//! - GET    /kitchen/schedules/{id}/status - Current status only
//!
//! Both answer GET /health.

mod error;
mod kitchen;
mod orders;
mod state;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::{self, Deserialize, Deserializer};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use error::{AppError, AppResult};
pub use kitchen::{ScheduleList, ScheduleListParams, StatusBody};
pub use orders::{OrderList, OrderListParams};
pub use state::{KitchenState, OrdersState};

use crate::kitchen_actor::ScheduleError;
use crate::query::parse_flag;
use crate::validation::ValidationErrors;

/// Router for the orders service.
pub fn orders_router(state: OrdersState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route(
            "/orders/{order_id}",
            get(orders::get_order)
                .put(orders::replace_order)
                .delete(orders::delete_order),
        )
        .route("/orders/{order_id}/cancel", post(orders::cancel_order))
        .route("/orders/{order_id}/pay", post(orders::pay_order))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the kitchen service.
pub fn kitchen_router(state: KitchenState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route(
            "/kitchen/schedules",
            get(kitchen::list_schedules).post(kitchen::create_schedule),
        )
        .route(
            "/kitchen/schedules/{schedule_id}",
            get(kitchen::get_schedule)
                .put(kitchen::replace_schedule)
                .delete(kitchen::delete_schedule),
        )
        .route("/kitchen/schedules/{schedule_id}/cancel", post(kitchen::cancel_schedule))
        .route("/kitchen/schedules/{schedule_id}/progress", post(kitchen::start_schedule))
        .route("/kitchen/schedules/{schedule_id}/status", get(kitchen::get_schedule_status))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn handle_health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Fallback handler for unmatched routes.
async fn handle_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ValidationErrors::single(&["body"], rejection.body_text()).into())
}

/// Orders ids are typed: anything that is not a UUID fails validation.
fn order_id(id: Result<Path<String>, PathRejection>) -> AppResult<Uuid> {
    let raw = raw_id(id)?;
    Uuid::parse_str(&raw)
        .map_err(|_| ValidationErrors::single(&["path", "order_id"], "value is not a valid uuid").into())
}

/// Schedule ids are looked up as given, so a malformed id is just absent.
fn schedule_id(id: Result<Path<String>, PathRejection>) -> AppResult<Uuid> {
    let raw = raw_id(id)?;
    Uuid::parse_str(&raw).map_err(|_| ScheduleError::NotFound(raw).into())
}

fn raw_id(id: Result<Path<String>, PathRejection>) -> AppResult<String> {
    id.map(|Path(raw)| raw)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}

/// Query-string booleans accept the spellings of [`parse_flag`].
fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_flag(&raw).ok_or_else(|| de::Error::custom(format!("value could not be parsed to a boolean: {raw}")))
        })
        .transpose()
}

fn query_error(rejection: QueryRejection) -> AppError {
    AppError::bad_request(rejection.body_text())
}
