//! Orders service routes.

use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::AppResult;
use super::state::OrdersState;
use super::{json_body, order_id};
use crate::domain::Order;
use crate::order_actor::OrderQuery;
use crate::validation::validate_order_payload;

#[derive(Debug, Default, Deserialize)]
pub struct OrderListParams {
    #[serde(default, deserialize_with = "super::optional_flag")]
    pub cancelled: Option<bool>,
    pub limit: Option<usize>,
}

impl From<OrderListParams> for OrderQuery {
    fn from(params: OrderListParams) -> Self {
        Self {
            cancelled: params.cancelled,
            limit: params.limit,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

/// GET /orders
pub(crate) async fn list_orders(
    State(state): State<OrdersState>,
    params: Result<Query<OrderListParams>, QueryRejection>,
) -> AppResult<Json<OrderList>> {
    let Query(params) = params.map_err(super::query_error)?;
    let orders = state.orders.list_orders(params.into()).await?;
    Ok(Json(OrderList { orders }))
}

/// POST /orders
pub(crate) async fn create_order(
    State(state): State<OrdersState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let details = validate_order_payload(&json_body(body)?)?;
    let order = state.orders.create_order(details).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders/{order_id}
pub(crate) async fn get_order(
    State(state): State<OrdersState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Order>> {
    let order = state.orders.get_order(order_id(id)?).await?;
    Ok(Json(order))
}

/// PUT /orders/{order_id}
pub(crate) async fn replace_order(
    State(state): State<OrdersState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Order>> {
    let id = order_id(id)?;
    let details = validate_order_payload(&json_body(body)?)?;
    let order = state.orders.replace_order(id, details).await?;
    Ok(Json(order))
}

/// DELETE /orders/{order_id}
pub(crate) async fn delete_order(
    State(state): State<OrdersState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    state.orders.delete_order(order_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /orders/{order_id}/cancel
pub(crate) async fn cancel_order(
    State(state): State<OrdersState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Order>> {
    let order = state.orders.cancel_order(order_id(id)?).await?;
    Ok(Json(order))
}

/// POST /orders/{order_id}/pay
pub(crate) async fn pay_order(
    State(state): State<OrdersState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Order>> {
    let order = state.orders.pay_order(order_id(id)?).await?;
    Ok(Json(order))
}
