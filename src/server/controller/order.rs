use axum::{extract::rejection::JsonRejection, extract::State, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        order::{
            ConsignOrderDto, CreateOrderDto, CreatedOrderDto, OrderIdDto, OrderIdRequestDto,
            OrderInfoRequestDto, OrderListDto, OrderWithItemsDto, OrdersByUserRequestDto,
            PayOrderDto, UpdateOrderStatusDto,
        },
    },
    server::{
        controller::deadline::RequestDeadline,
        error::AppError,
        model::order::{CreateOrderParams, OrderStatus, OrderWithItems},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place a new order.
///
/// Stores the order and all of its items atomically. The order code is derived from the
/// submission time and the user ID.
///
/// # Returns
/// - `200 OK` - Generated order ID and order code
/// - `400 Bad Request` - Malformed body, invalid promotion flag or no items
/// - `409 Conflict` - Order code already in use
/// - `502 Bad Gateway` - Order store failure
/// - `504 Gateway Timeout` - Order store did not answer in time
#[utoipa::path(
    post,
    path = "/api/v1/order/create",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 200, description = "Order placed", body = CreatedOrderDto),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 409, description = "Order code already in use", body = ErrorDto),
        (status = 502, description = "Order store failure", body = ErrorDto),
        (status = 504, description = "Order store timeout", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    deadline: RequestDeadline,
    payload: Result<Json<CreateOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateOrderParams::from_dto(payload, Utc::now())?;

    let service = deadline.apply(
        OrderService::new(&state.db, &state.order_settings),
        state.order_settings.store_timeout,
    );
    let placed = service.place_order(params).await?;

    Ok(Json(CreatedOrderDto {
        order_id: placed.id,
        order_code: placed.order_code,
    }))
}

/// Get an order with its items.
///
/// # Returns
/// - `200 OK` - Order and its items
/// - `404 Not Found` - No order with this ID
#[utoipa::path(
    post,
    path = "/api/v1/order/info",
    tag = ORDER_TAG,
    request_body = OrderInfoRequestDto,
    responses(
        (status = 200, description = "Order with items", body = OrderWithItemsDto),
        (status = 400, description = "Malformed request", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 502, description = "Order store failure", body = ErrorDto)
    ),
)]
pub async fn get_order_info(
    State(state): State<AppState>,
    deadline: RequestDeadline,
    payload: Result<Json<OrderInfoRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = deadline.apply(
        OrderService::new(&state.db, &state.order_settings),
        state.order_settings.store_timeout,
    );
    let order = service.get_by_id(payload.order_id).await?;

    Ok(Json(order.into_dto()))
}

/// Get all orders of a user in one status.
///
/// Only orders whose status equals the requested status are returned.
#[utoipa::path(
    post,
    path = "/api/v1/order/user",
    tag = ORDER_TAG,
    request_body = OrdersByUserRequestDto,
    responses(
        (status = 200, description = "Matching orders with items", body = OrderListDto),
        (status = 400, description = "Malformed request or unknown status", body = ErrorDto),
        (status = 502, description = "Order store failure", body = ErrorDto)
    ),
)]
pub async fn get_user_orders(
    State(state): State<AppState>,
    deadline: RequestDeadline,
    payload: Result<Json<OrdersByUserRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let status = OrderStatus::try_from(payload.status)?;

    let service = deadline.apply(
        OrderService::new(&state.db, &state.order_settings),
        state.order_settings.store_timeout,
    );
    let orders = service
        .get_by_user_and_status(payload.user_id, status)
        .await?;

    Ok(Json(OrderListDto {
        orders: orders.into_iter().map(OrderWithItems::into_dto).collect(),
    }))
}

/// Resolve an order code to its order ID.
#[utoipa::path(
    post,
    path = "/api/v1/order/id",
    tag = ORDER_TAG,
    request_body = OrderIdRequestDto,
    responses(
        (status = 200, description = "Order ID", body = OrderIdDto),
        (status = 400, description = "Malformed request", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 502, description = "Order store failure", body = ErrorDto)
    ),
)]
pub async fn get_order_id(
    State(state): State<AppState>,
    deadline: RequestDeadline,
    payload: Result<Json<OrderIdRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = deadline.apply(
        OrderService::new(&state.db, &state.order_settings),
        state.order_settings.store_timeout,
    );
    let id = service.order_id_by_code(&payload.order_code).await?;

    Ok(Json(OrderIdDto { id }))
}

/// Mark an unfinished order as paid.
///
/// # Returns
/// - `200 OK` - The paid order
/// - `400 Bad Request` - Pay way 0
/// - `404 Not Found` - No order with this ID
/// - `409 Conflict` - Order is not unfinished
#[utoipa::path(
    post,
    path = "/api/v1/order/pay",
    tag = ORDER_TAG,
    request_body = PayOrderDto,
    responses(
        (status = 200, description = "Order paid", body = OrderWithItemsDto),
        (status = 400, description = "Invalid pay way", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order cannot be paid", body = ErrorDto),
        (status = 502, description = "Order store failure", body = ErrorDto)
    ),
)]
pub async fn pay_order(
    State(state): State<AppState>,
    deadline: RequestDeadline,
    payload: Result<Json<PayOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = deadline.apply(
        OrderService::new(&state.db, &state.order_settings),
        state.order_settings.store_timeout,
    );
    let order = service
        .pay(payload.order_id, payload.pay_way, Utc::now())
        .await?;

    Ok(Json(order.into_dto()))
}

/// Mark a paid order as consigned.
#[utoipa::path(
    post,
    path = "/api/v1/order/consign",
    tag = ORDER_TAG,
    request_body = ConsignOrderDto,
    responses(
        (status = 200, description = "Order consigned", body = OrderWithItemsDto),
        (status = 400, description = "Invalid ship code", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order cannot be consigned", body = ErrorDto),
        (status = 502, description = "Order store failure", body = ErrorDto)
    ),
)]
pub async fn consign_order(
    State(state): State<AppState>,
    deadline: RequestDeadline,
    payload: Result<Json<ConsignOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = deadline.apply(
        OrderService::new(&state.db, &state.order_settings),
        state.order_settings.store_timeout,
    );
    let order = service
        .consign(payload.order_id, payload.ship_code, Utc::now())
        .await?;

    Ok(Json(order.into_dto()))
}

/// Set the status of an order.
#[utoipa::path(
    post,
    path = "/api/v1/order/status",
    tag = ORDER_TAG,
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order status updated", body = OrderWithItemsDto),
        (status = 400, description = "Malformed request or unknown status", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 502, description = "Order store failure", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    deadline: RequestDeadline,
    payload: Result<Json<UpdateOrderStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let status = OrderStatus::try_from(payload.status)?;

    let service = deadline.apply(
        OrderService::new(&state.db, &state.order_settings),
        state.order_settings.store_timeout,
    );
    let order = service
        .update_status(payload.order_id, status, Utc::now())
        .await?;

    Ok(Json(order.into_dto()))
}
