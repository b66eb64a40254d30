//! Checkout and order management handlers.

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, patch, post};
use maison_postgres::query::{
    CheckoutCustomer, CheckoutLine, CheckoutOutcome, CheckoutRejection, OrderRepository,
};
use rand::Rng;

use crate::extract::{Json, PgPool, ValidateJson};
use crate::handler::request::{CheckoutRequest, OrderListingParams, UpdateOrderStatusRequest};
use crate::handler::response::{
    OrderDetailResponse, OrderResponse, OrderStatsResponse, Page,
};
use crate::handler::{Error, ErrorKind, Result};
use crate::middleware::rate_limit_by_ip;
use crate::service::ServiceState;

/// Tracing target for order operations.
const TRACING_TARGET: &str = "maison_server::handler::orders";

/// Alphabet for human-facing order references (no easily confused
/// characters).
const ORDER_NUMBER_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generates a fresh order reference like `MSN-7F3K2A`.
fn generate_order_number() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..6)
        .map(|_| {
            let index = rng.random_range(0..ORDER_NUMBER_ALPHABET.len());
            ORDER_NUMBER_ALPHABET[index] as char
        })
        .collect();
    format!("MSN-{suffix}")
}

impl From<CheckoutRejection> for Error {
    fn from(rejection: CheckoutRejection) -> Self {
        match rejection {
            CheckoutRejection::UnknownProduct(id) => ErrorKind::NotFound
                .with_resource("products")
                .with_field("product_id")
                .with_message(format!("Product {id} does not exist")),
            CheckoutRejection::Unavailable(id) => ErrorKind::Conflict
                .with_field("product_id")
                .with_message(format!("Product {id} is not currently available")),
            CheckoutRejection::InsufficientStock(id) => ErrorKind::Conflict
                .with_field("quantity")
                .with_message(format!("Not enough stock left for product {id}")),
        }
    }
}

/// Places an order for the submitted cart.
#[tracing::instrument(skip_all)]
async fn checkout(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CheckoutRequest>,
) -> Result<(StatusCode, Json<OrderDetailResponse>)> {
    let customer = CheckoutCustomer {
        order_number: generate_order_number(),
        customer_name: request.customer_name,
        customer_email: request.customer_email,
        shipping_address: request.shipping_address,
    };
    let lines: Vec<CheckoutLine> = request
        .items
        .iter()
        .map(|item| CheckoutLine {
            product_id: item.product_id,
            quantity: item.quantity,
        })
        .collect();

    let outcome = OrderRepository::checkout(&mut conn, customer, lines).await?;

    match outcome {
        CheckoutOutcome::Placed { order, items } => {
            tracing::info!(
                target: TRACING_TARGET,
                order_id = order.id,
                order_number = %order.order_number,
                lines = items.len(),
                "order placed",
            );
            Ok((
                StatusCode::CREATED,
                Json(OrderDetailResponse::new(order, items)),
            ))
        }
        CheckoutOutcome::Rejected(rejection) => {
            tracing::info!(
                target: TRACING_TARGET,
                rejection = ?rejection,
                "checkout rejected",
            );
            Err(rejection.into())
        }
    }
}

/// Looks up an order by its human-facing reference (order tracking).
#[tracing::instrument(skip_all, fields(order_number = %order_number))]
async fn track_order(
    PgPool(mut conn): PgPool,
    Path(order_number): Path<String>,
) -> Result<Json<OrderDetailResponse>> {
    let order = OrderRepository::find_order_by_number(&mut conn, &order_number)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_resource("orders")
                .with_message("No order with this reference")
        })?;
    let items = OrderRepository::list_order_items(&mut conn, order.id).await?;

    Ok(Json(OrderDetailResponse::new(order, items)))
}

/// Lists orders for the admin table.
#[tracing::instrument(skip_all)]
async fn list_orders(
    PgPool(mut conn): PgPool,
    Query(params): Query<OrderListingParams>,
) -> Result<Json<Page<OrderResponse>>> {
    let query = params.into_query();
    let pagination = query.pagination;

    let page = OrderRepository::list_orders(&mut conn, query).await?;

    Ok(Json(Page::new(page.map(OrderResponse::from), pagination)))
}

/// Gets one order with its line items.
#[tracing::instrument(skip_all, fields(order_id = order_id))]
async fn get_order(
    PgPool(mut conn): PgPool,
    Path(order_id): Path<i64>,
) -> Result<Json<OrderDetailResponse>> {
    let order = OrderRepository::find_order_by_id(&mut conn, order_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("orders"))?;
    let items = OrderRepository::list_order_items(&mut conn, order.id).await?;

    Ok(Json(OrderDetailResponse::new(order, items)))
}

/// Moves an order through its lifecycle.
#[tracing::instrument(skip_all, fields(order_id = order_id))]
async fn update_order_status(
    PgPool(mut conn): PgPool,
    Path(order_id): Path<i64>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderResponse>> {
    let order = OrderRepository::find_order_by_id(&mut conn, order_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("orders"))?;

    if !order.status.can_transition_to(request.status) {
        return Err(ErrorKind::Conflict
            .with_field("status")
            .with_message(format!(
                "An order cannot move from {} to {}",
                order.status, request.status,
            )));
    }

    let order = OrderRepository::set_order_status(&mut conn, order_id, request.status).await?;

    tracing::info!(
        target: TRACING_TARGET,
        order_id = order.id,
        status = %order.status,
        "order status updated",
    );

    Ok(Json(order.into()))
}

/// Gets order counts per lifecycle status plus delivered revenue.
#[tracing::instrument(skip_all)]
async fn order_stats(PgPool(mut conn): PgPool) -> Result<Json<OrderStatsResponse>> {
    let stats = OrderRepository::get_order_stats(&mut conn).await?;
    let revenue = OrderRepository::get_delivered_revenue(&mut conn).await?;
    Ok(Json(OrderStatsResponse::new(stats, revenue)))
}

/// Returns the public order routes (checkout, tracking).
pub fn routes(state: ServiceState) -> Router<ServiceState> {
    let rate_limit = from_fn_with_state(state, rate_limit_by_ip);

    Router::new()
        .route("/checkout", post(checkout).route_layer(rate_limit))
        .route("/orders/{order_number}", get(track_order))
}

/// Returns the admin order routes.
pub fn admin_routes() -> Router<ServiceState> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/stats", get(order_stats))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/status", patch(update_order_status))
}
