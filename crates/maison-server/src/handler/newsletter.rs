//! Newsletter subscription handlers.

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use maison_postgres::query::SubscriberRepository;

use crate::extract::{Json, PgPool, ValidateJson};
use crate::handler::request::{
    BulkDeleteRequest, SubscriberListingParams, SubscriptionRequest,
};
use crate::handler::response::{BulkDeleteResponse, Page, SubscriberResponse};
use crate::handler::{ErrorKind, Result};
use crate::middleware::rate_limit_by_ip;
use crate::service::ServiceState;

/// Tracing target for newsletter operations.
const TRACING_TARGET: &str = "maison_server::handler::newsletter";

/// Subscribes an email address to the newsletter.
///
/// Re-subscribing a known address reactivates it; the endpoint is
/// idempotent from the subscriber's point of view.
#[tracing::instrument(skip_all)]
async fn subscribe(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<SubscriptionRequest>,
) -> Result<(StatusCode, Json<SubscriberResponse>)> {
    let subscriber = SubscriberRepository::subscribe(&mut conn, request.email).await?;

    tracing::info!(
        target: TRACING_TARGET,
        subscriber_id = subscriber.id,
        "newsletter subscription",
    );

    Ok((StatusCode::CREATED, Json(subscriber.into())))
}

/// Unsubscribes an email address from the newsletter.
#[tracing::instrument(skip_all)]
async fn unsubscribe(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<SubscriptionRequest>,
) -> Result<Json<SubscriberResponse>> {
    let subscriber = SubscriberRepository::unsubscribe(&mut conn, &request.email)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_resource("newsletter_subscribers")
                .with_message("This address is not subscribed")
        })?;

    tracing::info!(
        target: TRACING_TARGET,
        subscriber_id = subscriber.id,
        "newsletter unsubscription",
    );

    Ok(Json(subscriber.into()))
}

/// Lists subscribers for the admin table.
#[tracing::instrument(skip_all)]
async fn list_subscribers(
    PgPool(mut conn): PgPool,
    Query(params): Query<SubscriberListingParams>,
) -> Result<Json<Page<SubscriberResponse>>> {
    let query = params.into_query();
    let pagination = query.pagination;

    let page = SubscriberRepository::list_subscribers(&mut conn, query).await?;

    Ok(Json(Page::new(
        page.map(SubscriberResponse::from),
        pagination,
    )))
}

/// Bulk-deletes subscribers per the admin table selection.
#[tracing::instrument(skip_all)]
async fn bulk_delete_subscribers(
    PgPool(mut conn): PgPool,
    Query(params): Query<SubscriberListingParams>,
    Json(request): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>> {
    let deleted = match &request {
        BulkDeleteRequest::Explicit(ids) => {
            SubscriberRepository::delete_subscribers_by_ids(&mut conn, ids).await?
        }
        BulkDeleteRequest::AllExcept(excluded) => {
            SubscriberRepository::delete_subscribers_matching(&mut conn, &params.filter(), excluded)
                .await?
        }
    };

    tracing::info!(target: TRACING_TARGET, deleted, "subscribers bulk-deleted");

    Ok(Json(BulkDeleteResponse {
        deleted: deleted as u64,
    }))
}

/// Returns the public newsletter routes.
pub fn routes(state: ServiceState) -> Router<ServiceState> {
    let rate_limit = from_fn_with_state(state, rate_limit_by_ip);

    Router::new()
        .route("/newsletter/subscribe", post(subscribe))
        .route("/newsletter/unsubscribe", post(unsubscribe))
        .route_layer(rate_limit)
}

/// Returns the admin newsletter routes.
pub fn admin_routes() -> Router<ServiceState> {
    Router::new()
        .route("/newsletter", get(list_subscribers))
        .route("/newsletter/bulk-delete", post(bulk_delete_subscribers))
}
