//! Product review handlers.

use axum::Router;
use axum::extract::{Path, Query};
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, patch, post};
use maison_postgres::query::{ProductRepository, ReviewRepository};

use crate::extract::{Json, PgPool, ValidateJson};
use crate::handler::request::{
    BulkDeleteRequest, CreateReviewRequest, ReviewListingParams, UpdateReviewStatusRequest,
};
use crate::handler::response::{BulkDeleteResponse, Page, ReviewResponse};
use crate::handler::{ErrorKind, Result};
use crate::middleware::rate_limit_by_ip;
use crate::service::ServiceState;

/// Tracing target for review operations.
const TRACING_TARGET: &str = "maison_server::handler::reviews";

/// How many approved reviews the storefront shows per product.
const PUBLIC_REVIEW_LIMIT: i64 = 50;

/// Lists the approved reviews of a product.
#[tracing::instrument(skip_all, fields(slug = %slug))]
async fn list_product_reviews(
    PgPool(mut conn): PgPool,
    Path(slug): Path<String>,
) -> Result<Json<Vec<ReviewResponse>>> {
    let product = ProductRepository::find_product_by_slug(&mut conn, &slug)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_resource("products")
                .with_message("No product with this slug")
        })?;

    let reviews =
        ReviewRepository::list_public_reviews(&mut conn, product.id, PUBLIC_REVIEW_LIMIT).await?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// Submits a review for a product.
///
/// New reviews always enter moderation as pending; they only become
/// visible once approved in the back-office.
#[tracing::instrument(skip_all, fields(slug = %slug))]
async fn submit_review(
    PgPool(mut conn): PgPool,
    Path(slug): Path<String>,
    ValidateJson(request): ValidateJson<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>)> {
    let product = ProductRepository::find_product_by_slug(&mut conn, &slug)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_resource("products")
                .with_message("No product with this slug")
        })?;

    let review =
        ReviewRepository::create_review(&mut conn, request.into_new_review(product.id)).await?;

    tracing::info!(
        target: TRACING_TARGET,
        review_id = review.id,
        product_id = review.product_id,
        "review submitted",
    );

    Ok((StatusCode::CREATED, Json(review.into())))
}

/// Lists reviews for the admin table.
#[tracing::instrument(skip_all)]
async fn list_reviews(
    PgPool(mut conn): PgPool,
    Query(params): Query<ReviewListingParams>,
) -> Result<Json<Page<ReviewResponse>>> {
    let query = params.into_query();
    let pagination = query.pagination;

    let page = ReviewRepository::list_reviews(&mut conn, query).await?;

    Ok(Json(Page::new(page.map(ReviewResponse::from), pagination)))
}

/// Applies a moderation decision to a review.
#[tracing::instrument(skip_all, fields(review_id = review_id))]
async fn update_review_status(
    PgPool(mut conn): PgPool,
    Path(review_id): Path<i64>,
    Json(request): Json<UpdateReviewStatusRequest>,
) -> Result<Json<ReviewResponse>> {
    let review = ReviewRepository::set_review_status(&mut conn, review_id, request.status).await?;

    tracing::info!(
        target: TRACING_TARGET,
        review_id = review.id,
        status = %review.status,
        "review moderated",
    );

    Ok(Json(review.into()))
}

/// Bulk-deletes reviews per the admin table selection.
#[tracing::instrument(skip_all)]
async fn bulk_delete_reviews(
    PgPool(mut conn): PgPool,
    Query(params): Query<ReviewListingParams>,
    Json(request): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>> {
    let deleted = match &request {
        BulkDeleteRequest::Explicit(ids) => {
            ReviewRepository::delete_reviews_by_ids(&mut conn, ids).await?
        }
        BulkDeleteRequest::AllExcept(excluded) => {
            ReviewRepository::delete_reviews_matching(&mut conn, &params.filter(), excluded)
                .await?
        }
    };

    tracing::info!(target: TRACING_TARGET, deleted, "reviews bulk-deleted");

    Ok(Json(BulkDeleteResponse {
        deleted: deleted as u64,
    }))
}

/// Returns the public review routes.
pub fn routes(state: ServiceState) -> Router<ServiceState> {
    let rate_limit = from_fn_with_state(state, rate_limit_by_ip);

    Router::new().route(
        "/products/{slug}/reviews",
        get(list_product_reviews).post(submit_review.layer(rate_limit)),
    )
}

/// Returns the admin review routes.
pub fn admin_routes() -> Router<ServiceState> {
    Router::new()
        .route("/reviews", get(list_reviews))
        .route("/reviews/{id}/status", patch(update_review_status))
        .route("/reviews/bulk-delete", post(bulk_delete_reviews))
}
