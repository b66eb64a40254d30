//! Product catalog handlers.

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, post};
use maison_postgres::query::ProductRepository;

use crate::extract::{Json, PgPool, ValidateJson};
use crate::handler::request::{
    BulkDeleteRequest, CreateProductRequest, ProductListingParams, UpdateProductRequest,
};
use crate::handler::response::{BulkDeleteResponse, Page, ProductResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for product operations.
const TRACING_TARGET: &str = "maison_server::handler::products";

/// Lists products.
///
/// Drives both the storefront grid and the admin table: one uniform
/// `page`/`limit`/`sort`/`search`/filter query string in, one
/// `{items, total, page, limit}` envelope out.
#[tracing::instrument(skip_all)]
async fn list_products(
    PgPool(mut conn): PgPool,
    Query(params): Query<ProductListingParams>,
) -> Result<Json<Page<ProductResponse>>> {
    let query = params.into_query();
    let pagination = query.pagination;

    let page = ProductRepository::list_products(&mut conn, query).await?;

    Ok(Json(Page::new(
        page.map(ProductResponse::from),
        pagination,
    )))
}

/// Gets a product by its slug.
#[tracing::instrument(skip_all, fields(slug = %slug))]
async fn get_product(
    PgPool(mut conn): PgPool,
    Path(slug): Path<String>,
) -> Result<Json<ProductResponse>> {
    let product = ProductRepository::find_product_by_slug(&mut conn, &slug)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_resource("products")
                .with_message("No product with this slug")
        })?;

    Ok(Json(product.into()))
}

/// Creates a new product.
#[tracing::instrument(skip_all)]
async fn create_product(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let product = ProductRepository::create_product(&mut conn, request.into()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        product_id = product.id,
        slug = %product.slug,
        "product created",
    );

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Updates a product.
#[tracing::instrument(skip_all, fields(product_id = product_id))]
async fn update_product(
    PgPool(mut conn): PgPool,
    Path(product_id): Path<i64>,
    ValidateJson(request): ValidateJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>> {
    let product = ProductRepository::update_product(&mut conn, product_id, request.into()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        product_id = product.id,
        "product updated",
    );

    Ok(Json(product.into()))
}

/// Deletes a product.
#[tracing::instrument(skip_all, fields(product_id = product_id))]
async fn delete_product(
    PgPool(mut conn): PgPool,
    Path(product_id): Path<i64>,
) -> Result<StatusCode> {
    let deleted = ProductRepository::delete_product(&mut conn, product_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound
            .with_resource("products"));
    }

    tracing::info!(target: TRACING_TARGET, product_id, "product deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Bulk-deletes products per the admin table selection.
///
/// The filter travels in the query string exactly as it does for the
/// listing the selection was made against; the body says whether the
/// selection is an explicit id set or "all matching except these".
#[tracing::instrument(skip_all)]
async fn bulk_delete_products(
    PgPool(mut conn): PgPool,
    Query(params): Query<ProductListingParams>,
    Json(request): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>> {
    let deleted = match &request {
        BulkDeleteRequest::Explicit(ids) => {
            ProductRepository::delete_products_by_ids(&mut conn, ids).await?
        }
        BulkDeleteRequest::AllExcept(excluded) => {
            ProductRepository::delete_products_matching(&mut conn, &params.filter(), excluded)
                .await?
        }
    };

    tracing::info!(target: TRACING_TARGET, deleted, "products bulk-deleted");

    Ok(Json(BulkDeleteResponse {
        deleted: deleted as u64,
    }))
}

/// Returns the public product routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{slug}", get(get_product))
}

/// Returns the admin product routes.
pub fn admin_routes() -> Router<ServiceState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            axum::routing::patch(update_product).delete(delete_product),
        )
        .route("/products/bulk-delete", post(bulk_delete_products))
}
