//! Category handlers.

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use maison_postgres::query::CategoryRepository;

use crate::extract::{Json, PgPool, ValidateJson};
use crate::handler::request::{
    CategoryListingParams, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::handler::response::{CategoryResponse, Page};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for category operations.
const TRACING_TARGET: &str = "maison_server::handler::categories";

/// Lists all categories in storefront navigation order.
#[tracing::instrument(skip_all)]
async fn list_navigation(PgPool(mut conn): PgPool) -> Result<Json<Vec<CategoryResponse>>> {
    let categories = CategoryRepository::list_navigation(&mut conn).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// Gets a category by its slug.
#[tracing::instrument(skip_all, fields(slug = %slug))]
async fn get_category(
    PgPool(mut conn): PgPool,
    Path(slug): Path<String>,
) -> Result<Json<CategoryResponse>> {
    let category = CategoryRepository::find_category_by_slug(&mut conn, &slug)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_resource("categories")
                .with_message("No category with this slug")
        })?;

    Ok(Json(category.into()))
}

/// Lists categories for the admin table.
#[tracing::instrument(skip_all)]
async fn list_categories(
    PgPool(mut conn): PgPool,
    Query(params): Query<CategoryListingParams>,
) -> Result<Json<Page<CategoryResponse>>> {
    let query = params.into_query();
    let pagination = query.pagination;

    let page = CategoryRepository::list_categories(&mut conn, query).await?;

    Ok(Json(Page::new(
        page.map(CategoryResponse::from),
        pagination,
    )))
}

/// Creates a new category.
#[tracing::instrument(skip_all)]
async fn create_category(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>)> {
    let category = CategoryRepository::create_category(&mut conn, request.into()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        category_id = category.id,
        slug = %category.slug,
        "category created",
    );

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Updates a category.
#[tracing::instrument(skip_all, fields(category_id = category_id))]
async fn update_category(
    PgPool(mut conn): PgPool,
    Path(category_id): Path<i64>,
    ValidateJson(request): ValidateJson<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>> {
    let category =
        CategoryRepository::update_category(&mut conn, category_id, request.into()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        category_id = category.id,
        "category updated",
    );

    Ok(Json(category.into()))
}

/// Deletes a category.
///
/// A category still referenced by products fails with a field-scoped
/// conflict from the foreign-key constraint.
#[tracing::instrument(skip_all, fields(category_id = category_id))]
async fn delete_category(
    PgPool(mut conn): PgPool,
    Path(category_id): Path<i64>,
) -> Result<StatusCode> {
    let deleted = CategoryRepository::delete_category(&mut conn, category_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound
            .with_resource("categories"));
    }

    tracing::info!(target: TRACING_TARGET, category_id, "category deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the public category routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/categories", get(list_navigation))
        .route("/categories/{slug}", get(get_category))
}

/// Returns the admin category routes.
pub fn admin_routes() -> Router<ServiceState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            patch(update_category).delete(delete_category),
        )
}
