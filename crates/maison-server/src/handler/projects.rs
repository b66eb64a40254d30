//! Showroom project handlers.

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use maison_postgres::query::ProjectRepository;

use crate::extract::{Json, PgPool, ValidateJson};
use crate::handler::request::{
    BulkDeleteRequest, CreateProjectRequest, ProjectListingParams, UpdateProjectRequest,
};
use crate::handler::response::{BulkDeleteResponse, Page, ProjectResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for showroom project operations.
const TRACING_TARGET: &str = "maison_server::handler::projects";

/// Lists published projects for the storefront.
///
/// The publication filter is forced server-side; drafts never leak
/// through the public route regardless of the query string.
#[tracing::instrument(skip_all)]
async fn list_published_projects(
    PgPool(mut conn): PgPool,
    Query(params): Query<ProjectListingParams>,
) -> Result<Json<Page<ProjectResponse>>> {
    let mut query = params.into_query();
    query.filter.is_published = Some(true);
    let pagination = query.pagination;

    let page = ProjectRepository::list_projects(&mut conn, query).await?;

    Ok(Json(Page::new(
        page.map(ProjectResponse::from),
        pagination,
    )))
}

/// Gets a published project by its slug.
#[tracing::instrument(skip_all, fields(slug = %slug))]
async fn get_published_project(
    PgPool(mut conn): PgPool,
    Path(slug): Path<String>,
) -> Result<Json<ProjectResponse>> {
    let not_found = || {
        ErrorKind::NotFound
            .with_resource("projects")
            .with_message("No project with this slug")
    };

    let project = ProjectRepository::find_project_by_slug(&mut conn, &slug)
        .await?
        .ok_or_else(not_found)?;
    // An unpublished slug is indistinguishable from a missing one.
    if !project.is_published {
        return Err(not_found());
    }

    Ok(Json(project.into()))
}

/// Lists projects for the admin table.
#[tracing::instrument(skip_all)]
async fn list_projects(
    PgPool(mut conn): PgPool,
    Query(params): Query<ProjectListingParams>,
) -> Result<Json<Page<ProjectResponse>>> {
    let query = params.into_query();
    let pagination = query.pagination;

    let page = ProjectRepository::list_projects(&mut conn, query).await?;

    Ok(Json(Page::new(
        page.map(ProjectResponse::from),
        pagination,
    )))
}

/// Creates a new project.
#[tracing::instrument(skip_all)]
async fn create_project(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>)> {
    let project = ProjectRepository::create_project(&mut conn, request.into()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        project_id = project.id,
        slug = %project.slug,
        "project created",
    );

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// Updates a project.
#[tracing::instrument(skip_all, fields(project_id = project_id))]
async fn update_project(
    PgPool(mut conn): PgPool,
    Path(project_id): Path<i64>,
    ValidateJson(request): ValidateJson<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>> {
    let project = ProjectRepository::update_project(&mut conn, project_id, request.into()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        project_id = project.id,
        "project updated",
    );

    Ok(Json(project.into()))
}

/// Deletes a project.
#[tracing::instrument(skip_all, fields(project_id = project_id))]
async fn delete_project(
    PgPool(mut conn): PgPool,
    Path(project_id): Path<i64>,
) -> Result<StatusCode> {
    let deleted = ProjectRepository::delete_project(&mut conn, project_id).await?;
    if !deleted {
        return Err(ErrorKind::NotFound.with_resource("projects"));
    }

    tracing::info!(target: TRACING_TARGET, project_id, "project deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Bulk-deletes projects per the admin table selection.
#[tracing::instrument(skip_all)]
async fn bulk_delete_projects(
    PgPool(mut conn): PgPool,
    Query(params): Query<ProjectListingParams>,
    Json(request): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>> {
    let deleted = match &request {
        BulkDeleteRequest::Explicit(ids) => {
            ProjectRepository::delete_projects_by_ids(&mut conn, ids).await?
        }
        BulkDeleteRequest::AllExcept(excluded) => {
            ProjectRepository::delete_projects_matching(&mut conn, &params.filter(), excluded)
                .await?
        }
    };

    tracing::info!(target: TRACING_TARGET, deleted, "projects bulk-deleted");

    Ok(Json(BulkDeleteResponse {
        deleted: deleted as u64,
    }))
}

/// Returns the public project routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/projects", get(list_published_projects))
        .route("/projects/{slug}", get(get_published_project))
}

/// Returns the admin project routes.
pub fn admin_routes() -> Router<ServiceState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            patch(update_project).delete(delete_project),
        )
        .route("/projects/bulk-delete", post(bulk_delete_projects))
}
