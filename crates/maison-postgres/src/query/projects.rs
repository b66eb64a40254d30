//! Showroom project repository.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;

use crate::model::{NewProject, Project, UpdateProject};
use crate::types::{
    ListingQuery, OffsetPage, ProjectFilter, ProjectSortField, SortOrder, like_pattern,
};
use crate::{PgError, PgResult, schema};

/// Listing request for showroom projects.
pub type ProjectListingQuery = ListingQuery<ProjectSortField, ProjectFilter>;

/// Repository for showroom project table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectRepository;

impl ProjectRepository {
    /// Creates a new project repository instance.
    pub fn new() -> Self {
        Self
    }

    /// Creates a new showroom project.
    pub async fn create_project(
        conn: &mut AsyncPgConnection,
        new_project: NewProject,
    ) -> PgResult<Project> {
        use schema::projects;

        diesel::insert_into(projects::table)
            .values(&new_project)
            .returning(Project::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds a project by its ID.
    pub async fn find_project_by_id(
        conn: &mut AsyncPgConnection,
        project_id: i64,
    ) -> PgResult<Option<Project>> {
        use schema::projects::{self, dsl};

        projects::table
            .filter(dsl::id.eq(project_id))
            .select(Project::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Finds a project by its slug.
    pub async fn find_project_by_slug(
        conn: &mut AsyncPgConnection,
        project_slug: &str,
    ) -> PgResult<Option<Project>> {
        use schema::projects::{self, dsl};

        projects::table
            .filter(dsl::slug.eq(project_slug))
            .select(Project::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Lists projects with pagination, sorting and filtering.
    pub async fn list_projects(
        conn: &mut AsyncPgConnection,
        query: ProjectListingQuery,
    ) -> PgResult<OffsetPage<Project>> {
        use schema::projects;

        let total: i64 = Self::filtered(&query.filter)
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)?;

        let mut stmt = Self::filtered(&query.filter).select(Project::as_select());

        let mut ordered = false;
        for sort in &query.sort {
            stmt = match (ordered, sort.field, sort.order) {
                (false, ProjectSortField::Title, SortOrder::Asc) => {
                    stmt.order(projects::title.asc())
                }
                (false, ProjectSortField::Title, SortOrder::Desc) => {
                    stmt.order(projects::title.desc())
                }
                (false, ProjectSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.order(projects::created_at.asc())
                }
                (false, ProjectSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.order(projects::created_at.desc())
                }
                (false, ProjectSortField::UpdatedAt, SortOrder::Asc) => {
                    stmt.order(projects::updated_at.asc())
                }
                (false, ProjectSortField::UpdatedAt, SortOrder::Desc) => {
                    stmt.order(projects::updated_at.desc())
                }
                (true, ProjectSortField::Title, SortOrder::Asc) => {
                    stmt.then_order_by(projects::title.asc())
                }
                (true, ProjectSortField::Title, SortOrder::Desc) => {
                    stmt.then_order_by(projects::title.desc())
                }
                (true, ProjectSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.then_order_by(projects::created_at.asc())
                }
                (true, ProjectSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.then_order_by(projects::created_at.desc())
                }
                (true, ProjectSortField::UpdatedAt, SortOrder::Asc) => {
                    stmt.then_order_by(projects::updated_at.asc())
                }
                (true, ProjectSortField::UpdatedAt, SortOrder::Desc) => {
                    stmt.then_order_by(projects::updated_at.desc())
                }
            };
            ordered = true;
        }
        if !ordered {
            stmt = stmt.order(projects::created_at.desc());
        }

        let items = stmt
            .limit(query.pagination.limit)
            .offset(query.pagination.offset)
            .load(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Updates a project.
    pub async fn update_project(
        conn: &mut AsyncPgConnection,
        project_id: i64,
        mut changes: UpdateProject,
    ) -> PgResult<Project> {
        use schema::projects::{self, dsl};

        changes.updated_at = Some(OffsetDateTime::now_utc());

        diesel::update(projects::table.filter(dsl::id.eq(project_id)))
            .set(&changes)
            .returning(Project::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes a project.
    pub async fn delete_project(conn: &mut AsyncPgConnection, project_id: i64) -> PgResult<bool> {
        use schema::projects::{self, dsl};

        let deleted = diesel::delete(projects::table.filter(dsl::id.eq(project_id)))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    /// Deletes the given projects.
    pub async fn delete_projects_by_ids(
        conn: &mut AsyncPgConnection,
        ids: &[i64],
    ) -> PgResult<usize> {
        use schema::projects::{self, dsl};

        if ids.is_empty() {
            return Ok(0);
        }

        diesel::delete(projects::table.filter(dsl::id.eq_any(ids)))
            .execute(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes every project matching `filter` except the excluded ids.
    pub async fn delete_projects_matching(
        conn: &mut AsyncPgConnection,
        filter: &ProjectFilter,
        excluded: &[i64],
    ) -> PgResult<usize> {
        use schema::projects::{self, dsl};

        let filter = filter.clone();
        let excluded = excluded.to_vec();
        conn.transaction::<_, PgError, _>(|conn| {
            async move {
                let mut ids: Vec<i64> = Self::filtered(&filter)
                    .select(dsl::id)
                    .load(conn)
                    .await
                    .map_err(PgError::from)?;
                ids.retain(|id| !excluded.contains(id));

                if ids.is_empty() {
                    return Ok(0);
                }

                diesel::delete(projects::table.filter(dsl::id.eq_any(ids)))
                    .execute(conn)
                    .await
                    .map_err(PgError::from)
            }
            .scope_boxed()
        })
        .await
    }

    /// Builds the filtered base query shared by the page SELECT, the
    /// COUNT and the bulk-delete id resolution.
    fn filtered(filter: &ProjectFilter) -> schema::projects::BoxedQuery<'static, Pg> {
        use schema::projects::{self, dsl};

        let mut query = projects::table.into_boxed();

        if let Some(pattern) = filter.title.as_deref().and_then(like_pattern) {
            query = query.filter(dsl::title.ilike(pattern));
        }
        if let Some(room_type) = filter.room_type {
            query = query.filter(dsl::room_type.eq(room_type));
        }
        if let Some(is_published) = filter.is_published {
            query = query.filter(dsl::is_published.eq(is_published));
        }

        query
    }
}
