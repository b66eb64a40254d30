//! Category repository for catalog table operations.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;

use crate::model::{Category, NewCategory, UpdateCategory};
use crate::types::{
    CategoryFilter, CategorySortField, ListingQuery, OffsetPage, SortOrder, like_pattern,
};
use crate::{PgError, PgResult, schema};

/// Listing request for categories.
pub type CategoryListingQuery = ListingQuery<CategorySortField, CategoryFilter>;

/// Repository for category table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryRepository;

impl CategoryRepository {
    /// Creates a new category repository instance.
    pub fn new() -> Self {
        Self
    }

    /// Creates a new category.
    pub async fn create_category(
        conn: &mut AsyncPgConnection,
        new_category: NewCategory,
    ) -> PgResult<Category> {
        use schema::categories;

        diesel::insert_into(categories::table)
            .values(&new_category)
            .returning(Category::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds a category by its ID.
    pub async fn find_category_by_id(
        conn: &mut AsyncPgConnection,
        category_id: i64,
    ) -> PgResult<Option<Category>> {
        use schema::categories::{self, dsl};

        categories::table
            .filter(dsl::id.eq(category_id))
            .select(Category::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Finds a category by its slug.
    pub async fn find_category_by_slug(
        conn: &mut AsyncPgConnection,
        category_slug: &str,
    ) -> PgResult<Option<Category>> {
        use schema::categories::{self, dsl};

        categories::table
            .filter(dsl::slug.eq(category_slug))
            .select(Category::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Lists all categories in storefront navigation order.
    pub async fn list_navigation(conn: &mut AsyncPgConnection) -> PgResult<Vec<Category>> {
        use schema::categories::{self, dsl};

        categories::table
            .order((dsl::display_order.asc(), dsl::name.asc()))
            .select(Category::as_select())
            .load(conn)
            .await
            .map_err(PgError::from)
    }

    /// Lists categories with pagination, sorting and filtering.
    pub async fn list_categories(
        conn: &mut AsyncPgConnection,
        query: CategoryListingQuery,
    ) -> PgResult<OffsetPage<Category>> {
        use schema::categories;

        let total: i64 = Self::filtered(&query.filter)
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)?;

        let mut stmt = Self::filtered(&query.filter).select(Category::as_select());

        let mut ordered = false;
        for sort in &query.sort {
            stmt = match (ordered, sort.field, sort.order) {
                (false, CategorySortField::Name, SortOrder::Asc) => {
                    stmt.order(categories::name.asc())
                }
                (false, CategorySortField::Name, SortOrder::Desc) => {
                    stmt.order(categories::name.desc())
                }
                (false, CategorySortField::DisplayOrder, SortOrder::Asc) => {
                    stmt.order(categories::display_order.asc())
                }
                (false, CategorySortField::DisplayOrder, SortOrder::Desc) => {
                    stmt.order(categories::display_order.desc())
                }
                (false, CategorySortField::CreatedAt, SortOrder::Asc) => {
                    stmt.order(categories::created_at.asc())
                }
                (false, CategorySortField::CreatedAt, SortOrder::Desc) => {
                    stmt.order(categories::created_at.desc())
                }
                (true, CategorySortField::Name, SortOrder::Asc) => {
                    stmt.then_order_by(categories::name.asc())
                }
                (true, CategorySortField::Name, SortOrder::Desc) => {
                    stmt.then_order_by(categories::name.desc())
                }
                (true, CategorySortField::DisplayOrder, SortOrder::Asc) => {
                    stmt.then_order_by(categories::display_order.asc())
                }
                (true, CategorySortField::DisplayOrder, SortOrder::Desc) => {
                    stmt.then_order_by(categories::display_order.desc())
                }
                (true, CategorySortField::CreatedAt, SortOrder::Asc) => {
                    stmt.then_order_by(categories::created_at.asc())
                }
                (true, CategorySortField::CreatedAt, SortOrder::Desc) => {
                    stmt.then_order_by(categories::created_at.desc())
                }
            };
            ordered = true;
        }
        if !ordered {
            stmt = stmt.order(categories::created_at.desc());
        }

        let items = stmt
            .limit(query.pagination.limit)
            .offset(query.pagination.offset)
            .load(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Updates a category.
    pub async fn update_category(
        conn: &mut AsyncPgConnection,
        category_id: i64,
        mut changes: UpdateCategory,
    ) -> PgResult<Category> {
        use schema::categories::{self, dsl};

        changes.updated_at = Some(OffsetDateTime::now_utc());

        diesel::update(categories::table.filter(dsl::id.eq(category_id)))
            .set(&changes)
            .returning(Category::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes a category.
    ///
    /// Fails with a foreign-key violation if products still reference the
    /// category; the caller surfaces that as a conflict.
    pub async fn delete_category(conn: &mut AsyncPgConnection, category_id: i64) -> PgResult<bool> {
        use schema::categories::{self, dsl};

        let deleted = diesel::delete(categories::table.filter(dsl::id.eq(category_id)))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    /// Builds the filtered base query shared by the page SELECT and the COUNT.
    fn filtered(filter: &CategoryFilter) -> schema::categories::BoxedQuery<'static, Pg> {
        use schema::categories::{self, dsl};

        let mut query = categories::table.into_boxed();

        if let Some(pattern) = filter.name.as_deref().and_then(like_pattern) {
            query = query.filter(dsl::name.ilike(pattern));
        }

        query
    }
}
