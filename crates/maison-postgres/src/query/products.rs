//! Product repository for catalog table operations.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;

use crate::model::{NewProduct, Product, UpdateProduct};
use crate::types::{
    ListingQuery, OffsetPage, ProductFilter, ProductSortField, SortOrder, like_pattern,
};
use crate::{PgError, PgResult, schema};

/// Listing request for products.
pub type ProductListingQuery = ListingQuery<ProductSortField, ProductFilter>;

/// Repository for product table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductRepository;

impl ProductRepository {
    /// Creates a new product repository instance.
    pub fn new() -> Self {
        Self
    }

    /// Creates a new product.
    pub async fn create_product(
        conn: &mut AsyncPgConnection,
        new_product: NewProduct,
    ) -> PgResult<Product> {
        use schema::products;

        diesel::insert_into(products::table)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds a product by its ID.
    pub async fn find_product_by_id(
        conn: &mut AsyncPgConnection,
        product_id: i64,
    ) -> PgResult<Option<Product>> {
        use schema::products::{self, dsl};

        products::table
            .filter(dsl::id.eq(product_id))
            .select(Product::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Finds a product by its slug.
    pub async fn find_product_by_slug(
        conn: &mut AsyncPgConnection,
        product_slug: &str,
    ) -> PgResult<Option<Product>> {
        use schema::products::{self, dsl};

        products::table
            .filter(dsl::slug.eq(product_slug))
            .select(Product::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Lists products with pagination, sorting and filtering.
    ///
    /// Runs the page SELECT and a COUNT over the identical predicate and
    /// returns both the rows and the filtered total.
    pub async fn list_products(
        conn: &mut AsyncPgConnection,
        query: ProductListingQuery,
    ) -> PgResult<OffsetPage<Product>> {
        use schema::products;

        let total: i64 = Self::filtered(&query.filter)
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)?;

        let mut stmt = Self::filtered(&query.filter).select(Product::as_select());

        let mut ordered = false;
        for sort in &query.sort {
            stmt = match (ordered, sort.field, sort.order) {
                (false, ProductSortField::Name, SortOrder::Asc) => {
                    stmt.order(products::name.asc())
                }
                (false, ProductSortField::Name, SortOrder::Desc) => {
                    stmt.order(products::name.desc())
                }
                (false, ProductSortField::Price, SortOrder::Asc) => {
                    stmt.order(products::price.asc())
                }
                (false, ProductSortField::Price, SortOrder::Desc) => {
                    stmt.order(products::price.desc())
                }
                (false, ProductSortField::StockQuantity, SortOrder::Asc) => {
                    stmt.order(products::stock_quantity.asc())
                }
                (false, ProductSortField::StockQuantity, SortOrder::Desc) => {
                    stmt.order(products::stock_quantity.desc())
                }
                (false, ProductSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.order(products::created_at.asc())
                }
                (false, ProductSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.order(products::created_at.desc())
                }
                (false, ProductSortField::UpdatedAt, SortOrder::Asc) => {
                    stmt.order(products::updated_at.asc())
                }
                (false, ProductSortField::UpdatedAt, SortOrder::Desc) => {
                    stmt.order(products::updated_at.desc())
                }
                (true, ProductSortField::Name, SortOrder::Asc) => {
                    stmt.then_order_by(products::name.asc())
                }
                (true, ProductSortField::Name, SortOrder::Desc) => {
                    stmt.then_order_by(products::name.desc())
                }
                (true, ProductSortField::Price, SortOrder::Asc) => {
                    stmt.then_order_by(products::price.asc())
                }
                (true, ProductSortField::Price, SortOrder::Desc) => {
                    stmt.then_order_by(products::price.desc())
                }
                (true, ProductSortField::StockQuantity, SortOrder::Asc) => {
                    stmt.then_order_by(products::stock_quantity.asc())
                }
                (true, ProductSortField::StockQuantity, SortOrder::Desc) => {
                    stmt.then_order_by(products::stock_quantity.desc())
                }
                (true, ProductSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.then_order_by(products::created_at.asc())
                }
                (true, ProductSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.then_order_by(products::created_at.desc())
                }
                (true, ProductSortField::UpdatedAt, SortOrder::Asc) => {
                    stmt.then_order_by(products::updated_at.asc())
                }
                (true, ProductSortField::UpdatedAt, SortOrder::Desc) => {
                    stmt.then_order_by(products::updated_at.desc())
                }
            };
            ordered = true;
        }
        if !ordered {
            stmt = stmt.order(products::created_at.desc());
        }

        let items = stmt
            .limit(query.pagination.limit)
            .offset(query.pagination.offset)
            .load(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Updates a product.
    pub async fn update_product(
        conn: &mut AsyncPgConnection,
        product_id: i64,
        mut changes: UpdateProduct,
    ) -> PgResult<Product> {
        use schema::products::{self, dsl};

        changes.updated_at = Some(OffsetDateTime::now_utc());

        diesel::update(products::table.filter(dsl::id.eq(product_id)))
            .set(&changes)
            .returning(Product::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Adjusts the stock level of a product by a (possibly negative) delta.
    pub async fn adjust_stock(
        conn: &mut AsyncPgConnection,
        product_id: i64,
        delta: i32,
    ) -> PgResult<Product> {
        use schema::products::{self, dsl};

        diesel::update(products::table.filter(dsl::id.eq(product_id)))
            .set((
                dsl::stock_quantity.eq(dsl::stock_quantity + delta),
                dsl::updated_at.eq(OffsetDateTime::now_utc()),
            ))
            .returning(Product::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes a product.
    ///
    /// Returns whether a row was deleted.
    pub async fn delete_product(conn: &mut AsyncPgConnection, product_id: i64) -> PgResult<bool> {
        use schema::products::{self, dsl};

        let deleted = diesel::delete(products::table.filter(dsl::id.eq(product_id)))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    /// Deletes the given products.
    pub async fn delete_products_by_ids(
        conn: &mut AsyncPgConnection,
        ids: &[i64],
    ) -> PgResult<usize> {
        use schema::products::{self, dsl};

        if ids.is_empty() {
            return Ok(0);
        }

        diesel::delete(products::table.filter(dsl::id.eq_any(ids)))
            .execute(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes every product matching `filter` except the excluded ids.
    ///
    /// Backs the admin table's "select all, minus these rows" bulk
    /// delete. The matching ids are resolved and removed in one
    /// transaction so the set cannot shift between the two statements.
    pub async fn delete_products_matching(
        conn: &mut AsyncPgConnection,
        filter: &ProductFilter,
        excluded: &[i64],
    ) -> PgResult<usize> {
        use schema::products::{self, dsl};

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

                diesel::delete(products::table.filter(dsl::id.eq_any(ids)))
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
    fn filtered(filter: &ProductFilter) -> schema::products::BoxedQuery<'static, Pg> {
        use schema::products::{self, dsl};

        let mut query = products::table.into_boxed();

        if let Some(pattern) = filter.name.as_deref().and_then(like_pattern) {
            query = query.filter(dsl::name.ilike(pattern));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(dsl::category_id.eq(category_id));
        }
        if let Some(room_type) = filter.room_type {
            query = query.filter(dsl::room_type.eq(room_type));
        }
        if let Some(is_available) = filter.is_available {
            query = query.filter(dsl::is_available.eq(is_available));
        }

        query
    }
}
