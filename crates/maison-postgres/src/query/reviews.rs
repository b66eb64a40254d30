//! Review repository covering submission and moderation operations.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;

use crate::model::{NewReview, Review, UpdateReview};
use crate::types::{
    ListingQuery, OffsetPage, ReviewFilter, ReviewSortField, ReviewStatus, SortOrder, like_pattern,
};
use crate::{PgError, PgResult, schema};

/// Listing request for reviews.
pub type ReviewListingQuery = ListingQuery<ReviewSortField, ReviewFilter>;

/// Aggregate review figures for one product.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReviewStats {
    /// Number of approved reviews
    pub approved_count: i64,
    /// Mean rating across approved reviews (0.0 when there are none)
    pub average_rating: f64,
}

/// Repository for review table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReviewRepository;

impl ReviewRepository {
    /// Creates a new review repository instance.
    pub fn new() -> Self {
        Self
    }

    /// Creates a new review (pending moderation by default).
    pub async fn create_review(
        conn: &mut AsyncPgConnection,
        new_review: NewReview,
    ) -> PgResult<Review> {
        use schema::reviews;

        diesel::insert_into(reviews::table)
            .values(&new_review)
            .returning(Review::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds a review by its ID.
    pub async fn find_review_by_id(
        conn: &mut AsyncPgConnection,
        review_id: i64,
    ) -> PgResult<Option<Review>> {
        use schema::reviews::{self, dsl};

        reviews::table
            .filter(dsl::id.eq(review_id))
            .select(Review::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Lists the approved reviews of one product, newest first.
    pub async fn list_public_reviews(
        conn: &mut AsyncPgConnection,
        product_id: i64,
        limit: i64,
    ) -> PgResult<Vec<Review>> {
        use schema::reviews::{self, dsl};

        reviews::table
            .filter(dsl::product_id.eq(product_id))
            .filter(dsl::status.eq(ReviewStatus::Approved))
            .order(dsl::created_at.desc())
            .limit(limit)
            .select(Review::as_select())
            .load(conn)
            .await
            .map_err(PgError::from)
    }

    /// Lists reviews with pagination, sorting and filtering.
    pub async fn list_reviews(
        conn: &mut AsyncPgConnection,
        query: ReviewListingQuery,
    ) -> PgResult<OffsetPage<Review>> {
        use schema::reviews;

        let total: i64 = Self::filtered(&query.filter)
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)?;

        let mut stmt = Self::filtered(&query.filter).select(Review::as_select());

        let mut ordered = false;
        for sort in &query.sort {
            stmt = match (ordered, sort.field, sort.order) {
                (false, ReviewSortField::Rating, SortOrder::Asc) => {
                    stmt.order(reviews::rating.asc())
                }
                (false, ReviewSortField::Rating, SortOrder::Desc) => {
                    stmt.order(reviews::rating.desc())
                }
                (false, ReviewSortField::CustomerName, SortOrder::Asc) => {
                    stmt.order(reviews::customer_name.asc())
                }
                (false, ReviewSortField::CustomerName, SortOrder::Desc) => {
                    stmt.order(reviews::customer_name.desc())
                }
                (false, ReviewSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.order(reviews::created_at.asc())
                }
                (false, ReviewSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.order(reviews::created_at.desc())
                }
                (true, ReviewSortField::Rating, SortOrder::Asc) => {
                    stmt.then_order_by(reviews::rating.asc())
                }
                (true, ReviewSortField::Rating, SortOrder::Desc) => {
                    stmt.then_order_by(reviews::rating.desc())
                }
                (true, ReviewSortField::CustomerName, SortOrder::Asc) => {
                    stmt.then_order_by(reviews::customer_name.asc())
                }
                (true, ReviewSortField::CustomerName, SortOrder::Desc) => {
                    stmt.then_order_by(reviews::customer_name.desc())
                }
                (true, ReviewSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.then_order_by(reviews::created_at.asc())
                }
                (true, ReviewSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.then_order_by(reviews::created_at.desc())
                }
            };
            ordered = true;
        }
        if !ordered {
            stmt = stmt.order(reviews::created_at.desc());
        }

        let items = stmt
            .limit(query.pagination.limit)
            .offset(query.pagination.offset)
            .load(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Sets the moderation status of a review.
    pub async fn set_review_status(
        conn: &mut AsyncPgConnection,
        review_id: i64,
        status: ReviewStatus,
    ) -> PgResult<Review> {
        use schema::reviews::{self, dsl};

        let changes = UpdateReview {
            status: Some(status),
            updated_at: Some(OffsetDateTime::now_utc()),
        };

        diesel::update(reviews::table.filter(dsl::id.eq(review_id)))
            .set(&changes)
            .returning(Review::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes the given reviews.
    pub async fn delete_reviews_by_ids(
        conn: &mut AsyncPgConnection,
        ids: &[i64],
    ) -> PgResult<usize> {
        use schema::reviews::{self, dsl};

        if ids.is_empty() {
            return Ok(0);
        }

        diesel::delete(reviews::table.filter(dsl::id.eq_any(ids)))
            .execute(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes every review matching `filter` except the excluded ids.
    pub async fn delete_reviews_matching(
        conn: &mut AsyncPgConnection,
        filter: &ReviewFilter,
        excluded: &[i64],
    ) -> PgResult<usize> {
        use schema::reviews::{self, dsl};

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

                diesel::delete(reviews::table.filter(dsl::id.eq_any(ids)))
                    .execute(conn)
                    .await
                    .map_err(PgError::from)
            }
            .scope_boxed()
        })
        .await
    }

    /// Gets the approved-review count and mean rating for a product.
    pub async fn get_product_review_stats(
        conn: &mut AsyncPgConnection,
        product_id: i64,
    ) -> PgResult<ReviewStats> {
        use schema::reviews::{self, dsl};

        let ratings: Vec<i16> = reviews::table
            .filter(dsl::product_id.eq(product_id))
            .filter(dsl::status.eq(ReviewStatus::Approved))
            .select(dsl::rating)
            .load(conn)
            .await
            .map_err(PgError::from)?;

        if ratings.is_empty() {
            return Ok(ReviewStats::default());
        }

        let approved_count = ratings.len() as i64;
        let average_rating =
            ratings.iter().map(|r| *r as f64).sum::<f64>() / approved_count as f64;

        Ok(ReviewStats {
            approved_count,
            average_rating,
        })
    }

    /// Builds the filtered base query shared by the page SELECT, the
    /// COUNT and the bulk-delete id resolution.
    fn filtered(filter: &ReviewFilter) -> schema::reviews::BoxedQuery<'static, Pg> {
        use schema::reviews::{self, dsl};

        let mut query = reviews::table.into_boxed();

        if let Some(pattern) = filter.customer_name.as_deref().and_then(like_pattern) {
            query = query.filter(dsl::customer_name.ilike(pattern));
        }
        if let Some(product_id) = filter.product_id {
            query = query.filter(dsl::product_id.eq(product_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(dsl::status.eq(status));
        }

        query
    }
}
