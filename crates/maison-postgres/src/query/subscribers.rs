//! Newsletter subscriber repository.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;

use crate::model::{NewSubscriber, Subscriber, UpdateSubscriber};
use crate::types::{
    ListingQuery, OffsetPage, SortOrder, SubscriberFilter, SubscriberSortField, SubscriberStatus,
    like_pattern,
};
use crate::{PgError, PgResult, schema};

/// Listing request for newsletter subscribers.
pub type SubscriberListingQuery = ListingQuery<SubscriberSortField, SubscriberFilter>;

/// Repository for newsletter subscriber table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubscriberRepository;

impl SubscriberRepository {
    /// Creates a new subscriber repository instance.
    pub fn new() -> Self {
        Self
    }

    /// Subscribes an email address.
    ///
    /// A previously unsubscribed address is reactivated in place rather
    /// than inserted twice.
    pub async fn subscribe(
        conn: &mut AsyncPgConnection,
        email: impl Into<String>,
    ) -> PgResult<Subscriber> {
        use schema::newsletter_subscribers::{self, dsl};

        let new_subscriber = NewSubscriber {
            email: email.into(),
            status: Some(SubscriberStatus::Subscribed),
        };

        diesel::insert_into(newsletter_subscribers::table)
            .values(&new_subscriber)
            .on_conflict(dsl::email)
            .do_update()
            .set((
                dsl::status.eq(SubscriberStatus::Subscribed),
                dsl::unsubscribed_at.eq(None::<OffsetDateTime>),
                dsl::updated_at.eq(OffsetDateTime::now_utc()),
            ))
            .returning(Subscriber::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Unsubscribes an email address.
    ///
    /// Returns the updated row, or `None` if the address was never
    /// subscribed.
    pub async fn unsubscribe(
        conn: &mut AsyncPgConnection,
        email: &str,
    ) -> PgResult<Option<Subscriber>> {
        use schema::newsletter_subscribers::{self, dsl};

        let now = OffsetDateTime::now_utc();
        let changes = UpdateSubscriber {
            status: Some(SubscriberStatus::Unsubscribed),
            unsubscribed_at: Some(Some(now)),
            updated_at: Some(now),
        };

        diesel::update(newsletter_subscribers::table.filter(dsl::email.eq(email)))
            .set(&changes)
            .returning(Subscriber::as_returning())
            .get_result(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Finds a subscriber by email address.
    pub async fn find_subscriber_by_email(
        conn: &mut AsyncPgConnection,
        email: &str,
    ) -> PgResult<Option<Subscriber>> {
        use schema::newsletter_subscribers::{self, dsl};

        newsletter_subscribers::table
            .filter(dsl::email.eq(email))
            .select(Subscriber::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Lists subscribers with pagination, sorting and filtering.
    pub async fn list_subscribers(
        conn: &mut AsyncPgConnection,
        query: SubscriberListingQuery,
    ) -> PgResult<OffsetPage<Subscriber>> {
        use schema::newsletter_subscribers;

        let total: i64 = Self::filtered(&query.filter)
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)?;

        let mut stmt = Self::filtered(&query.filter).select(Subscriber::as_select());

        let mut ordered = false;
        for sort in &query.sort {
            stmt = match (ordered, sort.field, sort.order) {
                (false, SubscriberSortField::Email, SortOrder::Asc) => {
                    stmt.order(newsletter_subscribers::email.asc())
                }
                (false, SubscriberSortField::Email, SortOrder::Desc) => {
                    stmt.order(newsletter_subscribers::email.desc())
                }
                (false, SubscriberSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.order(newsletter_subscribers::created_at.asc())
                }
                (false, SubscriberSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.order(newsletter_subscribers::created_at.desc())
                }
                (true, SubscriberSortField::Email, SortOrder::Asc) => {
                    stmt.then_order_by(newsletter_subscribers::email.asc())
                }
                (true, SubscriberSortField::Email, SortOrder::Desc) => {
                    stmt.then_order_by(newsletter_subscribers::email.desc())
                }
                (true, SubscriberSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.then_order_by(newsletter_subscribers::created_at.asc())
                }
                (true, SubscriberSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.then_order_by(newsletter_subscribers::created_at.desc())
                }
            };
            ordered = true;
        }
        if !ordered {
            stmt = stmt.order(newsletter_subscribers::created_at.desc());
        }

        let items = stmt
            .limit(query.pagination.limit)
            .offset(query.pagination.offset)
            .load(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Counts currently subscribed addresses.
    pub async fn count_subscribed(conn: &mut AsyncPgConnection) -> PgResult<i64> {
        use schema::newsletter_subscribers::{self, dsl};

        newsletter_subscribers::table
            .filter(dsl::status.eq(SubscriberStatus::Subscribed))
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes the given subscribers.
    pub async fn delete_subscribers_by_ids(
        conn: &mut AsyncPgConnection,
        ids: &[i64],
    ) -> PgResult<usize> {
        use schema::newsletter_subscribers::{self, dsl};

        if ids.is_empty() {
            return Ok(0);
        }

        diesel::delete(newsletter_subscribers::table.filter(dsl::id.eq_any(ids)))
            .execute(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes every subscriber matching `filter` except the excluded ids.
    pub async fn delete_subscribers_matching(
        conn: &mut AsyncPgConnection,
        filter: &SubscriberFilter,
        excluded: &[i64],
    ) -> PgResult<usize> {
        use schema::newsletter_subscribers::{self, dsl};

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

                diesel::delete(newsletter_subscribers::table.filter(dsl::id.eq_any(ids)))
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
    fn filtered(
        filter: &SubscriberFilter,
    ) -> schema::newsletter_subscribers::BoxedQuery<'static, Pg> {
        use schema::newsletter_subscribers::{self, dsl};

        let mut query = newsletter_subscribers::table.into_boxed();

        if let Some(pattern) = filter.email.as_deref().and_then(like_pattern) {
            query = query.filter(dsl::email.ilike(pattern));
        }
        if let Some(status) = filter.status {
            query = query.filter(dsl::status.eq(status));
        }

        query
    }
}
