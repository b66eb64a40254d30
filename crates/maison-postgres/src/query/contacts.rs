//! Contact message repository.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;

use crate::model::{Contact, NewContact, UpdateContact};
use crate::types::{
    ContactFilter, ContactSortField, ContactStatus, ListingQuery, OffsetPage, SortOrder,
    like_pattern,
};
use crate::{PgError, PgResult, schema};

/// Listing request for contact messages.
pub type ContactListingQuery = ListingQuery<ContactSortField, ContactFilter>;

/// Repository for contact message table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContactRepository;

impl ContactRepository {
    /// Creates a new contact repository instance.
    pub fn new() -> Self {
        Self
    }

    /// Records a new inbound contact message.
    pub async fn create_contact(
        conn: &mut AsyncPgConnection,
        new_contact: NewContact,
    ) -> PgResult<Contact> {
        use schema::contacts;

        diesel::insert_into(contacts::table)
            .values(&new_contact)
            .returning(Contact::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds a contact message by its ID.
    pub async fn find_contact_by_id(
        conn: &mut AsyncPgConnection,
        contact_id: i64,
    ) -> PgResult<Option<Contact>> {
        use schema::contacts::{self, dsl};

        contacts::table
            .filter(dsl::id.eq(contact_id))
            .select(Contact::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Lists contact messages with pagination, sorting and filtering.
    pub async fn list_contacts(
        conn: &mut AsyncPgConnection,
        query: ContactListingQuery,
    ) -> PgResult<OffsetPage<Contact>> {
        use schema::contacts;

        let total: i64 = Self::filtered(&query.filter)
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)?;

        let mut stmt = Self::filtered(&query.filter).select(Contact::as_select());

        let mut ordered = false;
        for sort in &query.sort {
            stmt = match (ordered, sort.field, sort.order) {
                (false, ContactSortField::Name, SortOrder::Asc) => {
                    stmt.order(contacts::name.asc())
                }
                (false, ContactSortField::Name, SortOrder::Desc) => {
                    stmt.order(contacts::name.desc())
                }
                (false, ContactSortField::Email, SortOrder::Asc) => {
                    stmt.order(contacts::email.asc())
                }
                (false, ContactSortField::Email, SortOrder::Desc) => {
                    stmt.order(contacts::email.desc())
                }
                (false, ContactSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.order(contacts::created_at.asc())
                }
                (false, ContactSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.order(contacts::created_at.desc())
                }
                (true, ContactSortField::Name, SortOrder::Asc) => {
                    stmt.then_order_by(contacts::name.asc())
                }
                (true, ContactSortField::Name, SortOrder::Desc) => {
                    stmt.then_order_by(contacts::name.desc())
                }
                (true, ContactSortField::Email, SortOrder::Asc) => {
                    stmt.then_order_by(contacts::email.asc())
                }
                (true, ContactSortField::Email, SortOrder::Desc) => {
                    stmt.then_order_by(contacts::email.desc())
                }
                (true, ContactSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.then_order_by(contacts::created_at.asc())
                }
                (true, ContactSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.then_order_by(contacts::created_at.desc())
                }
            };
            ordered = true;
        }
        if !ordered {
            stmt = stmt.order(contacts::created_at.desc());
        }

        let items = stmt
            .limit(query.pagination.limit)
            .offset(query.pagination.offset)
            .load(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Sets the processing status of a contact message.
    pub async fn set_contact_status(
        conn: &mut AsyncPgConnection,
        contact_id: i64,
        status: ContactStatus,
    ) -> PgResult<Contact> {
        use schema::contacts::{self, dsl};

        let changes = UpdateContact {
            status: Some(status),
            updated_at: Some(OffsetDateTime::now_utc()),
        };

        diesel::update(contacts::table.filter(dsl::id.eq(contact_id)))
            .set(&changes)
            .returning(Contact::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Counts messages still needing staff attention.
    pub async fn count_needing_attention(conn: &mut AsyncPgConnection) -> PgResult<i64> {
        use schema::contacts::{self, dsl};

        contacts::table
            .filter(dsl::status.eq_any([ContactStatus::New, ContactStatus::Read]))
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes the given contact messages.
    pub async fn delete_contacts_by_ids(
        conn: &mut AsyncPgConnection,
        ids: &[i64],
    ) -> PgResult<usize> {
        use schema::contacts::{self, dsl};

        if ids.is_empty() {
            return Ok(0);
        }

        diesel::delete(contacts::table.filter(dsl::id.eq_any(ids)))
            .execute(conn)
            .await
            .map_err(PgError::from)
    }

    /// Deletes every contact message matching `filter` except the excluded ids.
    pub async fn delete_contacts_matching(
        conn: &mut AsyncPgConnection,
        filter: &ContactFilter,
        excluded: &[i64],
    ) -> PgResult<usize> {
        use schema::contacts::{self, dsl};

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

                diesel::delete(contacts::table.filter(dsl::id.eq_any(ids)))
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
    fn filtered(filter: &ContactFilter) -> schema::contacts::BoxedQuery<'static, Pg> {
        use schema::contacts::{self, dsl};

        let mut query = contacts::table.into_boxed();

        if let Some(pattern) = filter.search.as_deref().and_then(like_pattern) {
            query = query.filter(
                dsl::name
                    .ilike(pattern.clone())
                    .or(dsl::email.ilike(pattern)),
            );
        }
        if let Some(status) = filter.status {
            query = query.filter(dsl::status.eq(status));
        }

        query
    }
}
