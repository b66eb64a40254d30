//! Contact form handlers.

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, patch, post};
use maison_postgres::query::ContactRepository;

use crate::extract::{Json, PgPool, ValidateJson};
use crate::handler::request::{
    BulkDeleteRequest, ContactListingParams, CreateContactRequest, UpdateContactStatusRequest,
};
use crate::handler::response::{BulkDeleteResponse, ContactResponse, Page};
use crate::handler::Result;
use crate::middleware::rate_limit_strict;
use crate::service::ServiceState;

/// Tracing target for contact operations.
const TRACING_TARGET: &str = "maison_server::handler::contacts";

/// Accepts a contact-form submission.
#[tracing::instrument(skip_all)]
async fn submit_contact(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>)> {
    let contact = ContactRepository::create_contact(&mut conn, request.into()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        contact_id = contact.id,
        "contact message received",
    );

    Ok((StatusCode::CREATED, Json(contact.into())))
}

/// Lists contact messages for the admin table.
#[tracing::instrument(skip_all)]
async fn list_contacts(
    PgPool(mut conn): PgPool,
    Query(params): Query<ContactListingParams>,
) -> Result<Json<Page<ContactResponse>>> {
    let query = params.into_query();
    let pagination = query.pagination;

    let page = ContactRepository::list_contacts(&mut conn, query).await?;

    Ok(Json(Page::new(
        page.map(ContactResponse::from),
        pagination,
    )))
}

/// Updates the processing status of a contact message.
#[tracing::instrument(skip_all, fields(contact_id = contact_id))]
async fn update_contact_status(
    PgPool(mut conn): PgPool,
    Path(contact_id): Path<i64>,
    Json(request): Json<UpdateContactStatusRequest>,
) -> Result<Json<ContactResponse>> {
    let contact =
        ContactRepository::set_contact_status(&mut conn, contact_id, request.status).await?;

    tracing::info!(
        target: TRACING_TARGET,
        contact_id = contact.id,
        status = %contact.status,
        "contact status updated",
    );

    Ok(Json(contact.into()))
}

/// Bulk-deletes contact messages per the admin table selection.
#[tracing::instrument(skip_all)]
async fn bulk_delete_contacts(
    PgPool(mut conn): PgPool,
    Query(params): Query<ContactListingParams>,
    Json(request): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>> {
    let deleted = match &request {
        BulkDeleteRequest::Explicit(ids) => {
            ContactRepository::delete_contacts_by_ids(&mut conn, ids).await?
        }
        BulkDeleteRequest::AllExcept(excluded) => {
            ContactRepository::delete_contacts_matching(&mut conn, &params.filter(), excluded)
                .await?
        }
    };

    tracing::info!(target: TRACING_TARGET, deleted, "contacts bulk-deleted");

    Ok(Json(BulkDeleteResponse {
        deleted: deleted as u64,
    }))
}

/// Returns the public contact routes.
pub fn routes(state: ServiceState) -> Router<ServiceState> {
    let rate_limit = from_fn_with_state(state, rate_limit_strict);

    Router::new().route("/contact", post(submit_contact).route_layer(rate_limit))
}

/// Returns the admin contact routes.
pub fn admin_routes() -> Router<ServiceState> {
    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/contacts/{id}/status", patch(update_contact_status))
        .route("/contacts/bulk-delete", post(bulk_delete_contacts))
}
