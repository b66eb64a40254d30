//! Listing query-string parsing.
//!
//! Listing parameters are parsed leniently: malformed `sort` JSON means
//! "no sort", unknown sort keys are dropped, and filter values that do
//! not parse (or carry the `all` sentinel) mean "no constraint". A bad
//! parameter never fails the request.

use std::str::FromStr;

use maison_postgres::query::{
    categories::CategoryListingQuery, contacts::ContactListingQuery, orders::OrderListingQuery,
    products::ProductListingQuery, projects::ProjectListingQuery, reviews::ReviewListingQuery,
    subscribers::SubscriberListingQuery,
};
use maison_postgres::types::{
    CategoryFilter, ContactFilter, ListingQuery, OffsetPagination, OrderFilter, ProductFilter,
    ProjectFilter, ReviewFilter, SortBy, SortOrder, SubscriberFilter,
};
use serde::Deserialize;

/// Tracing target for listing parameter parsing.
const TRACING_TARGET: &str = "maison_server::handler::listing";

/// The `sort` parameter as sent on the wire: a JSON array of
/// `{key, order}` objects.
#[derive(Debug, Deserialize)]
struct RawSortItem {
    key: String,
    #[serde(default)]
    order: Option<String>,
}

/// Parses the `sort` query-string value into typed sort instructions.
///
/// Unknown keys are dropped (the field enum is the whitelist), repeated
/// keys keep their first occurrence, and malformed JSON yields an empty
/// sort rather than an error.
pub fn parse_sort<S>(raw: Option<&str>) -> Vec<SortBy<S>>
where
    S: FromStr + Copy + Eq,
{
    let Some(raw) = raw else {
        return Vec::new();
    };

    let items: Vec<RawSortItem> = match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(error) => {
            tracing::debug!(
                target: TRACING_TARGET,
                error = %error,
                "malformed sort parameter, falling back to default ordering",
            );
            return Vec::new();
        }
    };

    let mut sort: Vec<SortBy<S>> = Vec::new();
    for item in items {
        let Ok(field) = item.key.parse::<S>() else {
            tracing::debug!(
                target: TRACING_TARGET,
                key = %item.key,
                "dropping unknown sort key",
            );
            continue;
        };
        if sort.iter().any(|existing| existing.field == field) {
            continue;
        }
        let order = match item.order.as_deref() {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        };
        sort.push(SortBy::new(field, order));
    }

    sort
}

/// Parses a sentinel-able exact-match filter value.
///
/// `None`, the empty string and the literal `all` mean "no constraint";
/// so does a value that fails to parse.
pub fn sentinel<T: FromStr>(raw: Option<&str>) -> Option<T> {
    let value = raw?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        return None;
    }
    value.parse().ok()
}

/// Builds pagination from optional `page`/`limit` parameters.
fn pagination(page: Option<i64>, limit: Option<i64>) -> OffsetPagination {
    OffsetPagination::from_page(
        page.unwrap_or(1),
        limit.unwrap_or(maison_postgres::types::DEFAULT_LIMIT),
    )
}

/// Listing parameters for product endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ProductListingParams {
    /// 1-indexed page number.
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// JSON-encoded sort instructions.
    pub sort: Option<String>,
    /// Substring match on the product name.
    pub search: Option<String>,
    /// Category filter (`all` bypasses).
    pub category_id: Option<String>,
    /// Room type filter (`all` bypasses).
    pub room_type: Option<String>,
    /// Availability filter (`all` bypasses).
    pub is_available: Option<String>,
}

impl ProductListingParams {
    /// Builds the product filter from the raw parameters.
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            name: self.search.clone(),
            category_id: sentinel(self.category_id.as_deref()),
            room_type: sentinel(self.room_type.as_deref()),
            is_available: sentinel(self.is_available.as_deref()),
        }
    }

    /// Converts the raw parameters into a listing query.
    pub fn into_query(self) -> ProductListingQuery {
        ListingQuery {
            pagination: pagination(self.page, self.limit),
            sort: parse_sort(self.sort.as_deref()),
            filter: self.filter(),
        }
    }
}

/// Listing parameters for category endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CategoryListingParams {
    /// 1-indexed page number.
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// JSON-encoded sort instructions.
    pub sort: Option<String>,
    /// Substring match on the category name.
    pub search: Option<String>,
}

impl CategoryListingParams {
    /// Builds the category filter from the raw parameters.
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter {
            name: self.search.clone(),
        }
    }

    /// Converts the raw parameters into a listing query.
    pub fn into_query(self) -> CategoryListingQuery {
        ListingQuery {
            pagination: pagination(self.page, self.limit),
            sort: parse_sort(self.sort.as_deref()),
            filter: self.filter(),
        }
    }
}

/// Listing parameters for showroom project endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectListingParams {
    /// 1-indexed page number.
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// JSON-encoded sort instructions.
    pub sort: Option<String>,
    /// Substring match on the project title.
    pub search: Option<String>,
    /// Room type filter (`all` bypasses).
    pub room_type: Option<String>,
    /// Publication filter (`all` bypasses).
    pub is_published: Option<String>,
}

impl ProjectListingParams {
    /// Builds the project filter from the raw parameters.
    pub fn filter(&self) -> ProjectFilter {
        ProjectFilter {
            title: self.search.clone(),
            room_type: sentinel(self.room_type.as_deref()),
            is_published: sentinel(self.is_published.as_deref()),
        }
    }

    /// Converts the raw parameters into a listing query.
    pub fn into_query(self) -> ProjectListingQuery {
        ListingQuery {
            pagination: pagination(self.page, self.limit),
            sort: parse_sort(self.sort.as_deref()),
            filter: self.filter(),
        }
    }
}

/// Listing parameters for order endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OrderListingParams {
    /// 1-indexed page number.
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// JSON-encoded sort instructions.
    pub sort: Option<String>,
    /// Substring match across order number, customer name and email.
    pub search: Option<String>,
    /// Status filter (`all` bypasses).
    pub status: Option<String>,
}

impl OrderListingParams {
    /// Builds the order filter from the raw parameters.
    pub fn filter(&self) -> OrderFilter {
        OrderFilter {
            search: self.search.clone(),
            status: sentinel(self.status.as_deref()),
        }
    }

    /// Converts the raw parameters into a listing query.
    pub fn into_query(self) -> OrderListingQuery {
        ListingQuery {
            pagination: pagination(self.page, self.limit),
            sort: parse_sort(self.sort.as_deref()),
            filter: self.filter(),
        }
    }
}

/// Listing parameters for review endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ReviewListingParams {
    /// 1-indexed page number.
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// JSON-encoded sort instructions.
    pub sort: Option<String>,
    /// Substring match on the reviewer name.
    pub search: Option<String>,
    /// Product filter (`all` bypasses).
    pub product_id: Option<String>,
    /// Status filter (`all` bypasses).
    pub status: Option<String>,
}

impl ReviewListingParams {
    /// Builds the review filter from the raw parameters.
    pub fn filter(&self) -> ReviewFilter {
        ReviewFilter {
            customer_name: self.search.clone(),
            product_id: sentinel(self.product_id.as_deref()),
            status: sentinel(self.status.as_deref()),
        }
    }

    /// Converts the raw parameters into a listing query.
    pub fn into_query(self) -> ReviewListingQuery {
        ListingQuery {
            pagination: pagination(self.page, self.limit),
            sort: parse_sort(self.sort.as_deref()),
            filter: self.filter(),
        }
    }
}

/// Listing parameters for contact message endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ContactListingParams {
    /// 1-indexed page number.
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// JSON-encoded sort instructions.
    pub sort: Option<String>,
    /// Substring match across sender name and email.
    pub search: Option<String>,
    /// Status filter (`all` bypasses).
    pub status: Option<String>,
}

impl ContactListingParams {
    /// Builds the contact filter from the raw parameters.
    pub fn filter(&self) -> ContactFilter {
        ContactFilter {
            search: self.search.clone(),
            status: sentinel(self.status.as_deref()),
        }
    }

    /// Converts the raw parameters into a listing query.
    pub fn into_query(self) -> ContactListingQuery {
        ListingQuery {
            pagination: pagination(self.page, self.limit),
            sort: parse_sort(self.sort.as_deref()),
            filter: self.filter(),
        }
    }
}

/// Listing parameters for newsletter subscriber endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SubscriberListingParams {
    /// 1-indexed page number.
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// JSON-encoded sort instructions.
    pub sort: Option<String>,
    /// Substring match on the email address.
    pub search: Option<String>,
    /// Status filter (`all` bypasses).
    pub status: Option<String>,
}

impl SubscriberListingParams {
    /// Builds the subscriber filter from the raw parameters.
    pub fn filter(&self) -> SubscriberFilter {
        SubscriberFilter {
            email: self.search.clone(),
            status: sentinel(self.status.as_deref()),
        }
    }

    /// Converts the raw parameters into a listing query.
    pub fn into_query(self) -> SubscriberListingQuery {
        ListingQuery {
            pagination: pagination(self.page, self.limit),
            sort: parse_sort(self.sort.as_deref()),
            filter: self.filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use maison_postgres::types::{OrderStatus, ProductSortField, RoomType};

    use super::*;

    #[test]
    fn parse_sort_keeps_known_keys_in_order() {
        let sort: Vec<SortBy<ProductSortField>> = parse_sort(Some(
            r#"[{"key":"price","order":"asc"},{"key":"name","order":"desc"}]"#,
        ));

        assert_eq!(sort.len(), 2);
        assert_eq!(sort[0].field, ProductSortField::Price);
        assert_eq!(sort[0].order, SortOrder::Asc);
        assert_eq!(sort[1].field, ProductSortField::Name);
        assert_eq!(sort[1].order, SortOrder::Desc);
    }

    #[test]
    fn parse_sort_drops_unknown_keys() {
        let sort: Vec<SortBy<ProductSortField>> = parse_sort(Some(
            r#"[{"key":"price; DROP TABLE products","order":"asc"},{"key":"name"}]"#,
        ));

        assert_eq!(sort.len(), 1);
        assert_eq!(sort[0].field, ProductSortField::Name);
    }

    #[test]
    fn parse_sort_tolerates_malformed_json() {
        let sort: Vec<SortBy<ProductSortField>> = parse_sort(Some("not json at all"));
        assert!(sort.is_empty());

        let sort: Vec<SortBy<ProductSortField>> = parse_sort(None);
        assert!(sort.is_empty());
    }

    #[test]
    fn parse_sort_keeps_first_occurrence_of_repeated_key() {
        let sort: Vec<SortBy<ProductSortField>> = parse_sort(Some(
            r#"[{"key":"price","order":"asc"},{"key":"price","order":"desc"}]"#,
        ));

        assert_eq!(sort.len(), 1);
        assert_eq!(sort[0].order, SortOrder::Asc);
    }

    #[test]
    fn sentinel_bypasses_all_and_empty() {
        assert_eq!(sentinel::<OrderStatus>(Some("all")), None);
        assert_eq!(sentinel::<OrderStatus>(Some("ALL")), None);
        assert_eq!(sentinel::<OrderStatus>(Some("")), None);
        assert_eq!(sentinel::<OrderStatus>(None), None);
        assert_eq!(
            sentinel::<OrderStatus>(Some("pending")),
            Some(OrderStatus::Pending),
        );
    }

    #[test]
    fn sentinel_is_lenient_about_garbage() {
        assert_eq!(sentinel::<OrderStatus>(Some("definitely-bogus")), None);
        assert_eq!(sentinel::<i64>(Some("not-a-number")), None);
    }

    #[test]
    fn product_params_build_full_query() {
        let params = ProductListingParams {
            page: Some(3),
            limit: Some(10),
            sort: Some(r#"[{"key":"price","order":"asc"}]"#.into()),
            search: Some("sofa".into()),
            category_id: Some("7".into()),
            room_type: Some("living_room".into()),
            is_available: Some("true".into()),
        };

        let query = params.into_query();
        assert_eq!(query.pagination.offset, 20);
        assert_eq!(query.pagination.limit, 10);
        assert_eq!(query.sort.len(), 1);
        assert_eq!(query.filter.name.as_deref(), Some("sofa"));
        assert_eq!(query.filter.category_id, Some(7));
        assert_eq!(query.filter.room_type, Some(RoomType::LivingRoom));
        assert_eq!(query.filter.is_available, Some(true));
    }

    #[test]
    fn all_sentinels_produce_empty_filter() {
        let params = ProductListingParams {
            category_id: Some("all".into()),
            room_type: Some("all".into()),
            is_available: Some("all".into()),
            search: Some("   ".into()),
            ..Default::default()
        };

        assert!(params.filter().is_empty());
    }
}
