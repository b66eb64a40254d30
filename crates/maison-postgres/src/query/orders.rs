//! Order repository covering checkout and fulfilment operations.

use bigdecimal::BigDecimal;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;

use crate::model::{NewOrder, NewOrderItem, Order, OrderItem, UpdateOrder};
use crate::types::{
    ListingQuery, OffsetPage, OrderFilter, OrderSortField, OrderStatus, SortOrder, like_pattern,
};
use crate::{PgError, PgResult, schema};

/// Listing request for orders.
pub type OrderListingQuery = ListingQuery<OrderSortField, OrderFilter>;

/// Counts of orders per lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderStats {
    /// Orders awaiting payment
    pub pending: i64,
    /// Orders paid but not dispatched
    pub paid: i64,
    /// Orders in transit
    pub shipped: i64,
    /// Orders delivered
    pub delivered: i64,
    /// Orders canceled
    pub canceled: i64,
}

impl OrderStats {
    /// Returns the total number of orders.
    pub fn total(&self) -> i64 {
        self.pending + self.paid + self.shipped + self.delivered + self.canceled
    }

    /// Returns the number of orders needing fulfilment work.
    pub fn open(&self) -> i64 {
        self.pending + self.paid
    }
}

/// One requested line of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutLine {
    /// Product being ordered.
    pub product_id: i64,
    /// Units ordered.
    pub quantity: i32,
}

/// Why a checkout could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutRejection {
    /// The product does not exist.
    UnknownProduct(i64),
    /// The product is not currently orderable.
    Unavailable(i64),
    /// Fewer units in stock than requested.
    InsufficientStock(i64),
}

/// Outcome of a checkout attempt.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// The order was placed.
    Placed {
        /// The created order.
        order: Order,
        /// Its line items.
        items: Vec<OrderItem>,
    },
    /// The cart could not be fulfilled; nothing was written.
    Rejected(CheckoutRejection),
}

/// Customer details of a checkout.
#[derive(Debug, Clone)]
pub struct CheckoutCustomer {
    /// Human-facing order reference to assign.
    pub order_number: String,
    /// Customer full name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Free-form shipping address.
    pub shipping_address: String,
}

/// Repository for order and order-item table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderRepository;

impl OrderRepository {
    /// Creates a new order repository instance.
    pub fn new() -> Self {
        Self
    }

    /// Places an order for the given cart in one transaction.
    ///
    /// Unit prices are read from the catalog inside the transaction and
    /// stock is decremented with a guarded UPDATE, so a concurrent
    /// checkout can never oversell. A rejection leaves the transaction
    /// through the error path; partial stock decrements roll back.
    pub async fn checkout(
        conn: &mut AsyncPgConnection,
        customer: CheckoutCustomer,
        lines: Vec<CheckoutLine>,
    ) -> PgResult<CheckoutOutcome> {
        use crate::model::Product;
        use schema::{order_items, orders, products};

        enum TxError {
            Pg(PgError),
            Rejected(CheckoutRejection),
        }

        impl From<diesel::result::Error> for TxError {
            fn from(error: diesel::result::Error) -> Self {
                TxError::Pg(error.into())
            }
        }

        let result = conn
            .transaction::<_, TxError, _>(|conn| {
                async move {
                    let mut total = BigDecimal::from(0);
                    let mut new_items = Vec::with_capacity(lines.len());

                    for line in &lines {
                        // Guarded decrement: succeeds only when the product
                        // is orderable and has enough stock.
                        let product: Option<Product> = diesel::update(
                            products::table
                                .filter(products::id.eq(line.product_id))
                                .filter(products::is_available.eq(true))
                                .filter(products::stock_quantity.ge(line.quantity)),
                        )
                        .set((
                            products::stock_quantity
                                .eq(products::stock_quantity - line.quantity),
                            products::updated_at.eq(OffsetDateTime::now_utc()),
                        ))
                        .returning(Product::as_returning())
                        .get_result(conn)
                        .await
                        .optional()?;

                        let Some(product) = product else {
                            let rejection = Self::classify_rejection(conn, line)
                                .await
                                .map_err(TxError::Pg)?;
                            return Err(TxError::Rejected(rejection));
                        };

                        total += product.price.clone() * BigDecimal::from(line.quantity);
                        new_items.push(NewOrderItem {
                            order_id: 0,
                            product_id: line.product_id,
                            quantity: line.quantity,
                            unit_price: product.price,
                        });
                    }

                    let order: Order = diesel::insert_into(orders::table)
                        .values(&NewOrder {
                            order_number: customer.order_number,
                            customer_name: customer.customer_name,
                            customer_email: customer.customer_email,
                            shipping_address: customer.shipping_address,
                            status: None,
                            total_amount: total,
                        })
                        .returning(Order::as_returning())
                        .get_result(conn)
                        .await?;

                    let new_items: Vec<NewOrderItem> = new_items
                        .into_iter()
                        .map(|item| NewOrderItem {
                            order_id: order.id,
                            ..item
                        })
                        .collect();

                    let items = diesel::insert_into(order_items::table)
                        .values(&new_items)
                        .returning(OrderItem::as_returning())
                        .get_results(conn)
                        .await?;

                    Ok(CheckoutOutcome::Placed { order, items })
                }
                .scope_boxed()
            })
            .await;

        match result {
            Ok(outcome) => Ok(outcome),
            Err(TxError::Rejected(rejection)) => Ok(CheckoutOutcome::Rejected(rejection)),
            Err(TxError::Pg(error)) => Err(error),
        }
    }

    /// Works out why a guarded stock decrement matched no row.
    async fn classify_rejection(
        conn: &mut AsyncPgConnection,
        line: &CheckoutLine,
    ) -> PgResult<CheckoutRejection> {
        use crate::model::Product;
        use schema::products::{self, dsl};

        let product: Option<Product> = products::table
            .filter(dsl::id.eq(line.product_id))
            .select(Product::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(match product {
            None => CheckoutRejection::UnknownProduct(line.product_id),
            Some(product) if !product.is_available => {
                CheckoutRejection::Unavailable(line.product_id)
            }
            Some(_) => CheckoutRejection::InsufficientStock(line.product_id),
        })
    }

    /// Finds an order by its ID.
    pub async fn find_order_by_id(
        conn: &mut AsyncPgConnection,
        order_id: i64,
    ) -> PgResult<Option<Order>> {
        use schema::orders::{self, dsl};

        orders::table
            .filter(dsl::id.eq(order_id))
            .select(Order::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Finds an order by its human-facing order number.
    pub async fn find_order_by_number(
        conn: &mut AsyncPgConnection,
        order_number: &str,
    ) -> PgResult<Option<Order>> {
        use schema::orders::{self, dsl};

        orders::table
            .filter(dsl::order_number.eq(order_number))
            .select(Order::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Loads the line items of an order.
    pub async fn list_order_items(
        conn: &mut AsyncPgConnection,
        order_id: i64,
    ) -> PgResult<Vec<OrderItem>> {
        use schema::order_items::{self, dsl};

        order_items::table
            .filter(dsl::order_id.eq(order_id))
            .order(dsl::id.asc())
            .select(OrderItem::as_select())
            .load(conn)
            .await
            .map_err(PgError::from)
    }

    /// Lists orders with pagination, sorting and filtering.
    pub async fn list_orders(
        conn: &mut AsyncPgConnection,
        query: OrderListingQuery,
    ) -> PgResult<OffsetPage<Order>> {
        use schema::orders;

        let total: i64 = Self::filtered(&query.filter)
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)?;

        let mut stmt = Self::filtered(&query.filter).select(Order::as_select());

        let mut ordered = false;
        for sort in &query.sort {
            stmt = match (ordered, sort.field, sort.order) {
                (false, OrderSortField::OrderNumber, SortOrder::Asc) => {
                    stmt.order(orders::order_number.asc())
                }
                (false, OrderSortField::OrderNumber, SortOrder::Desc) => {
                    stmt.order(orders::order_number.desc())
                }
                (false, OrderSortField::CustomerName, SortOrder::Asc) => {
                    stmt.order(orders::customer_name.asc())
                }
                (false, OrderSortField::CustomerName, SortOrder::Desc) => {
                    stmt.order(orders::customer_name.desc())
                }
                (false, OrderSortField::TotalAmount, SortOrder::Asc) => {
                    stmt.order(orders::total_amount.asc())
                }
                (false, OrderSortField::TotalAmount, SortOrder::Desc) => {
                    stmt.order(orders::total_amount.desc())
                }
                (false, OrderSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.order(orders::created_at.asc())
                }
                (false, OrderSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.order(orders::created_at.desc())
                }
                (true, OrderSortField::OrderNumber, SortOrder::Asc) => {
                    stmt.then_order_by(orders::order_number.asc())
                }
                (true, OrderSortField::OrderNumber, SortOrder::Desc) => {
                    stmt.then_order_by(orders::order_number.desc())
                }
                (true, OrderSortField::CustomerName, SortOrder::Asc) => {
                    stmt.then_order_by(orders::customer_name.asc())
                }
                (true, OrderSortField::CustomerName, SortOrder::Desc) => {
                    stmt.then_order_by(orders::customer_name.desc())
                }
                (true, OrderSortField::TotalAmount, SortOrder::Asc) => {
                    stmt.then_order_by(orders::total_amount.asc())
                }
                (true, OrderSortField::TotalAmount, SortOrder::Desc) => {
                    stmt.then_order_by(orders::total_amount.desc())
                }
                (true, OrderSortField::CreatedAt, SortOrder::Asc) => {
                    stmt.then_order_by(orders::created_at.asc())
                }
                (true, OrderSortField::CreatedAt, SortOrder::Desc) => {
                    stmt.then_order_by(orders::created_at.desc())
                }
            };
            ordered = true;
        }
        if !ordered {
            stmt = stmt.order(orders::created_at.desc());
        }

        let items = stmt
            .limit(query.pagination.limit)
            .offset(query.pagination.offset)
            .load(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Sets the lifecycle status of an order.
    ///
    /// Lifecycle validity is the caller's concern; the repository only
    /// persists the new status.
    pub async fn set_order_status(
        conn: &mut AsyncPgConnection,
        order_id: i64,
        status: OrderStatus,
    ) -> PgResult<Order> {
        use schema::orders::{self, dsl};

        let changes = UpdateOrder {
            status: Some(status),
            updated_at: Some(OffsetDateTime::now_utc()),
            ..Default::default()
        };

        diesel::update(orders::table.filter(dsl::id.eq(order_id)))
            .set(&changes)
            .returning(Order::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Gets order counts per lifecycle status.
    pub async fn get_order_stats(conn: &mut AsyncPgConnection) -> PgResult<OrderStats> {
        use schema::orders::{self, dsl};

        let rows: Vec<(OrderStatus, i64)> = orders::table
            .group_by(dsl::status)
            .select((dsl::status, diesel::dsl::count_star()))
            .load(conn)
            .await
            .map_err(PgError::from)?;

        let mut stats = OrderStats::default();
        for (status, count) in rows {
            match status {
                OrderStatus::Pending => stats.pending = count,
                OrderStatus::Paid => stats.paid = count,
                OrderStatus::Shipped => stats.shipped = count,
                OrderStatus::Delivered => stats.delivered = count,
                OrderStatus::Canceled => stats.canceled = count,
            }
        }

        Ok(stats)
    }

    /// Computes the revenue across delivered orders.
    pub async fn get_delivered_revenue(conn: &mut AsyncPgConnection) -> PgResult<BigDecimal> {
        use schema::orders::{self, dsl};

        let total: Option<BigDecimal> = orders::table
            .filter(dsl::status.eq(OrderStatus::Delivered))
            .select(diesel::dsl::sum(dsl::total_amount))
            .first(conn)
            .await
            .map_err(PgError::from)?;

        Ok(total.unwrap_or_default())
    }

    /// Builds the filtered base query shared by the page SELECT and the COUNT.
    fn filtered(filter: &OrderFilter) -> schema::orders::BoxedQuery<'static, Pg> {
        use schema::orders::{self, dsl};

        let mut query = orders::table.into_boxed();

        if let Some(pattern) = filter.search.as_deref().and_then(like_pattern) {
            query = query.filter(
                dsl::order_number
                    .ilike(pattern.clone())
                    .or(dsl::customer_name.ilike(pattern.clone()))
                    .or(dsl::customer_email.ilike(pattern)),
            );
        }
        if let Some(status) = filter.status {
            query = query.filter(dsl::status.eq(status));
        }

        query
    }
}
