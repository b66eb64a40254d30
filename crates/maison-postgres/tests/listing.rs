//! Listing pipeline integration tests.
//!
//! These tests need a running PostgreSQL instance; point `POSTGRES_URL`
//! at one (a `.env` file works) and run with `cargo test -- --ignored`.
//! Every test runs inside a test transaction, so the database is left
//! untouched.

use bigdecimal::BigDecimal;
use diesel_async::AsyncConnection;
use maison_postgres::model::{NewCategory, NewProduct};
use maison_postgres::query::{CategoryRepository, ProductRepository};
use maison_postgres::types::{
    ListingQuery, OffsetPagination, ProductFilter, ProductSortField, SortBy, SortOrder,
};
use maison_postgres::{PgClient, PgConfig, run_pending_migrations};

async fn test_client() -> anyhow::Result<PgClient> {
    dotenvy::dotenv().ok();
    let url = std::env::var("POSTGRES_URL")?;
    let client = PgClient::new_with_test(PgConfig::new(url)).await?;
    run_pending_migrations(&client).await?;
    Ok(client)
}

async fn seed_products(
    conn: &mut maison_postgres::PgConnection,
    prices: &[(&str, i32)],
) -> anyhow::Result<i64> {
    let category = CategoryRepository::create_category(
        conn,
        NewCategory {
            name: "Listing Fixtures".into(),
            slug: "listing-fixtures".into(),
            ..Default::default()
        },
    )
    .await?;

    for (name, price) in prices {
        let slug = name.to_lowercase().replace(' ', "-");
        ProductRepository::create_product(
            conn,
            NewProduct {
                category_id: category.id,
                name: (*name).into(),
                slug,
                description: String::new(),
                price: BigDecimal::from(*price),
                ..Default::default()
            },
        )
        .await?;
    }

    Ok(category.id)
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn pagination_returns_remainder_on_last_page() -> anyhow::Result<()> {
    let client = test_client().await?;
    let mut conn = client.get_connection().await?;
    conn.begin_test_transaction().await?;

    let names: Vec<String> = (1..=23).map(|i| format!("Fixture Chair {i:02}")).collect();
    let priced: Vec<(&str, i32)> = names.iter().map(|n| (n.as_str(), 100)).collect();
    let category_id = seed_products(&mut conn, &priced).await?;

    let query = ListingQuery::new(
        OffsetPagination::from_page(3, 10),
        ProductFilter::new().with_category(category_id),
    );
    let page = ProductRepository::list_products(&mut conn, query).await?;

    assert_eq!(page.items.len(), 3);
    assert_eq!(page.total, 23);
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn sort_by_price_ascending() -> anyhow::Result<()> {
    let client = test_client().await?;
    let mut conn = client.get_connection().await?;
    conn.begin_test_transaction().await?;

    let category_id = seed_products(
        &mut conn,
        &[("Fixture Sofa", 30), ("Fixture Stool", 10), ("Fixture Table", 20)],
    )
    .await?;

    let query = ListingQuery::new(
        OffsetPagination::default(),
        ProductFilter::new().with_category(category_id),
    )
    .with_sort(vec![SortBy::new(ProductSortField::Price, SortOrder::Asc)]);
    let page = ProductRepository::list_products(&mut conn, query).await?;

    let prices: Vec<BigDecimal> = page.items.iter().map(|p| p.price.clone()).collect();
    assert_eq!(
        prices,
        vec![
            BigDecimal::from(10),
            BigDecimal::from(20),
            BigDecimal::from(30)
        ],
    );
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn name_filter_is_case_insensitive_substring() -> anyhow::Result<()> {
    let client = test_client().await?;
    let mut conn = client.get_connection().await?;
    conn.begin_test_transaction().await?;

    let category_id = seed_products(
        &mut conn,
        &[("Fixture Sofa Bed", 900), ("Fixture Dining Chair", 120)],
    )
    .await?;

    let query = ListingQuery::new(
        OffsetPagination::default(),
        ProductFilter::new()
            .with_category(category_id)
            .with_name("sofa"),
    );
    let page = ProductRepository::list_products(&mut conn, query).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Fixture Sofa Bed");
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn listing_is_idempotent_against_unchanged_table() -> anyhow::Result<()> {
    let client = test_client().await?;
    let mut conn = client.get_connection().await?;
    conn.begin_test_transaction().await?;

    let category_id = seed_products(
        &mut conn,
        &[("Fixture Bench", 210), ("Fixture Lamp", 45), ("Fixture Rug", 89)],
    )
    .await?;

    let query = ListingQuery::new(
        OffsetPagination::default(),
        ProductFilter::new().with_category(category_id),
    )
    .with_sort(vec![SortBy::new(ProductSortField::Name, SortOrder::Asc)]);

    let first = ProductRepository::list_products(&mut conn, query.clone()).await?;
    let second = ProductRepository::list_products(&mut conn, query).await?;

    assert_eq!(first.total, second.total);
    let first_ids: Vec<i64> = first.items.iter().map(|p| p.id).collect();
    let second_ids: Vec<i64> = second.items.iter().map(|p| p.id).collect();
    assert_eq!(first_ids, second_ids);
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn bulk_delete_all_except_respects_exclusions() -> anyhow::Result<()> {
    let client = test_client().await?;
    let mut conn = client.get_connection().await?;
    conn.begin_test_transaction().await?;

    let category_id = seed_products(
        &mut conn,
        &[("Fixture Desk", 300), ("Fixture Shelf", 150), ("Fixture Stand", 75)],
    )
    .await?;

    let filter = ProductFilter::new().with_category(category_id);
    let all = ProductRepository::list_products(
        &mut conn,
        ListingQuery::new(OffsetPagination::default(), filter.clone()),
    )
    .await?;
    let keep = all.items[0].id;

    let deleted =
        ProductRepository::delete_products_matching(&mut conn, &filter, &[keep]).await?;
    assert_eq!(deleted, 2);

    let remaining = ProductRepository::list_products(
        &mut conn,
        ListingQuery::new(OffsetPagination::default(), filter),
    )
    .await?;
    assert_eq!(remaining.total, 1);
    assert_eq!(remaining.items[0].id, keep);
    Ok(())
}
