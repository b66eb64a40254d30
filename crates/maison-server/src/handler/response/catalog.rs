//! Catalog response types.

use bigdecimal::BigDecimal;
use maison_postgres::model::{Category, Product, Project};
use maison_postgres::types::RoomType;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Represents a product with full details.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    /// ID of the product.
    pub id: i64,
    /// ID of the category the product belongs to.
    pub category_id: i64,
    /// Product name.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: BigDecimal,
    /// Room the product is designed for.
    pub room_type: RoomType,
    /// Whether the product can currently be ordered.
    pub is_available: bool,
    /// Units in stock.
    pub stock_quantity: i32,
    /// Timestamp when the product was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Timestamp when the product was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            category_id: product.category_id,
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price,
            room_type: product.room_type,
            is_available: product.is_available,
            stock_quantity: product.stock_quantity,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Represents a category.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryResponse {
    /// ID of the category.
    pub id: i64,
    /// Category name.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Optional description.
    pub description: Option<String>,
    /// Position in storefront navigation.
    pub display_order: i32,
    /// Timestamp when the category was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Timestamp when the category was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            display_order: category.display_order,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Represents a showroom project.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectResponse {
    /// ID of the project.
    pub id: i64,
    /// Project title.
    pub title: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Long-form description.
    pub description: String,
    /// Room the arrangement is designed for.
    pub room_type: RoomType,
    /// Whether the project is visible on the storefront.
    pub is_published: bool,
    /// Timestamp when the project was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Timestamp when the project was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            slug: project.slug,
            description: project.description,
            room_type: project.room_type,
            is_published: project.is_published,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
