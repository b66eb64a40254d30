//! Catalog mutation payloads.

use bigdecimal::BigDecimal;
use maison_postgres::model::{
    NewCategory, NewProduct, NewProject, UpdateCategory, UpdateProduct, UpdateProject,
};
use maison_postgres::types::RoomType;
use serde::Deserialize;
use validator::Validate;

/// Request payload for creating a product.
#[must_use]
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Category the product belongs to.
    pub category_id: i64,
    /// Product name.
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    /// URL-safe identifier.
    #[validate(length(min = 2, max = 140))]
    pub slug: String,
    /// Long-form description.
    #[validate(length(max = 8000))]
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: BigDecimal,
    /// Room the product is designed for.
    pub room_type: Option<RoomType>,
    /// Whether the product can be ordered.
    pub is_available: Option<bool>,
    /// Units in stock.
    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            category_id: request.category_id,
            name: request.name,
            slug: request.slug,
            description: request.description,
            price: request.price,
            room_type: request.room_type,
            is_available: request.is_available,
            stock_quantity: request.stock_quantity,
        }
    }
}

/// Request payload for updating a product.
#[must_use]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProductRequest {
    /// Category the product belongs to.
    pub category_id: Option<i64>,
    /// Product name.
    #[validate(length(min = 2, max = 120))]
    pub name: Option<String>,
    /// URL-safe identifier.
    #[validate(length(min = 2, max = 140))]
    pub slug: Option<String>,
    /// Long-form description.
    #[validate(length(max = 8000))]
    pub description: Option<String>,
    /// Unit price.
    pub price: Option<BigDecimal>,
    /// Room the product is designed for.
    pub room_type: Option<RoomType>,
    /// Whether the product can be ordered.
    pub is_available: Option<bool>,
    /// Units in stock.
    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,
}

impl From<UpdateProductRequest> for UpdateProduct {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            category_id: request.category_id,
            name: request.name,
            slug: request.slug,
            description: request.description,
            price: request.price,
            room_type: request.room_type,
            is_available: request.is_available,
            stock_quantity: request.stock_quantity,
            updated_at: None,
        }
    }
}

/// Request payload for creating a category.
#[must_use]
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Category name.
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    /// URL-safe identifier.
    #[validate(length(min = 2, max = 140))]
    pub slug: String,
    /// Optional description.
    #[validate(length(max = 8000))]
    pub description: Option<String>,
    /// Navigation position.
    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        Self {
            name: request.name,
            slug: request.slug,
            description: request.description,
            display_order: request.display_order,
        }
    }
}

/// Request payload for updating a category.
#[must_use]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateCategoryRequest {
    /// Category name.
    #[validate(length(min = 2, max = 120))]
    pub name: Option<String>,
    /// URL-safe identifier.
    #[validate(length(min = 2, max = 140))]
    pub slug: Option<String>,
    /// Description (`null` clears it).
    pub description: Option<Option<String>>,
    /// Navigation position.
    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
}

impl From<UpdateCategoryRequest> for UpdateCategory {
    fn from(request: UpdateCategoryRequest) -> Self {
        Self {
            name: request.name,
            slug: request.slug,
            description: request.description,
            display_order: request.display_order,
            updated_at: None,
        }
    }
}

/// Request payload for creating a showroom project.
#[must_use]
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Project title.
    #[validate(length(min = 2, max = 160))]
    pub title: String,
    /// URL-safe identifier.
    #[validate(length(min = 2, max = 180))]
    pub slug: String,
    /// Long-form description.
    #[validate(length(max = 8000))]
    #[serde(default)]
    pub description: String,
    /// Room the arrangement is designed for.
    pub room_type: Option<RoomType>,
    /// Whether the project is visible on the storefront.
    pub is_published: Option<bool>,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(request: CreateProjectRequest) -> Self {
        Self {
            title: request.title,
            slug: request.slug,
            description: request.description,
            room_type: request.room_type,
            is_published: request.is_published,
        }
    }
}

/// Request payload for updating a showroom project.
#[must_use]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProjectRequest {
    /// Project title.
    #[validate(length(min = 2, max = 160))]
    pub title: Option<String>,
    /// URL-safe identifier.
    #[validate(length(min = 2, max = 180))]
    pub slug: Option<String>,
    /// Long-form description.
    #[validate(length(max = 8000))]
    pub description: Option<String>,
    /// Room the arrangement is designed for.
    pub room_type: Option<RoomType>,
    /// Whether the project is visible on the storefront.
    pub is_published: Option<bool>,
}

impl From<UpdateProjectRequest> for UpdateProject {
    fn from(request: UpdateProjectRequest) -> Self {
        Self {
            title: request.title,
            slug: request.slug,
            description: request.description,
            room_type: request.room_type,
            is_published: request.is_published,
            updated_at: None,
        }
    }
}
