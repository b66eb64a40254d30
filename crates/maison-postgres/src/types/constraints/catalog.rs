//! Catalog table constraint violations (categories, products, projects).

use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Category table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Display, EnumIter, EnumString)]
pub enum CategoryConstraints {
    #[strum(serialize = "categories_name_length")]
    NameLength,
    #[strum(serialize = "categories_slug_unique_idx")]
    SlugUnique,
    #[strum(serialize = "categories_slug_format")]
    SlugFormat,
    #[strum(serialize = "categories_display_order_min")]
    DisplayOrderMin,
}

impl CategoryConstraints {
    /// Creates a new [`CategoryConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            CategoryConstraints::SlugUnique => ConstraintCategory::Uniqueness,
            CategoryConstraints::NameLength
            | CategoryConstraints::SlugFormat
            | CategoryConstraints::DisplayOrderMin => ConstraintCategory::Validation,
        }
    }
}

/// Product table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Display, EnumIter, EnumString)]
pub enum ProductConstraints {
    #[strum(serialize = "products_name_length")]
    NameLength,
    #[strum(serialize = "products_slug_unique_idx")]
    SlugUnique,
    #[strum(serialize = "products_slug_format")]
    SlugFormat,
    #[strum(serialize = "products_price_nonnegative")]
    PriceNonNegative,
    #[strum(serialize = "products_stock_quantity_nonnegative")]
    StockQuantityNonNegative,
    #[strum(serialize = "products_category_id_fkey")]
    CategoryReference,
}

impl ProductConstraints {
    /// Creates a new [`ProductConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ProductConstraints::SlugUnique => ConstraintCategory::Uniqueness,
            ProductConstraints::CategoryReference => ConstraintCategory::Reference,
            ProductConstraints::NameLength
            | ProductConstraints::SlugFormat
            | ProductConstraints::PriceNonNegative
            | ProductConstraints::StockQuantityNonNegative => ConstraintCategory::Validation,
        }
    }
}

/// Showroom project table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Display, EnumIter, EnumString)]
pub enum ProjectConstraints {
    #[strum(serialize = "projects_title_length")]
    TitleLength,
    #[strum(serialize = "projects_slug_unique_idx")]
    SlugUnique,
    #[strum(serialize = "projects_slug_format")]
    SlugFormat,
}

impl ProjectConstraints {
    /// Creates a new [`ProjectConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ProjectConstraints::SlugUnique => ConstraintCategory::Uniqueness,
            ProjectConstraints::TitleLength | ProjectConstraints::SlugFormat => {
                ConstraintCategory::Validation
            }
        }
    }
}
