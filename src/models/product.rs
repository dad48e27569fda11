use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub name: String,
    pub image: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    pub count_in_stock: i32,
    pub num_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for a product that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub user_id: Uuid,
    pub name: String,
    pub image: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: Decimal,
    pub count_in_stock: i32,
}

impl NewProduct {
    /// Placeholder product an admin creates and then edits.
    pub fn sample(user_id: Uuid) -> Self {
        Self {
            user_id,
            name: "Sample Product".to_string(),
            image: "/images/sample.jpg".to_string(),
            brand: "Sample Brand".to_string(),
            category: "Sample category".to_string(),
            description: "Sample description".to_string(),
            price: Decimal::ZERO,
            count_in_stock: 0,
        }
    }
}

/// Full replacement of the editable fields. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    pub image: String,
    pub brand: String,
    pub category: String,
    pub count_in_stock: i32,
}

impl ProductUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name cannot be empty".to_string()));
        }

        if self.price < Decimal::ZERO {
            return Err(AppError::BadRequest("price cannot be negative".to_string()));
        }

        if self.count_in_stock < 0 {
            return Err(AppError::BadRequest(
                "countInStock cannot be negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Overwrites the editable fields. Identity, owner, reviews and rating
    /// are left alone.
    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name;
        product.price = self.price;
        product.description = self.description;
        product.image = self.image;
        product.brand = self.brand;
        product.category = self.category;
        product.count_in_stock = self.count_in_stock;
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProductQuery {
    pub keyword: Option<String>,
    #[serde(rename = "pageNumber")]
    pub page_number: Option<String>,
}

impl ProductQuery {
    /// Builds the query from raw key/value pairs. A repeated key keeps its
    /// first value and unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "keyword" => &mut query.keyword,
                "pageNumber" => &mut query.page_number,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            keyword: self.keyword.clone().filter(|k| !k.is_empty()),
        }
    }

    /// Requested page, falling back to 1 when absent or not a positive integer.
    pub fn page(&self) -> u64 {
        self.page_number
            .as_deref()
            .and_then(|p| p.trim().parse::<u64>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub keyword: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self.keyword {
            Some(ref keyword) => product
                .name
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: u64,
    pub pages: u64,
}

pub fn page_count(total: u64, page_size: u64) -> u64 {
    total.div_ceil(page_size)
}

pub fn page_offset(page: u64, page_size: u64) -> u64 {
    page_size.saturating_mul(page.saturating_sub(1))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
