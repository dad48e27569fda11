use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ProductStore, UserStore};
use crate::{
    database,
    error::{AppError, Result},
    models::{NewProduct, NewUser, Product, ProductFilter, User},
    queries::{products_queries, user_queries},
};

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    fn backend_tag(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64> {
        products_queries::count_products(&self.pool, filter).await
    }

    async fn find(&self, filter: &ProductFilter, limit: u64, skip: u64) -> Result<Vec<Product>> {
        products_queries::find_products(&self.pool, filter, limit, skip).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        products_queries::find_by_id(&self.pool, id).await
    }

    async fn insert(&self, product: NewProduct) -> Result<Product> {
        products_queries::create_product(&self.pool, &product).await
    }

    async fn save(&self, product: Product) -> Result<Product> {
        products_queries::save_product(&self.pool, &product)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let removed = products_queries::delete_product(&self.pool, id).await?;
        Ok(removed > 0)
    }
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        user_queries::find_by_email(&self.pool, email).await
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        user_queries::create_user(&self.pool, &user)
            .await
            .map_err(|e| match e {
                AppError::DatabaseError(sqlx::Error::Database(ref db))
                    if db.is_unique_violation() =>
                {
                    AppError::Conflict("Email already registered".to_string())
                }
                other => other,
            })
    }
}
