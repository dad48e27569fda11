//! Storage seams for the catalog and the account lookups behind login.
//!
//! Handlers only see the traits. `postgres` backs them with the sqlx queries
//! in [`crate::queries`]; `memory` keeps everything in process and is what the
//! tests and `STORE_BACKEND=memory` use.

mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{NewProduct, NewUser, Product, ProductFilter, User},
};

pub use memory::{MemoryProductStore, MemoryUserStore};
pub use postgres::{PgProductStore, PgUserStore};

#[async_trait]
pub trait ProductStore: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    async fn ping(&self) -> Result<()>;

    async fn count(&self, filter: &ProductFilter) -> Result<u64>;

    /// Matching products in insertion order, after skipping `skip` of them.
    async fn find(&self, filter: &ProductFilter, limit: u64, skip: u64) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>>;

    async fn insert(&self, product: NewProduct) -> Result<Product>;

    /// Replaces the stored record with the same id and bumps `updated_at`.
    /// Fails with `NotFound` when the record is gone.
    async fn save(&self, product: Product) -> Result<Product>;

    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn insert(&self, user: NewUser) -> Result<User>;
}
