use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductFilter},
};

/// Escapes LIKE wildcards so the keyword is matched literally.
pub fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    if let Some(ref keyword) = filter.keyword {
        query.push(" WHERE name ILIKE ");
        query.push_bind(format!("%{}%", escape_like(keyword)));
    }
}

pub async fn count_products(pool: &PgPool, filter: &ProductFilter) -> Result<u64> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM products");
    push_filter(&mut query, filter);

    let count: i64 = query.build_query_scalar().fetch_one(pool).await?;

    Ok(count.max(0) as u64)
}

pub async fn find_products(
    pool: &PgPool,
    filter: &ProductFilter,
    limit: u64,
    skip: u64,
) -> Result<Vec<Product>> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM products");
    push_filter(&mut query, filter);

    query.push(" ORDER BY created_at ASC, id ASC LIMIT ");
    query.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
    query.push(" OFFSET ");
    query.push_bind(i64::try_from(skip).unwrap_or(i64::MAX));

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn create_product(pool: &PgPool, new: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (
            id, user_id, name, image, brand, category,
            description, price, count_in_stock
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.user_id)
    .bind(&new.name)
    .bind(&new.image)
    .bind(&new.brand)
    .bind(&new.category)
    .bind(&new.description)
    .bind(new.price)
    .bind(new.count_in_stock)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn save_product(pool: &PgPool, product: &Product) -> Result<Option<Product>> {
    let saved = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET
            name = $1,
            image = $2,
            brand = $3,
            category = $4,
            description = $5,
            price = $6,
            rating = $7,
            count_in_stock = $8,
            num_reviews = $9,
            updated_at = NOW()
        WHERE id = $10
        RETURNING *
        "#,
    )
    .bind(&product.name)
    .bind(&product.image)
    .bind(&product.brand)
    .bind(&product.category)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.rating)
    .bind(product.count_in_stock)
    .bind(product.num_reviews)
    .bind(product.id)
    .fetch_optional(pool)
    .await?;

    Ok(saved)
}

pub async fn delete_product(pool: &PgPool, id: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
