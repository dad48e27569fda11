use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        MessageResponse, NewProduct, Product, ProductPage, ProductQuery, ProductUpdate, page_count,
        page_offset,
    },
    utils::{
        extractors::{AppJson, AppPath, AppQuery, extract_user_id, parse_product_id},
        jwt::Claims,
    },
};

fn not_found() -> AppError {
    AppError::NotFound("Product not found".to_string())
}

pub async fn list_products(
    State(state): State<AppState>,
    AppQuery(pairs): AppQuery<Vec<(String, String)>>,
) -> Result<Json<ProductPage>> {
    let params = ProductQuery::from_pairs(pairs);
    let page_size = state.catalog.page_size;
    let page = params.page();
    let filter = params.filter();

    let count = state.products.count(&filter).await?;
    let products = state
        .products
        .find(&filter, page_size, page_offset(page, page_size))
        .await?;

    Ok(Json(ProductPage {
        products,
        page,
        pages: page_count(count, page_size),
    }))
}

pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Product>> {
    let id = parse_product_id(&id)?;

    let product = state.products.find_by_id(id).await?.ok_or_else(not_found)?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<(StatusCode, Json<Product>)> {
    let user_id = extract_user_id(&claims)?;

    let product = state.products.insert(NewProduct::sample(user_id)).await?;
    tracing::info!("Product {} created by {}", product.id, claims.email);

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(payload): AppJson<ProductUpdate>,
) -> Result<Json<Product>> {
    let id = parse_product_id(&id)?;
    payload.validate()?;

    let mut product = state.products.find_by_id(id).await?.ok_or_else(not_found)?;
    payload.apply_to(&mut product);

    let updated = state.products.save(product).await?;
    tracing::info!("Product {} updated", updated.id);

    Ok(Json(updated))
}

pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_product_id(&id)?;

    if !state.products.delete_by_id(id).await? {
        return Err(not_found());
    }
    tracing::info!("Product {} removed", id);

    Ok(Json(MessageResponse {
        message: "Product removed".to_string(),
    }))
}
