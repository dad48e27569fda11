use axum::extract::{FromRequest, FromRequestParts};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    utils::jwt::Claims,
};

/// `Json` whose rejections come back as `{ "message": ... }` bodies with
/// the rejection's own status.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

pub fn extract_user_id(claims: &Claims) -> Result<Uuid> {
    claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AppError::Unauthorized("Not authorized".to_string()))
}

pub fn parse_product_id(raw: &str) -> Result<Uuid> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::BadRequest("Product id is required".to_string()));
    }

    raw.parse::<Uuid>()
        .map_err(|_| AppError::BadRequest(format!("Invalid product id: {}", raw)))
}
