#![allow(dead_code)]

use axum::{body::Body, http::Response};
use storefront::{
    AppState,
    config::{AuthConfig, CatalogConfig},
    models::{NewUser, User, UserRole},
    utils::jwt,
};

pub const PAGE_SIZE: u64 = 6;

pub fn auth() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-secret".to_string(),
        token_ttl_days: 1,
    }
}

pub fn state() -> AppState {
    AppState::in_memory(auth(), CatalogConfig { page_size: PAGE_SIZE })
}

/// Inserts a user with the given role and returns it with a signed token.
pub async fn user_with_token(state: &AppState, email: &str, role: UserRole) -> (User, String) {
    let user = state
        .users
        .insert(NewUser {
            name: email.split('@').next().unwrap_or(email).to_string(),
            email: email.to_string(),
            password_hash: bcrypt::hash("123123", 4).expect("hash"),
            role,
        })
        .await
        .expect("insert user");
    let token = jwt::generate_token(&state.auth, &user).expect("token");
    (user, token)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
