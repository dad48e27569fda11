mod health;
mod login;
mod products;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::{AppState, middleware::admin_middleware};

pub fn create_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/api/products", post(products::create_product))
        .route(
            "/api/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route_layer(middleware::from_fn_with_state(state, admin_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/products", get(products::list_products))
        .route("/api/products/{id}", get(products::get_product))
        .route("/api/users/login", post(login::login_user))
        .merge(admin)
}
