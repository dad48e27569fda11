use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{AppConfig, AuthConfig, CatalogConfig, CorsConfig, StoreBackend},
    database,
    error::{AppError, Result},
    routes,
    store::{
        MemoryProductStore, MemoryUserStore, PgProductStore, PgUserStore, ProductStore, UserStore,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductStore>,
    pub users: Arc<dyn UserStore>,
    pub auth: Arc<AuthConfig>,
    pub catalog: CatalogConfig,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductStore>,
        users: Arc<dyn UserStore>,
        auth: AuthConfig,
        catalog: CatalogConfig,
    ) -> Self {
        Self {
            products,
            users,
            auth: Arc::new(auth),
            catalog,
        }
    }

    pub fn in_memory(auth: AuthConfig, catalog: CatalogConfig) -> Self {
        Self::new(
            Arc::new(MemoryProductStore::new()),
            Arc::new(MemoryUserStore::new()),
            auth,
            catalog,
        )
    }

    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let state = match config.store {
            StoreBackend::Postgres(ref db) => {
                let pool = database::create_pool(db).await?;
                Self::new(
                    Arc::new(PgProductStore::new(pool.clone())),
                    Arc::new(PgUserStore::new(pool)),
                    config.auth.clone(),
                    config.catalog,
                )
            }
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory store, data is lost on restart");
                Self::in_memory(config.auth.clone(), config.catalog)
            }
        };

        Ok(state)
    }
}

/// Routes bound to `state`, without the transport layers `build` adds.
pub fn router(state: AppState) -> Router {
    routes::create_router(state.clone()).with_state(state)
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let state = AppState::connect(config).await?;

    if config.seed_demo_data {
        database::seed_demo_data(
            state.products.as_ref(),
            state.users.as_ref(),
            bcrypt::DEFAULT_COST,
        )
        .await?;
    }

    let app = router(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors_layer(&config.cors)?)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .allow_origin(allowed_origins))
}
