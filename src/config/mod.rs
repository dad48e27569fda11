mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, CatalogConfig, CorsConfig, DatabaseConfig, ServerConfig, StoreBackend,
};
