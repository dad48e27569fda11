use std::{env, str::FromStr};

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreBackend,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,
    pub seed_demo_data: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub enum StoreBackend {
    Postgres(DatabaseConfig),
    Memory,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_days: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogConfig {
    pub page_size: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { page_size: 6 }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. `from_env` passes
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("STORE_BACKEND").as_deref().unwrap_or("postgres") {
            "postgres" => StoreBackend::Postgres(DatabaseConfig {
                url: lookup("DB_URL")
                    .ok_or_else(|| AppError::ConfigError("DB_URL not set".to_string()))?,
                max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", "20")?,
                acquire_timeout_secs: parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", "5")?,
            }),
            "memory" => StoreBackend::Memory,
            other => {
                return Err(AppError::ConfigError(format!(
                    "Unknown STORE_BACKEND value: {}",
                    other
                )))
            }
        };

        let page_size: u64 = parse_var(&lookup, "PAGE_SIZE", "6")?;
        if page_size == 0 {
            return Err(AppError::ConfigError(
                "PAGE_SIZE must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_var(&lookup, "PORT", "5000")?,
                max_body_size: parse_var(&lookup, "MAX_BODY_SIZE", "1048576")?,
            },
            store,
            cors: CorsConfig {
                allowed_origins: lookup("FRONTEND_URL")
                    .unwrap_or_else(|| "http://localhost:3000".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            auth: AuthConfig {
                jwt_secret: lookup("JWT_SECRET")
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| AppError::ConfigError("JWT_SECRET not set".to_string()))?,
                token_ttl_days: parse_var(&lookup, "JWT_TTL_DAYS", "30")?,
            },
            catalog: CatalogConfig { page_size },
            seed_demo_data: parse_var(&lookup, "SEED_DEMO_DATA", "false")?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid {} value", key)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn memory_backend_uses_defaults() {
        let config = config_from(&[("STORE_BACKEND", "memory"), ("JWT_SECRET", "s3cret")])
            .expect("config should load");

        assert!(matches!(config.store, StoreBackend::Memory));
        assert_eq!(config.catalog.page_size, 6);
        assert_eq!(config.auth.token_ttl_days, 30);
        assert_eq!(config.server_address(), "0.0.0.0:5000");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn postgres_backend_requires_db_url() {
        let err = config_from(&[("JWT_SECRET", "s3cret")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));

        let config = config_from(&[
            ("JWT_SECRET", "s3cret"),
            ("DB_URL", "postgres://localhost/shop"),
            ("DB_MAX_CONNECTIONS", "5"),
        ])
        .expect("config should load");
        match config.store {
            StoreBackend::Postgres(db) => {
                assert_eq!(db.url, "postgres://localhost/shop");
                assert_eq!(db.max_connections, 5);
                assert_eq!(db.acquire_timeout_secs, 5);
            }
            StoreBackend::Memory => panic!("expected postgres backend"),
        }
    }

    #[test]
    fn rejects_bad_values() {
        let base = [("STORE_BACKEND", "memory"), ("JWT_SECRET", "s3cret")];

        let mut zero_page = base.to_vec();
        zero_page.push(("PAGE_SIZE", "0"));
        assert!(config_from(&zero_page).is_err());

        let mut bad_port = base.to_vec();
        bad_port.push(("PORT", "eighty"));
        assert!(config_from(&bad_port).is_err());

        assert!(config_from(&[("STORE_BACKEND", "mongo"), ("JWT_SECRET", "x")]).is_err());
        assert!(config_from(&[("STORE_BACKEND", "memory")]).is_err());
    }

    #[test]
    fn splits_cors_origins() {
        let config = config_from(&[
            ("STORE_BACKEND", "memory"),
            ("JWT_SECRET", "s3cret"),
            ("FRONTEND_URL", "https://shop.example, https://admin.example,"),
            ("SEED_DEMO_DATA", "true"),
        ])
        .expect("config should load");

        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://shop.example", "https://admin.example"]
        );
        assert!(config.seed_demo_data);
    }
}
