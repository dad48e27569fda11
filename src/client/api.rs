use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{LoginRequest, MessageResponse, Product, ProductPage, ProductUpdate, UserInfo};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message} (status {status})")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// The text a screen shows for this failure.
    pub fn message(&self) -> String {
        match self {
            ClientError::Http(e) => e.to_string(),
            ClientError::Api { message, .. } => message.clone(),
        }
    }
}

/// Typed wrapper over the storefront HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match self.token {
            Some(ref token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = match response.json::<MessageResponse>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo, ClientError> {
        let response = self
            .request(Method::POST, "/api/users/login")
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        Self::read(response).await
    }

    pub async fn list_products(
        &self,
        keyword: Option<&str>,
        page_number: Option<u64>,
    ) -> Result<ProductPage, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(keyword) = keyword {
            query.push(("keyword", keyword.to_string()));
        }
        if let Some(page) = page_number {
            query.push(("pageNumber", page.to_string()));
        }

        let response = self
            .request(Method::GET, "/api/products")
            .query(&query)
            .send()
            .await?;

        Self::read(response).await
    }

    pub async fn get_product(&self, id: Uuid) -> Result<Product, ClientError> {
        let response = self
            .request(Method::GET, &format!("/api/products/{}", id))
            .send()
            .await?;

        Self::read(response).await
    }

    pub async fn create_product(&self) -> Result<Product, ClientError> {
        let response = self.request(Method::POST, "/api/products").send().await?;

        Self::read(response).await
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        update: &ProductUpdate,
    ) -> Result<Product, ClientError> {
        let response = self
            .request(Method::PUT, &format!("/api/products/{}", id))
            .json(update)
            .send()
            .await?;

        Self::read(response).await
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let response = self
            .request(Method::DELETE, &format!("/api/products/{}", id))
            .send()
            .await?;

        Self::read(response).await
    }
}
