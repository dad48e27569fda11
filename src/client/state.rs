use crate::models::{Product, ProductPage, UserInfo};

use super::api::ApiClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLoginAction {
    Request,
    Success(UserInfo),
    Fail(String),
    Logout,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserLoginState {
    pub loading: bool,
    pub error: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl UserLoginState {
    /// Where the login screen sends a signed-in user, `None` while signed out.
    pub fn redirect(&self, search: &str) -> Option<String> {
        self.user_info.as_ref().map(|_| redirect_target(search))
    }
}

pub fn user_login_reducer(state: UserLoginState, action: UserLoginAction) -> UserLoginState {
    match action {
        UserLoginAction::Request => UserLoginState {
            loading: true,
            error: None,
            ..state
        },
        UserLoginAction::Success(user_info) => UserLoginState {
            loading: false,
            error: None,
            user_info: Some(user_info),
        },
        UserLoginAction::Fail(error) => UserLoginState {
            loading: false,
            error: Some(error),
            user_info: None,
        },
        UserLoginAction::Logout => UserLoginState::default(),
    }
}

/// Reads `redirect` out of a query string such as `?redirect=shipping`,
/// defaulting to `/`. The result is always a single-slash local path.
pub fn redirect_target(search: &str) -> String {
    let target = search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "redirect")
        .map(|(_, value)| value.trim().trim_start_matches(['/', '\\']))
        .unwrap_or_default();

    format!("/{}", target)
}

/// Runs a login round trip, folding each step through the reducer.
pub async fn login(
    client: &ApiClient,
    state: UserLoginState,
    email: &str,
    password: &str,
) -> UserLoginState {
    let state = user_login_reducer(state, UserLoginAction::Request);

    let action = match client.login(email, password).await {
        Ok(user_info) => UserLoginAction::Success(user_info),
        Err(e) => {
            tracing::debug!("Login failed: {}", e);
            UserLoginAction::Fail(e.message())
        }
    };

    user_login_reducer(state, action)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductListAction {
    Request,
    Success(ProductPage),
    Fail(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductListState {
    pub loading: bool,
    pub error: Option<String>,
    pub products: Vec<Product>,
    pub page: u64,
    pub pages: u64,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            products: Vec::new(),
            page: 1,
            pages: 0,
        }
    }
}

pub fn product_list_reducer(state: ProductListState, action: ProductListAction) -> ProductListState {
    match action {
        ProductListAction::Request => ProductListState {
            loading: true,
            error: None,
            ..state
        },
        ProductListAction::Success(page) => ProductListState {
            loading: false,
            error: None,
            products: page.products,
            page: page.page,
            pages: page.pages,
        },
        ProductListAction::Fail(error) => ProductListState {
            loading: false,
            error: Some(error),
            ..state
        },
    }
}

/// Loads one page of the catalog into the list state.
pub async fn list_products(
    client: &ApiClient,
    state: ProductListState,
    keyword: Option<&str>,
    page_number: Option<u64>,
) -> ProductListState {
    let state = product_list_reducer(state, ProductListAction::Request);

    let action = match client.list_products(keyword, page_number).await {
        Ok(page) => ProductListAction::Success(page),
        Err(e) => ProductListAction::Fail(e.message()),
    };

    product_list_reducer(state, action)
}
