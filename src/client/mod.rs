//! Storefront client pieces: the HTTP client the screens call and the state
//! containers they render from. State is passed in and returned explicitly;
//! each container has a pure reducer over its action enum.

mod api;
mod state;

pub use api::{ApiClient, ClientError};
pub use state::{
    list_products, login, product_list_reducer, redirect_target, user_login_reducer,
    ProductListAction, ProductListState, UserLoginAction, UserLoginState,
};
