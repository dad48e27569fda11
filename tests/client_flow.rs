mod common;

use rust_decimal::Decimal;
use storefront::{
    AppState, app,
    client::{self, ApiClient, ClientError, ProductListState, UserLoginState},
    models::{ProductUpdate, UserRole},
};

use common::{state, user_with_token};

async fn serve(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app::router(state))
            .await
            .expect("test server");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn login_then_manage_catalog_through_the_client() {
    let state = state();
    user_with_token(&state, "admin@example.com", UserRole::Admin).await;
    let base_url = serve(state).await;
    let mut api = ApiClient::new(base_url);

    let login = client::login(&api, UserLoginState::default(), "admin@example.com", "123123").await;
    let info = login.user_info.clone().expect("signed in");
    assert!(info.is_admin);
    assert_eq!(login.redirect("?redirect=admin/productlist").as_deref(), Some("/admin/productlist"));

    api.set_token(Some(info.token));
    let created = api.create_product().await.expect("create");
    assert_eq!(created.user_id, info.id);

    let update = ProductUpdate {
        name: "Classic Oxford Shirt".to_string(),
        price: Decimal::new(4950, 2),
        description: "Cotton".to_string(),
        image: "/images/oxford.jpg".to_string(),
        brand: "Basics".to_string(),
        category: "Clothing".to_string(),
        count_in_stock: 12,
    };
    let updated = api.update_product(created.id, &update).await.expect("update");
    assert_eq!(updated.name, update.name);
    assert_eq!(updated.price, update.price);

    let list = client::list_products(&api, ProductListState::default(), Some("SHIRT"), None).await;
    assert_eq!(list.error, None);
    assert_eq!(list.products.len(), 1);
    assert_eq!(list.products[0].id, created.id);
    assert_eq!((list.page, list.pages), (1, 1));

    let ack = api.delete_product(created.id).await.expect("delete");
    assert_eq!(ack.message, "Product removed");

    match api.get_product(created.id).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product not found");
        }
        other => panic!("expected 404, got {:?}", other),
    }
}

#[tokio::test]
async fn failed_login_lands_in_state_error() {
    let state = state();
    user_with_token(&state, "john@doe.com", UserRole::User).await;
    let api = ApiClient::new(serve(state).await);

    let login = client::login(&api, UserLoginState::default(), "john@doe.com", "wrong").await;

    assert!(!login.loading);
    assert_eq!(login.user_info, None);
    assert_eq!(login.error.as_deref(), Some("Invalid email or password"));
    assert_eq!(login.redirect(""), None);
}

#[tokio::test]
async fn shopper_token_cannot_create_products() {
    let state = state();
    let (_, token) = user_with_token(&state, "john@doe.com", UserRole::User).await;
    let api = ApiClient::new(serve(state).await).with_token(token);

    match api.create_product().await {
        Err(ClientError::Api { status, .. }) => assert_eq!(status, 403),
        other => panic!("expected 403, got {:?}", other),
    }
}
