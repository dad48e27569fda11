use axum::extract::State;
use axum::Json;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{LoginRequest, UserInfo},
    utils::{extractors::AppJson, jwt},
};

pub async fn login_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<UserInfo>> {
    let user = state
        .users
        .find_by_email(payload.email.trim())
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let is_valid = bcrypt::verify(&payload.password, &user.password)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

    if !is_valid {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = jwt::generate_token(&state.auth, &user)?;
    tracing::info!("User {} signed in", user.email);

    Ok(Json(UserInfo {
        id: user.id,
        is_admin: user.is_admin(),
        name: user.name,
        email: user.email,
        token,
    }))
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{AuthConfig, CatalogConfig},
        models::{NewUser, UserRole},
    };

    use super::*;

    async fn state_with_john() -> AppState {
        let state = AppState::in_memory(
            AuthConfig {
                jwt_secret: "s3cret".to_string(),
                token_ttl_days: 1,
            },
            CatalogConfig::default(),
        );
        state
            .users
            .insert(NewUser {
                name: "John Doe".to_string(),
                email: "john@doe.com".to_string(),
                password_hash: bcrypt::hash("123123", 4).unwrap(),
                role: UserRole::User,
            })
            .await
            .unwrap();
        state
    }

    fn credentials(email: &str, password: &str) -> AppJson<LoginRequest> {
        AppJson(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    #[tokio::test]
    async fn valid_credentials_return_user_info_with_token() {
        let state = state_with_john().await;

        let Json(info) = login_user(State(state.clone()), credentials("john@doe.com", "123123"))
            .await
            .expect("login should succeed");

        assert_eq!(info.email, "john@doe.com");
        assert!(!info.is_admin);
        let claims = jwt::verify_token(&state.auth, &info.token).unwrap();
        assert_eq!(claims.sub, info.id.to_string());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let state = state_with_john().await;

        let wrong_password =
            login_user(State(state.clone()), credentials("john@doe.com", "nope")).await;
        let unknown = login_user(State(state), credentials("jane@doe.com", "123123")).await;

        for result in [wrong_password, unknown] {
            match result {
                Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Invalid email or password"),
                other => panic!("expected unauthorized, got {:?}", other.map(|j| j.0)),
            }
        }
    }
}
