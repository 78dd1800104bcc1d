use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tokio::task::JoinError;

use orgdesk_auth::{AuthError, AuthService, LoginRequest, RegistrationRequest, Token};

use crate::app::dto::{AuthResponse, CheckStateResponse, LOGGED_IN_MSG, REGISTERED_MSG};
use crate::app::errors;
use crate::app::extract::RequestBody;
use crate::context::PrincipalContext;
use crate::middleware::{self, AuthState};

/// `/register`, `/login` and the token-guarded `/check-state`.
pub fn router(auth: Arc<AuthService>) -> Router {
    let guarded = Router::new()
        .route("/check-state", get(check_state))
        .layer(axum::middleware::from_fn_with_state(
            AuthState { auth: auth.clone() },
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(guarded)
        .layer(Extension(auth))
}

pub async fn register(
    Extension(auth): Extension<Arc<AuthService>>,
    RequestBody(request): RequestBody<RegistrationRequest>,
) -> Response {
    // Password hashing is CPU-bound; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || auth.register(&request, Utc::now())).await;
    token_response(result, REGISTERED_MSG)
}

pub async fn login(
    Extension(auth): Extension<Arc<AuthService>>,
    RequestBody(request): RequestBody<LoginRequest>,
) -> Response {
    let result = tokio::task::spawn_blocking(move || auth.login(&request, Utc::now())).await;
    token_response(result, LOGGED_IN_MSG)
}

pub async fn check_state(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    Json(CheckStateResponse::authorized(principal.claims()))
}

fn token_response(result: Result<Result<Token, AuthError>, JoinError>, msg: &str) -> Response {
    match result {
        Ok(Ok(token)) => Json(AuthResponse::with_token(msg, token.into_string())).into_response(),
        Ok(Err(e)) => errors::auth_error_to_response(e),
        Err(e) => {
            tracing::error!("auth task failed: {e}");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal error")
        }
    }
}

#[cfg(test)]
mod tests {
    use argon2::Params;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use orgdesk_auth::{Argon2PasswordHasher, AuthConfig};
    use orgdesk_infra::InMemoryCredentialStore;

    use super::*;
    use crate::app::build_app_with;

    fn app() -> Router {
        let config = AuthConfig::new("route-secret").unwrap();
        let params = Params::new(Params::MIN_M_COST, 1, 1, None).unwrap();
        let service = AuthService::new(
            &config,
            Arc::new(InMemoryCredentialStore::new()),
            Arc::new(Argon2PasswordHasher::with_params(params)),
        );
        build_app_with(Arc::new(service))
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, req).await
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn john() -> Value {
        json!({
            "email": "jonhdoe@test.com",
            "password": "12345678",
            "first_name": "John",
            "last_name": "Doe",
        })
    }

    #[tokio::test]
    async fn register_returns_token() {
        let app = app();
        let (status, body) = post_json(&app, "/api/auth/register", john()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["msg"], "You are successfully registered");
        assert!(!body["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_body_reports_missing_email() {
        let app = app();
        let (status, body) = post_json(&app, "/api/auth/register", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["msg"], "Email is needed");
        assert!(body.get("token").is_none());
    }

    async fn post_raw(
        app: &Router,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method("POST").uri(uri);
        if let Some(ct) = content_type {
            req = req.header("content-type", ct);
        }
        send(app, req.body(Body::from(body.to_string())).unwrap()).await
    }

    #[tokio::test]
    async fn form_encoded_register_and_login_are_accepted() {
        let app = app();
        let form = "application/x-www-form-urlencoded";
        let (status, body) = post_raw(
            &app,
            "/api/auth/register",
            Some(form),
            "email=jonhdoe%40test.com&password=12345678&first_name=John&last_name=Doe",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["msg"], "You are successfully registered");

        let (_, body) = post_raw(
            &app,
            "/api/auth/login",
            Some(form),
            "email=jonhdoe%40test.com&password=12345678",
        )
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["msg"], "You are successfully logged in");
    }

    #[tokio::test]
    async fn form_encoded_missing_field_goes_through_validation() {
        let app = app();
        let (status, body) = post_raw(
            &app,
            "/api/auth/register",
            Some("application/x-www-form-urlencoded"),
            "email=jonhdoe%40test.com&first_name=John&last_name=Doe",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["msg"], "Password is needed");
    }

    #[tokio::test]
    async fn wrong_typed_field_keeps_the_envelope() {
        let app = app();
        let (status, body) = post_json(&app, "/api/auth/register", json!({ "email": 123 })).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert!(!body["msg"].as_str().unwrap().is_empty());
        assert!(body.get("token").is_none());
    }

    #[tokio::test]
    async fn unparseable_bodies_keep_the_envelope() {
        let app = app();
        let cases = [
            (None, ""),
            (Some("text/plain"), "email=jonhdoe@test.com"),
            (Some("application/json"), "{not json"),
        ];
        for (content_type, raw) in cases {
            let (status, body) = post_raw(&app, "/api/auth/login", content_type, raw).await;
            assert!(status.is_client_error(), "{content_type:?}: {status}");
            assert_eq!(body["success"], false, "{content_type:?}");
            assert!(body["msg"].is_string(), "{content_type:?}");
        }
    }

    #[tokio::test]
    async fn login_then_check_state_with_custom_header() {
        let app = app();
        post_json(&app, "/api/auth/register", john()).await;

        let (_, body) = post_json(
            &app,
            "/api/auth/login",
            json!({ "email": "jonhdoe@test.com", "password": "12345678" }),
        )
        .await;
        assert_eq!(body["msg"], "You are successfully logged in");
        let token = body["token"].as_str().unwrap().to_string();

        let req = Request::builder()
            .uri("/api/auth/check-state")
            .header("x-access-token", token)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["msg"], "You're authorized");
        assert_eq!(body["decoded_token"]["email"], "jonhdoe@test.com");
        assert_eq!(body["decoded_token"]["name"], "John Doe");
        assert_eq!(body["decoded_token"]["id"], 1);
        assert_eq!(body["decoded_token"]["role"], "member");
        assert_eq!(body["decoded_token"]["org_role"], "member");
    }

    #[tokio::test]
    async fn check_state_without_token_is_not_authorized() {
        let app = app();
        let req = Request::builder()
            .uri("/api/auth/check-state")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["msg"], "Not authorized");
    }
}
