//! Request body extraction for the auth endpoints.
//!
//! Clients post either JSON or urlencoded form fields; anything that fails to
//! parse is still answered with the `{success, msg}` envelope.

use axum::async_trait;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::app::dto::AuthResponse;

/// A body decoded as JSON when the content type says so, as a form otherwise.
#[derive(Debug, Clone)]
pub struct RequestBody<T>(pub T);

#[derive(Debug)]
pub enum BodyRejection {
    Json(JsonRejection),
    Form(FormRejection),
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::Json(r) => (r.status(), r.body_text()),
            Self::Form(r) => (r.status(), r.body_text()),
        };
        tracing::debug!(%status, "rejected request body: {msg}");
        (status, Json(AuthResponse::failure(msg))).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for RequestBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(BodyRejection::Json)?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(BodyRejection::Form)?;
            Ok(Self(value))
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("application/json"))
}
