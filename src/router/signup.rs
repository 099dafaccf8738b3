//! `POST /signup` transport mapping.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use crate::controller::{HttpResponse, SignUpController, SignupRequest};

/// Handler to create an account.
///
/// The body is parsed as JSON whatever the `Content-Type` header says. A
/// body that is not a JSON object is handled as an empty one, so the caller
/// still gets an envelope.
///
/// On success the body carries the stored account without its encrypted
/// password. The credential stays in [`HttpResponse`] for in-process
/// callers and never crosses the transport.
pub async fn handler(
    State(controller): State<Arc<SignUpController>>,
    payload: Bytes,
) -> HttpResponse {
    let body = match serde_json::from_slice::<Map<String, Value>>(&payload) {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(error = %err, "unreadable sign up body");
            Map::new()
        },
    };

    controller.handle(SignupRequest::new(body)).await
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::Method;
    use http_body_util::BodyExt;
    use serde_json::json;

    use super::*;
    use crate::{app, make_request, test_state};

    async fn send(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
        let response = make_request(app, Method::POST, "/signup", body).await;
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn valid_body() -> Value {
        json!({
            "name": "jhondoe",
            "email": "jhondoe@mail.com",
            "password": "passworld",
            "password_confirmation": "passworld",
        })
    }

    #[tokio::test]
    async fn test_signup_handler() {
        let (state, repo) = test_state();

        let (status, body) = send(app(state), valid_body().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let id = body["id"].as_str().unwrap();
        assert!(!id.is_empty());
        assert_eq!(body["name"], "jhondoe");
        assert_eq!(body["email"], "jhondoe@mail.com");
        assert!(body.get("password").is_none());
        assert!(body["created_at"].is_string());
        assert_eq!(body["created_at"], body["updated_at"]);

        let stored = repo.get(id).await.unwrap();
        assert!(stored.password.starts_with("$argon2id$"));
        assert_ne!(stored.password, "passworld");
    }

    #[tokio::test]
    async fn test_two_signups_create_two_accounts() {
        let (state, repo) = test_state();

        let (_, first) =
            send(app(state.clone()), valid_body().to_string()).await;
        let (_, second) = send(app(state), valid_body().to_string()).await;

        assert_ne!(first["id"], second["id"]);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_missing_param() {
        let (state, repo) = test_state();

        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("name");
        let (status, body) = send(app(state), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": "MissingParamError",
                "param": "name",
                "message": "missing param: name",
            })
        );
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let (state, repo) = test_state();

        let mut body = valid_body();
        body["email"] = json!("invalid_email");
        let (status, body) = send(app(state), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "InvalidParamError");
        assert_eq!(body["param"], "email");
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_password_confirmation_mismatch() {
        let (state, _) = test_state();

        let mut body = valid_body();
        body["password_confirmation"] = json!("invalid_password");
        let (status, body) = send(app(state), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "InvalidParamError");
        assert_eq!(body["param"], "password_confirmation");
    }

    #[tokio::test]
    async fn test_signup_without_content_type() {
        use axum::extract::Request;
        use tower::util::ServiceExt;

        let (state, repo) = test_state();

        let response = app(state)
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/signup")
                    .body(Body::from(valid_body().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["email"], "jhondoe@mail.com");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_malformed_body_still_gets_envelope() {
        let (state, _) = test_state();

        let (status, body) = send(app(state.clone()), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "MissingParamError");
        assert_eq!(body["param"], "email");

        let (status, body) = send(app(state), "[1, 2, 3]").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["param"], "email");
    }
}
