//! Account registration API: validates sign up requests, hashes the
//! password and persists the account.

#![forbid(unsafe_code)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
mod router;
pub mod telemetry;

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::FromRef;
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Router, middleware as AxumMiddleware};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};

use crate::adapters::outbound::clock::SystemClock;
use crate::adapters::outbound::crypto::Argon2Encrypter;
use crate::adapters::outbound::email::ValidatorEmailValidator;
use crate::adapters::outbound::persistence::{
    InMemoryAccountRepository, PgAccountRepository, postgres,
};
use crate::adapters::outbound::telemetry::TracingTelemetry;
use crate::application::ports::outbound::AddAccountRepository;
use crate::application::usecases::DbAddAccount;
use crate::controller::SignUpController;
use crate::controller::response::server_error;
use crate::error::{Result, ServerError};

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    body: impl Into<axum::body::Body>,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// In-memory state with cheap argon2 parameters.
#[cfg(test)]
pub fn test_state() -> (AppState, InMemoryAccountRepository) {
    let mut config = config::Configuration::default();
    config.name = "test".into();
    config.argon2 = Some(config::Argon2 {
        memory_cost: 8,
        iterations: 1,
        parallelism: 1,
        hash_length: 32,
    });
    let repo = InMemoryAccountRepository::new();
    let encrypter = Argon2Encrypter::new(config.argon2.clone()).unwrap();

    let state = AppState {
        signup: signup_controller(encrypter, Box::new(repo.clone())),
        config: Arc::new(config),
        metrics: None,
    };

    (state, repo)
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub signup: Arc<SignUpController>,
    pub metrics: Option<PrometheusHandle>,
}

impl FromRef<AppState> for Arc<config::Configuration> {
    fn from_ref(state: &AppState) -> Arc<config::Configuration> {
        Arc::clone(&state.config)
    }
}

impl FromRef<AppState> for Arc<SignUpController> {
    fn from_ref(state: &AppState) -> Arc<SignUpController> {
        Arc::clone(&state.signup)
    }
}

impl FromRef<AppState> for Option<PrometheusHandle> {
    fn from_ref(state: &AppState) -> Option<PrometheusHandle> {
        state.metrics.clone()
    }
}

/// Panics below the router still answer with the server error envelope.
fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked, server returned 500 status");
    server_error().into_response()
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .on_body_chunk(|chunk: &Bytes, latency: Duration, _span: &tracing::Span| {
                    tracing::trace!(size_bytes = chunk.len(), latency = ?latency, "sending body chunk")
                })
                .make_span_with(DefaultMakeSpan::new().include_headers(true).level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().include_headers(true).latency_unit(LatencyUnit::Micros)),
        )
        // Set a timeout.
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(10)))
        // Remove senstive headers from trace.
        .layer(SetSensitiveHeadersLayer::new([header::AUTHORIZATION, header::COOKIE]))
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(cors::Any),
        )
        .layer(CatchPanicLayer::custom(handle_panic));

    Router::new()
        // `GET /status.json` goes to `status`.
        .route("/status.json", get(router::status::status))
        // `GET /metrics` goes to Prometheus exposition.
        .route("/metrics", get(router::metrics::handler))
        // `POST /signup` goes to `signup`.
        .route("/signup", post(router::signup::handler))
        .with_state(state)
        .route_layer(AxumMiddleware::from_fn(telemetry::track))
        .layer(middleware)
}

/// Wire the sign up pipeline around an encrypter and a repository.
fn signup_controller(
    encrypter: Argon2Encrypter,
    account_repo: Box<dyn AddAccountRepository>,
) -> Arc<SignUpController> {
    let add_account = DbAddAccount::new(
        Box::new(encrypter),
        account_repo,
        Box::new(SystemClock::new()),
        Box::new(TracingTelemetry::new()),
    );

    Arc::new(SignUpController::new(
        Box::new(ValidatorEmailValidator::new()),
        Box::new(add_account),
    ))
}

/// Initialize the application state.
pub async fn initialize_state(
    config: Arc<config::Configuration>,
    metrics: Option<PrometheusHandle>,
) -> Result<AppState> {
    let account_repo: Box<dyn AddAccountRepository> = match config.postgres {
        Some(ref cfg) => {
            let pool = postgres::connect(
                &cfg.address,
                cfg.username.as_deref().unwrap_or(postgres::DEFAULT_CREDENTIALS),
                cfg.password.as_deref().unwrap_or(postgres::DEFAULT_CREDENTIALS),
                cfg.database.as_deref().unwrap_or(postgres::DEFAULT_DATABASE_NAME),
                cfg.pool_size.unwrap_or(postgres::DEFAULT_POOL_SIZE),
            )
            .await?;

            // execute migrations scripts on start.
            sqlx::migrate!().run(&pool).await?;

            Box::new(PgAccountRepository::new(pool))
        },
        None => {
            tracing::warn!(
                "missing `postgres` entry on configuration, accounts are kept in memory"
            );
            Box::new(InMemoryAccountRepository::new())
        },
    };

    let encrypter = Argon2Encrypter::new(config.argon2.clone())
        .map_err(ServerError::Crypto)?;

    Ok(AppState {
        signup: signup_controller(encrypter, account_repo),
        config,
        metrics,
    })
}
