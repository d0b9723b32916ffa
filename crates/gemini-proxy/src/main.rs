use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

/// Error phrase surfaced when the upstream provider cannot be reached.
/// Client-side classification keys on this exact text.
const UPSTREAM_FAILURE: &str = "Failed to call the AI service.";

const DEFAULT_UPSTREAM_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone)]
struct AppState {
    api_key: Option<String>,
    upstream_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

#[derive(Debug, Serialize)]
struct Health {
    status: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let addr = env::var("PROXY_ADDR").unwrap_or_else(|_| "127.0.0.1:8787".to_string());
    let state = build_state();

    if state.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; requests will fail with a configuration error");
    }

    let app = router(state);

    let addr: SocketAddr = addr.parse().expect("Invalid PROXY_ADDR");
    info!(%addr, "Gemini proxy listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

fn build_state() -> AppState {
    let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty());
    let upstream_url =
        env::var("GEMINI_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .expect("Failed to create HTTP client");

    AppState {
        api_key,
        upstream_url,
        client,
    }
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/gemini", post(generate))
        .with_state(state)
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// Relay a model-options document to the provider, attaching the
/// server-held API key. The response body is passed through verbatim.
async fn generate(State(state): State<AppState>, Json(mut payload): Json<Value>) -> Response {
    let Some(api_key) = state.api_key.as_deref() else {
        return error_response("Server configuration error", "GEMINI_API_KEY is not set");
    };

    let Some(model) = payload.get("model").and_then(|v| v.as_str()).map(String::from) else {
        return error_response("Invalid model options", "missing \"model\" field");
    };

    // The provider takes the model in the URL, not the body.
    if let Some(body) = payload.as_object_mut() {
        body.remove("model");
    }

    let url = format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        state.upstream_url, model, api_key
    );

    let upstream = match state.client.post(&url).json(&payload).send().await {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, model = %model, "Upstream request failed");
            return error_response(UPSTREAM_FAILURE, &err.to_string());
        }
    };

    let status = upstream.status();
    let body = upstream.text().await.unwrap_or_default();

    if !status.is_success() {
        warn!(status = status.as_u16(), model = %model, "Upstream returned an error");
        return error_response(UPSTREAM_FAILURE, &body);
    }

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

fn error_response(error: &str, details: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: error.to_string(),
            details: details.to_string(),
        }),
    )
        .into_response()
}
