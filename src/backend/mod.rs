mod cache;
pub mod config;
mod error;
pub mod relay;
mod telemetry;

pub use config::{ExplainConfig, LogFormat, ServerConfig};
pub use error::ServerError;

use error::{http_status_class, status_for};

use crate::explain::{ExplainError, ExplainRequest, ExplainResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use relay::Relay;
use serde::Serialize;
use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone)]
pub struct AppState {
    relay: Option<Arc<Relay>>,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub ok: bool,
    pub explain: bool,
}

pub async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env();
    telemetry::init(&config);

    let app = build_router(&config)?;
    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    tracing::info!(
        address = %bind_address,
        static_dir = %config.static_dir.display(),
        explain_enabled = config.explain.is_some(),
        "server_listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

/// Static site from `static_dir` with an `index.html` fallback, plus the relay.
pub fn build_router(config: &ServerConfig) -> Result<Router, ServerError> {
    let relay = config
        .explain
        .clone()
        .map(Relay::new)
        .transpose()?
        .map(Arc::new);
    let state = AppState { relay };

    let index = config.static_dir.join("index.html");
    let static_service = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    Ok(Router::new()
        .route("/api/explain", post(post_explain))
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        ok: true,
        explain: state.relay.is_some(),
    })
}

pub async fn post_explain(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ExplainRequest>, JsonRejection>,
) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(&headers);

    let Some(relay) = state.relay.as_ref() else {
        return explain_failure(&ExplainError::Disabled, &request_id, started_at);
    };

    let request = match body {
        Ok(Json(request)) => request,
        Err(_) => {
            return explain_failure(
                &ExplainError::Invalid("body must be a JSON publication"),
                &request_id,
                started_at,
            )
        }
    };
    if let Err(error) = request.validate() {
        return explain_failure(&error, &request_id, started_at);
    }

    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        year = request.year,
        "explain_request_start"
    );

    match relay.explain(&request, &request_id).await {
        Ok((text, decision)) => {
            tracing::info!(
                request_id = %request_id,
                cache = decision.as_str(),
                "explain_cache_decision"
            );
            tracing::info!(
                request_id = %request_id,
                status = StatusCode::OK.as_u16(),
                duration_ms = started_at.elapsed().as_millis() as u64,
                "explain_request_complete"
            );
            let mut headers = HeaderMap::new();
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
            response_with_request_id(
                StatusCode::OK,
                headers,
                Json(ExplainResponse::success(text)),
                &request_id,
            )
        }
        Err(error) => explain_failure(&error, &request_id, started_at),
    }
}

fn explain_failure(error: &ExplainError, request_id: &str, started_at: Instant) -> Response {
    let status = status_for(error);
    tracing::warn!(
        request_id = %request_id,
        status = status.as_u16(),
        status_class = http_status_class(status),
        error_class = error.error_class(),
        duration_ms = started_at.elapsed().as_millis() as u64,
        "explain_request_failed"
    );

    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response_with_request_id(
        status,
        headers,
        Json(ExplainResponse::failure(error)),
        request_id,
    )
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

fn response_with_request_id(
    status: StatusCode,
    mut headers: HeaderMap,
    payload: impl IntoResponse,
    request_id: &str,
) -> Response {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
    (status, headers, payload).into_response()
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("could not install the shutdown handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown_requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use serde_json::{json, Value};
    use std::{
        path::PathBuf,
        sync::atomic::AtomicUsize,
        time::Duration,
    };
    use tower::ServiceExt;
    use url::Url;

    fn base_config(static_dir: PathBuf) -> ServerConfig {
        ServerConfig {
            port: 0,
            static_dir,
            explain: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
        }
    }

    fn explain_config(upstream_url: Url) -> ExplainConfig {
        ExplainConfig {
            api_key: "test-key".to_string(),
            upstream_url,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(1),
            response_max_bytes: 4 * 1024,
            cache_ttl: Duration::from_secs(60),
            cache_max_entries: 8,
            max_concurrency: 2,
        }
    }

    /// Local stand-in for the generative endpoint. Counts calls and checks
    /// that the key travels as a header.
    async fn spawn_upstream(status: StatusCode, body: String) -> (Url, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let app = Router::new().route(
            "/generate",
            post(move |headers: HeaderMap| {
                let counter = counter.clone();
                let body = body.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let authorized = headers
                        .get("x-goog-api-key")
                        .and_then(|value| value.to_str().ok())
                        == Some("test-key");
                    if !authorized {
                        return (StatusCode::UNAUTHORIZED, String::new());
                    }
                    (status, body)
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind upstream");
        let address = listener.local_addr().expect("local address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let url = Url::parse(&format!("http://{address}/generate")).expect("valid URL");
        (url, calls)
    }

    fn explain_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/explain")
            .header(header::CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, "req-test")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    fn publication_body() -> Value {
        json!({
            "title": "Cryo-EM structure of a bacterial transporter",
            "authors": "M. Castellan, R. Ode",
            "journal": "Structure",
            "year": 2021
        })
    }

    async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("JSON body")
    }

    fn answer(text: &str) -> String {
        json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }).to_string()
    }

    #[tokio::test]
    async fn disabled_relay_answers_service_unavailable() {
        let app = build_router(&base_config(PathBuf::from("dist"))).expect("router builds");

        let response = app
            .oneshot(explain_request(publication_body()))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).map(|v| v.as_bytes()),
            Some(b"req-test".as_slice())
        );
        let body = read_json(response).await;
        assert_eq!(body["ok"], json!(false));
    }

    #[tokio::test]
    async fn invalid_bodies_are_rejected_before_calling_upstream() {
        let (url, calls) = spawn_upstream(StatusCode::OK, answer("unused")).await;
        let mut config = base_config(PathBuf::from("dist"));
        config.explain = Some(explain_config(url));
        let app = build_router(&config).expect("router builds");

        let response = app
            .clone()
            .oneshot(explain_request(json!({ "title": "missing fields" })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let mut blank = publication_body();
        blank["title"] = json!("   ");
        let response = app.oneshot(explain_request(blank)).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await["error"],
            json!("invalid request: title is required")
        );

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_answer_is_relayed_and_then_served_from_cache() {
        let (url, calls) =
            spawn_upstream(StatusCode::OK, answer("It shows how the pump moves drugs out."))
                .await;
        let mut config = base_config(PathBuf::from("dist"));
        config.explain = Some(explain_config(url));
        let app = build_router(&config).expect("router builds");

        let response = app
            .clone()
            .oneshot(explain_request(publication_body()))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({ "ok": true, "text": "It shows how the pump moves drugs out." })
        );

        let mut respaced = publication_body();
        respaced["title"] = json!("  CRYO-EM structure of a   bacterial transporter");
        let response = app.oneshot(explain_request(respaced)).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn upstream_error_status_maps_to_bad_gateway() {
        let (url, _) = spawn_upstream(StatusCode::TOO_MANY_REQUESTS, String::new()).await;
        let mut config = base_config(PathBuf::from("dist"));
        config.explain = Some(explain_config(url));
        let app = build_router(&config).expect("router builds");

        let response = app
            .oneshot(explain_request(publication_body()))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            read_json(response).await["error"],
            json!("explanation service answered with status 429")
        );
    }

    #[tokio::test]
    async fn oversized_upstream_body_is_rejected() {
        let (url, _) = spawn_upstream(StatusCode::OK, answer(&"x".repeat(8 * 1024))).await;
        let mut config = base_config(PathBuf::from("dist"));
        config.explain = Some(explain_config(url));
        let app = build_router(&config).expect("router builds");

        let response = app
            .oneshot(explain_request(publication_body()))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            read_json(response).await["error"],
            json!("explanation response was too large")
        );
    }

    #[tokio::test]
    async fn empty_upstream_answer_is_an_error() {
        let (url, _) = spawn_upstream(StatusCode::OK, json!({ "candidates": [] }).to_string()).await;
        let mut config = base_config(PathBuf::from("dist"));
        config.explain = Some(explain_config(url));
        let app = build_router(&config).expect("router builds");

        let response = app
            .oneshot(explain_request(publication_body()))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(read_json(response).await["ok"], json!(false));
    }

    #[tokio::test]
    async fn healthz_reports_relay_state() {
        let app = build_router(&base_config(PathBuf::from("dist"))).expect("router builds");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({ "ok": true, "explain": false }));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index_html() {
        let static_dir = std::env::temp_dir().join(format!("research-portfolio-{}", generate_request_id()));
        std::fs::create_dir_all(&static_dir).expect("temp dir");
        std::fs::write(static_dir.join("index.html"), "<div id=\"app\"></div>").expect("index");

        let app = build_router(&base_config(static_dir.clone())).expect("router builds");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/publications")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        assert_eq!(bytes.as_ref(), b"<div id=\"app\"></div>");

        let _ = std::fs::remove_dir_all(static_dir);
    }

    #[test]
    fn supplied_request_id_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");
        assert!(resolve_request_id(&HeaderMap::new()).starts_with("req-"));
    }
}
