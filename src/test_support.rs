use std::sync::{Mutex, MutexGuard, OnceLock};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    Router,
};

use crate::api;
use crate::core::{config::Settings, state::AppState};
use crate::services::gemini::GeminiService;

/// Serializes tests that mutate process environment variables.
pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(|err| err.into_inner())
}

pub(crate) fn set_test_env() {
    dotenvy::dotenv().ok();

    std::env::set_var("QUIZFORGE_ENV", "test");
    std::env::set_var("QUIZFORGE_STRICT_CONFIG", "0");
    std::env::set_var("GOOGLE_API_KEY", "test-key");
    std::env::set_var("PROMETHEUS_ENABLED", "0");
    std::env::remove_var("API_PREFIX");
    std::env::remove_var("PROJECT_NAME");
    std::env::remove_var("S3_ENDPOINT");
    std::env::remove_var("S3_ACCESS_KEY");
    std::env::remove_var("S3_SECRET_KEY");
    std::env::remove_var("S3_BUCKET");
    std::env::remove_var("S3_REGION");
    std::env::set_var("AWS_EC2_METADATA_DISABLED", "true");
}

/// State backed by a lazy pool; handlers that reach the database will fail,
/// so only pre-database paths are exercised against it.
pub(crate) fn build_state(settings: Settings) -> AppState {
    let db = sqlx::PgPool::connect_lazy(&settings.database().database_url()).expect("lazy pool");
    let gemini = GeminiService::from_settings(&settings).expect("gemini service");
    AppState::new(settings, db, None, gemini)
}

pub(crate) fn test_app() -> Router {
    let settings = Settings::load().expect("settings");
    api::router::router(build_state(settings))
}

pub(crate) fn json_request(
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(body) = body {
        let bytes = serde_json::to_vec(&body).expect("serialize body");
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bytes))
            .expect("request body")
    } else {
        builder.body(Body::empty()).expect("request body")
    }
}

pub(crate) fn multipart_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let boundary = "quizforge-test-boundary";
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
        .body(Body::from(body))
        .expect("request body")
}

pub(crate) async fn read_json(response: axum::response::Response<Body>) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("response body");
    serde_json::from_slice(&body).unwrap_or_else(|err| {
        let body_text = String::from_utf8_lossy(&body);
        panic!("json parse: {err}; body: {body_text}");
    })
}
