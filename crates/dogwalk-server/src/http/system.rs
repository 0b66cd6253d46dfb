use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::atomic::Ordering;

use crate::metrics::render_metrics;
use crate::{AppState, CRATE_NAME};

pub(crate) async fn landing_handler(State(state): State<AppState>) -> Response {
    let registry = state.registry.read().await;
    let mut cities = String::new();
    for city in &registry.cities {
        cities.push_str(&format!(
            "<li><code>{}</code> - <a href=\"/walker?cityId={}\">walkers</a></li>",
            city.name,
            city.id.get()
        ));
    }
    drop(registry);
    if cities.is_empty() {
        cities.push_str("<li>No cities registered yet.</li>");
    }
    let html = format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Dogwalk</title></head><body>\
<h1>Dogwalk Registry</h1>\
<p>Version: <code>{}</code></p>\
<h2>Cities</h2><ul>{}</ul>\
<h2>Example Requests</h2>\
<ul>\
<li><a href=\"/city\">/city</a></li>\
<li><a href=\"/dog\">/dog</a></li>\
<li><a href=\"/walker\">/walker</a></li>\
<li><a href=\"/walker?cityId=1\">/walker?cityId=1</a></li>\
<li><a href=\"/healthz\">/healthz</a> <a href=\"/readyz\">/readyz</a> \
<a href=\"/version\">/version</a> <a href=\"/metrics\">/metrics</a></li>\
</ul>\
</body></html>",
        env!("CARGO_PKG_VERSION"),
        cities
    );
    let mut resp = Response::new(Body::from(html));
    *resp.status_mut() = StatusCode::OK;
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    resp
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.ready.load(Ordering::Relaxed) && state.accepting_requests.load(Ordering::Relaxed) {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not-ready")
    }
}

pub(crate) async fn version_handler() -> impl IntoResponse {
    let payload = json!({
        "name": CRATE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    });
    let mut response = Json(payload).into_response();
    if let Ok(value) = HeaderValue::from_str("public, max-age=30") {
        response.headers_mut().insert("cache-control", value);
    }
    response
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, render_metrics(&state).await)
}
