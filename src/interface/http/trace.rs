use axum::extract::MatchedPath;
use axum::http::{HeaderName, HeaderValue, Method, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, histogram};
use tracing::{Instrument, info, info_span};

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Identifier carried by every request and echoed back in `x-request-id`.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

/// Reuses the caller's `x-request-id` or mints one, and runs the request inside a span carrying it.
pub async fn trace_id_middleware(mut req: Request<axum::body::Body>, next: Next) -> Response {
    // Step 1: Reuse a client-provided id or generate a new one.
    let trace_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let trace_id = TraceId(trace_id);
    req.extensions_mut().insert(trace_id.clone());

    // Step 2: Run the request so use case spans nest under the request id.
    let span = info_span!("request", trace_id = %trace_id.0);
    let mut response = next.run(req).instrument(span).await;

    // Step 3: Echo the id.
    if let Ok(value) = HeaderValue::from_str(&trace_id.0) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "POST" => "POST",
        "PUT" => "PUT",
        "PATCH" => "PATCH",
        "DELETE" => "DELETE",
        "HEAD" => "HEAD",
        "OPTIONS" => "OPTIONS",
        _ => "OTHER",
    }
}

fn status_label(status: u16) -> &'static str {
    match status {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

/// Access log plus request counters, labelled by route template rather than raw path.
pub async fn request_log_middleware(req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    // `/api/v1/beers/:id` instead of one series per beer id.
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();
    let method_label = method_label(&method);
    let status_label = status_label(status);
    counter!(
        "http_requests_total",
        "method" => method_label,
        "route" => route.clone(),
        "status" => status_label
    )
    .increment(1);
    histogram!(
        "http_request_duration_ms",
        "method" => method_label,
        "route" => route,
        "status" => status_label
    )
    .record(latency_ms as f64);
    info!(
        method = %method,
        path = %path,
        status,
        latency_ms,
        "http_request"
    );

    response
}
