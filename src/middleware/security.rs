// src/middleware/security.rs
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::AppState;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self'; \
    style-src 'self' 'unsafe-inline'; \
    img-src 'self' data:; \
    connect-src 'self'; \
    frame-ancestors 'none'; \
    base-uri 'self'; \
    form-action 'self'";

// The page only needs clipboard writes for the copy button
const PERMISSIONS_POLICY: &str = "geolocation=(), microphone=(), camera=(), payment=(), \
    usb=(), magnetometer=(), gyroscope=(), accelerometer=(), clipboard-write=(self)";

const SUSPICIOUS_USER_AGENTS: [&str; 6] = ["sqlmap", "nikto", "masscan", "nmap", "havij", "acunetix"];

pub async fn security_headers(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );
    headers.insert(
        header::HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(PERMISSIONS_POLICY),
    );

    // Only meaningful behind HTTPS
    if state.config.enable_hsts {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    headers.remove(header::SERVER);

    response
}

/// Rejects scanner user agents and header values carrying CR/LF.
pub async fn attack_prevention(request: Request, next: Next) -> Result<Response, StatusCode> {
    let headers = request.headers();

    if let Some(ua_str) = headers
        .get(header::USER_AGENT)
        .and_then(|ua| ua.to_str().ok())
    {
        let ua_lower = ua_str.to_lowercase();
        if SUSPICIOUS_USER_AGENTS
            .iter()
            .any(|pattern| ua_lower.contains(pattern))
        {
            tracing::warn!("Suspicious user agent rejected: {}", ua_str);
            return Err(StatusCode::FORBIDDEN);
        }
    }

    for (name, value) in headers.iter() {
        if value.as_bytes().iter().any(|b| *b == b'\r' || *b == b'\n') {
            tracing::warn!("Header injection attempt detected in {}", name);
            return Err(StatusCode::BAD_REQUEST);
        }
    }

    Ok(next.run(request).await)
}
