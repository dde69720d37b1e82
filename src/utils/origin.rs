// src/utils/origin.rs
use axum::http::{header, HeaderMap};

use super::validation::validate_host;

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        // proxies may append; the first hop is the client-facing one
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Origin the page was requested under, for links rendered on the server.
/// A configured public origin always wins.
pub fn resolve_origin(public_origin: Option<&str>, headers: &HeaderMap, port: u16) -> String {
    if let Some(origin) = public_origin {
        return origin.to_string();
    }

    let scheme = match header_str(headers, "x-forwarded-proto") {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    let host = header_str(headers, "x-forwarded-host")
        .or_else(|| header_str(headers, header::HOST.as_str()))
        .filter(|h| validate_host(h));

    match host {
        Some(host) => format!("{}://{}", scheme, host),
        None => format!("http://localhost:{}", port),
    }
}
