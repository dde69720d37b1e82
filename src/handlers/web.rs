// src/handlers/web.rs
use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode, Uri},
    response::Html,
};
use std::sync::Arc;

use crate::referral::{InboundReferral, ReferralCode};
use crate::templates::{self, landing::LinkCard};
use crate::utils::origin::resolve_origin;
use crate::AppState;

/// Query key the no-script "get referral link" form submits.
const GENERATE_PARAM: &str = "generate";

fn wants_generated_code(raw_query: Option<&str>) -> bool {
    raw_query.is_some_and(|query| {
        url::form_urlencoded::parse(query.as_bytes()).any(|(key, _)| key == GENERATE_PARAM)
    })
}

fn render_failed(err: askama::Error) -> StatusCode {
    tracing::error!("Template render failed: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, StatusCode> {
    let inbound = InboundReferral::from_query(query.as_deref());
    if let Some(referrer) = &inbound {
        tracing::debug!(
            site_format = ReferralCode::parse(referrer.as_str()).is_some(),
            "Inbound referral captured: {:?}",
            referrer.as_str()
        );
    }

    if wants_generated_code(query.as_deref()) {
        let origin = resolve_origin(
            state.config.public_origin.as_deref(),
            &headers,
            state.config.port,
        );
        let code = ReferralCode::generate();
        tracing::debug!("Generated referral code {} for {}", code, origin);

        let html = templates::landing::render(inbound.as_ref(), Some(LinkCard::new(&origin, &code)))
            .map_err(render_failed)?;
        return Ok(Html(html));
    }

    let cache_key = inbound
        .as_ref()
        .map(|r| r.as_str().to_string())
        .unwrap_or_default();

    if let Some(html) = state.cache.get_page(&cache_key).await {
        tracing::trace!("Landing page cache hit");
        return Ok(Html(html.to_string()));
    }

    tracing::trace!("Landing page cache miss");
    let html = templates::landing::render(inbound.as_ref(), None).map_err(render_failed)?;
    state.cache.set_page(cache_key, Arc::from(html.as_str())).await;

    Ok(Html(html))
}

pub async fn not_found(uri: Uri) -> Result<(StatusCode, Html<String>), StatusCode> {
    let html = templates::not_found::render(uri.path()).map_err(render_failed)?;
    Ok((StatusCode::NOT_FOUND, Html(html)))
}
