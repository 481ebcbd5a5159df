use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tracing::{error, info};

use crate::classify;
use crate::config::settings::Settings;
use crate::geo::client::GeoClient;
use crate::record::format;
use crate::record::sink::VisitLog;
use crate::web::context;

/// Shared state for the visit handler.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub geo: Arc<GeoClient>,
    pub visit_log: Arc<VisitLog>,
    pub server_tz: chrono_tz::Tz,
}

/// Record one visit: read the request context, enrich it with the geo
/// lookup, classify, append the rendered block, and answer. The geo lookup
/// is best-effort; only a failed append fails the request.
pub async fn record_visit(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    uri: Uri,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    let ctx = context::build(&headers, peer.ip(), uri.path());

    let geo = state.geo.lookup(ctx.ip).await;

    let labels = classify::classify(&ctx);
    let visitor_time =
        classify::local_time::visitor_local_time(geo.as_ref().and_then(|g| g.timezone.as_deref()));
    let server_time = classify::local_time::zone_now(state.server_tz);

    let block = format::render(&ctx, geo.as_ref(), &labels, &server_time, &visitor_time);

    if let Err(e) = state.visit_log.append(&block) {
        error!(error = %e, "Failed to append visit record");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    info!(
        ip = %ctx.ip,
        os = labels.operating_system,
        browser = labels.browser,
        device = labels.device,
        "Visit recorded"
    );

    if has_param(query.as_deref(), &state.settings.server.debug_param) {
        let body = format!("=== DATOS RECOLECTADOS ===\n{block}");
        return (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response();
    }

    StatusCode::NO_CONTENT.into_response()
}

/// True when the parameter appears anywhere in the query string, with or
/// without a value.
fn has_param(query: Option<&str>, param: &str) -> bool {
    let Some(q) = query else { return false };
    q.split('&')
        .any(|pair| pair.split('=').next().unwrap_or("") == param)
}
