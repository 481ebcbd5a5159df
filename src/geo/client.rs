use std::net::IpAddr;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::settings::GeoConfig;

/// Fields requested from the geolocation API. `message` only appears on
/// failed lookups and carries the reason.
const FIELDS: &str = "status,message,country,countryCode,regionName,city,isp,timezone,proxy,org";

/// Location and network metadata for one IP, as returned by the
/// ip-api.com JSON endpoint. Every field can be absent; consumers map
/// absence to their own sentinel text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoInfo {
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
    pub org: Option<String>,
    pub timezone: Option<String>,
    #[serde(default)]
    pub proxy: bool,
}

#[derive(Debug, Deserialize)]
struct GeoPayload {
    status: String,
    message: Option<String>,
    #[serde(flatten)]
    info: GeoInfo,
}

/// Client for the external IP-geolocation service.
pub struct GeoClient {
    base_url: String,
    timeout: Duration,
}

impl GeoClient {
    pub fn new(config: &GeoConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    /// Best-effort lookup of one visitor IP. Any failure — network error,
    /// timeout, HTTP error, malformed payload, or a non-success API status —
    /// degrades to `None`; the visit is still recorded without geo data.
    pub async fn lookup(&self, ip: IpAddr) -> Option<GeoInfo> {
        let url = format!("{}/json/{}?fields={}", self.base_url, ip, FIELDS);

        let client: Client<HttpConnector, Full<Bytes>> =
            Client::builder(TokioExecutor::new()).build_http();

        let req = match hyper::Request::builder()
            .method(hyper::Method::GET)
            .uri(&url)
            .body(Full::new(Bytes::new()))
        {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Failed to build geo lookup request");
                return None;
            }
        };

        let resp = match tokio::time::timeout(self.timeout, client.request(req)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                warn!(ip = %ip, error = %e, "Geo lookup failed");
                return None;
            }
            Err(_) => {
                warn!(ip = %ip, "Geo lookup timed out");
                return None;
            }
        };

        if !resp.status().is_success() {
            warn!(ip = %ip, status = resp.status().as_u16(), "Geo lookup returned HTTP error");
            return None;
        }

        let body = match resp.into_body().collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                warn!(ip = %ip, error = %e, "Failed to read geo lookup response");
                return None;
            }
        };

        decode(ip, &body)
    }
}

/// Accept the payload only when the API reports `status == "success"`.
fn decode(ip: IpAddr, body: &[u8]) -> Option<GeoInfo> {
    let payload: GeoPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => {
            warn!(ip = %ip, error = %e, "Malformed geo lookup payload");
            return None;
        }
    };

    if payload.status != "success" {
        debug!(
            ip = %ip,
            message = payload.message.as_deref().unwrap_or("-"),
            "Geo lookup unsuccessful"
        );
        return None;
    }

    Some(payload.info)
}
