use std::net::IpAddr;

use http::HeaderMap;

use crate::models::visitor::VisitorContext;

/// Resolve the visitor's IP: `Client-IP` header, then the left-most
/// `X-Forwarded-For` entry, then the socket peer. The headers are
/// informative but spoofable; the peer address is the fallback of record.
pub fn client_ip(headers: &HeaderMap, peer: IpAddr) -> IpAddr {
    if let Some(val) = header_str(headers, "client-ip") {
        if let Ok(ip) = val.parse::<IpAddr>() {
            return ip;
        }
    }

    if let Some(xff) = header_str(headers, "x-forwarded-for") {
        if let Some(first) = xff.split(',').next() {
            if let Ok(ip) = first.trim().parse::<IpAddr>() {
                return ip;
            }
        }
    }

    peer
}

/// Build the request-scoped visitor context from the inbound headers.
pub fn build(headers: &HeaderMap, peer: IpAddr, path: &str) -> VisitorContext {
    VisitorContext {
        ip: client_ip(headers, peer),
        user_agent: header_str(headers, "user-agent").map(str::to_string),
        accept_language: header_str(headers, "accept-language").map(str::to_string),
        referer: header_str(headers, "referer").map(str::to_string),
        host: header_str(headers, "host").unwrap_or_default().to_string(),
        path: path.to_string(),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer() -> IpAddr {
        "198.51.100.1".parse().unwrap()
    }

    #[test]
    fn test_client_ip_header_has_priority() {
        let mut headers = HeaderMap::new();
        headers.insert("client-ip", "203.0.113.9".parse().unwrap());
        headers.insert("x-forwarded-for", "203.0.113.10".parse().unwrap());
        assert_eq!(client_ip(&headers, peer()), "203.0.113.9".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_forwarded_for_takes_left_most_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            "203.0.113.10, 198.51.100.50, 10.0.0.1".parse().unwrap(),
        );
        assert_eq!(client_ip(&headers, peer()), "203.0.113.10".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_falls_back_to_peer() {
        assert_eq!(client_ip(&HeaderMap::new(), peer()), peer());

        // Garbage in the headers is ignored, not an error.
        let mut headers = HeaderMap::new();
        headers.insert("client-ip", "not-an-ip".parse().unwrap());
        headers.insert("x-forwarded-for", "also, not, ips".parse().unwrap());
        assert_eq!(client_ip(&headers, peer()), peer());
    }

    #[test]
    fn test_build_context() {
        let mut headers = HeaderMap::new();
        headers.insert("user-agent", "Mozilla/5.0".parse().unwrap());
        headers.insert("accept-language", "es-AR".parse().unwrap());
        headers.insert("host", "example.com".parse().unwrap());

        let ctx = build(&headers, peer(), "/inicio");
        assert_eq!(ctx.ip, peer());
        assert_eq!(ctx.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(ctx.accept_language.as_deref(), Some("es-AR"));
        assert_eq!(ctx.referer, None);
        assert_eq!(ctx.host, "example.com");
        assert_eq!(ctx.path, "/inicio");
    }

    #[test]
    fn test_empty_headers_become_none() {
        let mut headers = HeaderMap::new();
        headers.insert("user-agent", "".parse().unwrap());
        let ctx = build(&headers, peer(), "/");
        assert_eq!(ctx.user_agent, None);
        assert_eq!(ctx.host, "");
    }
}
