use std::net::IpAddr;

/// Everything the inbound request tells us about a visitor.
/// Built once per request, immutable afterwards, discarded once the
/// record is written.
#[derive(Debug, Clone)]
pub struct VisitorContext {
    /// Resolved client address (proxy headers first, then the socket peer).
    pub ip: IpAddr,

    pub user_agent: Option<String>,

    pub accept_language: Option<String>,

    pub referer: Option<String>,

    pub host: String,

    pub path: String,
}

/// Human-readable labels derived from the raw request strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub operating_system: &'static str,
    pub browser: &'static str,
    pub device: &'static str,
    pub language: String,
}
