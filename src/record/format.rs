use crate::classify::UNKNOWN;
use crate::geo::client::GeoInfo;
use crate::models::visitor::{Classification, VisitorContext};

/// Referer sentinel: no header means the visitor typed the URL or came
/// from a search engine.
const NO_REFERER: &str = "Directo/Buscador";
const NOT_AVAILABLE: &str = "N/A";
const DIVIDER: &str = "==============================";

/// Render the fixed-layout visit block. Field order and sentinel text are
/// the compatibility contract with existing log consumers; deterministic
/// given its inputs (the two timestamps are passed in, not sampled here).
pub fn render(
    ctx: &VisitorContext,
    geo: Option<&GeoInfo>,
    labels: &Classification,
    server_time: &str,
    visitor_time: &str,
) -> String {
    let vpn = if geo.is_some_and(|g| g.proxy) { "Sí" } else { "No" };
    let country = geo.and_then(|g| g.country.as_deref()).unwrap_or(UNKNOWN);
    let country_code = geo.and_then(|g| g.country_code.as_deref()).unwrap_or("??");
    let region = geo.and_then(|g| g.region_name.as_deref()).unwrap_or(NOT_AVAILABLE);
    let city = geo.and_then(|g| g.city.as_deref()).unwrap_or(NOT_AVAILABLE);
    let isp = geo.and_then(|g| g.isp.as_deref()).unwrap_or(UNKNOWN);
    let org = geo.and_then(|g| g.org.as_deref()).unwrap_or(NOT_AVAILABLE);
    let user_agent = ctx.user_agent.as_deref().unwrap_or(UNKNOWN);
    let referer = ctx.referer.as_deref().unwrap_or(NO_REFERER);

    format!(
        "[Registro de Visita]\n\
         Fecha del Servidor: {server_time}\n\
         Fecha del Visitante: {visitor_time}\n\
         IP: {ip} | VPN/Proxy: {vpn} | Idioma: {language}\n\
         Ubicación: {country} ({country_code}) | {region}, {city}\n\
         ISP: {isp} | Organización: {org}\n\
         Sistema: {os} | Navegador: {browser} | Dispositivo: {device}\n\
         User-Agent: {user_agent}\n\
         URL: {host}{path}\n\
         Referencia: {referer}\n\
         {DIVIDER}\n",
        ip = ctx.ip,
        language = labels.language,
        os = labels.operating_system,
        browser = labels.browser,
        device = labels.device,
        host = ctx.host,
        path = ctx.path,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;

    const CHROME_WIN10_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
         AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    fn context() -> VisitorContext {
        VisitorContext {
            ip: "203.0.113.7".parse().unwrap(),
            user_agent: Some(CHROME_WIN10_UA.to_string()),
            accept_language: Some("es-AR,es;q=0.9".to_string()),
            referer: None,
            host: "example.com".to_string(),
            path: "/landing".to_string(),
        }
    }

    fn geo() -> GeoInfo {
        GeoInfo {
            country: Some("Argentina".to_string()),
            country_code: Some("AR".to_string()),
            region_name: Some("Buenos Aires".to_string()),
            city: Some("La Plata".to_string()),
            isp: Some("Telecom Argentina".to_string()),
            org: Some("Telecom".to_string()),
            timezone: Some("America/Argentina/Buenos_Aires".to_string()),
            proxy: false,
        }
    }

    #[test]
    fn test_full_record() {
        let ctx = context();
        let labels = classify::classify(&ctx);
        let block = render(
            &ctx,
            Some(&geo()),
            &labels,
            "2024-01-15 09:30:00 (-03:00)",
            "2024-01-15 09:30:00 (-03:00)",
        );

        assert!(block.starts_with("[Registro de Visita]\n"));
        assert!(block.contains("IP: 203.0.113.7 | VPN/Proxy: No | Idioma: Español"));
        assert!(block.contains("Ubicación: Argentina (AR) | Buenos Aires, La Plata"));
        assert!(block.contains("ISP: Telecom Argentina | Organización: Telecom"));
        assert!(block.contains("Sistema: Windows 10 | Navegador: Chrome | Dispositivo: Escritorio"));
        assert!(block.contains("URL: example.com/landing"));
        assert!(block.contains("Referencia: Directo/Buscador"));
        assert!(block.ends_with("==============================\n"));
    }

    #[test]
    fn test_absent_lookup_uses_sentinels() {
        let ctx = context();
        let labels = classify::classify(&ctx);
        let block = render(&ctx, None, &labels, "t1", "Desconocido");

        assert!(block.contains("VPN/Proxy: No"));
        assert!(block.contains("Ubicación: Desconocido (??) | N/A, N/A"));
        assert!(block.contains("ISP: Desconocido | Organización: N/A"));
        assert!(block.contains("Fecha del Visitante: Desconocido"));
    }

    #[test]
    fn test_proxy_flag() {
        let ctx = context();
        let labels = classify::classify(&ctx);
        let mut info = geo();
        info.proxy = true;
        let block = render(&ctx, Some(&info), &labels, "t1", "t2");
        assert!(block.contains("VPN/Proxy: Sí"));
    }

    #[test]
    fn test_missing_user_agent_and_referer() {
        let mut ctx = context();
        ctx.user_agent = None;
        ctx.referer = Some("https://buscador.example/q".to_string());
        let labels = classify::classify(&ctx);
        let block = render(&ctx, None, &labels, "t1", "t2");

        assert!(block.contains("User-Agent: Desconocido"));
        assert!(block.contains("Sistema: Desconocido | Navegador: Desconocido | Dispositivo: Escritorio"));
        assert!(block.contains("Referencia: https://buscador.example/q"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let ctx = context();
        let labels = classify::classify(&ctx);
        let a = render(&ctx, Some(&geo()), &labels, "t1", "t2");
        let b = render(&ctx, Some(&geo()), &labels, "t1", "t2");
        assert_eq!(a, b);
    }
}
