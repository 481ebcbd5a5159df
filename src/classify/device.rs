/// Device tiers, evaluated in this order; the first tier with a matching
/// token decides, so a string carrying both mobile and TV tokens is Móvil.
const MOBILE: &[&str] = &["mobile", "android", "iphone", "ipad", "ipod", "windows phone"];
const TABLET: &[&str] = &["tablet", "ipad", "kindle", "nexus 7", "xoom"];
const SMART_TV: &[&str] = &["tv", "smarttv", "appletv", "chromecast", "roku"];

/// Map a user-agent string to exactly one device class.
/// Total: anything that matches no tier is Escritorio.
pub fn device(user_agent: &str) -> &'static str {
    let ua = user_agent.to_ascii_lowercase();
    let matches = |tokens: &[&str]| tokens.iter().any(|t| ua.contains(t));

    if matches(MOBILE) {
        "Móvil"
    } else if matches(TABLET) {
        "Tablet"
    } else if matches(SMART_TV) {
        "Smart TV"
    } else {
        "Escritorio"
    }
}
