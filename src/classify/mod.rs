pub mod browser;
pub mod device;
pub mod language;
pub mod local_time;
pub mod os;

use crate::models::visitor::{Classification, VisitorContext};

/// Sentinel returned whenever no rule matches the input.
pub const UNKNOWN: &str = "Desconocido";

/// Derive all user-agent and language labels for one visitor.
/// Pure and total: missing headers classify the same as non-matching ones.
pub fn classify(ctx: &VisitorContext) -> Classification {
    let ua = ctx.user_agent.as_deref().unwrap_or("");
    Classification {
        operating_system: os::operating_system(ua),
        browser: browser::browser(ua),
        device: device::device(ua),
        language: language::language(ctx.accept_language.as_deref().unwrap_or("")),
    }
}
