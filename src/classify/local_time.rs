use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::UNKNOWN;

/// Current wall-clock time in the visitor's inferred zone.
/// No zone, or a zone name the tz database does not know, degrades to the
/// sentinel; this never errors.
pub fn visitor_local_time(timezone: Option<&str>) -> String {
    resolve_at(timezone, Utc::now())
}

/// Current wall-clock time in a known zone (the server-side timestamp).
pub fn zone_now(tz: Tz) -> String {
    stamp(&Utc::now().with_timezone(&tz))
}

fn resolve_at(timezone: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(name) = timezone else {
        return UNKNOWN.to_string();
    };
    match name.parse::<Tz>() {
        Ok(tz) => stamp(&now.with_timezone(&tz)),
        Err(_) => UNKNOWN.to_string(),
    }
}

/// `YYYY-MM-DD HH:MM:SS (±HH:MM)`, the historical log layout.
fn stamp<Z: TimeZone>(dt: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%d %H:%M:%S (%:z)").to_string()
}
