//! Fixed-width timestamp rendering
//!
//! Lines are prefixed with `YYYY/MM/DD HH:MM:SS.mmm`, always 23 characters.
//! The fraction is rendered at a fixed width of three digits and truncated,
//! never rounded, so `.9996` prints as `.999`.

use chrono::{DateTime, TimeZone};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f";

/// Render an instant as `YYYY/MM/DD HH:MM:SS.mmm`
pub fn format_timestamp<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Pad a timestamp whose fraction had its trailing zeros dropped
///
/// Renderers with variable fractional precision produce 19 (whole second),
/// 21 or 22 characters. Any other length is returned unchanged.
pub fn normalize_width(rendered: &str) -> String {
    match rendered.len() {
        19 => format!("{rendered}.000"),
        21 => format!("{rendered}00"),
        22 => format!("{rendered}0"),
        _ => rendered.to_string(),
    }
}
