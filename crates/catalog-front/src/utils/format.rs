use chrono::DateTime;

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats an RFC 3339 timestamp as a short date, e.g. `Nov 2, 2026`.
/// Values that do not parse are returned as they are.
pub fn format_short_date(datetime: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(e) => {
            log::debug!("Cannot parse datetime {:?}: {}", datetime, e);
            datetime.to_string()
        }
    }
}

pub fn code_or_placeholder(code: Option<&str>) -> &str {
    match code {
        Some(code) if !code.is_empty() => code,
        _ => "-",
    }
}
