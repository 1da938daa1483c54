//! Field-level helpers that turn raw entry values into display strings.
//!
//! Every function here is pure: the same input always produces the same
//! output, so normalizing an entry twice yields identical records.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::ContentEntry;
use crate::{Error, Result};

pub const NO_DETAILS: &str = "No additional details provided.";

const PROTOCOL_RELATIVE: &str = "//";

/// Gives protocol-relative URLs an explicit `https:` scheme. Anything else is
/// returned untouched.
pub fn with_https(url: &str) -> String {
    if url.starts_with(PROTOCOL_RELATIVE) {
        format!("https:{}", url)
    } else {
        url.to_string()
    }
}

/// Resolves a possibly missing asset URL, substituting `fallback` when the
/// reference or its file URL is absent.
pub fn resolve_asset_url(raw: Option<&str>, fallback: &str) -> String {
    match raw.map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => with_https(url),
        None => fallback.to_string(),
    }
}

/// URL of the asset linked from `field`, or `fallback`.
pub fn asset_url(entry: &ContentEntry, field: &str, fallback: &str) -> String {
    let asset = entry.asset(field);
    resolve_asset_url(asset.as_ref().and_then(|a| a.url.as_deref()), fallback)
}

/// URL of the asset linked from `field` when it has one.
pub fn optional_asset_url(entry: &ContentEntry, field: &str) -> Option<String> {
    entry
        .asset(field)
        .and_then(|a| a.url)
        .map(|url| with_https(&url))
}

/// Parses an ISO-8601 date or timestamp into its calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.date_naive());
    }
    if let Ok(at) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        return Ok(at.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(at) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(at.date());
        }
    }
    Err(Error::InvalidDate(raw.to_string()))
}

/// Renders a date as `Month D, YYYY`, e.g. `February 28, 2024`.
pub fn format_long_date(raw: &str) -> Result<String> {
    Ok(parse_date(raw)?.format("%B %-d, %Y").to_string())
}

/// Formatted date of `field`. An absent field renders empty; a present but
/// unparseable one is an error.
pub fn date_field(entry: &ContentEntry, field: &str) -> Result<String> {
    match entry.text(field) {
        Some(raw) => format_long_date(raw),
        None => Ok(String::new()),
    }
}

pub fn text_or(entry: &ContentEntry, field: &str, default: &str) -> String {
    entry.text(field).unwrap_or(default).to_string()
}

pub fn text(entry: &ContentEntry, field: &str) -> String {
    text_or(entry, field, "")
}
