use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Business-day date format used in report URLs and file names
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Deserialize `null` as the type's default value.
///
/// The remote API sends `null` for totals it has not computed yet; combine
/// with `#[serde(default)]` so absent keys behave the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a `YYYY-MM-DD` business date
pub fn parse_report_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), REPORT_DATE_FORMAT).ok()
}

/// Format a business date as `YYYY-MM-DD`
pub fn format_report_date(date: NaiveDate) -> String {
    date.format(REPORT_DATE_FORMAT).to_string()
}
