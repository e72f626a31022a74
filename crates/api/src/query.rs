//! Query parameter types for the project sort/filter endpoints.
//!
//! Names are camelCase on the wire (`?dateAfter=`, `?dateBefore=`) to keep
//! the public URLs stable.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};
use tasktracker_core::status::{ProjectStatus, StatusId};
use tasktracker_core::types::Timestamp;

/// `?dateAfter=` for `GET /projects/filter/startDate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateAfterParams {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date_after: Timestamp,
}

/// `?dateBefore=` for `GET /projects/filter/endDate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateBeforeParams {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date_before: Timestamp,
}

/// `?start=&end=` for `GET /projects/filter/countOfTasks`. Both inclusive.
#[derive(Debug, Deserialize)]
pub struct TaskCountRangeParams {
    pub start: i64,
    pub end: i64,
}

/// `?status=` for `GET /projects/filter/status`. Takes a variant name
/// (`Active`) or its numeric rank (`1`).
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    #[serde(deserialize_with = "deserialize_project_status")]
    pub status: ProjectStatus,
}

/// Parse a timestamp from a query string value.
///
/// Accepts, in order:
/// - RFC 3339 (`2024-05-01T12:00:00Z`, `2024-05-01T12:00:00+02:00`)
/// - a naive date-time (`2024-05-01T12:00:00`), taken as UTC
/// - a plain date (`2024-05-01`), taken as midnight UTC
///
/// An unencoded `+` in a query string decodes to a space, so
/// `2024-05-01T12:00:00 02:00` is read as `+02:00`.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Some((head, offset)) = raw.rsplit_once(' ') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&format!("{head}+{offset}")) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }
    Err(format!(
        "invalid date '{raw}': expected RFC 3339 or YYYY-MM-DD"
    ))
}

/// Parse a project status from its variant name or numeric rank.
pub fn parse_project_status(raw: &str) -> Result<ProjectStatus, String> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<StatusId>() {
        return ProjectStatus::try_from(id).map_err(|e| e.to_string());
    }
    let by_name: StrDeserializer<'_, ValueError> = raw.into_deserializer();
    ProjectStatus::deserialize(by_name).map_err(|e| e.to_string())
}

fn deserialize_project_status<'de, D>(deserializer: D) -> Result<ProjectStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_project_status(&raw).map_err(serde::de::Error::custom)
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_timestamp("2024-05-01T12:00:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn parses_naive_datetime_as_utc() {
        assert_eq!(
            parse_timestamp("2024-05-01T08:30:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
        );
    }

    #[test]
    fn parses_plain_date_as_midnight() {
        assert_eq!(
            parse_timestamp("2024-05-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn restores_offset_sign_lost_to_url_decoding() {
        assert_eq!(
            parse_timestamp("2024-05-01T12:00:00 02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn status_accepts_name_or_rank() {
        assert_eq!(parse_project_status("Active").unwrap(), ProjectStatus::Active);
        assert_eq!(parse_project_status("1").unwrap(), ProjectStatus::Active);
        assert_eq!(parse_project_status("2").unwrap(), ProjectStatus::Completed);
    }

    #[test]
    fn status_rejects_unknown_name_or_rank() {
        assert!(parse_project_status("Paused").is_err());
        assert!(parse_project_status("3").is_err());
        assert!(parse_project_status("-1").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }
}
