use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::time::SystemTime;

use crate::error::{FolioError, Result};
use crate::model::DateRange;

/// Parse a point in time from RFC3339, `YYYY-MM-DD`, or a relative duration
/// such as "30 days" / "2 weeks ago".
pub fn parse_when(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&datetime));
        }
    }

    let lowered = input.trim().to_lowercase();
    let relative = lowered.strip_suffix("ago").unwrap_or(&lowered).trim_end();
    // humantime wants "30days"; tolerate "30 days"
    if let Ok(duration) = humantime::parse_duration(&relative.replace(' ', "")) {
        let target = SystemTime::now()
            .checked_sub(duration)
            .ok_or_else(|| FolioError::InvalidDate(format!("Duration overflow for '{input}'")))?;
        return Ok(DateTime::<Utc>::from(target));
    }

    Err(FolioError::Parse(format!("Invalid date '{input}'")))
}

pub fn resolve_range(since: Option<&str>, until: Option<&str>) -> Result<DateRange> {
    let mut range = DateRange::new();

    let since_dt = match since {
        Some(s) => Some(parse_when(s)?),
        None => None,
    };

    let until_dt = match until {
        Some(u) => Some(parse_when(u)?),
        None => None,
    };

    if let (Some(s), Some(u)) = (since_dt, until_dt) {
        if s > u {
            return Err(FolioError::InvalidDate(format!(
                "Invalid range: since ({}) is after until ({})",
                s, u
            )));
        }
    }

    if let Some(s) = since_dt {
        range = range.with_since(s);
    }
    if let Some(u) = until_dt {
        range = range.with_until(u);
    }

    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_when("2024-03-14T18:04:00+01:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-14T17:04:00+00:00");
    }

    #[test]
    fn parses_plain_date_as_midnight() {
        let dt = parse_when("2024-03-14").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-14T00:00:00+00:00");
    }

    #[test]
    fn parses_relative_durations() {
        let dt = parse_when("30 days ago").unwrap();
        let expected = Utc::now() - Duration::days(30);
        assert!((dt - expected).num_seconds().abs() < 5);

        let dt = parse_when("2 weeks").unwrap();
        let expected = Utc::now() - Duration::weeks(2);
        assert!((dt - expected).num_seconds().abs() < 5);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_when("not a date").is_err());
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(resolve_range(Some("2024-03-14"), Some("2024-03-01")).is_err());
    }

    #[test]
    fn range_contains_is_inclusive() {
        let range = resolve_range(Some("2024-03-01"), Some("2024-03-14")).unwrap();
        let lower = parse_when("2024-03-01").unwrap();
        let upper = parse_when("2024-03-14").unwrap();
        assert!(range.contains(&lower));
        assert!(range.contains(&upper));
        assert!(!range.contains(&(lower - Duration::seconds(1))));
    }
}
