use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::{DateRange, LineRecord};

pub const COLUMN_COUNT: usize = 11;

/// Read and parse the line data file, keeping records inside `range`.
pub fn load_records(path: &Path, range: &DateRange, progress: bool) -> Result<Vec<LineRecord>> {
    let pb = if progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading {}...", path.display()));
        Some(pb)
    } else {
        None
    };

    let text = fs::read_to_string(path)?;
    let records = parse_records(&text, range);

    if let Some(pb) = pb {
        pb.finish_with_message(format!("{} line records", records.len()));
    }
    Ok(records)
}

/// Parse header-prefixed comma-separated line data. Fields never contain
/// commas; malformed numbers fall back to zero and malformed dates to the
/// epoch rather than failing the row.
pub fn parse_records(text: &str, range: &DateRange) -> Vec<LineRecord> {
    let mut records = Vec::new();
    for row in text.lines().skip(1) {
        if row.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() < COLUMN_COUNT {
            continue;
        }
        let record = LineRecord {
            commit: fields[0].trim().to_string(),
            file: fields[1].trim().to_string(),
            line: parse_count(fields[2]),
            depth: parse_count(fields[3]),
            length: parse_count(fields[4]),
            language: fields[5].trim().to_string(),
            author: fields[6].trim().to_string(),
            date: parse_date(fields[7]),
            time: fields[8].trim().to_string(),
            timezone: fields[9].trim().to_string(),
            datetime: parse_datetime(fields[10]),
        };
        if !range.contains(&record.datetime.with_timezone(&Utc)) {
            continue;
        }
        records.push(record);
    }
    records
}

fn parse_count(field: &str) -> u32 {
    field.trim().parse().unwrap_or(0)
}

fn parse_date(field: &str) -> NaiveDate {
    NaiveDate::parse_from_str(field.trim(), "%Y-%m-%d").unwrap_or_default()
}

fn parse_datetime(field: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(field.trim())
        .unwrap_or_else(|_| DateTime::<Utc>::default().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::resolve_range;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "commit,file,line,depth,length,type,author,date,time,timezone,datetime";

    fn parse(rows: &[&str]) -> Vec<LineRecord> {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        parse_records(&text, &DateRange::new())
    }

    #[test]
    fn parses_typed_fields() {
        let records = parse(&[
            "abc123,src/main.js,12,2,40,js,maya,2024-03-14,18:04:00,+01:00,2024-03-14T18:04:00+01:00",
        ]);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.commit, "abc123");
        assert_eq!(r.file, "src/main.js");
        assert_eq!(r.line, 12);
        assert_eq!(r.depth, 2);
        assert_eq!(r.length, 40);
        assert_eq!(r.language, "js");
        assert_eq!(r.author, "maya");
        assert_eq!(r.date.to_string(), "2024-03-14");
        assert_eq!(r.datetime.to_rfc3339(), "2024-03-14T18:04:00+01:00");
    }

    #[test]
    fn skips_header_and_blank_rows() {
        let records = parse(&[
            "",
            "abc123,a.js,1,0,10,js,maya,2024-03-14,09:00:00,+00:00,2024-03-14T09:00:00+00:00",
            "   ",
        ]);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn skips_rows_with_missing_columns() {
        let records = parse(&["abc123,a.js,1,0", "too,short"]);
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_numbers_become_zero() {
        let records = parse(&[
            "abc123,a.js,twelve,x,,js,maya,2024-03-14,09:00:00,+00:00,2024-03-14T09:00:00+00:00",
        ]);
        assert_eq!(records[0].line, 0);
        assert_eq!(records[0].depth, 0);
        assert_eq!(records[0].length, 0);
    }

    #[test]
    fn malformed_dates_become_epoch() {
        let records = parse(&["abc123,a.js,1,0,10,js,maya,someday,09:00:00,+00:00,not-a-datetime"]);
        assert_eq!(records[0].date.to_string(), "1970-01-01");
        assert_eq!(records[0].datetime.timestamp(), 0);
    }

    #[test]
    fn range_filter_is_inclusive() {
        let mut text = String::from(HEADER);
        for (id, dt) in [
            ("a", "2024-03-01T09:15:00+00:00"),
            ("b", "2024-03-02T14:30:00+00:00"),
            ("c", "2024-03-03T23:00:00+00:00"),
        ] {
            text.push_str(&format!("\n{id},a.js,1,0,10,js,maya,2024-03-01,t,+00:00,{dt}"));
        }
        let range = resolve_range(Some("2024-03-02T14:30:00+00:00"), None).unwrap();
        let records = parse_records(&text, &range);
        let ids: Vec<&str> = records.iter().map(|r| r.commit.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}
