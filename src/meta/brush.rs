use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

use crate::model::Commit;

/// Rectangle over the scatterplot's data space (time x hour of day). Bounds
/// are normalized on construction; containment is inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushRect {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
    pub hour_min: f64,
    pub hour_max: f64,
}

impl BrushRect {
    pub fn new(
        a: DateTime<FixedOffset>,
        b: DateTime<FixedOffset>,
        hour_a: f64,
        hour_b: f64,
    ) -> Self {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let (hour_min, hour_max) = if hour_a <= hour_b {
            (hour_a, hour_b)
        } else {
            (hour_b, hour_a)
        };
        Self {
            from,
            to,
            hour_min,
            hour_max,
        }
    }

    pub fn contains(&self, commit: &Commit) -> bool {
        commit.datetime >= self.from
            && commit.datetime <= self.to
            && commit.hour_frac >= self.hour_min
            && commit.hour_frac <= self.hour_max
    }
}

/// Commits inside the brush, in the order given.
pub fn brushed<'a>(commits: &'a [Commit], rect: &BrushRect) -> Vec<&'a Commit> {
    commits.iter().filter(|c| rect.contains(c)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageStat {
    pub language: String,
    pub lines: usize,
    pub share: f64,
}

/// Per-language line counts over the selected commits, largest first (ties
/// by tag), with percentage shares of the selected total.
pub fn language_breakdown(selected: &[&Commit]) -> Vec<LanguageStat> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for commit in selected {
        for record in commit.lines() {
            *counts.entry(record.language.as_str()).or_insert(0) += 1;
            total += 1;
        }
    }

    if total == 0 {
        return Vec::new();
    }

    let mut stats: Vec<LanguageStat> = counts
        .into_iter()
        .map(|(language, lines)| LanguageStat {
            language: language.to_string(),
            lines,
            share: lines as f64 / total as f64 * 100.0,
        })
        .collect();
    stats.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.language.cmp(&b.language)));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineRecord;

    fn record(commit: &str, file: &str, language: &str, dt: &str) -> LineRecord {
        let datetime = DateTime::parse_from_rfc3339(dt).unwrap();
        LineRecord {
            commit: commit.to_string(),
            file: file.to_string(),
            line: 1,
            depth: 0,
            length: 10,
            language: language.to_string(),
            author: "maya".to_string(),
            date: datetime.date_naive(),
            time: datetime.format("%H:%M:%S").to_string(),
            timezone: "+00:00".to_string(),
            datetime,
        }
    }

    /// Three commits at 9:15, 14:30 and 23:00 across two files.
    fn commits() -> Vec<Commit> {
        let groups = vec![
            vec![
                record("a", "main.js", "js", "2024-03-01T09:15:00+00:00"),
                record("a", "main.js", "js", "2024-03-01T09:15:00+00:00"),
                record("a", "style.css", "css", "2024-03-01T09:15:00+00:00"),
            ],
            vec![
                record("b", "main.js", "js", "2024-03-02T14:30:00+00:00"),
                record("b", "style.css", "css", "2024-03-02T14:30:00+00:00"),
            ],
            vec![record("c", "main.js", "js", "2024-03-03T23:00:00+00:00")],
        ];
        groups
            .into_iter()
            .map(|lines| Commit::from_lines(lines, None).unwrap())
            .collect()
    }

    fn at(dt: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(dt).unwrap()
    }

    #[test]
    fn rectangle_selects_inclusively() {
        let commits = commits();
        // spans the first two commits in both time and hour of day
        let rect = BrushRect::new(
            at("2024-03-01T09:15:00+00:00"),
            at("2024-03-02T14:30:00+00:00"),
            9.25,
            14.5,
        );
        let selected = brushed(&commits, &rect);
        let ids: Vec<&str> = selected.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn breakdown_counts_descend_and_shares_sum_to_100() {
        let commits = commits();
        let rect = BrushRect::new(
            at("2024-03-01T00:00:00+00:00"),
            at("2024-03-02T23:59:00+00:00"),
            0.0,
            24.0,
        );
        let selected = brushed(&commits, &rect);
        assert_eq!(selected.len(), 2);

        let stats = language_breakdown(&selected);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].language, "js");
        assert_eq!(stats[0].lines, 3);
        assert_eq!(stats[1].language, "css");
        assert_eq!(stats[1].lines, 2);
        let total_share: f64 = stats.iter().map(|s| s.share).sum();
        assert!((total_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn ties_break_alphabetically() {
        let commits = vec![Commit::from_lines(
            vec![
                record("a", "main.js", "js", "2024-03-01T09:15:00+00:00"),
                record("a", "style.css", "css", "2024-03-01T09:15:00+00:00"),
            ],
            None,
        )
        .unwrap()];
        let stats = language_breakdown(&commits.iter().collect::<Vec<_>>());
        assert_eq!(stats[0].language, "css");
        assert_eq!(stats[1].language, "js");
    }

    #[test]
    fn empty_selection_yields_empty_breakdown() {
        let commits = commits();
        let rect = BrushRect::new(
            at("2020-01-01T00:00:00+00:00"),
            at("2020-01-02T00:00:00+00:00"),
            0.0,
            24.0,
        );
        let selected = brushed(&commits, &rect);
        assert!(selected.is_empty());
        assert!(language_breakdown(&selected).is_empty());
    }

    #[test]
    fn normalization_swaps_inverted_corners() {
        let rect = BrushRect::new(
            at("2024-03-02T14:30:00+00:00"),
            at("2024-03-01T09:15:00+00:00"),
            14.5,
            9.25,
        );
        assert_eq!(rect.from, at("2024-03-01T09:15:00+00:00"));
        assert_eq!(rect.hour_min, 9.25);
    }
}
