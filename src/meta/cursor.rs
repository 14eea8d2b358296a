use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::model::Commit;

/// Linear scale between the earliest and latest commit timestamps, mapped
/// onto 0..=100 slider positions.
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    min: DateTime<FixedOffset>,
    max: DateTime<FixedOffset>,
}

impl TimeScale {
    pub fn fit(commits: &[Commit]) -> Option<Self> {
        let min = commits.iter().map(|c| c.datetime).min()?;
        let max = commits.iter().map(|c| c.datetime).max()?;
        Some(Self { min, max })
    }

    pub fn min(&self) -> DateTime<FixedOffset> {
        self.min
    }

    pub fn max(&self) -> DateTime<FixedOffset> {
        self.max
    }

    fn span_ms(&self) -> i64 {
        (self.max - self.min).num_milliseconds()
    }

    /// Slider position of `t`. A zero-width domain pins to 100.
    pub fn position(&self, t: DateTime<FixedOffset>) -> f64 {
        let span = self.span_ms();
        if span <= 0 {
            return 100.0;
        }
        let offset = (t - self.min).num_milliseconds();
        (offset as f64 / span as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Timestamp for a slider position. A zero-width domain returns the
    /// domain minimum.
    pub fn invert(&self, position: f64) -> DateTime<FixedOffset> {
        let span = self.span_ms();
        if span <= 0 {
            return self.min;
        }
        let clamped = position.clamp(0.0, 100.0);
        let offset = (span as f64 * clamped / 100.0).round() as i64;
        self.min + Duration::milliseconds(offset)
    }
}

/// Timeline view-model: commits sorted chronologically, a max-time cutoff,
/// and the derived slider position and filtered prefix. Every time-based
/// mutation goes through `set_max_time`.
pub struct TimeCursor {
    commits: Vec<Commit>,
    scale: Option<TimeScale>,
    max_time: DateTime<FixedOffset>,
    progress: f64,
    prefix: usize,
}

impl TimeCursor {
    pub fn new(mut commits: Vec<Commit>) -> Self {
        commits.sort_by_key(|c| c.datetime);
        let scale = TimeScale::fit(&commits);
        let max_time = scale
            .map(|s| s.max())
            .unwrap_or_else(|| DateTime::<Utc>::default().fixed_offset());
        let prefix = commits.len();
        Self {
            commits,
            scale,
            max_time,
            progress: 100.0,
            prefix,
        }
    }

    /// Move the cutoff and rederive position and prefix. The cutoff is
    /// inclusive: a commit exactly at `t` stays visible.
    pub fn set_max_time(&mut self, t: DateTime<FixedOffset>) {
        self.max_time = t;
        self.progress = self.scale.map(|s| s.position(t)).unwrap_or(100.0);
        self.prefix = self.commits.partition_point(|c| c.datetime <= t);
    }

    /// Move the cutoff via a slider position.
    pub fn set_progress(&mut self, position: f64) {
        if let Some(scale) = self.scale {
            self.set_max_time(scale.invert(position));
        }
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// The chronological prefix at or before the cutoff.
    pub fn filtered(&self) -> &[Commit] {
        &self.commits[..self.prefix]
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn max_time(&self) -> DateTime<FixedOffset> {
        self.max_time
    }

    pub fn scale(&self) -> Option<TimeScale> {
        self.scale
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineRecord;

    fn commit(id: &str, dt: &str) -> Commit {
        let datetime = DateTime::parse_from_rfc3339(dt).unwrap();
        let record = LineRecord {
            commit: id.to_string(),
            file: "a.js".to_string(),
            line: 1,
            depth: 0,
            length: 10,
            language: "js".to_string(),
            author: "maya".to_string(),
            date: datetime.date_naive(),
            time: datetime.format("%H:%M:%S").to_string(),
            timezone: "+00:00".to_string(),
            datetime,
        };
        Commit::from_lines(vec![record], None).unwrap()
    }

    fn cursor() -> TimeCursor {
        TimeCursor::new(vec![
            commit("b", "2024-03-02T14:30:00+00:00"),
            commit("a", "2024-03-01T09:15:00+00:00"),
            commit("c", "2024-03-03T23:00:00+00:00"),
        ])
    }

    #[test]
    fn commits_are_sorted_chronologically() {
        let cursor = cursor();
        let ids: Vec<&str> = cursor.commits().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn filtered_is_a_monotonic_prefix() {
        let mut cursor = cursor();
        let times: Vec<_> = cursor.commits().iter().map(|c| c.datetime).collect();
        let mut last_len = 0;
        for t in times {
            cursor.set_max_time(t);
            let filtered = cursor.filtered();
            assert!(filtered.len() >= last_len);
            // always a prefix of the sorted list
            for (i, c) in filtered.iter().enumerate() {
                assert_eq!(c.id, cursor.commits()[i].id);
            }
            last_len = cursor.filtered().len();
        }
    }

    #[test]
    fn cutoff_is_inclusive() {
        let mut cursor = cursor();
        let t = cursor.commits()[1].datetime;
        cursor.set_max_time(t);
        assert_eq!(cursor.filtered().len(), 2);
        cursor.set_max_time(t - Duration::seconds(1));
        assert_eq!(cursor.filtered().len(), 1);
    }

    #[test]
    fn position_invert_round_trip_keeps_boundary_commits() {
        let mut cursor = cursor();
        let scale = cursor.scale().unwrap();
        for i in 0..cursor.commits().len() {
            let t = cursor.commits()[i].datetime;
            let position = scale.position(t);
            cursor.set_progress(position);
            assert!(
                cursor.filtered().len() >= i + 1,
                "commit {i} fell off its own slider position"
            );
        }
    }

    #[test]
    fn degenerate_domain_pins_to_full_view() {
        let mut cursor = TimeCursor::new(vec![commit("only", "2024-03-01T09:15:00+00:00")]);
        assert_eq!(cursor.progress(), 100.0);
        let scale = cursor.scale().unwrap();
        assert_eq!(scale.invert(42.0), scale.min());
        cursor.set_progress(0.0);
        assert_eq!(cursor.filtered().len(), 1);
    }

    #[test]
    fn empty_dataset_is_inert() {
        let mut cursor = TimeCursor::new(Vec::new());
        assert!(cursor.is_empty());
        assert!(cursor.filtered().is_empty());
        cursor.set_progress(50.0);
        assert!(cursor.filtered().is_empty());
    }
}
