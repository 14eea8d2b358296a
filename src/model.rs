use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One changed source line in one commit snapshot, as read from the line
/// data file. Immutable after parse; malformed fields carry sentinel values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
    pub commit: String,
    pub file: String,
    pub line: u32,
    pub depth: u32,
    pub length: u32,
    #[serde(rename = "type")]
    pub language: String,
    pub author: String,
    pub date: NaiveDate,
    pub time: String,
    pub timezone: String,
    pub datetime: DateTime<FixedOffset>,
}

/// A commit summarized from its line records. The line list is owned and
/// read-only; commit-level fields come from the group's first record.
#[derive(Debug, Clone, Serialize)]
pub struct Commit {
    pub id: String,
    pub url: Option<String>,
    pub author: String,
    pub date: NaiveDate,
    pub time: String,
    pub timezone: String,
    pub datetime: DateTime<FixedOffset>,
    pub hour_frac: f64,
    pub total_lines: usize,
    #[serde(skip)]
    lines: Vec<LineRecord>,
}

impl Commit {
    pub fn from_lines(lines: Vec<LineRecord>, link_base: Option<&str>) -> Option<Self> {
        let first = lines.first()?;
        let hour_frac =
            f64::from(first.datetime.hour()) + f64::from(first.datetime.minute()) / 60.0;
        Some(Self {
            id: first.commit.clone(),
            url: link_base.map(|base| format!("{base}/commit/{}", first.commit)),
            author: first.author.clone(),
            date: first.date,
            time: first.time.clone(),
            timezone: first.timezone.clone(),
            datetime: first.datetime,
            hour_frac,
            total_lines: lines.len(),
            lines,
        })
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    pub fn short_id(&self) -> String {
        self.id.chars().take(7).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    pub path: String,
    pub lines: usize,
}

/// Dataset-wide tile values, computed once from the full record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub commits: usize,
    pub files: usize,
    pub total_lines: usize,
    pub max_depth: u32,
    pub longest_line: u32,
    pub largest_file: Option<FileSummary>,
    pub busiest_weekday: Option<String>,
    pub busiest_period: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSlice {
    pub year: u32,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub public_gists: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub since: Option<String>,
    pub until: Option<String>,
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommitsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub since: Option<String>,
    pub until: Option<String>,
    pub commits: Vec<Commit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub query: Option<String>,
    pub year: Option<u32>,
    pub projects: Vec<ProjectEntry>,
    pub wedges: Vec<YearSlice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub user: GithubUser,
}

#[derive(Debug, Clone)]
pub struct DateRange {
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new() -> Self {
        Self { since: None, until: None }
    }

    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        if let Some(since) = self.since {
            if timestamp < &since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if timestamp > &until {
                return false;
            }
        }
        true
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new()
    }
}
