use chrono::{Datelike, Timelike};
use std::collections::HashMap;

use crate::model::{Commit, FileSummary, LineRecord, Summary};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const PERIODS: [&str; 4] = ["night", "morning", "afternoon", "evening"];

/// Group line records into commits in first-seen order. The first record of
/// each group supplies the commit-level metadata; later rows are not
/// cross-checked against it.
pub fn group_commits(records: &[LineRecord], link_base: Option<&str>) -> Vec<Commit> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<LineRecord>> = HashMap::new();

    for record in records {
        let group = groups.entry(record.commit.as_str()).or_default();
        if group.is_empty() {
            order.push(record.commit.as_str());
        }
        group.push(record.clone());
    }

    order
        .into_iter()
        .filter_map(|id| groups.remove(id))
        .filter_map(|lines| Commit::from_lines(lines, link_base))
        .collect()
}

/// Dataset-wide tile values. Always computed over the full commit set, never
/// over a time-filtered view.
pub fn summarize(commits: &[Commit]) -> Summary {
    let mut files: HashMap<&str, usize> = HashMap::new();
    let mut total_lines = 0usize;
    let mut max_depth = 0u32;
    let mut longest_line = 0u32;
    let mut weekday_lines = [0usize; 7];
    let mut period_lines = [0usize; 4];

    for commit in commits {
        for record in commit.lines() {
            *files.entry(record.file.as_str()).or_insert(0) += 1;
            total_lines += 1;
            max_depth = max_depth.max(record.depth);
            longest_line = longest_line.max(record.length);
            weekday_lines[record.date.weekday().num_days_from_monday() as usize] += 1;
            period_lines[period_index(record.datetime.hour())] += 1;
        }
    }

    let largest_file = files
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(path, lines)| FileSummary {
            path: path.to_string(),
            lines: *lines,
        });

    Summary {
        commits: commits.len(),
        files: files.len(),
        total_lines,
        max_depth,
        longest_line,
        largest_file,
        busiest_weekday: busiest(&weekday_lines, &WEEKDAYS),
        busiest_period: busiest(&period_lines, &PERIODS),
    }
}

#[derive(Debug, Clone)]
pub struct FileDots {
    pub path: String,
    pub languages: Vec<String>,
}

/// Files touched by the given commits, largest first, with one language tag
/// per line for unit-dot rendering. Follows whatever commit set it is given;
/// the caller decides between the full and the time-filtered view.
pub fn file_dots(commits: &[Commit]) -> Vec<FileDots> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<String>> = HashMap::new();

    for commit in commits {
        for record in commit.lines() {
            let group = groups.entry(record.file.as_str()).or_default();
            if group.is_empty() {
                order.push(record.file.as_str());
            }
            group.push(record.language.clone());
        }
    }

    let mut dots: Vec<FileDots> = order
        .into_iter()
        .filter_map(|path| {
            groups.remove(path).map(|languages| FileDots {
                path: path.to_string(),
                languages,
            })
        })
        .collect();
    dots.sort_by(|a, b| {
        b.languages
            .len()
            .cmp(&a.languages.len())
            .then_with(|| a.path.cmp(&b.path))
    });
    dots
}

fn period_index(hour: u32) -> usize {
    match hour {
        0..=5 => 0,
        6..=11 => 1,
        12..=17 => 2,
        _ => 3,
    }
}

fn busiest(counts: &[usize], labels: &[&'static str]) -> Option<String> {
    let mut best = None;
    let mut best_count = 0usize;
    for (i, &count) in counts.iter().enumerate() {
        if count > best_count {
            best = Some(labels[i].to_string());
            best_count = count;
        }
    }
    best
}
