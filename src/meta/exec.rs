use anyhow::Context;
use chrono::Utc;
use console::style;

use crate::cli::CommonArgs;
use crate::model::{Commit, CommitsOutput, StatsOutput, Summary, SCHEMA_VERSION};

pub fn exec_stats(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let range = crate::util::resolve_range(common.since.as_deref(), common.until.as_deref())
        .context("Failed to resolve date range")?;
    let records = crate::loc::load_records(&common.file, &range, !json)
        .with_context(|| format!("Failed to read line data from {}", common.file.display()))?;
    let commits = super::group_commits(&records, None);
    let summary = super::summarize(&commits);

    if json {
        output_stats_json(&summary, &common)?;
    } else {
        output_stats(&summary, &common);
    }

    Ok(())
}

pub fn exec_commits(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let range = crate::util::resolve_range(common.since.as_deref(), common.until.as_deref())
        .context("Failed to resolve date range")?;
    let records = crate::loc::load_records(&common.file, &range, !json && !ndjson)
        .with_context(|| format!("Failed to read line data from {}", common.file.display()))?;
    let link_base = crate::git::resolve_link_base(common.repo.as_deref(), common.link_base.as_deref())
        .context("Failed to resolve commit link base")?;

    let mut commits = super::group_commits(&records, link_base.as_deref());
    commits.sort_by_key(|c| c.datetime);

    if json {
        output_commits_json(&commits, &common)?;
    } else if ndjson {
        output_commits_ndjson(&commits)?;
    } else {
        output_commits_table(&commits, &common);
    }

    Ok(())
}

fn output_stats_json(summary: &Summary, common: &CommonArgs) -> anyhow::Result<()> {
    let output = StatsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source: common.file.to_string_lossy().to_string(),
        since: common.since.clone(),
        until: common.until.clone(),
        summary: summary.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_stats(summary: &Summary, common: &CommonArgs) {
    print_range_note(common);

    println!("{}", style("Codebase Summary").bold());
    println!("{}", "─".repeat(40));
    print_tile("Commits", &summary.commits.to_string());
    print_tile("Files", &summary.files.to_string());
    print_tile("Total LOC", &summary.total_lines.to_string());
    print_tile("Max depth", &summary.max_depth.to_string());
    print_tile("Longest line", &summary.longest_line.to_string());
    if let Some(file) = &summary.largest_file {
        print_tile("Largest file", &format!("{} ({} lines)", file.path, file.lines));
    }
    if let Some(day) = &summary.busiest_weekday {
        print_tile("Most active day", day);
    }
    if let Some(period) = &summary.busiest_period {
        print_tile("Most active time", period);
    }
}

fn print_tile(label: &str, value: &str) {
    println!("{} {}", style(format!("{label:<16}")).cyan(), value);
}

fn print_range_note(common: &CommonArgs) {
    if let (Some(since), Some(until)) = (&common.since, &common.until) {
        println!("Filtering records from {} to {}", since, until);
    } else if let Some(since) = &common.since {
        println!("Filtering records since {}", since);
    } else if let Some(until) = &common.until {
        println!("Filtering records until {}", until);
    }
}

fn output_commits_json(commits: &[Commit], common: &CommonArgs) -> anyhow::Result<()> {
    let output = CommitsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source: common.file.to_string_lossy().to_string(),
        since: common.since.clone(),
        until: common.until.clone(),
        commits: commits.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_commits_ndjson(commits: &[Commit]) -> anyhow::Result<()> {
    for commit in commits {
        println!("{}", serde_json::to_string(commit)?);
    }
    Ok(())
}

fn output_commits_table(commits: &[Commit], common: &CommonArgs) {
    if commits.is_empty() {
        println!("No data to display");
        return;
    }

    print_range_note(common);

    println!(
        "{}",
        style(format!(
            "{:<9} {:<11} {:<6} {:<20} {:>6}",
            "Commit", "Date", "Time", "Author", "Lines"
        ))
        .bold()
    );
    println!("{}", "─".repeat(56));

    for commit in commits {
        println!(
            "{:<9} {:<11} {:<6} {:<20.20} {:>6}",
            commit.short_id(),
            commit.date,
            commit.datetime.format("%H:%M"),
            commit.author,
            commit.total_lines
        );
    }
}
