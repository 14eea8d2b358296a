use chrono::Utc;
use console::style;

use crate::cli::CommonArgs;
use crate::model::{ProjectEntry, ProjectsOutput, YearSlice, SCHEMA_VERSION};

pub fn exec(
    common: CommonArgs,
    json: bool,
    pie: bool,
    year: Option<u32>,
    query: Option<String>,
) -> anyhow::Result<()> {
    let projects = super::load_projects(&common.projects).unwrap_or_default();
    let query_text = query.unwrap_or_default();
    let shown = super::visible(&projects, &query_text, year);
    let wedges = super::year_slices(&shown);

    if json {
        let output = ProjectsOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            source: common.projects.to_string_lossy().to_string(),
            query: (!query_text.is_empty()).then(|| query_text.clone()),
            year,
            projects: shown.iter().map(|&p| p.clone()).collect(),
            wedges,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if pie {
        output_wedges(&wedges);
    } else {
        output_table(&shown, &query_text, year);
    }

    Ok(())
}

fn output_table(projects: &[&ProjectEntry], query: &str, year: Option<u32>) {
    let mut heading = format!("{} projects", projects.len());
    if !query.is_empty() {
        heading.push_str(&format!(" matching \"{query}\""));
    }
    if let Some(year) = year {
        heading.push_str(&format!(" in {year}"));
    }
    println!("{}", style(heading).bold());
    println!("{}", "─".repeat(64));

    for project in projects {
        let year_label = project
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<6} {:<28.28} {:.40}", year_label, project.title, project.description);
    }
}

fn output_wedges(wedges: &[YearSlice]) {
    if wedges.is_empty() {
        println!("No data to display");
        return;
    }

    println!("{}", style("Projects by year").bold());
    println!("{}", "─".repeat(40));

    let total: usize = wedges.iter().map(|w| w.count).sum();
    let max = wedges.iter().map(|w| w.count).max().unwrap_or(1);

    for wedge in wedges {
        let bar = "█".repeat(((wedge.count * 20) / max.max(1)).max(1));
        let share = wedge.count as f64 / total.max(1) as f64 * 100.0;
        println!(
            "{} {} {} ({:.0}%)",
            wedge.year,
            style(bar).green(),
            wedge.count,
            share
        );
    }
}
