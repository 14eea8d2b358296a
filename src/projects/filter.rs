use std::collections::HashMap;

use crate::model::{ProjectEntry, YearSlice};

/// Case-insensitive free-text match across title, description, and year.
pub fn match_query(project: &ProjectEntry, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let mut haystack = format!("{}\n{}", project.title, project.description);
    if let Some(year) = project.year {
        haystack.push('\n');
        haystack.push_str(&year.to_string());
    }
    haystack.to_lowercase().contains(&needle)
}

/// Projects visible under the current query and wedge selection.
pub fn visible<'a>(
    projects: &'a [ProjectEntry],
    query: &str,
    year: Option<u32>,
) -> Vec<&'a ProjectEntry> {
    projects
        .iter()
        .filter(|p| match_query(p, query))
        .filter(|p| year.map_or(true, |y| p.year == Some(y)))
        .collect()
}

/// Year wedges for the given projects: one slice per year with a count,
/// newest year first. Projects without a year contribute no slice. The
/// wedges always rederive from the visible set, so a selected year can
/// shrink the pie down to its own single slice.
pub fn year_slices(projects: &[&ProjectEntry]) -> Vec<YearSlice> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for project in projects {
        if let Some(year) = project.year {
            *counts.entry(year).or_insert(0) += 1;
        }
    }

    let mut slices: Vec<YearSlice> = counts
        .into_iter()
        .map(|(year, count)| YearSlice { year, count })
        .collect();
    slices.sort_by(|a, b| b.year.cmp(&a.year));
    slices
}

/// Selecting the already-selected year deselects it.
pub fn toggle_year(selected: Option<u32>, year: u32) -> Option<u32> {
    if selected == Some(year) {
        None
    } else {
        Some(year)
    }
}
