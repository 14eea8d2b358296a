use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::model::ProjectEntry;

/// Tolerant JSON fetch: read and parse failures go to stderr and yield
/// `None`, so callers render the missing-data case instead of failing.
pub fn fetch_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error fetching {}: {err}", path.display());
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            eprintln!("Error parsing {}: {err}", path.display());
            None
        }
    }
}

pub fn load_projects(path: &Path) -> Option<Vec<ProjectEntry>> {
    fetch_json(path)
}
