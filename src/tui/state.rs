use std::time::{Duration, Instant};

use chrono::{DateTime, FixedOffset};
use ratatui::layout::Rect;

use crate::config::ThemePref;
use crate::meta::{BrushRect, LanguageStat, TimeCursor};
use crate::model::{Commit, ProjectEntry, Summary};
use crate::projects::visible;
use crate::theme::Theme;

const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Summary,
    Timeline,
    Files,
    Projects,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Summary, Tab::Timeline, Tab::Files, Tab::Projects];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Summary => "Summary",
            Tab::Timeline => "Timeline",
            Tab::Files => "Files",
            Tab::Projects => "Projects",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// All dashboard state. Key and mouse events are translated into intents,
/// and `update::apply` is the only place this struct changes.
pub struct App {
    pub tab: Tab,
    pub cursor: TimeCursor,
    pub summary: Summary,
    pub languages: Vec<String>,
    pub brush: Option<BrushRect>,
    pub breakdown: Vec<LanguageStat>,
    pub selected_count: usize,
    pub story_index: Option<usize>,
    pub drag_from: Option<(DateTime<FixedOffset>, f64)>,
    pub projects: Vec<ProjectEntry>,
    pub query: String,
    pub search_mode: bool,
    pub selected_year: Option<u32>,
    pub project_row: usize,
    pub file_row: usize,
    pub theme_pref: ThemePref,
    pub theme: Theme,
    pub help: bool,
    pub status: Option<(String, Instant)>,
    // plot region of the scatter chart, recorded each frame for mouse mapping
    pub chart_area: Option<Rect>,
}

impl App {
    pub fn new(
        cursor: TimeCursor,
        summary: Summary,
        projects: Vec<ProjectEntry>,
        theme_pref: ThemePref,
    ) -> Self {
        let mut languages: Vec<String> = Vec::new();
        for commit in cursor.commits() {
            for record in commit.lines() {
                if !languages.iter().any(|l| l == &record.language) {
                    languages.push(record.language.clone());
                }
            }
        }

        Self {
            tab: Tab::Summary,
            cursor,
            summary,
            languages,
            brush: None,
            breakdown: Vec::new(),
            selected_count: 0,
            story_index: None,
            drag_from: None,
            projects,
            query: String::new(),
            search_mode: false,
            selected_year: None,
            project_row: 0,
            file_row: 0,
            theme: Theme::resolve(theme_pref),
            theme_pref,
            help: false,
            status: None,
            chart_area: None,
        }
    }

    /// Projects passing the current query and year wedge selection.
    pub fn visible_projects(&self) -> Vec<&ProjectEntry> {
        visible(&self.projects, &self.query, self.selected_year)
    }

    /// Stable palette slot for a language tag, by first appearance in the
    /// dataset. Shared by the breakdown bars and the file dots.
    pub fn language_index(&self, language: &str) -> usize {
        self.languages
            .iter()
            .position(|l| l == language)
            .unwrap_or(0)
    }

    /// The commit copy and open act on: the story position when one is
    /// active, otherwise the newest commit under the time filter.
    pub fn focused_commit(&self) -> Option<&Commit> {
        if let Some(i) = self.story_index {
            return self.cursor.commits().get(i);
        }
        self.cursor.filtered().last()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    pub fn status_line(&self) -> Option<&str> {
        match &self.status {
            Some((message, at)) if at.elapsed() < STATUS_TTL => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_in_both_directions() {
        assert_eq!(Tab::Summary.next(), Tab::Timeline);
        assert_eq!(Tab::Projects.next(), Tab::Summary);
        assert_eq!(Tab::Summary.prev(), Tab::Projects);
        assert_eq!(Tab::Files.prev(), Tab::Timeline);
    }

    #[test]
    fn language_slots_follow_first_appearance() {
        let app = App::new(
            TimeCursor::new(Vec::new()),
            crate::meta::summarize(&[]),
            Vec::new(),
            ThemePref::Dark,
        );
        assert!(app.languages.is_empty());
        assert_eq!(app.language_index("js"), 0);
    }
}
