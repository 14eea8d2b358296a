use chrono::{DateTime, FixedOffset};

use crate::config::{self, Config};
use crate::meta::{brushed, file_dots, language_breakdown, BrushRect};
use crate::projects::{toggle_year, year_slices};
use crate::theme::Theme;

use super::state::{App, Tab};

/// Everything the dashboard can be asked to do. Input handling translates
/// keys and mouse events into intents; `apply` performs them.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Quit,
    NextTab,
    PrevTab,
    ToggleHelp,
    SetTime(DateTime<FixedOffset>),
    SlideBy(f64),
    SlideTo(f64),
    StoryNext,
    StoryPrev,
    BrushSelect(BrushRect),
    BrushAnchor(DateTime<FixedOffset>, f64),
    BrushExtend(DateTime<FixedOffset>, f64),
    BrushRelease,
    ClearBrush,
    BeginSearch,
    EndSearch,
    CancelSearch,
    SetQuery(String),
    SelectWedge(usize),
    RowUp,
    RowDown,
    CycleTheme,
    CopyCommitId,
    CopyCommitUrl,
    Open,
}

/// Apply one intent to the state. Returns true when the dashboard should
/// exit.
pub fn apply(app: &mut App, intent: Intent) -> bool {
    match intent {
        Intent::Quit => return true,
        Intent::NextTab => app.tab = app.tab.next(),
        Intent::PrevTab => app.tab = app.tab.prev(),
        Intent::ToggleHelp => app.help = !app.help,
        Intent::SetTime(t) => set_time(app, t),
        Intent::SlideBy(delta) => {
            if let Some(scale) = app.cursor.scale() {
                let target = (app.cursor.progress() + delta).clamp(0.0, 100.0);
                set_time(app, scale.invert(target));
            }
        }
        Intent::SlideTo(position) => {
            if let Some(scale) = app.cursor.scale() {
                set_time(app, scale.invert(position.clamp(0.0, 100.0)));
            }
        }
        Intent::StoryNext => story_step(app, 1),
        Intent::StoryPrev => story_step(app, -1),
        Intent::BrushSelect(rect) => select_brush(app, rect),
        Intent::BrushAnchor(t, hour) => {
            app.drag_from = Some((t, hour));
            select_brush(app, BrushRect::new(t, t, hour, hour));
        }
        Intent::BrushExtend(t, hour) => {
            if let Some((from, hour_from)) = app.drag_from {
                select_brush(app, BrushRect::new(from, t, hour_from, hour));
            }
        }
        Intent::BrushRelease => app.drag_from = None,
        Intent::ClearBrush => clear_brush(app),
        Intent::BeginSearch => app.search_mode = true,
        Intent::EndSearch => app.search_mode = false,
        Intent::CancelSearch => {
            app.search_mode = false;
            set_query(app, String::new());
        }
        Intent::SetQuery(query) => set_query(app, query),
        Intent::SelectWedge(index) => {
            let year = {
                let shown = app.visible_projects();
                year_slices(&shown).get(index).map(|s| s.year)
            };
            if let Some(year) = year {
                app.selected_year = toggle_year(app.selected_year, year);
                app.project_row = 0;
            }
        }
        Intent::RowUp => match app.tab {
            Tab::Projects => app.project_row = app.project_row.saturating_sub(1),
            Tab::Files => app.file_row = app.file_row.saturating_sub(1),
            _ => {}
        },
        Intent::RowDown => match app.tab {
            Tab::Projects => {
                let len = app.visible_projects().len();
                if app.project_row + 1 < len {
                    app.project_row += 1;
                }
            }
            Tab::Files => {
                let len = file_dots(app.cursor.filtered()).len();
                if app.file_row + 1 < len {
                    app.file_row += 1;
                }
            }
            _ => {}
        },
        Intent::CycleTheme => {
            app.theme_pref = app.theme_pref.cycle();
            app.theme = Theme::resolve(app.theme_pref);
            match config::save_config(&Config {
                theme: app.theme_pref,
            }) {
                Ok(()) => app.set_status(format!("Theme: {}", app.theme_pref.label())),
                Err(err) => app.set_status(format!("Config error: {err}")),
            }
        }
        Intent::CopyCommitId => {
            let target = app
                .focused_commit()
                .map(|c| (c.id.clone(), c.short_id()));
            if let Some((id, short)) = target {
                match copy_to_clipboard(&id) {
                    Ok(()) => app.set_status(format!("Copied: {short}")),
                    Err(err) => app.set_status(format!("Clipboard error: {err}")),
                }
            }
        }
        Intent::CopyCommitUrl => {
            let target = app.focused_commit().and_then(|c| c.url.clone());
            match target {
                Some(url) => match copy_to_clipboard(&url) {
                    Ok(()) => app.set_status("Copied commit link"),
                    Err(err) => app.set_status(format!("Clipboard error: {err}")),
                },
                None => app.set_status("No commit link (pass --link-base)"),
            }
        }
        Intent::Open => {
            let target = match app.tab {
                Tab::Projects => {
                    let shown = app.visible_projects();
                    shown.get(app.project_row).and_then(|p| p.url.clone())
                }
                _ => app.focused_commit().and_then(|c| c.url.clone()),
            };
            match target {
                Some(url) => match open::that(&url) {
                    Ok(()) => app.set_status(format!("Opened {url}")),
                    Err(err) => app.set_status(format!("Open error: {err}")),
                },
                None => app.set_status("No link to open"),
            }
        }
    }
    false
}

/// Move the time filter. Every path that changes the visible commit window
/// funnels through here, so the brush selection never outlives its view.
fn set_time(app: &mut App, t: DateTime<FixedOffset>) {
    app.cursor.set_max_time(t);
    app.story_index = None;
    clear_brush(app);
}

fn clear_brush(app: &mut App) {
    app.brush = None;
    app.drag_from = None;
    app.selected_count = 0;
    app.breakdown.clear();
}

fn select_brush(app: &mut App, rect: BrushRect) {
    let (count, breakdown) = {
        let selected = brushed(app.cursor.filtered(), &rect);
        (selected.len(), language_breakdown(&selected))
    };
    app.brush = Some(rect);
    app.selected_count = count;
    app.breakdown = breakdown;
}

fn story_step(app: &mut App, delta: i64) {
    let len = app.cursor.commits().len();
    if len == 0 {
        return;
    }
    let next = match app.story_index {
        Some(i) => (i as i64 + delta).clamp(0, len as i64 - 1) as usize,
        None => 0,
    };
    let t = app.cursor.commits()[next].datetime;
    set_time(app, t);
    app.story_index = Some(next);
}

fn set_query(app: &mut App, query: String) {
    app.query = query;
    app.selected_year = None;
    app.project_row = 0;
}

fn copy_to_clipboard(text: &str) -> std::result::Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemePref;
    use crate::meta::{group_commits, summarize, TimeCursor};
    use crate::model::{LineRecord, ProjectEntry};
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn rec(commit: &str, file: &str, language: &str, dt: &str) -> LineRecord {
        let datetime = DateTime::parse_from_rfc3339(dt).unwrap();
        LineRecord {
            commit: commit.to_string(),
            file: file.to_string(),
            line: 1,
            depth: 1,
            length: 10,
            language: language.to_string(),
            author: "maya".to_string(),
            date: datetime.date_naive(),
            time: datetime.format("%H:%M:%S").to_string(),
            timezone: "+00:00".to_string(),
            datetime,
        }
    }

    fn project(title: &str, year: Option<u32>) -> ProjectEntry {
        ProjectEntry {
            title: title.to_string(),
            year,
            description: String::new(),
            image: None,
            url: None,
        }
    }

    fn sample_app() -> App {
        let records = vec![
            rec("aaa", "app.js", "js", "2024-03-01T09:15:00+00:00"),
            rec("bbb", "app.js", "js", "2024-03-02T14:30:00+00:00"),
            rec("ccc", "style.css", "css", "2024-03-03T23:00:00+00:00"),
        ];
        let commits = group_commits(&records, None);
        let summary = summarize(&commits);
        let projects = vec![
            project("Alpha", Some(2024)),
            project("Beta", Some(2024)),
            project("Gamma", Some(2023)),
            project("Delta", None),
        ];
        App::new(TimeCursor::new(commits), summary, projects, ThemePref::Dark)
    }

    fn full_brush(app: &App) -> BrushRect {
        let scale = app.cursor.scale().unwrap();
        BrushRect::new(scale.min(), scale.max(), 0.0, 24.0)
    }

    #[test]
    fn moving_the_time_filter_drops_the_brush() {
        let mut app = sample_app();
        let rect = full_brush(&app);
        apply(&mut app, Intent::BrushSelect(rect));
        assert_eq!(app.selected_count, 3);
        assert!(!app.breakdown.is_empty());

        let scale = app.cursor.scale().unwrap();
        apply(&mut app, Intent::SetTime(scale.min()));
        assert!(app.brush.is_none());
        assert_eq!(app.selected_count, 0);
        assert!(app.breakdown.is_empty());
        assert_eq!(app.cursor.filtered().len(), 1);
    }

    #[test]
    fn story_steps_drive_the_time_cursor() {
        let mut app = sample_app();
        apply(&mut app, Intent::StoryNext);
        assert_eq!(app.story_index, Some(0));
        assert_eq!(app.cursor.filtered().len(), 1);

        apply(&mut app, Intent::StoryNext);
        assert_eq!(app.story_index, Some(1));
        assert_eq!(app.cursor.filtered().len(), 2);

        apply(&mut app, Intent::StoryPrev);
        assert_eq!(app.story_index, Some(0));
        assert_eq!(app.cursor.filtered().len(), 1);

        // already at the first commit
        apply(&mut app, Intent::StoryPrev);
        assert_eq!(app.story_index, Some(0));
    }

    #[test]
    fn slider_jumps_hit_both_ends() {
        let mut app = sample_app();
        apply(&mut app, Intent::SlideTo(0.0));
        assert_eq!(app.cursor.filtered().len(), 1);
        apply(&mut app, Intent::SlideTo(100.0));
        assert_eq!(app.cursor.filtered().len(), 3);
    }

    #[test]
    fn empty_brush_zeroes_the_breakdown_only() {
        let mut app = sample_app();
        let t0 = DateTime::parse_from_rfc3339("2020-01-01T00:00:00+00:00").unwrap();
        let t1 = DateTime::parse_from_rfc3339("2020-01-02T00:00:00+00:00").unwrap();
        apply(&mut app, Intent::BrushSelect(BrushRect::new(t0, t1, 0.0, 24.0)));

        assert!(app.brush.is_some());
        assert_eq!(app.selected_count, 0);
        assert!(app.breakdown.is_empty());
        // the files panel keys off the time filter, not the brush
        assert_eq!(file_dots(app.cursor.filtered()).len(), 2);
    }

    #[test]
    fn wedge_toggle_restores_the_full_list() {
        let mut app = sample_app();
        apply(&mut app, Intent::SelectWedge(0));
        assert_eq!(app.selected_year, Some(2024));
        assert_eq!(app.visible_projects().len(), 2);

        // the pie now shows a single wedge; toggling it again clears
        apply(&mut app, Intent::SelectWedge(0));
        assert_eq!(app.selected_year, None);
        assert_eq!(app.visible_projects().len(), 4);
    }

    #[test]
    fn a_new_query_clears_the_wedge() {
        let mut app = sample_app();
        apply(&mut app, Intent::SelectWedge(1));
        assert_eq!(app.selected_year, Some(2023));

        apply(&mut app, Intent::SetQuery("alpha".to_string()));
        assert_eq!(app.selected_year, None);
        assert_eq!(app.query, "alpha");
        assert_eq!(app.visible_projects().len(), 1);
    }

    #[test]
    fn cancelling_search_resets_query_and_wedge() {
        let mut app = sample_app();
        apply(&mut app, Intent::BeginSearch);
        apply(&mut app, Intent::SetQuery("gamma".to_string()));
        apply(&mut app, Intent::CancelSearch);
        assert!(!app.search_mode);
        assert!(app.query.is_empty());
        assert_eq!(app.visible_projects().len(), 4);
    }

    #[test]
    fn drag_extends_from_the_anchor() {
        let mut app = sample_app();
        let scale = app.cursor.scale().unwrap();
        apply(&mut app, Intent::BrushAnchor(scale.min(), 9.0));
        assert_eq!(app.selected_count, 0);

        apply(&mut app, Intent::BrushExtend(scale.max(), 24.0));
        assert_eq!(app.selected_count, 3);

        apply(&mut app, Intent::BrushRelease);
        assert!(app.drag_from.is_none());
        assert_eq!(app.selected_count, 3);
    }
}
