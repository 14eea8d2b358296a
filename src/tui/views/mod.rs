use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Tabs};
use ratatui::Frame;

mod files;
mod help;
mod projects;
mod summary;
mod timeline;

pub use files::draw_files_view;
pub use help::draw_help_overlay;
pub use projects::draw_projects_view;
pub use summary::draw_summary_view;
pub use timeline::draw_timeline_view;

use super::layout::{chrome, MIN_HEIGHT, MIN_WIDTH};
use super::state::{App, Tab};

/// Draw one frame: tab strip, the active view, status line, help overlay.
/// Also records the chart's plot region so mouse events can be mapped back
/// into data space.
pub fn draw_root(f: &mut Frame, app: &mut App) {
    let Some(chrome) = chrome(f.size()) else {
        let notice = Paragraph::new(format!(
            "Terminal too small: need at least {MIN_WIDTH}x{MIN_HEIGHT}"
        ));
        f.render_widget(notice, f.size());
        return;
    };

    let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("folio"))
        .style(Style::default().fg(app.theme.text))
        .highlight_style(
            Style::default()
                .fg(app.theme.cursor)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.tab.index());
    f.render_widget(tabs, chrome.tabs);

    app.chart_area = None;
    match app.tab {
        Tab::Summary => draw_summary_view(f, chrome.body, app),
        Tab::Timeline => app.chart_area = draw_timeline_view(f, chrome.body, app),
        Tab::Files => draw_files_view(f, chrome.body, app),
        Tab::Projects => draw_projects_view(f, chrome.body, app),
    }

    draw_status_line(f, chrome.status, app);

    if app.help {
        draw_help_overlay(f, f.size(), &app.theme);
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let text = match app.status_line() {
        Some(message) => message.to_string(),
        None => "q quit | h help | Tab views | t theme".to_string(),
    };
    let status = Paragraph::new(text).style(Style::default().fg(app.theme.muted));
    f.render_widget(status, area);
}

/// Convenience helper to build a styled table header cell.
pub(crate) fn header_cell(text: &str, color: Color) -> Cell<'static> {
    Cell::from(text.to_string()).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Truncate a string to `max` chars with an ellipsis when necessary.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}
