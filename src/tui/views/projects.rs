use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::model::ProjectEntry;
use crate::projects::year_slices;

use super::super::layout::projects_panes;
use super::super::state::App;
use super::{header_cell, truncate};

/// Render the searchable project list next to the year wedges. The wedges
/// are re-derived from the visible set, so a selected year collapses the
/// pie to its own slice until toggled off.
pub fn draw_projects_view(f: &mut Frame, area: Rect, app: &App) {
    let panes = projects_panes(area);
    draw_search_bar(f, panes.search, app);
    let shown = app.visible_projects();
    draw_project_list(f, panes.list, app, &shown);
    draw_year_wedges(f, panes.pie, app, &shown);
}

fn draw_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if app.search_mode {
        format!("{}▌", app.query)
    } else if app.query.is_empty() {
        "press / to search".to_string()
    } else {
        app.query.clone()
    };
    let style = if app.search_mode {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };
    let bar = Paragraph::new(text).style(style).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(bar, area);
}

fn draw_project_list(f: &mut Frame, area: Rect, app: &App, shown: &[&ProjectEntry]) {
    let theme = &app.theme;
    let title = match app.selected_year {
        Some(year) => format!("Projects ({} in {year})", shown.len()),
        None => format!("Projects ({})", shown.len()),
    };

    if shown.is_empty() {
        let empty = Paragraph::new("No matching projects")
            .style(Style::default().fg(theme.muted))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            );
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = shown
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let year = project
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string());
            let marker = if i == app.project_row { "◄" } else { "" };
            let style = if i == app.project_row {
                Style::default()
                    .fg(theme.cursor)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Row::new(vec![
                Cell::from(year),
                Cell::from(truncate(&project.title, 26)),
                Cell::from(truncate(&project.description, 44)),
                Cell::from(marker),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(28),
            Constraint::Min(20),
            Constraint::Length(2),
        ],
    )
    .header(Row::new([
        header_cell("Year", theme.heading),
        header_cell("Title", theme.heading),
        header_cell("Description", theme.heading),
        header_cell("", theme.heading),
    ]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(table, area);
}

fn draw_year_wedges(f: &mut Frame, area: Rect, app: &App, shown: &[&ProjectEntry]) {
    let theme = &app.theme;
    let slices = year_slices(shown);

    let mut lines: Vec<Line> = Vec::new();
    if slices.is_empty() {
        lines.push(Line::from(Span::styled(
            "No dated projects",
            Style::default().fg(theme.muted),
        )));
    } else {
        let total: usize = slices.iter().map(|s| s.count).sum();
        let max = slices.iter().map(|s| s.count).max().unwrap_or(1);
        for (i, slice) in slices.iter().enumerate() {
            let selected = app.selected_year == Some(slice.year);
            let share = slice.count as f64 / total as f64 * 100.0;
            let marker = if selected { " ◄" } else { "" };
            let year_style = if selected {
                Style::default()
                    .fg(theme.cursor)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(theme.muted)),
                Span::styled(format!("{:<6}", slice.year), year_style),
                Span::styled(
                    "█".repeat((slice.count * 16 / max).max(1)),
                    Style::default().fg(theme.ordinal(i)),
                ),
                Span::styled(
                    format!(" {} ({share:.0}%){marker}", slice.count),
                    Style::default().fg(theme.muted),
                ),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "1-9 toggles a year wedge",
            Style::default().fg(theme.muted),
        )));
    }

    let pie = Paragraph::new(lines).block(
        Block::default()
            .title("By Year")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(pie, area);
}
