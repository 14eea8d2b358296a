use std::collections::HashSet;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph};
use ratatui::Frame;

use crate::meta::brushed;
use crate::model::Commit;

use super::super::layout::timeline_panes;
use super::super::state::App;

/// Render the time slider, the hour-of-day scatter chart, the commit story,
/// and the brushed language breakdown. Returns the chart's plot region for
/// mouse mapping.
pub fn draw_timeline_view(f: &mut Frame, area: Rect, app: &App) -> Option<Rect> {
    let panes = timeline_panes(area);
    draw_slider(f, panes.slider, app);
    let plot = draw_chart(f, panes.chart, app);
    draw_story(f, panes.story, app);
    draw_breakdown(f, panes.breakdown, app);
    plot
}

fn draw_slider(f: &mut Frame, area: Rect, app: &App) {
    let label = if app.cursor.is_empty() {
        "no commits".to_string()
    } else {
        format!("as of {}", app.cursor.max_time().format("%b %e, %Y %H:%M"))
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title("Time filter")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .gauge_style(Style::default().fg(app.theme.gauge))
        .percent(app.cursor.progress().clamp(0.0, 100.0).round() as u16)
        .label(label);
    f.render_widget(gauge, area);
}

/// Dot size classes come from terciles over the full dataset, so a commit
/// keeps its marker as the time filter moves.
fn size_thresholds(commits: &[Commit]) -> (usize, usize) {
    let mut totals: Vec<usize> = commits.iter().map(|c| c.total_lines).collect();
    totals.sort_unstable();
    if totals.is_empty() {
        return (0, 0);
    }
    (totals[totals.len() / 3], totals[totals.len() * 2 / 3])
}

fn draw_chart(f: &mut Frame, area: Rect, app: &App) -> Option<Rect> {
    let theme = &app.theme;
    let Some(scale) = app.cursor.scale() else {
        let empty = Paragraph::new("No commits to plot")
            .style(Style::default().fg(theme.muted))
            .block(
                Block::default()
                    .title("Commits by time of day")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            );
        f.render_widget(empty, area);
        return None;
    };

    let (t1, t2) = size_thresholds(app.cursor.commits());
    let mut small: Vec<(f64, f64)> = Vec::new();
    let mut medium: Vec<(f64, f64)> = Vec::new();
    let mut large: Vec<(f64, f64)> = Vec::new();
    for commit in app.cursor.filtered() {
        let point = (scale.position(commit.datetime), commit.hour_frac);
        if commit.total_lines <= t1 {
            small.push(point);
        } else if commit.total_lines <= t2 {
            medium.push(point);
        } else {
            large.push(point);
        }
    }
    let selected: Vec<(f64, f64)> = match &app.brush {
        Some(rect) => brushed(app.cursor.filtered(), rect)
            .iter()
            .map(|c| (scale.position(c.datetime), c.hour_frac))
            .collect(),
        None => Vec::new(),
    };

    let accent = Style::default().fg(theme.accent);
    let datasets = vec![
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(accent)
            .data(&small),
        Dataset::default()
            .marker(Marker::HalfBlock)
            .graph_type(GraphType::Scatter)
            .style(accent)
            .data(&medium),
        Dataset::default()
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(accent)
            .data(&large),
        Dataset::default()
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme.cursor))
            .data(&selected),
    ];

    let x_labels = vec![
        Span::styled(
            scale.min().format("%b %e").to_string(),
            Style::default().fg(theme.muted),
        ),
        Span::styled(
            scale.max().format("%b %e").to_string(),
            Style::default().fg(theme.muted),
        ),
    ];
    let y_labels: Vec<Span> = [0u32, 6, 12, 18, 24]
        .iter()
        .map(|h| Span::styled(format!("{h:02}:00"), Style::default().fg(theme.muted)))
        .collect();

    let title = match &app.brush {
        Some(_) => format!("Commits by time of day ({} selected)", app.selected_count),
        None => "Commits by time of day".to_string(),
    };
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, 100.0])
                .labels(x_labels)
                .style(Style::default().fg(theme.border)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 24.0])
                .labels(y_labels)
                .style(Style::default().fg(theme.border)),
        );
    f.render_widget(chart, area);

    // plot region for mouse brushing, inset past the borders and axis labels
    Some(Rect {
        x: area.x + 7,
        y: area.y + 1,
        width: area.width.saturating_sub(9),
        height: area.height.saturating_sub(4),
    })
}

fn draw_story(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let commits = app.cursor.commits();
    let shown = app.cursor.filtered().len();

    let mut lines: Vec<Line> = Vec::new();
    if commits.is_empty() {
        lines.push(Line::from(Span::styled(
            "No commit story to tell",
            Style::default().fg(theme.muted),
        )));
    } else {
        let focus = app.story_index.unwrap_or_else(|| shown.saturating_sub(1));
        let rows = (area.height.saturating_sub(2) as usize / 2).max(1);
        let start = focus
            .saturating_sub(rows / 2)
            .min(commits.len().saturating_sub(rows));
        for (i, commit) in commits.iter().enumerate().skip(start).take(rows) {
            let reached = i < shown;
            let marker = if Some(i) == app.story_index { " ◄" } else { "" };
            let head_style = if reached {
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    commit.datetime.format("%b %e, %Y %H:%M").to_string(),
                    head_style,
                ),
                Span::styled(marker, Style::default().fg(theme.cursor)),
            ]));

            let files: HashSet<&str> = commit.lines().iter().map(|r| r.file.as_str()).collect();
            let body = if i == 0 {
                format!(
                    "  First commit: {} lines across {} files",
                    commit.total_lines,
                    files.len()
                )
            } else {
                format!(
                    "  {} lines across {} files by {}",
                    commit.total_lines,
                    files.len(),
                    commit.author
                )
            };
            let body_style = if reached {
                Style::default().fg(theme.text)
            } else {
                Style::default().fg(theme.muted)
            };
            lines.push(Line::from(Span::styled(body, body_style)));
        }
    }

    let story = Paragraph::new(lines).block(
        Block::default()
            .title(format!("Story ({}/{})", shown, commits.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(story, area);
}

fn draw_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let heading = match (&app.brush, app.selected_count) {
        (None, _) => "Drag on the chart to select commits".to_string(),
        (Some(_), 0) => "No commits selected".to_string(),
        (Some(_), n) => format!("{n} commits selected"),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            heading,
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let bar_width = f64::from(area.width.saturating_sub(30).max(10));
    for stat in &app.breakdown {
        let color = theme.ordinal(app.language_index(&stat.language));
        let filled = ((stat.share / 100.0) * bar_width).round().max(1.0) as usize;
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", stat.language),
                Style::default().fg(theme.text),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled(
                format!(" {} lines ({:.1}%)", stat.lines, stat.share),
                Style::default().fg(theme.muted),
            ),
        ]));
    }

    let breakdown = Paragraph::new(lines).block(
        Block::default()
            .title("Language Breakdown")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(breakdown, area);
}
