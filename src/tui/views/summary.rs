use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};
use ratatui::Frame;

use super::super::state::App;

/// Render the dataset-wide tiles with a per-commit activity sparkline.
pub fn draw_summary_view(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let theme = &app.theme;
    let summary = &app.summary;
    let label = |text: &str| {
        Span::styled(
            format!("{text:<18}"),
            Style::default().fg(theme.muted),
        )
    };
    let value = |text: String| Span::styled(text, Style::default().fg(theme.accent));

    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Codebase Summary",
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![label("Commits"), value(summary.commits.to_string())]),
        Line::from(vec![label("Files"), value(summary.files.to_string())]),
        Line::from(vec![
            label("Total lines"),
            value(summary.total_lines.to_string()),
        ]),
        Line::from(vec![
            label("Max depth"),
            value(summary.max_depth.to_string()),
        ]),
        Line::from(vec![
            label("Longest line"),
            value(format!("{} chars", summary.longest_line)),
        ]),
    ];
    if let Some(file) = &summary.largest_file {
        lines.push(Line::from(vec![
            label("Largest file"),
            value(format!("{} ({} lines)", file.path, file.lines)),
        ]));
    }
    if let Some(day) = &summary.busiest_weekday {
        lines.push(Line::from(vec![label("Most active day"), value(day.clone())]));
    }
    if let Some(period) = &summary.busiest_period {
        lines.push(Line::from(vec![
            label("Most active time"),
            value(period.clone()),
        ]));
    }
    if app.cursor.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No line data loaded",
            Style::default().fg(theme.negative),
        )));
    }

    let overview = Paragraph::new(lines).block(
        Block::default()
            .title("Overview")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(overview, chunks[0]);

    let trend: Vec<u64> = app
        .cursor
        .commits()
        .iter()
        .map(|c| c.total_lines as u64)
        .collect();
    if trend.len() > 1 {
        let sparkline = Sparkline::default()
            .block(
                Block::default()
                    .title("Lines per commit")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            )
            .data(&trend)
            .style(Style::default().fg(theme.accent));
        f.render_widget(sparkline, chunks[1]);
    }
}
