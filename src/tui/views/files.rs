use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::meta::file_dots;

use super::super::state::App;
use super::truncate;

/// Render one unit dot per line for each file under the time filter,
/// colored by language. The brush never narrows this panel; only the time
/// cutoff does.
pub fn draw_files_view(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let groups = file_dots(app.cursor.filtered());
    let title = format!("Files ({})", groups.len());

    if groups.is_empty() {
        let empty = Paragraph::new("No files under the current time filter")
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

    let rows = (area.height.saturating_sub(2) as usize / 2).max(1);
    let start = app.file_row.min(groups.len().saturating_sub(1));
    let dot_width = area.width.saturating_sub(6) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for group in groups.iter().skip(start).take(rows) {
        lines.push(Line::from(vec![
            Span::styled(
                truncate(&group.path, 48),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} lines", group.languages.len()),
                Style::default().fg(theme.muted),
            ),
        ]));

        let mut dots: Vec<Span> = vec![Span::raw("  ")];
        for language in group.languages.iter().take(dot_width) {
            let color = theme.ordinal(app.language_index(language));
            dots.push(Span::styled("•", Style::default().fg(color)));
        }
        if group.languages.len() > dot_width {
            dots.push(Span::styled(
                format!(" +{}", group.languages.len() - dot_width),
                Style::default().fg(theme.muted),
            ));
        }
        lines.push(Line::from(dots));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(panel, area);
}
