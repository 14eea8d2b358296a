use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme::Theme;
use crate::tui::centered_rect;

/// Draw the modal help overlay describing navigation, views, and shortcuts.
pub fn draw_help_overlay(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(70, 80, area);

    f.render_widget(Clear, help_area);

    let section = |text: &'static str| {
        Line::from(vec![Span::styled(
            text,
            Style::default()
                .fg(theme.positive)
                .add_modifier(Modifier::BOLD),
        )])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "folio - Help",
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        section("Views:"),
        Line::from("  Tab         Next view (Summary/Timeline/Files/Projects)"),
        Line::from("  Shift+Tab   Previous view"),
        Line::from(""),
        section("Timeline:"),
        Line::from("  ←/→         Nudge the time filter"),
        Line::from("  PgUp/PgDn   Larger time steps"),
        Line::from("  Home/End    Jump to the first/last commit"),
        Line::from("  j/k, [ ]    Step the commit story"),
        Line::from("  Mouse drag  Brush commits on the chart"),
        Line::from("  Esc         Clear the brush"),
        Line::from("  c / y       Copy commit id / link"),
        Line::from("  o           Open the commit link"),
        Line::from(""),
        section("Projects:"),
        Line::from("  /           Search title, description, year"),
        Line::from("  j/k or ↑/↓  Move selection"),
        Line::from("  1-9         Toggle a year wedge"),
        Line::from("  o, Enter    Open the project link"),
        Line::from(""),
        section("General:"),
        Line::from("  t           Cycle theme (light/dark/auto)"),
        Line::from("  h, F1       Toggle this help"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press 'h' or 'Esc' to close this help",
            Style::default().fg(theme.muted),
        )]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
