use chrono::{DateTime, FixedOffset};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use super::state::{App, Tab};
use super::update::Intent;

/// Translate a key press into an intent. Pure; `update::apply` mutates.
pub fn map_key(key: KeyEvent, app: &App) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if app.help {
        return matches!(
            key.code,
            KeyCode::Char('h') | KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q')
        )
        .then_some(Intent::ToggleHelp);
    }

    if app.search_mode {
        return map_search_key(key.code, app);
    }

    match key.code {
        KeyCode::Char('q') => Some(Intent::Quit),
        KeyCode::Char('h') | KeyCode::F(1) => Some(Intent::ToggleHelp),
        KeyCode::Tab => Some(Intent::NextTab),
        KeyCode::BackTab => Some(Intent::PrevTab),
        KeyCode::Char('t') => Some(Intent::CycleTheme),
        code => match app.tab {
            Tab::Summary => None,
            Tab::Timeline => map_timeline_key(code),
            Tab::Files => map_list_key(code),
            Tab::Projects => map_projects_key(code),
        },
    }
}

fn map_timeline_key(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Left => Some(Intent::SlideBy(-2.0)),
        KeyCode::Right => Some(Intent::SlideBy(2.0)),
        KeyCode::PageUp => Some(Intent::SlideBy(-10.0)),
        KeyCode::PageDown => Some(Intent::SlideBy(10.0)),
        KeyCode::Home => Some(Intent::SlideTo(0.0)),
        KeyCode::End => Some(Intent::SlideTo(100.0)),
        KeyCode::Char(']') | KeyCode::Char('j') | KeyCode::Down => Some(Intent::StoryNext),
        KeyCode::Char('[') | KeyCode::Char('k') | KeyCode::Up => Some(Intent::StoryPrev),
        KeyCode::Esc => Some(Intent::ClearBrush),
        KeyCode::Char('c') => Some(Intent::CopyCommitId),
        KeyCode::Char('y') => Some(Intent::CopyCommitUrl),
        KeyCode::Char('o') => Some(Intent::Open),
        _ => None,
    }
}

fn map_list_key(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::RowUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::RowDown),
        _ => None,
    }
}

fn map_projects_key(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Char('/') => Some(Intent::BeginSearch),
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::RowUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::RowDown),
        KeyCode::Char('o') | KeyCode::Enter => Some(Intent::Open),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10)? as usize;
            (digit >= 1).then(|| Intent::SelectWedge(digit - 1))
        }
        _ => None,
    }
}

fn map_search_key(code: KeyCode, app: &App) -> Option<Intent> {
    match code {
        KeyCode::Esc => Some(Intent::CancelSearch),
        KeyCode::Enter => Some(Intent::EndSearch),
        KeyCode::Backspace => {
            let mut query = app.query.clone();
            query.pop();
            Some(Intent::SetQuery(query))
        }
        KeyCode::Char(c) => {
            let mut query = app.query.clone();
            query.push(c);
            Some(Intent::SetQuery(query))
        }
        _ => None,
    }
}

/// Translate a mouse event. Wheel steps the story or the lists; dragging
/// on the scatter chart brushes commits.
pub fn map_mouse(mouse: MouseEvent, app: &App) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::ScrollUp => match app.tab {
            Tab::Timeline => Some(Intent::StoryPrev),
            Tab::Files | Tab::Projects => Some(Intent::RowUp),
            Tab::Summary => None,
        },
        MouseEventKind::ScrollDown => match app.tab {
            Tab::Timeline => Some(Intent::StoryNext),
            Tab::Files | Tab::Projects => Some(Intent::RowDown),
            Tab::Summary => None,
        },
        MouseEventKind::Down(MouseButton::Left) => {
            let (t, hour) = chart_point(app, mouse.column, mouse.row)?;
            Some(Intent::BrushAnchor(t, hour))
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let (t, hour) = chart_point(app, mouse.column, mouse.row)?;
            Some(Intent::BrushExtend(t, hour))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(Intent::BrushRelease),
        _ => None,
    }
}

/// Map a terminal cell inside the chart's plot region to data space: x
/// becomes a slider position run through the time scale, y an hour of day
/// with 24:00 on the top row.
fn chart_point(app: &App, column: u16, row: u16) -> Option<(DateTime<FixedOffset>, f64)> {
    if app.tab != Tab::Timeline {
        return None;
    }
    let area = app.chart_area?;
    let scale = app.cursor.scale()?;
    if column < area.left() || column >= area.right() || row < area.top() || row >= area.bottom() {
        return None;
    }

    let max_x = f64::from(area.width.saturating_sub(1).max(1));
    let max_y = f64::from(area.height.saturating_sub(1).max(1));
    let x = f64::from(column - area.x) / max_x;
    let y = f64::from(row - area.y) / max_y;
    Some((scale.invert(x * 100.0), (1.0 - y) * 24.0))
}
