use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Fixed chrome around the active view: tab strip, body, status line.
pub struct Chrome {
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Carve out the chrome, or `None` when the terminal is too small to hold
/// a usable layout.
pub fn chrome(area: Rect) -> Option<Chrome> {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        return None;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    Some(Chrome {
        tabs: chunks[0],
        body: chunks[1],
        status: chunks[2],
    })
}

/// Timeline panes: slider strip on top, scatter chart on the left, story
/// and language breakdown stacked on the right.
pub struct TimelinePanes {
    pub slider: Rect,
    pub chart: Rect,
    pub story: Rect,
    pub breakdown: Rect,
}

pub fn timeline_panes(body: Rect) -> TimelinePanes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    TimelinePanes {
        slider: rows[0],
        chart: columns[0],
        story: side[0],
        breakdown: side[1],
    }
}

/// Projects panes: search bar on top, list on the left, year wedges right.
pub struct ProjectsPanes {
    pub search: Rect,
    pub list: Rect,
    pub pie: Rect,
}

pub fn projects_panes(body: Rect) -> ProjectsPanes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    ProjectsPanes {
        search: rows[0],
        list: columns[0],
        pie: columns[1],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
