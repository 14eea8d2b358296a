use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::cli::CommonArgs;
use crate::config::load_config;
use crate::meta::{group_commits, summarize, TimeCursor};
use crate::projects::load_projects;

use super::events::{map_key, map_mouse};
use super::state::App;
use super::update::apply;
use super::views::draw_root;

/// Load the dashboard data and run the interactive loop. A missing line
/// data file leaves the commit views empty instead of failing; the projects
/// tab only needs its own file.
pub fn run(common: &CommonArgs) -> io::Result<()> {
    let range = crate::util::resolve_range(common.since.as_deref(), common.until.as_deref())
        .map_err(io::Error::other)?;
    let link_base = crate::git::resolve_link_base(common.repo.as_deref(), common.link_base.as_deref())
        .map_err(io::Error::other)?;

    let records = match crate::loc::load_records(&common.file, &range, false) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("Error reading {}: {err}", common.file.display());
            Vec::new()
        }
    };
    let commits = group_commits(&records, link_base.as_deref());
    let summary = summarize(&commits);
    let projects = load_projects(&common.projects).unwrap_or_default();
    let theme_pref = load_config().theme;

    let mut app = App::new(TimeCursor::new(commits), summary, projects, theme_pref);
    if records.is_empty() {
        app.set_status(format!("No line data at {}", common.file.display()));
    }

    enable_raw_mode()?;
    execute!(io::stdout(), EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    loop {
        let draw_result = terminal.draw(|f| draw_root(f, &mut app));
        if let Err(e) = draw_result {
            eprintln!("TUI draw error: {}", e);
        }

        if poll(Duration::from_millis(200))? {
            match read()? {
                Event::Key(key_event) => {
                    if let Some(intent) = map_key(key_event, &app) {
                        if apply(&mut app, intent) {
                            break;
                        }
                    }
                }
                Event::Mouse(mouse_event) => {
                    if let Some(intent) = map_mouse(mouse_event, &app) {
                        if apply(&mut app, intent) {
                            break;
                        }
                    }
                }
                _ => {}
            }
        }
    }

    terminal.clear()?;
    execute!(io::stdout(), DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}
