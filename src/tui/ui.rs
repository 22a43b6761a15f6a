use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::{
    state::{ActivePanel, AppState},
    widgets::{
        configure::render_configure_panel,
        help::render_help_panel,
        status::render_status_bar,
        version::render_version_panel,
    },
};
use crate::domain::about::APP_TITLE;

pub fn draw_ui(f: &mut Frame, state: &AppState) {
    let size = f.size();

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    // Tab bar
    let titles: Vec<String> = ActivePanel::ALL
        .iter()
        .enumerate()
        .map(|(i, panel)| format!("F{} {}", i + 1, panel))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(APP_TITLE))
        .select(state.active_panel.index())
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::Blue)
                .fg(Color::White),
        );
    f.render_widget(tabs, chunks[0]);

    // Main content area
    match state.active_panel {
        ActivePanel::Configure => render_configure_panel(f, chunks[1], state),
        ActivePanel::Version => render_version_panel(f, chunks[1]),
        ActivePanel::Help => render_help_panel(f, chunks[1]),
    }

    // Status bar
    render_status_bar(f, chunks[2], state);
}
