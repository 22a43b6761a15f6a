use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::state::{AppState, Field, Selector};

const LABEL_WIDTH: usize = 17;
const INPUT_PREFIX: &str = "> ";

pub fn render_configure_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Selectors
            Constraint::Length(3), // Command input
            Constraint::Min(0),    // Output
        ])
        .split(area);

    render_selectors(f, chunks[0], state);
    render_command_input(f, chunks[1], state);
    render_output(f, chunks[2], state);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn selector_line<'a>(label: &'a str, selector: &'a Selector, focused: bool) -> Line<'a> {
    let value = if selector.value().is_empty() {
        Span::styled("(none)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(selector.value(), Style::default().fg(Color::White))
    };

    let marker_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(format!("{:>width$} ", label, width = LABEL_WIDTH), focus_style(focused)),
        Span::styled("< ", marker_style),
        value,
        Span::styled(" >", marker_style),
    ])
}

fn render_selectors(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        selector_line("COM Port:", &state.port, state.focus == Field::Port),
        selector_line("BAUD Rate:", &state.baud, state.focus == Field::Baud),
        selector_line("Cisco Commands:", &state.command, state.focus == Field::Command),
        selector_line("Executions:", &state.macros, state.focus == Field::Macro),
    ];

    let selectors = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Connection")
            .border_style(focus_style(state.focus.is_selector())),
    );

    f.render_widget(selectors, area);
}

fn render_command_input(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Field::Input;

    let input = Paragraph::new(format!("{}{}", INPUT_PREFIX, state.input.content()))
        .style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Commands (Enter to run)")
                .border_style(focus_style(focused)),
        );

    f.render_widget(input, area);

    if focused && !state.is_running() {
        f.set_cursor(
            area.x + 1 + (INPUT_PREFIX.len() + state.input.cursor_position()) as u16,
            area.y + 1,
        );
    }
}

fn render_output(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Field::Output;

    let lines: Vec<Line> = state.output_lines().map(Line::from).collect();
    let title = match &state.running {
        Some(port) => format!("Output - running on {}", port),
        None => format!("Output ({} lines)", lines.len()),
    };

    let output = Paragraph::new(lines)
        .scroll((state.output_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(focus_style(focused)),
        );

    f.render_widget(output, area);
}
