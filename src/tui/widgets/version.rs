use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::about::{version_banner, CHANGELOG};

pub fn render_version_panel(f: &mut Frame, area: Rect) {
    let mut content = vec![
        Line::from(Span::styled(
            version_banner(),
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
        )),
        Line::from(""),
    ];
    content.extend(CHANGELOG.lines().map(Line::from));

    let version = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title("Version"))
        .wrap(Wrap { trim: false });

    f.render_widget(version, area);
}
