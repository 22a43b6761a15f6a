use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::about::{APP_TITLE, HELP_TEXT};

pub fn render_help_panel(f: &mut Frame, area: Rect) {
    let mut help_content = vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
        )),
        Line::from(""),
    ];
    help_content.extend(HELP_TEXT.lines().map(Line::from));

    let help = Paragraph::new(help_content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, area);
}
