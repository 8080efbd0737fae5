use crate::session::SessionSnapshot;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SCORE_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, snapshot: &SessionSnapshot) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let score_style = Style::default().fg(SCORE_TEXT).add_modifier(Modifier::BOLD);
        let (status, status_style) = if snapshot.is_over {
            ("Game over", Style::default().fg(STATUS_ERROR))
        } else {
            ("Playing", Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled("  2048", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("Score ", text_style),
            Span::styled(snapshot.score.to_string(), score_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Best ", text_style),
            Span::styled(snapshot.high_score.to_string(), score_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
