//! Game-over overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};

use super::state::{DialogButton, GameOverDialogState};

const DIALOG_WIDTH: u16 = 36;
const DIALOG_HEIGHT: u16 = 8;

pub fn render_game_over_dialog(frame: &mut Frame, state: &GameOverDialogState, area: Rect) {
    let GameOverDialogState::Visible {
        final_score,
        selected,
        ..
    } = state
    else {
        return;
    };

    let area = centered_rect_by_size(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Game Over ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER))
        .title_style(Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD));

    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("Final score: {}", final_score), text_style)),
    ];
    if state.is_high_score() {
        lines.push(Line::from(Span::styled(
            "New high score!",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        button("Play again", *selected == DialogButton::Restart),
        Span::raw("   "),
        button("Close", *selected == DialogButton::Close),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Span::styled(format!("[ {} ]", label), style)
}
