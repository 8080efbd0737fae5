use crate::ui::app::App;
use crate::ui::board_view::{board_size, BoardView};
use crate::ui::footer::Footer;
use crate::ui::game_over::render_game_over_dialog;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let snapshot = app.snapshot();

    frame.render_widget(Header::new().widget(&snapshot), header);

    frame.render_widget(Clear, body);
    let (width, height) = board_size();
    let board_area = centered_rect_by_size(width, height, body);
    frame.render_widget(BoardView::new(snapshot.board), board_area);

    frame.render_widget(Footer::new(app.keymap(), snapshot.is_over), footer);

    render_game_over_dialog(frame, app.game_over_dialog(), body);
}
