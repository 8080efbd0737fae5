mod common;

use common::{board, one_move_from_dead};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use twenty48::board::{Board, Direction};
use twenty48::session::{GameCommand, GameSession};
use twenty48::store::{KeyValueStore, MemoryStore};
use twenty48::ui::app::{App, PlaySession};
use twenty48::ui::game_over::{DialogButton, GameOverDialogState};

fn session_on(board: Board) -> PlaySession {
    let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    GameSession::with_board(board, StdRng::seed_from_u64(5), store)
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn single_two() -> Board {
    board([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]])
}

#[test]
fn keys_only_enqueue_until_processed() {
    let mut app = App::new(session_on(single_two()));
    app.on_key(press(KeyCode::Right));
    assert_eq!(app.snapshot().board, single_two());

    app.process_commands();
    assert_eq!(app.snapshot().board.get(0, 3), Some(2));
    assert_eq!(app.snapshot().board.tile_count(), 2);
}

#[test]
fn letter_keys_move_too() {
    let mut app = App::new(session_on(single_two()));
    app.on_key(press(KeyCode::Char('s')));
    app.process_commands();
    assert_eq!(app.snapshot().board.get(3, 0), Some(2));
}

#[test]
fn key_release_is_ignored() {
    let mut app = App::new(session_on(single_two()));
    let mut release = press(KeyCode::Right);
    release.kind = KeyEventKind::Release;
    release.state = KeyEventState::NONE;
    app.on_key(release);
    app.process_commands();
    assert_eq!(app.snapshot().board, single_two());
}

#[test]
fn quit_keys_request_exit() {
    let mut app = App::new(session_on(single_two()));
    app.on_key(press(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = App::new(session_on(single_two()));
    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn horizontal_drag_becomes_a_swipe() {
    let mut app = App::new(session_on(single_two()));
    app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
    app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 11));
    // The gesture is consumed; further drag samples do nothing.
    app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 30));
    app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 30));
    app.process_commands();

    let board = app.snapshot().board;
    assert_eq!(board.get(0, 3), Some(2));
    assert_eq!(board.tile_count(), 2);
}

#[test]
fn drag_without_press_is_ignored() {
    let mut app = App::new(session_on(single_two()));
    app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10));
    app.process_commands();
    assert_eq!(app.snapshot().board, single_two());
}

#[test]
fn remote_sender_feeds_the_same_queue() {
    let mut app = App::new(session_on(single_two()));
    let sender = app.command_sender();
    assert!(sender.send(GameCommand::Move(Direction::Down)));
    app.process_commands();
    assert_eq!(app.snapshot().board.get(3, 0), Some(2));
}

#[test]
fn game_over_shows_dialog_and_enter_restarts() {
    let mut app = App::new(session_on(one_move_from_dead()));
    app.on_key(press(KeyCode::Right));
    app.process_commands();

    assert!(app.snapshot().is_over);
    assert!(matches!(
        app.game_over_dialog(),
        GameOverDialogState::Visible {
            selected: DialogButton::Restart,
            ..
        }
    ));

    // Moves are ignored while the game is over.
    app.on_key(press(KeyCode::Up));
    app.on_key(press(KeyCode::Enter));
    app.process_commands();

    assert!(!app.snapshot().is_over);
    assert_eq!(app.snapshot().board.tile_count(), 2);
    assert!(!app.game_over_dialog().is_visible());
}

#[test]
fn closing_the_dialog_keeps_the_final_board() {
    let mut app = App::new(session_on(one_move_from_dead()));
    app.on_key(press(KeyCode::Right));
    app.process_commands();
    let final_board = app.snapshot().board;

    app.on_key(press(KeyCode::Tab));
    assert_eq!(app.game_over_dialog().selected(), Some(DialogButton::Close));
    app.on_key(press(KeyCode::Enter));
    app.process_commands();

    assert!(!app.game_over_dialog().is_visible());
    assert!(app.snapshot().is_over);
    assert_eq!(app.snapshot().board, final_board);

    app.on_key(press(KeyCode::Char('r')));
    app.process_commands();
    assert!(!app.snapshot().is_over);
}

#[test]
fn escape_dismisses_the_dialog() {
    let mut app = App::new(session_on(one_move_from_dead()));
    app.on_key(press(KeyCode::Right));
    app.process_commands();
    assert!(app.game_over_dialog().is_visible());

    app.on_key(press(KeyCode::Esc));
    assert!(!app.game_over_dialog().is_visible());
}
