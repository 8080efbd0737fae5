use crate::input::{GestureTracker, InputAction, KeyMap};
use crate::session::{CommandQueue, CommandSender, GameCommand, GameSession, SessionSnapshot};
use crate::store::KeyValueStore;
use crate::ui::game_over::{DialogButton, GameOverDialogState, GameOverIntent, GameOverReducer};
use crate::ui::mvi::Reducer;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;

/// Session type driven by the terminal front-end.
pub type PlaySession = GameSession<StdRng, Box<dyn KeyValueStore>>;

/// Terminal cells are roughly twice as tall as wide; columns are scaled by
/// this factor so drags are classified in screen space.
const COLUMN_SCALE: f64 = 0.5;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Front-end state: the session plus everything that is purely presentation.
///
/// Input handlers only enqueue commands; [`App::process_commands`] is the
/// single place where the session is mutated.
pub struct App {
    session: PlaySession,
    queue: CommandQueue,
    keymap: KeyMap,
    gesture: GestureTracker,
    game_over_dialog: GameOverDialogState,
    should_quit: bool,
}

impl App {
    pub fn new(session: PlaySession) -> Self {
        Self::with_keymap(session, KeyMap::default())
    }

    pub fn with_keymap(session: PlaySession, keymap: KeyMap) -> Self {
        Self {
            session,
            queue: CommandQueue::new(),
            keymap,
            gesture: GestureTracker::new(),
            game_over_dialog: GameOverDialogState::default(),
            should_quit: false,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn game_over_dialog(&self) -> &GameOverDialogState {
        &self.game_over_dialog
    }

    /// Extra producer for the command queue (e.g. a remote channel).
    pub fn command_sender(&self) -> CommandSender {
        self.queue.sender()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.game_over_dialog.is_visible() {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                    dispatch_mvi!(
                        self,
                        game_over_dialog,
                        GameOverReducer,
                        GameOverIntent::ToggleButton
                    );
                    return;
                }
                KeyCode::Enter => {
                    match self.game_over_dialog.selected() {
                        Some(DialogButton::Restart) => self.queue.push(GameCommand::Restart),
                        _ => {
                            dispatch_mvi!(
                                self,
                                game_over_dialog,
                                GameOverReducer,
                                GameOverIntent::Close
                            );
                        }
                    }
                    return;
                }
                _ => {}
            }
        }

        match self.keymap.resolve(&key) {
            Some(InputAction::Command(command)) => self.queue.push(command),
            Some(InputAction::Dismiss) => {
                dispatch_mvi!(self, game_over_dialog, GameOverReducer, GameOverIntent::Close);
            }
            Some(InputAction::Quit) => self.request_quit(),
            None => {}
        }
    }

    /// Left-button press starts a drag; the first drag sample away from it
    /// becomes a swipe.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let x = f64::from(mouse.column) * COLUMN_SCALE;
        let y = f64::from(mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.gesture.begin(x, y),
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(direction) = self.gesture.update(x, y) {
                    self.queue.push(GameCommand::Move(direction));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.gesture.cancel(),
            _ => {}
        }
    }

    /// Apply queued commands in arrival order and update the dialog.
    pub fn process_commands(&mut self) {
        for command in self.queue.drain() {
            let was_over = self.session.is_over();
            let snapshot = self.session.apply(command);

            if command == GameCommand::Restart {
                dispatch_mvi!(self, game_over_dialog, GameOverReducer, GameOverIntent::Close);
            } else if snapshot.is_over && !was_over {
                dispatch_mvi!(
                    self,
                    game_over_dialog,
                    GameOverReducer,
                    GameOverIntent::Show {
                        final_score: snapshot.score,
                        high_score: snapshot.high_score,
                    }
                );
            }
        }
    }
}
